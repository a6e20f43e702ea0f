use inv_model::{FieldName, FieldOutcome, StepTrace};
use inv_normalize::{
    classify_ipv4, classify_mac, determine_reverse_ptr_ipv4, determine_subnet, trim_field,
    validate_and_label_ipv4, validate_and_label_mac,
};

use super::{IP_ACTION, MAC_ACTION, invalid_step};
use crate::enriched::IpResult;

pub fn process_ipv4(raw: Option<&str>) -> IpResult {
    let mut steps = StepTrace::new().with("ip_trim");
    let trimmed = trim_field(raw);
    let labeled = validate_and_label_ipv4(&trimmed);

    if let Some(code) = labeled.label.error().copied() {
        steps.push(invalid_step(FieldName::Ip, code));
        return IpResult {
            outcome: FieldOutcome::invalid(FieldName::Ip, trimmed, code, IP_ACTION, steps),
            version: String::new(),
            reverse_ptr: String::new(),
            subnet: String::new(),
        };
    }

    steps.push("ip_parse");
    steps.push("ip_normalize");
    let reverse_ptr = determine_reverse_ptr_ipv4(&labeled.value, &labeled.label);
    steps.push("ip_reverse_ptr_determine");
    let class = classify_ipv4(&labeled.value, &labeled.label);
    steps.push("ip_classify");
    let subnet = determine_subnet(&labeled.value, class);
    steps.push("ip_subnet_determine");

    IpResult {
        outcome: FieldOutcome::valid(FieldName::Ip, labeled.value, class.as_str(), steps),
        version: "4".to_string(),
        reverse_ptr,
        subnet,
    }
}

pub fn process_mac(raw: Option<&str>) -> FieldOutcome {
    let mut steps = StepTrace::new().with("mac_trim");
    let labeled = validate_and_label_mac(raw);

    if let Some(code) = labeled.label.error().copied() {
        steps.push(invalid_step(FieldName::Mac, code));
        return FieldOutcome::invalid(FieldName::Mac, labeled.value, code, MAC_ACTION, steps);
    }

    steps.push("mac_parse");
    steps.push("mac_normalize");
    let kind = classify_mac(&labeled.value, &labeled.label);
    steps.push("mac_classify");
    FieldOutcome::valid(FieldName::Mac, labeled.value, kind.as_str(), steps)
}
