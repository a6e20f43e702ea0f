use inv_model::{FieldName, FieldOutcome, FqdnOptions, StepTrace};
use inv_normalize::{
    classify_fqdn, classify_hostname_label, normalize_site_name, trim_field,
    validate_and_label_fqdn, validate_and_label_hostname_label,
};

use super::{FQDN_ACTION, HOSTNAME_ACTION, SITE_ACTION, invalid_step};

pub fn process_site(raw: Option<&str>) -> FieldOutcome {
    let normalized = normalize_site_name(raw);
    match normalized.issue() {
        None => FieldOutcome::valid(FieldName::Site, normalized.labeled.value, "", normalized.steps),
        Some(code) => FieldOutcome::invalid(
            FieldName::Site,
            normalized.labeled.value,
            code,
            SITE_ACTION,
            normalized.steps,
        ),
    }
}

pub fn process_hostname(raw: Option<&str>, allow_underscore: bool) -> FieldOutcome {
    let labeled = validate_and_label_hostname_label(raw, allow_underscore);
    let mut steps = StepTrace::new().with("hostname_normalize").with("hostname_label");
    let kind = classify_hostname_label(&labeled.value, &labeled.label);
    steps.push("hostname_classify");

    match labeled.label.error().copied() {
        None => FieldOutcome::valid(FieldName::Hostname, labeled.value, kind.as_str(), steps),
        Some(code) => {
            steps.push(invalid_step(FieldName::Hostname, code));
            FieldOutcome::invalid(FieldName::Hostname, labeled.value, code, HOSTNAME_ACTION, steps)
        }
    }
}

/// `ok_absolute` counts as valid; the kind then is `absolute_fqdn`.
pub fn process_fqdn(raw: Option<&str>, options: FqdnOptions) -> FieldOutcome {
    let labeled = validate_and_label_fqdn(raw, options);
    let mut steps = StepTrace::new().with("fqdn_normalize").with("fqdn_label");
    let kind = classify_fqdn(&labeled.value, &labeled.label);
    steps.push("fqdn_classify");

    match labeled.label.error().copied() {
        None => FieldOutcome::valid(FieldName::Fqdn, labeled.value, kind.as_str(), steps),
        Some(code) => {
            steps.push(invalid_step(FieldName::Fqdn, code));
            FieldOutcome::invalid(FieldName::Fqdn, trim_field(raw), code, FQDN_ACTION, steps)
        }
    }
}
