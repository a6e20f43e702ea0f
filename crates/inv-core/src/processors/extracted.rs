use inv_extract::{Extractor, Fields};
use inv_model::{ExtractionIssue, FieldName, FieldOutcome, StepTrace};
use inv_normalize::trim_field;
use tracing::warn;

use super::{DEVICE_ACTION, OWNER_ACTION, invalid_step};
use crate::enriched::{DeviceResult, OwnerResult};
use crate::prompts::Prompts;

const OWNER_KEYS: [&str; 3] = ["owner_out", "owner_email", "owner_team"];
const DEVICE_KEYS: [&str; 2] = ["device_out", "device_type_confidence"];

pub fn process_owner(raw: Option<&str>, extractor: &dyn Extractor, prompts: &Prompts) -> OwnerResult {
    let mut steps = StepTrace::new().with("owner_trim");
    let owner = trim_field(raw);

    let fields = if owner.is_empty() {
        Fields::new()
    } else {
        request(
            FieldName::Owner,
            extractor,
            &prompts.system,
            &prompts.owner_request(&owner),
            &mut steps,
        )
    };
    steps.push("owner_parse");
    let [name, email, team] = fill_shape(&fields, OWNER_KEYS);

    let outcome = if [&name, &email, &team].iter().any(|value| value.is_empty()) {
        let code = ExtractionIssue::MissingOwnerFields;
        steps.push(invalid_step(FieldName::Owner, code));
        FieldOutcome::invalid(FieldName::Owner, name, code, OWNER_ACTION, steps)
    } else {
        FieldOutcome::valid(FieldName::Owner, name, "", steps)
    };
    OwnerResult {
        outcome,
        email,
        team,
    }
}

pub fn process_device(
    device_type: Option<&str>,
    hostname: Option<&str>,
    notes: Option<&str>,
    extractor: &dyn Extractor,
    prompts: &Prompts,
) -> DeviceResult {
    let mut steps = StepTrace::new().with("device_trim");
    let device_type = trim_field(device_type);
    let hostname = hostname.unwrap_or_default();
    let notes = notes.unwrap_or_default();

    let fields = if device_type.is_empty() && hostname.trim().is_empty() && notes.trim().is_empty()
    {
        Fields::new()
    } else {
        request(
            FieldName::Device,
            extractor,
            &prompts.system,
            &prompts.device_request(hostname, &device_type, notes),
            &mut steps,
        )
    };
    steps.push("device_parse");
    let [device, confidence] = fill_shape(&fields, DEVICE_KEYS);

    let outcome = if device.is_empty() || confidence.is_empty() {
        let code = ExtractionIssue::MissingDeviceFields;
        steps.push(invalid_step(FieldName::Device, code));
        FieldOutcome::invalid(FieldName::Device, device, code, DEVICE_ACTION, steps)
    } else {
        FieldOutcome::valid(FieldName::Device, device, "", steps)
    };
    DeviceResult {
        outcome,
        type_confidence: confidence,
    }
}

/// Runs one extraction. A failure is logged, traced as
/// `<field>_extract_failed` and treated as an empty answer.
fn request(
    field: FieldName,
    extractor: &dyn Extractor,
    system_prompt: &str,
    user_prompt: &str,
    steps: &mut StepTrace,
) -> Fields {
    match extractor.extract(system_prompt, user_prompt) {
        Ok(fields) => fields,
        Err(err) => {
            warn!(
                field = %field,
                extractor = extractor.name(),
                error = %err,
                "extraction failed"
            );
            steps.push(field.attribute("extract_failed"));
            Fields::new()
        }
    }
}

/// Projects an answer onto a fixed key set: missing keys become empty and
/// extra keys are dropped. Values are trimmed.
fn fill_shape<const N: usize>(fields: &Fields, keys: [&str; N]) -> [String; N] {
    keys.map(|key| {
        fields
            .get(key)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    })
}
