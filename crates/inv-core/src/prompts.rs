//! Prompt texts for the owner and device extractions.

pub const DEFAULT_SYSTEM_PROMPT: &str = "\nYou specialize in network analytics\n";

pub const DEFAULT_OWNER_PROMPT: &str = "
Given the following string, I want you to parse it to extract:
- An email address
- A name
- A team name

I want you to return the response to me in a JSON format containing:
- owner_out (Capitalize owner name if possible, may be possible to obtain from email address too)
- owner_email
- owner_team

I want only the JSON and nothing else

Wherever impossible to do so, return empty strings within the JSON fields

String:
";

pub const DEFAULT_DEVICE_PROMPT: &str = "
Given the following string, I want you to parse it to extract:
- Device Type (based on Hostname and Device Type and Notes)
- Confidence score (low, high, mid) based on your classification, be very critical of this

I want you to return the response to me in a JSON format containing:
- device_out
- device_type_confidence

I want only the JSON and nothing else

Wherever impossible to do so, return empty strings within the JSON fields

String:
";

/// Prompt set handed to the extractor. The user prompt is the task prompt
/// followed by the (trimmed) input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompts {
    pub system: String,
    pub owner: String,
    pub device: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            system: DEFAULT_SYSTEM_PROMPT.to_string(),
            owner: DEFAULT_OWNER_PROMPT.to_string(),
            device: DEFAULT_DEVICE_PROMPT.to_string(),
        }
    }
}

impl Prompts {
    pub fn owner_request(&self, owner: &str) -> String {
        format!("{}{owner}", self.owner)
    }

    pub fn device_request(&self, hostname: &str, device_type: &str, notes: &str) -> String {
        format!(
            "{}Hostname: {hostname} Device Type: {device_type} Notes: {notes}",
            self.device
        )
    }
}
