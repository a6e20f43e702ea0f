//! Field processors.
//!
//! Each processor wraps one normalization engine (or the extractor) and
//! turns its result into a [`FieldOutcome`](inv_model::FieldOutcome) with a
//! step trace and, on failure, a recommended action.

mod extracted;
mod naming;
mod network;

pub use extracted::{process_device, process_owner};
pub use naming::{process_fqdn, process_hostname, process_site};
pub use network::{process_ipv4, process_mac};

pub const IP_ACTION: &str = "Correct IP or mark record for revision";
pub const MAC_ACTION: &str = "Correct MAC or mark record for revision";
pub const SITE_ACTION: &str = "Correct site or mark record for revision";
pub const HOSTNAME_ACTION: &str = "Correct hostname or mark record for revision";
pub const FQDN_ACTION: &str = "Correct FQDN or mark record for revision";
pub const OWNER_ACTION: &str = "Correct owner or mark record for revision";
pub const DEVICE_ACTION: &str = "Correct device or mark record for revision";

/// `<field>_invalid_<code>` step name, using the snake-case form of the code.
fn invalid_step(field: inv_model::FieldName, code: impl Into<inv_model::ErrorCode>) -> String {
    field.attribute(&format!("invalid_{}", code.into().slug()))
}
