//! Field normalization engines for network inventory records.
//!
//! Every engine follows the same three stages: validate (returning a
//! [`Labeled`](inv_model::Labeled) value), classify, then derive any
//! secondary attributes. All functions are total and side-effect free: bad
//! input produces an error label, never a panic or an `Err`.
//!
//! - [`ipv4`]: dotted-quad parsing, address class, reverse PTR, subnet
//! - [`mac`]: colon, hyphen, Cisco dot and bare-hex MAC forms, EUI-48/64
//! - [`dns`]: IDNA + RFC 1123 hostname labels and FQDNs
//! - [`site`]: abbreviation expansion and site-name casing

pub mod dns;
pub mod ipv4;
pub mod mac;
pub mod site;
pub mod text;

pub use dns::{
    classify_fqdn, classify_hostname_label, label_to_ascii, validate_and_label_dns_name,
    validate_and_label_fqdn, validate_and_label_hostname_label, validate_label_ascii,
};
pub use ipv4::{
    classify_ipv4, determine_reverse_ptr_ipv4, determine_subnet, validate_and_label_ipv4,
};
pub use mac::{classify_mac, validate_and_label_mac};
pub use site::{SiteNormalization, normalize_site_name};
pub use text::trim_field;
