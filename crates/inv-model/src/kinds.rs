//! Semantic classifications produced after successful validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// IPv4 address class, in classification priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ipv4Class {
    Unspecified,
    LimitedBroadcast,
    Loopback,
    LinkLocalApipa,
    Multicast,
    Reserved,
    Private,
    PublicOrOther,
    Unclassified,
}

impl Ipv4Class {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unspecified => "unspecified",
            Self::LimitedBroadcast => "limited_broadcast",
            Self::Loopback => "loopback",
            Self::LinkLocalApipa => "link_local_apipa",
            Self::Multicast => "multicast",
            Self::Reserved => "reserved",
            Self::Private => "private",
            Self::PublicOrOther => "public_or_other",
            Self::Unclassified => "unclassified",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacKind {
    Eui48,
    Eui64,
    Unclassified,
}

impl MacKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eui48 => "eui48",
            Self::Eui64 => "eui64",
            Self::Unclassified => "unclassified",
        }
    }
}

/// Shape of a validated DNS name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DnsKind {
    AbsoluteFqdn,
    Fqdn,
    SingleLabel,
    Unclassified,
}

impl DnsKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AbsoluteFqdn => "absolute_fqdn",
            Self::Fqdn => "fqdn",
            Self::SingleLabel => "single_label",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for Ipv4Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MacKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DnsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
