//! Options controlling field validation.

use serde::{Deserialize, Serialize};

/// Optional strictness switches for FQDN validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FqdnOptions {
    /// Accept `_` inside labels (service records such as `_sip._tcp`).
    pub allow_underscore: bool,
    /// Reject single-label names.
    pub require_at_least_two_labels: bool,
    /// Reject names whose last label is all digits.
    pub forbid_numeric_tld: bool,
}

impl FqdnOptions {
    pub fn strict() -> Self {
        Self {
            allow_underscore: false,
            require_at_least_two_labels: true,
            forbid_numeric_tld: true,
        }
    }

    #[must_use]
    pub fn with_allow_underscore(mut self, enable: bool) -> Self {
        self.allow_underscore = enable;
        self
    }

    #[must_use]
    pub fn with_require_at_least_two_labels(mut self, enable: bool) -> Self {
        self.require_at_least_two_labels = enable;
        self
    }

    #[must_use]
    pub fn with_forbid_numeric_tld(mut self, enable: bool) -> Self {
        self.forbid_numeric_tld = enable;
        self
    }
}

/// Options for a cleaning run.
///
/// The defaults reproduce the permissive behavior operators expect from a
/// first audit pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningOptions {
    /// Accept `_` in hostname labels.
    pub hostname_allow_underscore: bool,
    pub fqdn: FqdnOptions,
}

impl CleaningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_hostname_allow_underscore(mut self, enable: bool) -> Self {
        self.hostname_allow_underscore = enable;
        self
    }

    #[must_use]
    pub fn with_fqdn(mut self, fqdn: FqdnOptions) -> Self {
        self.fqdn = fqdn;
        self
    }
}
