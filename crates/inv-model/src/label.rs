//! Validation outcome tags.

use std::fmt;

/// Result tag of a validator: `ok`, `ok_absolute`, or a specific error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label<E> {
    Ok,
    /// Valid, and the input carried a trailing root dot.
    OkAbsolute,
    Invalid(E),
}

impl<E> Label<E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok | Self::OkAbsolute)
    }

    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Invalid(code) => Some(code),
            _ => None,
        }
    }
}

impl<E: fmt::Display> fmt::Display for Label<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::OkAbsolute => f.write_str("ok_absolute"),
            Self::Invalid(code) => code.fmt(f),
        }
    }
}

/// A validator's `(value, label)` pair.
///
/// On success `value` is the canonical form; on failure it is the input the
/// validator was given, unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeled<E> {
    pub value: String,
    pub label: Label<E>,
}

impl<E> Labeled<E> {
    pub fn ok(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Label::Ok,
        }
    }

    pub fn ok_absolute(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Label::OkAbsolute,
        }
    }

    pub fn invalid(value: impl Into<String>, code: E) -> Self {
        Self {
            value: value.into(),
            label: Label::Invalid(code),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.label.is_ok()
    }
}
