//! Configurable decode policy.
//!
//! The source system's boolean truthiness and its tolerance of absent
//! external keys are surprising rules, so both are surfaced as explicit
//! policy instead of being hard-wired. The defaults reproduce the source
//! behavior.

use serde::{Deserialize, Serialize};

/// How boolean fields coerce during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BooleanRule {
    /// Truthiness coercion: any non-empty, non-zero, non-false value is
    /// `true`; absent, empty, zero, and explicit false are `false`.
    ///
    /// This rule is lossy and non-invertible: `"yes"` and `1` both decode
    /// to `true`, and re-encoding cannot recover the original value.
    #[default]
    Truthy,
    /// Only real booleans and the strings `"true"`/`"false"`
    /// (case-insensitive) are accepted; anything else is a coercion error.
    Strict,
}

/// How a missing (or explicitly null) external key is handled during decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingKeyRule {
    /// Set the internal field to the explicit absent marker. Decoding
    /// never fails on partial records under this rule.
    #[default]
    NullMarker,
    /// Fail the decode with a coercion error naming the missing field.
    Error,
}

/// Options controlling decode behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Boolean coercion rule.
    pub booleans: BooleanRule,
    /// Missing-key handling rule.
    pub missing_keys: MissingKeyRule,
}

impl DecodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_booleans(mut self, rule: BooleanRule) -> Self {
        self.booleans = rule;
        self
    }

    #[must_use]
    pub fn with_missing_keys(mut self, rule: MissingKeyRule) -> Self {
        self.missing_keys = rule;
        self
    }

    /// Options for strict decoding: no truthiness, no tolerance of absent
    /// keys.
    pub fn strict() -> Self {
        Self {
            booleans: BooleanRule::Strict,
            missing_keys: MissingKeyRule::Error,
        }
    }
}
