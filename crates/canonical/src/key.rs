use serde::{Deserialize, Serialize};

use crate::code::CanonicalCode;
use crate::error::ConfigError;

/// Delimiter between key fields. Tag segments are digits, letters, `.` and
/// `:`, so `|` never collides with field content.
pub const KEY_DELIMITER: char = '|';

/// Caller-supplied selection of which tag segments participate in equality
/// comparisons.
///
/// All four fields are required when deserializing and unknown fields are
/// rejected, so a half-shaped request body fails at the boundary instead of
/// silently comparing at the wrong granularity.
///
/// At least one flag must be true before extraction or comparison runs;
/// with nothing selected every key would collapse to the empty string.
/// [`SegmentConfig::validate`] enforces this at the boundary — the
/// normalizer and key builder themselves stay pure.
///
/// # Serialization
///
/// ```json
/// { "byggnr": false, "system": true, "komponent": true, "typekode": false }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentConfig {
    /// Building-number segment ([`CanonicalCode::byggnr`]).
    pub byggnr: bool,
    /// Base system segment ([`CanonicalCode::base_system`]).
    pub system: bool,
    /// Component segment ([`CanonicalCode::component_part`]).
    pub komponent: bool,
    /// Component type-code segment ([`CanonicalCode::typekode`]).
    pub typekode: bool,
}

impl SegmentConfig {
    /// System plus komponent: full-tag identity, the usual granularity for
    /// "which exact tags are present".
    pub fn full_tag() -> Self {
        Self {
            byggnr: false,
            system: true,
            komponent: true,
            typekode: false,
        }
    }

    /// System only: compares "systems present" independent of which
    /// components instantiate them.
    pub fn system_only() -> Self {
        Self {
            byggnr: false,
            system: true,
            komponent: false,
            typekode: false,
        }
    }

    /// True when at least one segment is enabled.
    pub fn any_enabled(&self) -> bool {
        self.byggnr || self.system || self.komponent || self.typekode
    }

    /// Rejects a config with no segments enabled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.any_enabled() {
            return Err(ConfigError::NoSegmentsEnabled);
        }
        Ok(())
    }
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self::full_tag()
    }
}

/// Builds the comparison key for one code under the given config.
///
/// Enabled segments contribute in fixed order (byggnr, system, komponent,
/// typekode), each uppercased with internal whitespace collapsed, joined by
/// [`KEY_DELIMITER`]. An enabled segment whose value is empty still holds
/// its position, so key shape is stable for a given config. Two tokens that
/// agree on every selected segment yield an identical key even when their
/// unselected segments differ.
///
/// ```rust
/// use canonical::{comparison_key, normalize_tag, SegmentConfig};
///
/// let a = normalize_tag("3601.001-A").unwrap();
/// let b = normalize_tag("3601.001-B").unwrap();
/// assert_eq!(comparison_key(&a, &SegmentConfig::system_only()), "3601.001");
/// assert_ne!(
///     comparison_key(&a, &SegmentConfig::full_tag()),
///     comparison_key(&b, &SegmentConfig::full_tag()),
/// );
/// ```
pub fn comparison_key(code: &CanonicalCode, cfg: &SegmentConfig) -> String {
    let mut fields: Vec<&str> = Vec::with_capacity(4);
    if cfg.byggnr {
        fields.push(code.byggnr());
    }
    if cfg.system {
        fields.push(&code.base_system);
    }
    if cfg.komponent {
        fields.push(&code.component_part);
    }
    if cfg.typekode {
        fields.push(code.typekode());
    }

    let mut key = String::new();
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            key.push(KEY_DELIMITER);
        }
        push_normalized(&mut key, field);
    }
    key
}

/// Appends one field in comparison form: uppercased, internal whitespace
/// collapsed to single spaces, edges already trimmed by the normalizer.
fn push_normalized(key: &mut String, field: &str) {
    let mut first = true;
    for word in field.split_whitespace() {
        if !first {
            key.push(' ');
        }
        first = false;
        key.push_str(&word.to_uppercase());
    }
}
