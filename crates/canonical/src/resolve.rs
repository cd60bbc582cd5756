use serde::{Deserialize, Serialize};

/// A user-typed composite tag split into its lookup parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTag {
    /// The system half as typed, variant suffix included.
    pub system_code: String,
    /// The component half as typed.
    pub component_tag: String,
    /// `system_code` with any `:variant` suffix stripped. Lookup tries this
    /// first, falls back to the exact `system_code`, then matches
    /// `component_tag` case-insensitively within that scope.
    pub base_system_code: String,
}

/// Splits a composite tag string (`"<systemCode>-<componentTag>"`) back
/// into system and component parts for record lookup.
///
/// Mirrors the normalizer's system/variant splitting but operates on a
/// single already-known-composite string rather than free-text scanning.
/// Returns `None` on malformed input: empty string, no `-`, or an empty
/// half after trimming. `None` is a recoverable "not found" signal, never
/// a panic.
///
/// ```rust
/// use canonical::resolve_tag;
///
/// let tag = resolve_tag("3601.001:04-KOMP123").unwrap();
/// assert_eq!(tag.system_code, "3601.001:04");
/// assert_eq!(tag.component_tag, "KOMP123");
/// assert_eq!(tag.base_system_code, "3601.001");
///
/// assert!(resolve_tag("").is_none());
/// assert!(resolve_tag("onlysystem").is_none());
/// ```
pub fn resolve_tag(input: &str) -> Option<ParsedTag> {
    let trimmed = input.trim();
    let (system_raw, component_raw) = trimmed.split_once('-')?;
    let system_code = system_raw.trim();
    let component_tag = component_raw.trim();
    if system_code.is_empty() || component_tag.is_empty() {
        return None;
    }
    let base_system_code = match system_code.split_once(':') {
        Some((base, _)) => base.trim().to_string(),
        None => system_code.to_string(),
    };
    Some(ParsedTag {
        system_code: system_code.to_string(),
        component_tag: component_tag.to_string(),
        base_system_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_composite_tag_with_variant() {
        let tag = resolve_tag("3601.001:04-KOMP123").expect("valid composite tag");
        assert_eq!(tag.system_code, "3601.001:04");
        assert_eq!(tag.component_tag, "KOMP123");
        assert_eq!(tag.base_system_code, "3601.001");
    }

    #[test]
    fn base_equals_system_without_variant() {
        let tag = resolve_tag("3601.009-JVZ0025").expect("valid composite tag");
        assert_eq!(tag.system_code, "3601.009");
        assert_eq!(tag.base_system_code, "3601.009");
    }

    #[test]
    fn empty_and_separatorless_inputs_resolve_to_none() {
        assert!(resolve_tag("").is_none());
        assert!(resolve_tag("onlysystem").is_none());
        assert!(resolve_tag("   ").is_none());
    }

    #[test]
    fn empty_halves_resolve_to_none() {
        assert!(resolve_tag("-KOMP123").is_none());
        assert!(resolve_tag("3601.001-").is_none());
        assert!(resolve_tag(" - ").is_none());
    }

    #[test]
    fn whole_input_and_halves_are_trimmed() {
        let tag = resolve_tag("  3601.001 - KOMP123  ").expect("valid composite tag");
        assert_eq!(tag.system_code, "3601.001");
        assert_eq!(tag.component_tag, "KOMP123");
    }

    #[test]
    fn component_keeps_further_separators() {
        let tag = resolve_tag("3601.001-KOMP-123").expect("valid composite tag");
        assert_eq!(tag.component_tag, "KOMP-123");
    }
}
