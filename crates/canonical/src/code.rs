use serde::{Deserialize, Serialize};

/// Structured decomposition of one raw tag token.
///
/// A tag like `=3601.001:04-KOMP123` splits into a system half and a
/// component half around the first `-`. The system half may carry a
/// `:variant` suffix marking a specialized sub-instance of the base system.
///
/// All fields are whitespace-trimmed. `base_system` is never empty; a token
/// that would produce an empty base system does not normalize at all.
///
/// ```rust
/// use canonical::normalize_tag;
///
/// let code = normalize_tag("=3601.001:04-KOMP123").unwrap();
/// assert_eq!(code.system_part, "3601.001:04");
/// assert_eq!(code.base_system, "3601.001");
/// assert_eq!(code.variant_suffix.as_deref(), Some("04"));
/// assert_eq!(code.component_part, "KOMP123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalCode {
    /// Everything before the first `-`, with a leading `=` stripped.
    pub system_part: String,
    /// `system_part` with any `:variant` suffix removed.
    pub base_system: String,
    /// The part after `:` in the system half, if present and non-empty.
    pub variant_suffix: Option<String>,
    /// Everything after the first `-`. May itself contain further `-`.
    pub component_part: String,
}

impl CanonicalCode {
    /// Building-number segment: the leading digit run of `base_system`
    /// before the first `.` (`3601` out of `3601.009`).
    pub fn byggnr(&self) -> &str {
        let head = match self.base_system.split_once('.') {
            Some((head, _)) => head,
            None => self.base_system.as_str(),
        };
        let end = head
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(head.len());
        &head[..end]
    }

    /// Type-code segment: the leading alphabetic run of `component_part`
    /// (`JVZ` out of `JVZ0025`). Empty for purely numeric components.
    pub fn typekode(&self) -> &str {
        let end = self
            .component_part
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(self.component_part.len());
        &self.component_part[..end]
    }
}

/// Parses one raw tag token into a [`CanonicalCode`].
///
/// Algorithm: trim the input, strip a single leading `=`, split on the
/// *first* `-` into system and component halves, then split the system half
/// on the *first* `:` into base system and variant. Every produced field is
/// trimmed again.
///
/// Returns `None` for malformed tokens: no `-` separator, or an empty base
/// system after trimming. Malformed tokens are dropped and counted by
/// callers; they never abort anything.
///
/// ```rust
/// use canonical::normalize_tag;
///
/// assert!(normalize_tag("3601.009-JVZ0025").is_some());
/// assert!(normalize_tag("3601.009").is_none());
/// ```
pub fn normalize_tag(raw: &str) -> Option<CanonicalCode> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('=').unwrap_or(trimmed);
    let (system_raw, component_raw) = stripped.split_once('-')?;

    let system_part = system_raw.trim();
    let component_part = component_raw.trim();

    let (base_raw, variant_raw) = match system_part.split_once(':') {
        Some((base, variant)) => (base, Some(variant)),
        None => (system_part, None),
    };
    let base_system = base_raw.trim();
    if base_system.is_empty() {
        return None;
    }
    let variant_suffix = variant_raw
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    Some(CanonicalCode {
        system_part: system_part.to_string(),
        base_system: base_system.to_string(),
        variant_suffix,
        component_part: component_part.to_string(),
    })
}
