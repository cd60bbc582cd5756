//! TFM canonical tag layer.
//!
//! This crate turns raw tag tokens (`=3601.009-JVZ0025`, `3601.001:04-KOMP123`)
//! into structured codes and segment-scoped comparison keys. Downstream
//! stages (extraction, matrix building) rely on it for stable identity.
//!
//! ## What we do
//!
//! - Tag normalization into [`CanonicalCode`] (system, variant, component)
//! - Natural ordering of dotted/colon codes (`3601.2` before `3601.10`)
//! - Segment-scoped comparison keys driven by [`SegmentConfig`]
//! - Composite-tag resolution for record lookup
//! - System grouping for protocol generation
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same tag and config in,
//! same code and key out, on any machine.
//!
//! ## Invariants worth knowing
//!
//! - A token with no `-` separator is malformed and normalizes to `None`
//! - `base_system` is never empty on a normalized code
//! - The comparator orders by numeric segment value only; codes whose
//!   compared segments all tie are equal even if their text differs
//! - Keys are uppercased and whitespace-collapsed, joined by `|` in fixed
//!   segment order

mod code;
mod error;
mod group;
mod key;
mod ordering;
mod resolve;

pub use crate::code::{CanonicalCode, normalize_tag};
pub use crate::error::ConfigError;
pub use crate::group::{SystemGroup, group_by_system};
pub use crate::key::{KEY_DELIMITER, SegmentConfig, comparison_key};
pub use crate::ordering::{compare_codes, sort_codes};
pub use crate::resolve::{ParsedTag, resolve_tag};
