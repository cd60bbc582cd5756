//! # TFM Comparison Layer (`compare`)
//!
//! ## Purpose
//!
//! `compare` sits on top of the extraction layer (`extract`). It takes one
//! reference document's extraction result plus any number of comparison
//! results and builds the presence matrix: one row per comparison key,
//! flagged per document. This is how missing and extra equipment tags
//! between disciplines' documents are caught during review.
//!
//! ## Core Types
//!
//! - [`ComparisonMatrix`]: the finished matrix, rows in natural key order.
//! - [`MatrixEntry`]: one key, its source documents, and per-document
//!   presence flags in a fixed document order.
//! - [`CompareError`]: build failures. The only one today is an unreadable
//!   reference document; broken comparison documents do not fail the build,
//!   they stay listed with all-false presence.
//!
//! ## Example Usage
//!
//! ```
//! use canonical::SegmentConfig;
//! use compare::build_matrix;
//! use extract::{Extractor, RawDocument};
//!
//! let extractor = Extractor::in_memory();
//! let cfg = SegmentConfig::system_only();
//!
//! let main = RawDocument::new(
//!     "hoveddokument.txt",
//!     b"Vifte =3601.009-JVZ0025 og pumpe =3601.010-RT5001".to_vec(),
//! );
//! let other = RawDocument::new(
//!     "ventilasjon.csv",
//!     b"tag;merknad\n3601.009-JVZ0025;montert".to_vec(),
//! );
//!
//! let main = extractor.extract(&main, &cfg).expect("config is valid");
//! let other = extractor.extract(&other, &cfg).expect("config is valid");
//!
//! let matrix = build_matrix(&main, &[other]).expect("reference is readable");
//! assert_eq!(matrix.entries.len(), 2);
//! assert!(matrix.entry("3601.009").is_some());
//! assert!(!matrix.entry("3601.010").unwrap().present_in("ventilasjon.csv"));
//! ```
//!
//! ## Observability
//!
//! Install a [`CompareMetrics`] implementation via [`set_compare_metrics`] to
//! record per-build latency, document counts, and row counts. This is
//! typically done once during service startup so all builds share the same
//! metrics backend.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::build_matrix;
pub use crate::metrics::{set_compare_metrics, CompareMetrics};
pub use crate::types::{CompareError, ComparisonMatrix, DocumentPresence, MatrixEntry};
