//! Core types for OCR-driven hardware compatibility checks.
//!
//! This crate defines the data model shared by the extraction,
//! classification, and scoring stages:
//!
//! - [`DesktopSpecs`] / [`AppleSiliconSpecs`]: attribute records filled
//!   from OCR text, wrapped by [`HardwareSpecs`].
//! - [`CheckResult`]: one classified attribute with its display value, [`Status`],
//!   and a symbolic [`ReasonCode`].
//! - [`Score`]: the aggregate 0–100 score or the no-data sentinel, with a
//!   qualitative [`ScoreTier`].
//! - [`Analysis`]: the bundle handed back to a presentation layer.
//!
//! # Example
//!
//! ```
//! use hardware_fit_core::*;
//!
//! let results = vec![
//!     CheckResult::new(Attribute::Ram, Some("16 GB"), Status::Good, ReasonCode::GoodRam),
//!     CheckResult::new(Attribute::VideoMemory, None, Status::Warning, ReasonCode::VramNotFound),
//! ];
//!
//! assert!(results[0].is_known());
//! assert_eq!(results[1].display_value(), UNKNOWN_MARKER);
//! assert!(!Attribute::Ram.is_gating());
//! assert_eq!(Score::Points(100).tier(), ScoreTier::Excellent);
//! ```

mod record;
mod types;

pub use record::*;
pub use types::*;
