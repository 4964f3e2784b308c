//! OCR text extraction.
//!
//! Each field is filled by an ordered list of rules. A rule takes the first
//! (leftmost) match in the text; later rules for the same field run only
//! when earlier ones found nothing. A field no rule matched stays empty,
//! which is a normal outcome rather than an error.

mod apple;
mod desktop;
pub mod normalize;
pub(crate) mod patterns;
pub mod units;

pub use apple::{DEVICE_YEAR_RANGE, extract_apple_silicon};
pub use desktop::{RAM_CANDIDATE_RANGE_GB, extract_desktop, infer_architecture};
pub use patterns::{
    APPLE_MEMORY_LABELS, DEVICE_NAME_LABELS, GPU_LABELS, PROCESSOR_LABELS, RAM_LABELS,
    SYSTEM_TYPE_LABELS, VRAM_LABELS, labeled_pattern,
};

use hardware_fit_core::{HardwareSpecs, Platform};

/// Runs the extractor for `platform` over `text`.
pub fn extract(platform: Platform, text: &str) -> HardwareSpecs {
    match platform {
        Platform::Desktop => HardwareSpecs::Desktop(extract_desktop(text)),
        Platform::AppleSilicon => HardwareSpecs::AppleSilicon(extract_apple_silicon(text)),
    }
}
