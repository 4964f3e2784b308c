//! Per-attribute classification.
//!
//! Every attribute has one total function from its extracted value to a
//! `(Status, ReasonCode)` pair. Rules inside a function are an ordered
//! decision list: the first condition that holds decides.

mod apple;
mod desktop;

pub use apple::{
    MAC_MEMORY_HIGH_GB, MAC_MEMORY_LOW_GB, MAC_MEMORY_MID_GB, MIN_SUPPORTED_MACOS,
    classify_apple_silicon, classify_chip, classify_os_version, classify_unified_memory,
};
pub use desktop::{
    MODERN_INTEL_GENERATION, MODERN_RYZEN_SERIES, RAM_HIGH_GB, RAM_LOW_GB, RAM_MID_GB,
    VRAM_GOOD_GB, VRAM_LOW_GB, classify_architecture, classify_desktop, classify_graphics,
    classify_processor, classify_ram, classify_video_memory, intel_core_generation, ryzen_series,
};

use hardware_fit_core::{CheckResult, HardwareSpecs};

/// Classifies whichever record variant `specs` holds.
pub fn classify(specs: &HardwareSpecs) -> Vec<CheckResult> {
    match specs {
        HardwareSpecs::Desktop(desktop) => classify_desktop(desktop),
        HardwareSpecs::AppleSilicon(apple) => classify_apple_silicon(apple),
    }
}
