//! Apple-silicon rule tables.

use hardware_fit_core::{AppleSiliconSpecs, Attribute, CheckResult, ReasonCode, Status};

/// Unified memory breakpoints in gigabytes.
pub const MAC_MEMORY_LOW_GB: f64 = 6.0;
pub const MAC_MEMORY_MID_GB: f64 = 8.0;
pub const MAC_MEMORY_HIGH_GB: f64 = 16.0;

/// Oldest supported macOS major version.
pub const MIN_SUPPORTED_MACOS: u32 = 15;

/// Classifies an Apple-silicon record in the order Chip, Memory, OS Version.
pub fn classify_apple_silicon(specs: &AppleSiliconSpecs) -> Vec<CheckResult> {
    let (chip_status, chip_reason) = classify_chip(specs);
    let (memory_status, memory_reason) = classify_unified_memory(specs.memory_gb);
    let (os_status, os_reason) = classify_os_version(specs.os_major_version);

    vec![
        CheckResult::new(Attribute::Chip, specs.chip.as_deref(), chip_status, chip_reason),
        CheckResult::new(
            Attribute::Memory,
            specs.memory.as_deref(),
            memory_status,
            memory_reason,
        ),
        CheckResult::new(
            Attribute::OsVersion,
            specs.os_version.as_deref(),
            os_status,
            os_reason,
        ),
    ]
}

pub fn classify_chip(specs: &AppleSiliconSpecs) -> (Status, ReasonCode) {
    if specs.chip.as_deref().is_none_or(|chip| chip.trim().is_empty()) {
        return (Status::Warning, ReasonCode::ChipNotFound);
    }
    if specs.is_intel {
        return (Status::Bad, ReasonCode::IntelMacNotSupported);
    }
    // No upper bound on the generation.
    if specs.is_apple_silicon && specs.chip_generation >= 1 {
        return (Status::Good, ReasonCode::AppleSiliconSupported);
    }
    (Status::Warning, ReasonCode::ChipUnknown)
}

pub fn classify_unified_memory(memory_gb: f64) -> (Status, ReasonCode) {
    if memory_gb <= 0.0 {
        (Status::Warning, ReasonCode::MemoryNotFound)
    } else if memory_gb < MAC_MEMORY_LOW_GB {
        (Status::Bad, ReasonCode::MacVeryLowMemory)
    } else if memory_gb < MAC_MEMORY_MID_GB {
        (Status::Warning, ReasonCode::MacLowMemory)
    } else if memory_gb < MAC_MEMORY_HIGH_GB {
        (Status::Good, ReasonCode::MacAcceptableMemory)
    } else {
        (Status::Good, ReasonCode::MacGoodMemory)
    }
}

pub fn classify_os_version(major_version: u32) -> (Status, ReasonCode) {
    if major_version == 0 {
        (Status::Warning, ReasonCode::MacOsVersionNotFound)
    } else if major_version < MIN_SUPPORTED_MACOS {
        (Status::Bad, ReasonCode::MacOsTooOld)
    } else {
        (Status::Good, ReasonCode::MacOsSupported)
    }
}
