//! Apple-silicon extraction (chip, unified memory, OS release).

use std::ops::RangeInclusive;

use hardware_fit_core::AppleSiliconSpecs;
use regex::Captures;
use tracing::debug;

use super::normalize::correct_chip_misreads;
use super::patterns::{PATTERNS, first_capture, first_match};
use super::units::Quantity;

/// Four-digit tokens outside this range are not model years.
pub const DEVICE_YEAR_RANGE: RangeInclusive<u32> = 2010..=2035;

/// Extracts an [`AppleSiliconSpecs`] record from OCR text.
///
/// The chip-misread correction runs once over the whole text before any
/// other rule.
pub fn extract_apple_silicon(text: &str) -> AppleSiliconSpecs {
    let text = correct_chip_misreads(text);
    let text = text.as_ref();
    let patterns = &*PATTERNS;

    let mut specs = AppleSiliconSpecs {
        device_name: first_match(&patterns.mac_model, text),
        device_year: extract_year(text),
        ..Default::default()
    };

    if let Some(caps) = patterns.apple_chip.captures(text) {
        debug!(field = "chip", rule = "apple_prefixed", value = %&caps[0], "Extracted field");
        set_apple_chip(&mut specs, &caps);
    } else if let Some(caps) = patterns.bare_apple_chip.captures(text) {
        debug!(field = "chip", rule = "bare_token", value = %&caps[0], "Extracted field");
        set_apple_chip(&mut specs, &caps);
    } else if let Some(chip) = first_match(&patterns.intel_chip, text) {
        debug!(field = "chip", rule = "intel", value = %chip, "Extracted field");
        specs.chip = Some(chip);
        specs.is_intel = true;
    }

    let memory = patterns
        .apple_memory
        .captures(text)
        .and_then(|caps| Quantity::from_captures(&caps))
        .filter(|quantity| quantity.gigabytes > 0.0)
        .or_else(|| {
            patterns
                .unified_memory_size
                .captures(text)
                .and_then(|caps| Quantity::from_captures(&caps))
        });
    if let Some(quantity) = memory {
        debug!(field = "memory", value = %quantity.display, "Extracted field");
        specs.memory = Some(quantity.display);
        specs.memory_gb = quantity.gigabytes;
    }

    let release = patterns
        .macos_release
        .captures(text)
        .or_else(|| patterns.macos_numeric.captures(text));
    if let Some((shown, major)) = release.and_then(|caps| os_version(&caps)) {
        debug!(field = "os_version", value = %shown, "Extracted field");
        specs.os_version = Some(shown);
        specs.os_major_version = major;
    }

    specs
}

fn extract_year(text: &str) -> Option<String> {
    let token = first_capture(&PATTERNS.year, text)?;
    let year: u32 = token.parse().ok()?;
    DEVICE_YEAR_RANGE.contains(&year).then_some(token)
}

fn set_apple_chip(specs: &mut AppleSiliconSpecs, caps: &Captures<'_>) {
    specs.chip = Some(caps[0].trim().to_string());
    specs.is_apple_silicon = true;
    specs.chip_generation = caps
        .get(1)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_default();
}

/// Renders "<name> <major>.<minor>[.<patch>]", defaulting minor to 0.
fn os_version(caps: &Captures<'_>) -> Option<(String, u32)> {
    let name = caps.get(1)?.as_str().trim();
    let major_raw = caps.get(2)?.as_str();
    let minor = caps.get(3).map_or("0", |m| m.as_str());

    let mut display = format!("{name} {major_raw}.{minor}");
    if let Some(patch) = caps.get(4) {
        display.push('.');
        display.push_str(patch.as_str());
    }
    let major = major_raw.parse().unwrap_or_default();
    Some((display, major))
}
