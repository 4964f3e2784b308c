//! Desktop-class extraction (processor, RAM, GPU, VRAM, system type).

use std::ops::RangeInclusive;

use hardware_fit_core::{CpuArchitecture, DesktopSpecs};
use tracing::debug;

use super::patterns::{PATTERNS, first_capture, first_match};
use super::units::{Quantity, parse_decimal};

/// Plausible installed-RAM sizes for unlabeled `N GB` tokens.
pub const RAM_CANDIDATE_RANGE_GB: RangeInclusive<f64> = 4.0..=256.0;

const ARM_TOKENS: &[&str] = &["arm", "aarch64", "qualcomm", "snapdragon"];
const X64_TOKENS: &[&str] = &[
    "x64", "amd64", "x86_64", "x86-64", "64-bit", "64 bit", "64 bits",
];
const X86_TOKENS: &[&str] = &["x86", "32-bit", "32 bit", "32 bits"];

/// Extracts a [`DesktopSpecs`] record from OCR text.
///
/// Field order matters: the nested VRAM rule reads the GPU label, and
/// architecture inference reads both the system type and the processor.
pub fn extract_desktop(text: &str) -> DesktopSpecs {
    let patterns = &*PATTERNS;
    let mut specs = DesktopSpecs {
        processor: extract_processor(text),
        ..Default::default()
    };

    if let Some(quantity) = patterns
        .ram
        .captures(text)
        .and_then(|caps| Quantity::from_captures(&caps))
    {
        debug!(field = "ram", rule = "labeled", value = %quantity.display, "Extracted field");
        specs.ram = Some(quantity.display);
        specs.ram_gb = quantity.gigabytes;
    }
    if specs.ram_gb <= 0.0 {
        if let Some((shown, gigabytes)) = find_bare_ram(text) {
            debug!(field = "ram", rule = "bare_gigabytes", value = %shown, "Extracted field");
            specs.ram = Some(shown);
            specs.ram_gb = gigabytes;
        }
    }

    specs.gpu = extract_gpu(text);

    if let Some(quantity) = patterns
        .vram
        .captures(text)
        .and_then(|caps| Quantity::from_captures(&caps))
    {
        debug!(field = "vram", rule = "labeled", value = %quantity.display, "Extracted field");
        specs.vram = Some(quantity.display);
        specs.vram_gb = quantity.gigabytes;
    }
    if specs.vram_gb <= 0.0 {
        if let Some((shown, gigabytes)) = specs.gpu.as_deref().and_then(find_nested_vram) {
            debug!(field = "vram", rule = "gpu_label", value = %shown, "Extracted field");
            specs.vram = Some(shown);
            specs.vram_gb = gigabytes;
        }
    }

    specs.device_name = first_capture(&patterns.device_name, text);
    if let Some(name) = &specs.device_name {
        debug!(field = "device_name", rule = "labeled", value = %name, "Extracted field");
    }

    specs.system_type = extract_system_type(text);
    specs.architecture =
        infer_architecture(specs.system_type.as_deref(), specs.processor.as_deref());
    if let Some(arch) = specs.architecture {
        debug!(field = "architecture", value = %arch, "Inferred architecture");
    }

    specs
}

fn extract_processor(text: &str) -> Option<String> {
    let patterns = &*PATTERNS;
    if let Some(cpu) = first_capture(&patterns.processor, text) {
        debug!(field = "processor", rule = "labeled", value = %cpu, "Extracted field");
        return Some(cpu);
    }
    let cpu = first_match(&patterns.processor_signature, text)?;
    debug!(field = "processor", rule = "brand_signature", value = %cpu, "Extracted field");
    Some(cpu)
}

fn extract_gpu(text: &str) -> Option<String> {
    let patterns = &*PATTERNS;
    if let Some(gpu) = first_capture(&patterns.gpu, text) {
        debug!(field = "gpu", rule = "labeled", value = %gpu, "Extracted field");
        return Some(gpu);
    }
    let gpu = first_match(&patterns.gpu_signature, text)?;
    debug!(field = "gpu", rule = "brand_signature", value = %gpu, "Extracted field");
    Some(gpu)
}

/// First unlabeled `N GB` token whose value is a plausible RAM size.
fn find_bare_ram(text: &str) -> Option<(String, f64)> {
    PATTERNS.bare_gigabytes.captures_iter(text).find_map(|caps| {
        let gigabytes = parse_decimal(caps.get(1)?.as_str())?;
        RAM_CANDIDATE_RANGE_GB
            .contains(&gigabytes)
            .then(|| (caps[0].trim().to_string(), gigabytes))
    })
}

/// Memory size mentioned inside the GPU label itself (e.g. "RTX 3060 12 GB").
fn find_nested_vram(gpu: &str) -> Option<(String, f64)> {
    let caps = PATTERNS.nested_vram.captures(gpu)?;
    let gigabytes = parse_decimal(caps.get(1)?.as_str())?;
    Some((caps[0].trim().to_string(), gigabytes))
}

fn extract_system_type(text: &str) -> Option<String> {
    let patterns = &*PATTERNS;
    let labeled = first_capture(&patterns.system_type, text);
    if labeled.as_deref().is_some_and(has_architecture_hint) {
        debug!(field = "system_type", rule = "labeled", "Extracted field");
        return labeled;
    }

    if let Some(phrase) = first_match(&patterns.architecture_phrase, text) {
        debug!(field = "system_type", rule = "architecture_phrase", value = %phrase, "Extracted field");
        return Some(phrase);
    }
    if let Some(phrase) = first_match(&patterns.processor_architecture, text) {
        debug!(field = "system_type", rule = "processor_architecture", value = %phrase, "Extracted field");
        return Some(phrase);
    }
    labeled
}

fn has_architecture_hint(system_type: &str) -> bool {
    let lower = system_type.to_lowercase();
    lower.contains("64") || lower.contains("32") || lower.contains("arm") || lower.contains("x86")
}

/// Infers the instruction-set family from the system type and processor.
///
/// Tokens are checked in priority order over the combined text: ARM family
/// first, then 64-bit x86, then 32-bit x86. The first family with a hit
/// wins.
pub fn infer_architecture(
    system_type: Option<&str>,
    processor: Option<&str>,
) -> Option<CpuArchitecture> {
    let combined = [system_type, processor]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if combined.is_empty() {
        return None;
    }

    let contains_any = |tokens: &[&str]| tokens.iter().any(|token| combined.contains(token));
    if contains_any(ARM_TOKENS) {
        Some(CpuArchitecture::Arm64)
    } else if contains_any(X64_TOKENS) {
        Some(CpuArchitecture::X64)
    } else if contains_any(X86_TOKENS) {
        Some(CpuArchitecture::X86)
    } else {
        None
    }
}
