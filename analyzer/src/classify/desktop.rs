//! Desktop-class rule tables.

use std::sync::LazyLock;

use hardware_fit_core::{
    Attribute, CheckResult, CpuArchitecture, DesktopSpecs, ReasonCode, Status,
};
use regex::Regex;

/// First Intel Core generation treated as modern.
pub const MODERN_INTEL_GENERATION: u32 = 10;
/// First Ryzen series digit treated as modern.
pub const MODERN_RYZEN_SERIES: u32 = 3;

/// Desktop RAM breakpoints in gigabytes: below `LOW` is Bad, below `MID`
/// is Warning, below `HIGH` is acceptable.
pub const RAM_LOW_GB: f64 = 8.0;
pub const RAM_MID_GB: f64 = 12.0;
pub const RAM_HIGH_GB: f64 = 16.0;

pub const VRAM_LOW_GB: f64 = 2.0;
pub const VRAM_GOOD_GB: f64 = 4.0;

static INTEL_CORE_MODEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)i[3579]-(\d{2})(\d{2,3})").expect("static regex must compile")
});

static RYZEN_MODEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)ryzen\s*[3579]\s*(?:pro\s*)?(\d)\d{3}").expect("static regex must compile")
});

/// Classifies a desktop record. Results are always in the order
/// Processor, Graphics, RAM, Video Memory, Architecture.
pub fn classify_desktop(specs: &DesktopSpecs) -> Vec<CheckResult> {
    let (cpu_status, cpu_reason) = classify_processor(specs.processor.as_deref());
    let (gpu_status, gpu_reason) = classify_graphics(specs.gpu.as_deref(), specs.vram_gb);
    let (ram_status, ram_reason) = classify_ram(specs.ram_gb);
    let (vram_status, vram_reason) = classify_video_memory(specs.vram_gb, specs.gpu.as_deref());
    let (arch_status, arch_reason) = classify_architecture(specs.architecture);

    vec![
        CheckResult::new(
            Attribute::Processor,
            specs.processor.as_deref(),
            cpu_status,
            cpu_reason,
        ),
        CheckResult::new(Attribute::Graphics, specs.gpu.as_deref(), gpu_status, gpu_reason),
        CheckResult::new(Attribute::Ram, specs.ram.as_deref(), ram_status, ram_reason),
        CheckResult::new(
            Attribute::VideoMemory,
            specs.vram.as_deref(),
            vram_status,
            vram_reason,
        ),
        CheckResult::new(
            Attribute::Architecture,
            specs.architecture.map(CpuArchitecture::label),
            arch_status,
            arch_reason,
        ),
    ]
}

pub fn classify_processor(processor: Option<&str>) -> (Status, ReasonCode) {
    let Some(processor) = processor.filter(|p| !p.trim().is_empty()) else {
        return (Status::Warning, ReasonCode::CpuNotFound);
    };
    let lower = processor.to_lowercase();

    if lower.contains("qualcomm") || lower.contains("snapdragon") {
        return (Status::Bad, ReasonCode::QualcommArm);
    }

    if let Some(generation) = intel_core_generation(&lower) {
        return if generation >= MODERN_INTEL_GENERATION {
            (Status::Good, ReasonCode::ModernIntel)
        } else {
            (Status::Warning, ReasonCode::OlderIntel)
        };
    }

    if let Some(series) = ryzen_series(&lower) {
        return if series >= MODERN_RYZEN_SERIES {
            (Status::Good, ReasonCode::ModernRyzen)
        } else {
            (Status::Warning, ReasonCode::OlderRyzen)
        };
    }

    if ["pentium", "celeron", "atom"]
        .iter()
        .any(|family| lower.contains(family))
    {
        return (Status::Warning, ReasonCode::LowPerfCpu);
    }

    if lower.contains("core 2") || lower.contains("core2") {
        return (Status::Bad, ReasonCode::VeryOldCpu);
    }

    (Status::Good, ReasonCode::CpuDetected)
}

/// Intel Core generation: the first two digits of a hyphenated model
/// number with at least four digits (`i7-10700` is 10, `i5-8250` is 82).
///
/// Space-separated and three-digit models (`i7-920`) do not match.
pub fn intel_core_generation(processor: &str) -> Option<u32> {
    let caps = INTEL_CORE_MODEL.captures(processor)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Ryzen series digit (`5` for a 5800X).
pub fn ryzen_series(processor: &str) -> Option<u32> {
    let caps = RYZEN_MODEL.captures(processor)?;
    caps.get(1)?.as_str().parse().ok()
}

pub fn classify_graphics(gpu: Option<&str>, vram_gb: f64) -> (Status, ReasonCode) {
    let Some(gpu) = gpu.filter(|g| !g.trim().is_empty()) else {
        return (Status::Warning, ReasonCode::GpuNotFound);
    };
    let lower = gpu.to_lowercase();

    if lower.contains("adreno") || lower.contains("qualcomm") {
        return (Status::Bad, ReasonCode::QualcommAdreno);
    }

    if lower.contains("intel") {
        return if lower.contains("arc") {
            (Status::Good, ReasonCode::IntelArc)
        } else if lower.contains("iris") {
            (Status::Warning, ReasonCode::IntelIris)
        } else if lower.contains("uhd") {
            (Status::Warning, ReasonCode::IntelUhd)
        } else {
            (Status::Warning, ReasonCode::IntelIntegrated)
        };
    }

    if ["nvidia", "geforce", "rtx", "gtx", "quadro"]
        .iter()
        .any(|token| lower.contains(token))
    {
        return (Status::Good, ReasonCode::NvidiaDedicated);
    }

    if lower.contains("radeon") {
        // Vega graphics on an APU share system memory.
        if lower.contains("vega") && (lower.contains("ryzen") || vram_gb < VRAM_LOW_GB) {
            return (Status::Warning, ReasonCode::AmdVega);
        }
        return (Status::Good, ReasonCode::AmdRadeon);
    }

    (Status::Good, ReasonCode::GpuDetected)
}

pub fn classify_ram(ram_gb: f64) -> (Status, ReasonCode) {
    if ram_gb <= 0.0 {
        (Status::Warning, ReasonCode::RamNotFound)
    } else if ram_gb < RAM_LOW_GB {
        (Status::Bad, ReasonCode::VeryLowRam)
    } else if ram_gb < RAM_MID_GB {
        (Status::Warning, ReasonCode::LowRam)
    } else if ram_gb < RAM_HIGH_GB {
        (Status::Good, ReasonCode::AcceptableRam)
    } else {
        (Status::Good, ReasonCode::GoodRam)
    }
}

pub fn classify_video_memory(vram_gb: f64, gpu: Option<&str>) -> (Status, ReasonCode) {
    if vram_gb <= 0.0 {
        let lower = gpu.unwrap_or_default().to_lowercase();
        if lower.contains("intel") && !lower.contains("arc") {
            return (Status::Warning, ReasonCode::SharedMemory);
        }
        return (Status::Warning, ReasonCode::VramNotFound);
    }

    if vram_gb < VRAM_LOW_GB {
        (Status::Bad, ReasonCode::VeryLowVram)
    } else if vram_gb < VRAM_GOOD_GB {
        (Status::Warning, ReasonCode::LowVram)
    } else {
        (Status::Good, ReasonCode::GoodVram)
    }
}

pub fn classify_architecture(architecture: Option<CpuArchitecture>) -> (Status, ReasonCode) {
    match architecture {
        Some(CpuArchitecture::Arm64) => (Status::Bad, ReasonCode::Arm64),
        Some(CpuArchitecture::X64) => (Status::Good, ReasonCode::X64),
        Some(CpuArchitecture::X86) => (Status::Bad, ReasonCode::X86),
        None => (Status::Warning, ReasonCode::ArchUnknown),
    }
}
