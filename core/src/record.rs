//! Attribute records populated by the extractors.
//!
//! Every field is independently optional. A missing string is `None`; a
//! numeric field left at `0` means "unknown", which never collides with a
//! real reading.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{CheckResult, Platform, Score};

/// Instruction-set family inferred from system-type and processor text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuArchitecture {
    Arm64,
    X64,
    X86,
}

impl CpuArchitecture {
    pub fn label(self) -> &'static str {
        match self {
            Self::Arm64 => "ARM64",
            Self::X64 => "x64",
            Self::X86 => "x86",
        }
    }
}

impl fmt::Display for CpuArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields extracted from a desktop system-information panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesktopSpecs {
    pub device_name: Option<String>,
    pub processor: Option<String>,
    /// RAM as displayed (e.g. `"16 GB"`).
    pub ram: Option<String>,
    /// RAM normalized to gigabytes; `0.0` when unknown.
    pub ram_gb: f64,
    pub gpu: Option<String>,
    /// Video memory as displayed (e.g. `"2048 MB"`).
    pub vram: Option<String>,
    /// Video memory normalized to gigabytes; `0.0` when unknown.
    pub vram_gb: f64,
    pub system_type: Option<String>,
    pub architecture: Option<CpuArchitecture>,
}

impl DesktopSpecs {
    /// Returns `true` when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.device_name.is_none()
            && self.processor.is_none()
            && self.ram.is_none()
            && self.gpu.is_none()
            && self.vram.is_none()
            && self.system_type.is_none()
            && self.architecture.is_none()
    }
}

/// Fields extracted from an Apple-silicon "About This Mac" panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppleSiliconSpecs {
    /// Product line (e.g. `"MacBook Pro"`).
    pub device_name: Option<String>,
    pub device_year: Option<String>,
    /// Chip as displayed (e.g. `"Apple M2 Pro"`).
    pub chip: Option<String>,
    /// `1` for M1, `2` for M2, ...; `0` when unknown.
    pub chip_generation: u32,
    pub is_apple_silicon: bool,
    pub is_intel: bool,
    pub memory: Option<String>,
    /// Unified memory in gigabytes; `0.0` when unknown.
    pub memory_gb: f64,
    /// OS release as displayed (e.g. `"Sonoma 14.2"`).
    pub os_version: Option<String>,
    /// Major OS version; `0` when unknown.
    pub os_major_version: u32,
}

impl AppleSiliconSpecs {
    /// Returns `true` when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.device_name.is_none()
            && self.device_year.is_none()
            && self.chip.is_none()
            && self.memory.is_none()
            && self.os_version.is_none()
    }
}

/// Extracted record for either pipeline variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "platform", rename_all = "snake_case")]
pub enum HardwareSpecs {
    Desktop(DesktopSpecs),
    AppleSilicon(AppleSiliconSpecs),
}

impl HardwareSpecs {
    pub fn platform(&self) -> Platform {
        match self {
            Self::Desktop(_) => Platform::Desktop,
            Self::AppleSilicon(_) => Platform::AppleSilicon,
        }
    }

    /// Device name from whichever variant this is.
    pub fn device_name(&self) -> Option<&str> {
        match self {
            Self::Desktop(specs) => specs.device_name.as_deref(),
            Self::AppleSilicon(specs) => specs.device_name.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Desktop(specs) => specs.is_empty(),
            Self::AppleSilicon(specs) => specs.is_empty(),
        }
    }
}

/// Outcome of one analysis run: the record, its ordered check results, and
/// the score derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub platform: Platform,
    pub specs: HardwareSpecs,
    pub results: Vec<CheckResult>,
    pub score: Score,
}

impl Analysis {
    /// Looks up the result for one attribute.
    pub fn result(&self, attribute: crate::Attribute) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.attribute == attribute)
    }
}
