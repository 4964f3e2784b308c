//! Check result type definitions for hardware compatibility modeling.
//!
//! This module defines the classification vocabulary shared by every
//! analysis pipeline: the platform selector, the tri-level [`Status`], the
//! attribute identifiers, the symbolic [`ReasonCode`]s, and the aggregate
//! [`Score`]. The types are designed for serialization with [`serde`] so a
//! presentation layer can map codes to localized strings on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Display marker used for attributes whose value could not be extracted.
pub const UNKNOWN_MARKER: &str = "?";

/// Pipeline variant selected by the caller.
///
/// # Examples
///
/// ```
/// use hardware_fit_core::Platform;
///
/// assert_eq!(Platform::default(), Platform::Desktop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    /// Desktop-class PC (processor, RAM, GPU, VRAM, architecture).
    #[default]
    Desktop,
    /// Apple-silicon-class Mac (chip, unified memory, OS version).
    AppleSilicon,
}

impl Platform {
    /// Stable snake_case identifier, identical to the serde encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::AppleSilicon => "apple_silicon",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tri-level classification assigned to one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Good,
    Warning,
    Bad,
}

impl Status {
    /// Points subtracted from the score for a known attribute with this status.
    pub fn penalty(self) -> u32 {
        match self {
            Self::Good => 0,
            Self::Warning => 15,
            Self::Bad => 30,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => write!(f, "good"),
            Self::Warning => write!(f, "warning"),
            Self::Bad => write!(f, "bad"),
        }
    }
}

/// Attribute a [`CheckResult`] is about.
///
/// Desktop pipelines produce `Processor`, `Graphics`, `Ram`, `VideoMemory`
/// and `Architecture`; Apple-silicon pipelines produce `Chip`, `Memory` and
/// `OsVersion`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Processor,
    Graphics,
    Ram,
    VideoMemory,
    Architecture,
    Chip,
    Memory,
    OsVersion,
}

impl Attribute {
    /// English display label. Localization belongs to the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Processor => "Processor",
            Self::Graphics => "Graphics Card",
            Self::Ram => "RAM",
            Self::VideoMemory => "Video Memory",
            Self::Architecture => "Architecture",
            Self::Chip => "Chip",
            Self::Memory => "Memory",
            Self::OsVersion => "macOS Version",
        }
    }

    /// Returns `true` when a known `Bad` status on this attribute forces the
    /// overall score to zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use hardware_fit_core::Attribute;
    ///
    /// assert!(Attribute::Architecture.is_gating());
    /// assert!(Attribute::OsVersion.is_gating());
    /// assert!(!Attribute::Ram.is_gating());
    /// ```
    pub fn is_gating(self) -> bool {
        matches!(self, Self::Architecture | Self::Chip | Self::OsVersion)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Symbolic identifier of the classification rule that fired.
///
/// Reason codes are stable keys, not display text. `Display` renders the
/// same snake_case token serde uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    // Processor
    CpuNotFound,
    QualcommArm,
    ModernIntel,
    OlderIntel,
    ModernRyzen,
    OlderRyzen,
    LowPerfCpu,
    VeryOldCpu,
    CpuDetected,
    // Graphics
    GpuNotFound,
    QualcommAdreno,
    IntelArc,
    IntelIris,
    IntelUhd,
    IntelIntegrated,
    NvidiaDedicated,
    AmdVega,
    AmdRadeon,
    GpuDetected,
    // RAM
    RamNotFound,
    VeryLowRam,
    LowRam,
    AcceptableRam,
    GoodRam,
    // Video memory
    SharedMemory,
    VramNotFound,
    VeryLowVram,
    LowVram,
    GoodVram,
    // Architecture
    Arm64,
    X64,
    X86,
    ArchUnknown,
    // Apple chip
    ChipNotFound,
    IntelMacNotSupported,
    AppleSiliconSupported,
    ChipUnknown,
    // Unified memory
    MemoryNotFound,
    MacVeryLowMemory,
    MacLowMemory,
    MacAcceptableMemory,
    MacGoodMemory,
    // macOS version
    MacOsVersionNotFound,
    MacOsTooOld,
    MacOsSupported,
}

impl ReasonCode {
    /// Every reason code, in declaration order.
    pub const ALL: [ReasonCode; 45] = [
        Self::CpuNotFound,
        Self::QualcommArm,
        Self::ModernIntel,
        Self::OlderIntel,
        Self::ModernRyzen,
        Self::OlderRyzen,
        Self::LowPerfCpu,
        Self::VeryOldCpu,
        Self::CpuDetected,
        Self::GpuNotFound,
        Self::QualcommAdreno,
        Self::IntelArc,
        Self::IntelIris,
        Self::IntelUhd,
        Self::IntelIntegrated,
        Self::NvidiaDedicated,
        Self::AmdVega,
        Self::AmdRadeon,
        Self::GpuDetected,
        Self::RamNotFound,
        Self::VeryLowRam,
        Self::LowRam,
        Self::AcceptableRam,
        Self::GoodRam,
        Self::SharedMemory,
        Self::VramNotFound,
        Self::VeryLowVram,
        Self::LowVram,
        Self::GoodVram,
        Self::Arm64,
        Self::X64,
        Self::X86,
        Self::ArchUnknown,
        Self::ChipNotFound,
        Self::IntelMacNotSupported,
        Self::AppleSiliconSupported,
        Self::ChipUnknown,
        Self::MemoryNotFound,
        Self::MacVeryLowMemory,
        Self::MacLowMemory,
        Self::MacAcceptableMemory,
        Self::MacGoodMemory,
        Self::MacOsVersionNotFound,
        Self::MacOsTooOld,
        Self::MacOsSupported,
    ];

    /// Stable snake_case key for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CpuNotFound => "cpu_not_found",
            Self::QualcommArm => "qualcomm_arm",
            Self::ModernIntel => "modern_intel",
            Self::OlderIntel => "older_intel",
            Self::ModernRyzen => "modern_ryzen",
            Self::OlderRyzen => "older_ryzen",
            Self::LowPerfCpu => "low_perf_cpu",
            Self::VeryOldCpu => "very_old_cpu",
            Self::CpuDetected => "cpu_detected",
            Self::GpuNotFound => "gpu_not_found",
            Self::QualcommAdreno => "qualcomm_adreno",
            Self::IntelArc => "intel_arc",
            Self::IntelIris => "intel_iris",
            Self::IntelUhd => "intel_uhd",
            Self::IntelIntegrated => "intel_integrated",
            Self::NvidiaDedicated => "nvidia_dedicated",
            Self::AmdVega => "amd_vega",
            Self::AmdRadeon => "amd_radeon",
            Self::GpuDetected => "gpu_detected",
            Self::RamNotFound => "ram_not_found",
            Self::VeryLowRam => "very_low_ram",
            Self::LowRam => "low_ram",
            Self::AcceptableRam => "acceptable_ram",
            Self::GoodRam => "good_ram",
            Self::SharedMemory => "shared_memory",
            Self::VramNotFound => "vram_not_found",
            Self::VeryLowVram => "very_low_vram",
            Self::LowVram => "low_vram",
            Self::GoodVram => "good_vram",
            Self::Arm64 => "arm64",
            Self::X64 => "x64",
            Self::X86 => "x86",
            Self::ArchUnknown => "arch_unknown",
            Self::ChipNotFound => "chip_not_found",
            Self::IntelMacNotSupported => "intel_mac_not_supported",
            Self::AppleSiliconSupported => "apple_silicon_supported",
            Self::ChipUnknown => "chip_unknown",
            Self::MemoryNotFound => "memory_not_found",
            Self::MacVeryLowMemory => "mac_very_low_memory",
            Self::MacLowMemory => "mac_low_memory",
            Self::MacAcceptableMemory => "mac_acceptable_memory",
            Self::MacGoodMemory => "mac_good_memory",
            Self::MacOsVersionNotFound => "mac_os_version_not_found",
            Self::MacOsTooOld => "mac_os_too_old",
            Self::MacOsSupported => "mac_os_supported",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of one attribute.
///
/// `value` is `None` when extraction found nothing; such results never
/// influence the score.
///
/// # Examples
///
/// ```
/// use hardware_fit_core::{Attribute, CheckResult, ReasonCode, Status};
///
/// let result = CheckResult::new(Attribute::Ram, None, Status::Warning, ReasonCode::RamNotFound);
/// assert!(!result.is_known());
/// assert_eq!(result.display_value(), "?");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub attribute: Attribute,
    pub value: Option<String>,
    pub status: Status,
    pub reason: ReasonCode,
}

impl CheckResult {
    /// Creates a result; blank values are normalized to `None`.
    pub fn new(
        attribute: Attribute,
        value: Option<&str>,
        status: Status,
        reason: ReasonCode,
    ) -> Self {
        let value = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);
        Self {
            attribute,
            value,
            status,
            reason,
        }
    }

    /// Returns `true` when the attribute's value was extracted.
    pub fn is_known(&self) -> bool {
        self.value.is_some()
    }

    /// Value for display, or [`UNKNOWN_MARKER`].
    pub fn display_value(&self) -> &str {
        self.value.as_deref().unwrap_or(UNKNOWN_MARKER)
    }
}

/// Aggregate compatibility score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Score {
    /// No attribute could be extracted at all.
    NoData,
    /// Score in `[0, 100]`.
    Points(u8),
}

impl Score {
    /// Numeric score, or `None` for [`Score::NoData`].
    ///
    /// # Examples
    ///
    /// ```
    /// use hardware_fit_core::Score;
    ///
    /// assert_eq!(Score::Points(70).value(), Some(70));
    /// assert_eq!(Score::NoData.value(), None);
    /// ```
    pub fn value(self) -> Option<u8> {
        match self {
            Self::NoData => None,
            Self::Points(points) => Some(points),
        }
    }

    pub fn is_no_data(self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Qualitative interpretation of this score.
    pub fn tier(self) -> ScoreTier {
        match self {
            Self::NoData => ScoreTier::NoData,
            Self::Points(points) => ScoreTier::from_points(points),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoData => write!(f, "N/A"),
            Self::Points(points) => write!(f, "{points}/100"),
        }
    }
}

/// Qualitative band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Excellent,
    Good,
    Acceptable,
    BelowAverage,
    SignificantConcerns,
    NoData,
}

impl ScoreTier {
    /// Maps a numeric score to its band.
    ///
    /// # Examples
    ///
    /// ```
    /// use hardware_fit_core::ScoreTier;
    ///
    /// assert_eq!(ScoreTier::from_points(85), ScoreTier::Excellent);
    /// assert_eq!(ScoreTier::from_points(84), ScoreTier::Good);
    /// assert_eq!(ScoreTier::from_points(39), ScoreTier::SignificantConcerns);
    /// ```
    pub fn from_points(points: u8) -> Self {
        match points {
            85.. => Self::Excellent,
            70..=84 => Self::Good,
            55..=69 => Self::Acceptable,
            40..=54 => Self::BelowAverage,
            _ => Self::SignificantConcerns,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Acceptable => "acceptable",
            Self::BelowAverage => "below_average",
            Self::SignificantConcerns => "significant_concerns",
            Self::NoData => "no_data",
        }
    }
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
