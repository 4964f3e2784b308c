//! Label dictionaries and compiled regex patterns for OCR extraction.
//!
//! Labels are regex fragments (they may carry accent classes such as
//! `[eé]`). Each labeled pattern is `(?i)(?:label|...)` followed by an
//! optional `:`/`-` separator and the value. The separator skip may cross a
//! line break, so a label on one OCR line and its value on the next still
//! pair up.

use regex::Regex;
use std::sync::LazyLock;

/// Processor labels (EN, FR, DE, ES).
pub const PROCESSOR_LABELS: &[&str] = &["Processor", "Processeur", "Prozessor", "Procesador"];

/// Installed-RAM labels.
pub const RAM_LABELS: &[&str] = &[
    "Installed RAM",
    r"M[eé]moire RAM install[eé]e?",
    r"RAM install[eé]e?",
    "Installierter RAM",
    "RAM instalada",
    "Memoria RAM",
];

/// Graphics adapter labels.
pub const GPU_LABELS: &[&str] = &[
    "Graphics card",
    "Carte graphique",
    "Grafikkarte",
    r"Tarjeta gr[aá]fica",
    "GPU",
];

/// Dedicated video memory labels.
pub const VRAM_LABELS: &[&str] = &[
    "VRAM",
    "Video RAM",
    "GPU Memory",
    r"(?:Dedicated )?Video memory",
    r"M[eé]moire vid[eé]o",
    "Grafikspeicher",
    "Videospeicher",
    r"Memoria de v[ií]deo",
];

/// Device name labels.
pub const DEVICE_NAME_LABELS: &[&str] = &[
    "Device name",
    r"Nom de l['’]appareil",
    r"Ger[aä]tename",
    "Nombre del dispositivo",
];

/// System type labels.
pub const SYSTEM_TYPE_LABELS: &[&str] = &[
    "System type",
    r"Type (?:du|de) syst[eè]me",
    "Systemtyp",
    "Tipo de sistema",
];

/// Unified memory labels on the Apple-silicon panel.
pub const APPLE_MEMORY_LABELS: &[&str] = &[
    "Memory",
    r"M[eé]moire",
    "Arbeitsspeicher",
    "Speicher",
    "Memoria",
];

/// Value capture for free-text fields: the rest of the line.
const LINE_VALUE: &str = r"([^\n]+)";

/// Number + large-capacity unit (RAM-class quantities).
const RAM_QUANTITY: &str = r"(\d+[.,]?\d*)\s*(GB|Go|GiB|TB|To|TiB)";

/// Number + video-memory unit.
const VRAM_QUANTITY: &str = r"(\d+[.,]?\d*)\s*(GB|Go|GiB|MB|Mo|MiB)";

/// Process-wide compiled patterns.
pub(crate) static PATTERNS: LazyLock<OcrPatterns> = LazyLock::new(OcrPatterns::new);

pub(crate) struct OcrPatterns {
    // Desktop, labeled
    pub(crate) processor: Regex,
    pub(crate) ram: Regex,
    pub(crate) gpu: Regex,
    pub(crate) vram: Regex,
    pub(crate) device_name: Regex,
    pub(crate) system_type: Regex,

    // Desktop, unlabeled fallbacks
    pub(crate) processor_signature: Regex,
    pub(crate) bare_gigabytes: Regex,
    pub(crate) gpu_signature: Regex,
    pub(crate) nested_vram: Regex,
    pub(crate) architecture_phrase: Regex,
    pub(crate) processor_architecture: Regex,

    // Apple silicon
    pub(crate) ocr_apple_chip_misread: Regex,
    pub(crate) ocr_bare_chip_misread: Regex,
    pub(crate) mac_model: Regex,
    pub(crate) year: Regex,
    pub(crate) apple_chip: Regex,
    pub(crate) bare_apple_chip: Regex,
    pub(crate) intel_chip: Regex,
    pub(crate) apple_memory: Regex,
    pub(crate) unified_memory_size: Regex,
    pub(crate) macos_release: Regex,
    pub(crate) macos_numeric: Regex,
}

/// Builds a case-insensitive `label [sep] value` pattern.
pub fn labeled_pattern(labels: &[&str], value: &str) -> String {
    format!(r"(?i)(?:{})\s*[:\-]?\s*{value}", labels.join("|"))
}

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time constants; a failure here is a programmer error.
    Regex::new(pattern).expect("static regex must compile")
}

impl OcrPatterns {
    fn new() -> Self {
        Self {
            processor: compile(&labeled_pattern(PROCESSOR_LABELS, LINE_VALUE)),
            ram: compile(&labeled_pattern(RAM_LABELS, RAM_QUANTITY)),
            gpu: compile(&labeled_pattern(GPU_LABELS, LINE_VALUE)),
            vram: compile(&labeled_pattern(VRAM_LABELS, VRAM_QUANTITY)),
            device_name: compile(&labeled_pattern(DEVICE_NAME_LABELS, LINE_VALUE)),
            system_type: compile(&labeled_pattern(SYSTEM_TYPE_LABELS, LINE_VALUE)),

            // "AMD Ryzen 9 7900X 12-Core Processor" without a label
            processor_signature: compile(
                r"(?i)(?:AMD|Intel|Qualcomm|Apple)[^\n]+(?:Core|Ryzen|Xeon|Snapdragon|M\d)[^\n]+",
            ),
            bare_gigabytes: compile(r"(?i)(\d+[.,]?\d*)\s*(GB|Go|GiB)"),
            gpu_signature: compile(
                r"(?i)(?:NVIDIA|GeForce|Radeon|Intel.*(?:UHD|Iris|Arc)|AMD.*Radeon|Qualcomm.*Adreno)[^\n]*",
            ),
            nested_vram: compile(r"(?i)(\d+)\s*(GB|Go)"),
            // "64-bit operating system, x64-based processor"
            architecture_phrase: compile(
                r"(?i)(?:64[- ]?bit|32[- ]?bit|x64|x86|ARM64|ARM|aarch64)[^\n]*(?:processor|processeur|based|bas[eé])",
            ),
            processor_architecture: compile(r"(?i)(?:processeur|processor)\s+(?:x64|x86|ARM64|ARM)"),

            // OCR reads the digit in "M1" as a lowercase l or uppercase I.
            ocr_apple_chip_misread: compile(r"(?i:apple)\s*M[lI]\b"),
            ocr_bare_chip_misread: compile(r"\bM[lI]\b"),
            mac_model: compile(
                r"(?i)MacBook\s*Pro|MacBook\s*Air|iMac|Mac\s*Mini|Mac\s*Studio|Mac\s*Pro",
            ),
            year: compile(r"\b(\d{4})\b"),
            apple_chip: compile(r"(?i)Apple\s*M(\d+)(?:\s*(?:Pro|Max|Ultra))?"),
            // "14-inch, M2 Pro, 2023"
            bare_apple_chip: compile(r"\bM(\d{1,2})\b(?:\s*(?i:Pro|Max|Ultra)\b)?"),
            intel_chip: compile(r"(?i)Intel[^\n]{0,50}"),
            apple_memory: compile(&labeled_pattern(APPLE_MEMORY_LABELS, RAM_QUANTITY)),
            unified_memory_size: compile(r"(?i)\b(8|16|24|32|48|64|96|128)\s*(GB|Go)\b"),
            macos_release: compile(
                r"(?i)(Sonoma|Sequoia|Ventura|Monterey|Big\s*Sur|Catalina|Mojave|High\s*Sierra|Sierra|Tahoe)\s*(\d+)(?:\.(\d+))?(?:\.(\d+))?",
            ),
            macos_numeric: compile(r"(?i)\b(macOS)\s*(\d+)(?:\.(\d+))?(?:\.(\d+))?"),
        }
    }
}

/// Group 1 of the first match, trimmed; `None` when absent or blank.
pub(crate) fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Whole first match, trimmed; `None` when absent or blank.
pub(crate) fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
