//! OCR text normalization passes.

use std::borrow::Cow;

use super::patterns::PATTERNS;

/// Rewrites OCR misreads of the Apple chip token ("Ml", "MI") to "M1".
///
/// Must run exactly once, before any Apple-silicon extraction rule, since
/// the chip, generation, and bare-token rules all read the corrected text.
/// Text without misreads is returned borrowed.
pub fn correct_chip_misreads(text: &str) -> Cow<'_, str> {
    let patterns = &*PATTERNS;
    let corrected = patterns
        .ocr_apple_chip_misread
        .replace_all(text, "Apple M1");
    match corrected {
        Cow::Borrowed(_) => patterns.ocr_bare_chip_misread.replace_all(text, "M1"),
        Cow::Owned(owned) => Cow::Owned(
            patterns
                .ocr_bare_chip_misread
                .replace_all(&owned, "M1")
                .into_owned(),
        ),
    }
}
