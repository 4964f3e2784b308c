use std::fs;
use std::path::PathBuf;

use hardware_fit_analyzer::batch::{BatchConfig, analyze_batch, collect_text_paths, load_inputs};
use hardware_fit_analyzer::report::{AcceptancePolicy, RejectionCode, build_batch_report};
use hardware_fit_analyzer::{analyze_text, analyze_text_with_report, extractor};
use hardware_fit_core::{
    Attribute, CpuArchitecture, HardwareSpecs, Platform, ReasonCode, Score, ScoreTier, Status,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read fixture {}: {err}", path.display()))
}

#[test]
fn test_english_settings_panel_scores_full_marks() {
    let analysis = analyze_text(Platform::Desktop, &fixture("windows-about-en.txt"));

    let HardwareSpecs::Desktop(specs) = &analysis.specs else {
        panic!("expected desktop specs");
    };
    assert_eq!(specs.device_name.as_deref(), Some("DESKTOP-7H2K9QX"));
    assert_eq!(specs.ram_gb, 32.0);
    assert_eq!(specs.gpu.as_deref(), Some("NVIDIA GeForce RTX 3070"));
    assert_eq!(specs.vram.as_deref(), Some("8 GB"));
    assert_eq!(specs.architecture, Some(CpuArchitecture::X64));

    let statuses: Vec<(Attribute, Status)> = analysis
        .results
        .iter()
        .map(|r| (r.attribute, r.status))
        .collect();
    assert_eq!(
        statuses,
        vec![
            (Attribute::Processor, Status::Good),
            (Attribute::Graphics, Status::Good),
            (Attribute::Ram, Status::Good),
            (Attribute::VideoMemory, Status::Good),
            (Attribute::Architecture, Status::Good),
        ]
    );
    assert_eq!(analysis.score, Score::Points(100));
    assert_eq!(analysis.score.tier(), ScoreTier::Excellent);
}

#[test]
fn test_french_settings_panel_with_integrated_graphics() {
    let analysis = analyze_text(Platform::Desktop, &fixture("windows-about-fr.txt"));

    let HardwareSpecs::Desktop(specs) = &analysis.specs else {
        panic!("expected desktop specs");
    };
    assert_eq!(specs.device_name.as_deref(), Some("BUREAU-MARIE"));
    assert_eq!(specs.ram.as_deref(), Some("8,00 Go"));
    assert_eq!(specs.ram_gb, 8.0);

    let reason = |attribute| analysis.result(attribute).unwrap().reason;
    assert_eq!(reason(Attribute::Processor), ReasonCode::ModernIntel);
    assert_eq!(reason(Attribute::Graphics), ReasonCode::IntelUhd);
    assert_eq!(reason(Attribute::Ram), ReasonCode::LowRam);
    assert_eq!(reason(Attribute::VideoMemory), ReasonCode::SharedMemory);
    assert_eq!(reason(Attribute::Architecture), ReasonCode::X64);

    // Two known warnings; the video memory warning is unknown and free.
    assert_eq!(analysis.score, Score::Points(70));
}

#[test]
fn test_german_settings_panel() {
    let analysis = analyze_text(Platform::Desktop, &fixture("windows-about-de.txt"));

    assert_eq!(
        analysis.specs.device_name(),
        Some("ARBEITS-PC")
    );
    let processor = analysis.result(Attribute::Processor).unwrap();
    assert_eq!(processor.reason, ReasonCode::ModernIntel);
    let graphics = analysis.result(Attribute::Graphics).unwrap();
    assert_eq!(graphics.reason, ReasonCode::IntelIris);
    assert_eq!(analysis.score, Score::Points(85));
}

#[test]
fn test_snapdragon_is_gated_to_zero() {
    let run = analyze_text_with_report(
        "windows-snapdragon.txt",
        Platform::Desktop,
        &fixture("windows-snapdragon.txt"),
        AcceptancePolicy::default(),
    );

    let arch = run.analysis.result(Attribute::Architecture).unwrap();
    assert_eq!(arch.value.as_deref(), Some("ARM64"));
    assert_eq!(arch.status, Status::Bad);
    assert_eq!(run.analysis.score, Score::Points(0));
    assert!(!run.report.accepted);
    assert_eq!(run.report.rejection_code, Some(RejectionCode::GatingFailure));
}

#[test]
fn test_macbook_pro_on_sonoma_is_gated_by_os_version() {
    let analysis = analyze_text(Platform::AppleSilicon, &fixture("macbook-pro-m2-sonoma.txt"));

    let HardwareSpecs::AppleSilicon(specs) = &analysis.specs else {
        panic!("expected apple silicon specs");
    };
    assert_eq!(specs.device_name.as_deref(), Some("MacBook Pro"));
    assert_eq!(specs.device_year.as_deref(), Some("2023"));
    assert_eq!(specs.chip_generation, 2);
    assert_eq!(specs.memory_gb, 32.0);
    assert_eq!(specs.os_major_version, 14);

    let chip = analysis.result(Attribute::Chip).unwrap();
    assert_eq!(chip.status, Status::Good);
    let memory = analysis.result(Attribute::Memory).unwrap();
    assert_eq!(memory.reason, ReasonCode::MacGoodMemory);
    let os = analysis.result(Attribute::OsVersion).unwrap();
    assert_eq!(os.status, Status::Bad);
    assert_eq!(os.reason, ReasonCode::MacOsTooOld);

    assert_eq!(analysis.score, Score::Points(0));
}

#[test]
fn test_ocr_misread_matches_clean_transcription() {
    let misread = fixture("macbook-air-ocr-misread.txt");
    let clean = misread.replace("Ml", "M1");

    let HardwareSpecs::AppleSilicon(a) = extractor::extract(Platform::AppleSilicon, &misread)
    else {
        panic!("expected apple silicon specs");
    };
    let HardwareSpecs::AppleSilicon(b) = extractor::extract(Platform::AppleSilicon, &clean) else {
        panic!("expected apple silicon specs");
    };
    assert_eq!(a.chip, b.chip);
    assert_eq!(a.chip_generation, b.chip_generation);
    assert_eq!(a.chip.as_deref(), Some("Apple M1"));

    let analysis = analyze_text(Platform::AppleSilicon, &misread);
    assert_eq!(analysis.score, Score::Points(100));
}

#[test]
fn test_intel_imac_is_not_supported() {
    let analysis = analyze_text(Platform::AppleSilicon, &fixture("imac-intel-monterey.txt"));

    let chip = analysis.result(Attribute::Chip).unwrap();
    assert_eq!(chip.value.as_deref(), Some("Intel Core i9"));
    assert_eq!(chip.reason, ReasonCode::IntelMacNotSupported);
    assert_eq!(analysis.specs.device_name(), Some("iMac"));
    assert_eq!(analysis.score, Score::Points(0));
}

#[test]
fn test_noise_is_no_data_not_zero() {
    let text = fixture("empty-noise.txt");
    for platform in [Platform::Desktop, Platform::AppleSilicon] {
        let analysis = analyze_text(platform, &text);
        assert_eq!(analysis.score, Score::NoData, "platform: {platform}");
        assert!(analysis.results.iter().all(|r| r.display_value() == "?"));
    }
}

#[test]
fn test_fixture_directory_batch() {
    let dir = fixture_path("");
    let paths = collect_text_paths(&[dir]).unwrap();
    assert_eq!(paths.len(), 8);

    let desktop: Vec<PathBuf> = paths
        .into_iter()
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("windows-"))
        })
        .collect();
    let inputs = load_inputs(&desktop, Platform::Desktop).unwrap();
    let policy = AcceptancePolicy::default();
    let outcome = analyze_batch(
        &inputs,
        &BatchConfig {
            policy,
            jobs: Some(2),
        },
    )
    .unwrap();

    assert_eq!(outcome.reports.len(), 4);
    assert_eq!(outcome.rejected.len(), 1);
    assert!(outcome.rejected[0].ends_with("windows-snapdragon.txt"));

    let batch = build_batch_report(env!("CARGO_PKG_VERSION"), policy, outcome.reports);
    assert_eq!(batch.summary.accepted, 3);
    assert_eq!(
        batch.summary.rejection_codes.get(&RejectionCode::GatingFailure),
        Some(&1)
    );
}
