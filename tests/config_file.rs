//! 설정 파일 로드/저장과 명령행 덮어쓰기 테스트.
use clap::Parser;
use mccabe_thiele_toolbox::app::Cli;
use mccabe_thiele_toolbox::column::{TraySpacing, VaporFlow};
use mccabe_thiele_toolbox::config::{self, Config, EquilibriumSource};
use mccabe_thiele_toolbox::design::design_column;
use mccabe_thiele_toolbox::equilibrium::InterpolationMethod;
use mccabe_thiele_toolbox::report;

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("design.toml");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());

    let reloaded = config::load(&path).expect("reload");
    assert_eq!(reloaded, cfg);
}

#[test]
fn default_config_reproduces_reference_design() {
    let input = Config::default().design_input().expect("input");
    let outcome = design_column(&input).expect("design");
    assert_eq!(outcome.design.stage_count, 15);
    assert_eq!(outcome.design.feed_stage, 8);
    let expected = (4.0 * (100.0 / 3600.0) / (std::f64::consts::PI * 0.8)).sqrt();
    assert!((outcome.design.diameter_m - expected).abs() < 1e-12);
    assert_eq!(outcome.design.tray_spacing_m, 0.6);
}

#[test]
fn partial_file_fills_remaining_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("partial.toml");
    std::fs::write(
        &path,
        r#"
[products]
distillate = 0.95
bottoms = 0.05

[equilibrium]
interpolation = "monotone_cubic"

[equilibrium.source]
kind = "relative_volatility"
alpha = 2.5

[sizing.flow]
kind = "mass"
kg_per_s = 1.6

[sizing.tray_spacing]
kind = "by_diameter"
"#,
    )
    .expect("write");

    let cfg = config::load(&path).expect("load");
    assert_eq!(cfg.feed.composition, 0.4);
    assert_eq!(cfg.products.distillate, 0.95);
    assert_eq!(cfg.equilibrium.interpolation, InterpolationMethod::MonotoneCubic);
    assert_eq!(
        cfg.equilibrium.source,
        EquilibriumSource::RelativeVolatility {
            alpha: 2.5,
            samples: 21
        }
    );
    assert_eq!(cfg.sizing.flow, VaporFlow::Mass { kg_per_s: 1.6 });
    assert_eq!(cfg.sizing.tray_spacing, TraySpacing::ByDiameter);

    let input = cfg.design_input().expect("input");
    assert_eq!(input.equilibrium.len(), 21);
    // 1.6 kg/s / 2.0 kg/m³ = 0.8 m³/s, 0.8 m/s -> 1 m²
    let outcome = design_column(&input).expect("design");
    let expected = (4.0 / std::f64::consts::PI).sqrt();
    assert!((outcome.design.diameter_m - expected).abs() < 1e-12);
    assert_eq!(outcome.design.tray_spacing_m, 0.60);
}

#[test]
fn malformed_file_reports_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[feed]\ncomposition = \"high\"\n").expect("write");
    let err = config::load(&path).unwrap_err();
    assert!(matches!(err, config::ConfigError::Parse(_)), "{err}");
}

#[test]
fn command_line_overrides_file_values() {
    let cli = Cli::parse_from([
        "mccabe_thiele_toolbox",
        "--feed",
        "0.45",
        "--distillate",
        "0.95",
        "--bottoms",
        "0.05",
        "--q",
        "0.5",
        "--reflux-multiplier",
        "1.5",
        "--max-stages",
        "40",
        "--interpolation",
        "monotone-cubic",
        "--relative-volatility",
        "3.0",
    ]);
    let mut cfg = Config::default();
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.feed.composition, 0.45);
    assert_eq!(cfg.feed.thermal_condition, 0.5);
    assert_eq!(cfg.products.distillate, 0.95);
    assert_eq!(cfg.products.bottoms, 0.05);
    assert_eq!(cfg.reflux.multiplier, 1.5);
    assert_eq!(cfg.stepping.max_stages, 40);
    assert_eq!(cfg.equilibrium.interpolation, InterpolationMethod::MonotoneCubic);
    assert_eq!(
        cfg.equilibrium.source,
        EquilibriumSource::RelativeVolatility {
            alpha: 3.0,
            samples: 21
        }
    );
    assert!(Cli::try_parse_from(["mccabe_thiele_toolbox", "--interpolation", "linear"]).is_err());
}

#[test]
fn report_lists_every_stage() {
    let input = Config::default().design_input().expect("input");
    let outcome = design_column(&input).expect("design");
    let mut buf = Vec::new();
    report::write_summary(&mut buf, &outcome).expect("summary");
    report::write_stages(&mut buf, &outcome).expect("stages");
    let text = String::from_utf8(buf).expect("utf8");
    assert!(text.contains("이론 단수: 15"));
    assert!(text.contains("공급단: 8"));
    assert_eq!(text.matches("(공급단)").count(), 1);
    assert_eq!(text.matches("탈거부\n").count() + text.matches("탈거부 (공급단)").count(), 8);
}
