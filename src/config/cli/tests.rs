//! Tests for CLI argument parsing and overrides

use super::*;
use crate::config::EnergySpec;
use crate::error::Error;
use crate::model::Precision;
use crate::report::ChartBackend;
use crate::sweep::SweepSpec;
use std::path::PathBuf;

#[test]
fn test_parse_generate_defaults() {
    let cli = parse_args(["energia", "generate"]).unwrap();
    match cli.command {
        Command::Generate(args) => {
            assert_eq!(args.config, None);
            assert_eq!(args.sweep, SweepArgs::default());
            assert_eq!(args.output, None);
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("Expected Generate command"),
    }
    assert!(!cli.verbose);
    assert!(!cli.quiet);
}

#[test]
fn test_parse_generate_with_range() {
    let cli = parse_args([
        "energia", "generate", "--start", "8", "--stop", "64", "--step", "8", "--output", "out.csv",
    ])
    .unwrap();
    match cli.command {
        Command::Generate(args) => {
            assert_eq!(args.sweep.start, Some(8));
            assert_eq!(args.sweep.stop, Some(64));
            assert_eq!(args.sweep.step, Some(8));
            assert_eq!(args.output, Some(PathBuf::from("out.csv")));
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_batch_sizes_conflict_with_range() {
    assert!(parse_args(["energia", "generate", "--batch-sizes", "1,2", "--start", "1"]).is_err());
}

#[test]
fn test_parse_report() {
    let cli = parse_args([
        "energia", "report", "data.csv", "--charts", "sparkline", "--width", "100", "-f", "json",
    ])
    .unwrap();
    match cli.command {
        Command::Report(args) => {
            assert_eq!(args.data, PathBuf::from("data.csv"));
            assert_eq!(args.charts.charts, Some(ChartBackend::Sparkline));
            assert_eq!(args.charts.width, Some(100));
            assert_eq!(args.charts.height, None);
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn test_report_default_data_path() {
    let cli = parse_args(["energia", "report"]).unwrap();
    match cli.command {
        Command::Report(args) => assert_eq!(args.data, PathBuf::from("ai_energy_data.csv")),
        _ => panic!("Expected Report command"),
    }
}

#[test]
fn test_report_rejects_unknown_backend() {
    assert!(parse_args(["energia", "report", "--charts", "bars"]).is_err());
}

#[test]
fn test_parse_run() {
    let cli = parse_args(["energia", "-q", "run", "--config", "e.yaml", "--charts", "none"]).unwrap();
    assert!(cli.quiet);
    match cli.command {
        Command::Run(args) => {
            assert_eq!(args.config, Some(PathBuf::from("e.yaml")));
            assert_eq!(args.charts.charts, Some(ChartBackend::None));
        }
        _ => panic!("Expected Run command"),
    }
}

#[test]
fn test_parse_optimize() {
    let cli = parse_args(["energia", "optimize", "--precision", "fp16", "--max", "512"]).unwrap();
    match cli.command {
        Command::Optimize(args) => {
            assert_eq!(args.precision, Precision::Fp16);
            assert_eq!(args.min, 1);
            assert_eq!(args.max, 512);
        }
        _ => panic!("Expected Optimize command"),
    }
}

#[test]
fn test_optimize_requires_precision() {
    assert!(parse_args(["energia", "optimize"]).is_err());
    assert!(parse_args(["energia", "optimize", "--precision", "int4"]).is_err());
}

#[test]
fn test_parse_validate_detailed() {
    let cli = parse_args(["energia", "validate", "e.yaml", "--detailed"]).unwrap();
    match cli.command {
        Command::Validate(args) => {
            assert_eq!(args.config, PathBuf::from("e.yaml"));
            assert!(args.detailed);
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn test_parse_info_yaml() {
    let cli = parse_args(["energia", "--verbose", "info", "e.yaml", "--format", "yaml"]).unwrap();
    assert!(cli.verbose);
    match cli.command {
        Command::Info(args) => assert_eq!(args.format, OutputFormat::Yaml),
        _ => panic!("Expected Info command"),
    }
}

#[test]
fn test_parse_init() {
    let cli = parse_args(["energia", "init", "--force"]).unwrap();
    match cli.command {
        Command::Init(args) => {
            assert_eq!(args.output, PathBuf::from("energia.yaml"));
            assert!(args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn test_missing_subcommand() {
    assert!(parse_args(["energia"]).is_err());
}

#[test]
fn test_overrides_batch_list() {
    let mut spec = EnergySpec::default();
    let sweep = SweepArgs { batch_sizes: Some("1, 4,16".to_string()), ..Default::default() };
    apply_overrides(&mut spec, &sweep, None).unwrap();
    assert_eq!(spec.sweep, SweepSpec::List(vec![1, 4, 16]));
}

#[test]
fn test_overrides_bad_batch_list() {
    let mut spec = EnergySpec::default();
    let sweep = SweepArgs { batch_sizes: Some("1,x".to_string()), ..Default::default() };
    assert!(apply_overrides(&mut spec, &sweep, None).is_err());
}

#[test]
fn test_overrides_keep_configured_range_bounds() {
    let mut spec = EnergySpec {
        sweep: SweepSpec::Range { start: 4, stop: 40, step: 4 },
        ..Default::default()
    };
    let sweep = SweepArgs { stop: Some(80), ..Default::default() };
    apply_overrides(&mut spec, &sweep, None).unwrap();
    assert_eq!(spec.sweep, SweepSpec::Range { start: 4, stop: 80, step: 4 });
}

#[test]
fn test_overrides_keep_geometric_shape() {
    let mut spec = EnergySpec {
        sweep: SweepSpec::Geometric { start: 1, stop: 1024, factor: 2 },
        ..Default::default()
    };
    let sweep = SweepArgs { stop: Some(256), ..Default::default() };
    apply_overrides(&mut spec, &sweep, None).unwrap();
    assert_eq!(spec.sweep, SweepSpec::Geometric { start: 1, stop: 256, factor: 2 });
    assert_eq!(spec.batch_sizes().unwrap().len(), 9);
}

#[test]
fn test_overrides_step_on_geometric_rejected() {
    let mut spec = EnergySpec { sweep: SweepSpec::powers_of_two(1, 128), ..Default::default() };
    let sweep = SweepArgs { step: Some(2), ..Default::default() };
    let err = apply_overrides(&mut spec, &sweep, None).unwrap_err();
    assert!(matches!(err, Error::InvalidInput { .. }));
    assert_eq!(spec.sweep, SweepSpec::powers_of_two(1, 128));
}

#[test]
fn test_overrides_bounds_on_list_rejected() {
    let mut spec = EnergySpec { sweep: SweepSpec::List(vec![1, 3, 9]), ..Default::default() };
    let sweep = SweepArgs { start: Some(2), ..Default::default() };
    assert!(matches!(apply_overrides(&mut spec, &sweep, None), Err(Error::InvalidInput { .. })));
    assert_eq!(spec.sweep, SweepSpec::List(vec![1, 3, 9]));
}

#[test]
fn test_overrides_output_path() {
    let mut spec = EnergySpec::default();
    let out = PathBuf::from("custom.csv");
    apply_overrides(&mut spec, &SweepArgs::default(), Some(&out)).unwrap();
    assert_eq!(spec.output.path, out);
    assert_eq!(spec.sweep, SweepSpec::default());
}
