//! Integration tests for CLI argument parsing and command output.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use numtext_cli::cli::Cli;
use numtext_cli::commands::run_command;
use numtext_cli::config::load_config;
use numtext_core::FormatConfig;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("numtext").chain(args.iter().copied()))
        .expect("parse arguments");
    let config = load_config(cli.config.as_deref())?;
    run_command(&cli.command, &config)
}

fn unique_temp_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "numtext-{}-{}-{}.json",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn comma_groups_digits() {
    insta::assert_snapshot!(run(&["comma", "1000000.123"]).unwrap(), @"1,000,000.123");
    insta::assert_snapshot!(run(&["comma", "-1234567"]).unwrap(), @"-1,234,567");
    insta::assert_snapshot!(
        run(&["comma", "99999", "--minimum", "100000"]).unwrap(),
        @"99999"
    );
    insta::assert_snapshot!(
        run(&["comma", "1234567,5", "--separator", ".", "--decimal", ","]).unwrap(),
        @"1.234.567,5"
    );
}

#[test]
fn abbreviate_and_parse() {
    insta::assert_snapshot!(run(&["abbreviate", "1500000"]).unwrap(), @"1.5M");
    insta::assert_snapshot!(run(&["abbreviate", "999"]).unwrap(), @"999");
    insta::assert_snapshot!(run(&["abbreviate", "1e18"]).unwrap(), @"1Qt");
    insta::assert_snapshot!(
        run(&["abbreviate", "250", "--threshold", "100"]).unwrap(),
        @"250"
    );
    insta::assert_snapshot!(
        run(&["abbreviate", "3000000", "--suffixes", "k,mn,bn"]).unwrap(),
        @"3mn"
    );
    insta::assert_snapshot!(run(&["parse", "1.5m"]).unwrap(), @"1500000");
    insta::assert_snapshot!(run(&["parse", "1,000K"]).unwrap(), @"1000000");
}

#[test]
fn parse_errors_name_the_input() {
    let err = run(&["parse", "1l"]).unwrap_err();
    assert_eq!(
        format!("{err:#}"),
        r#"parse "1l": invalid suffix "l" in suffixed number "1l""#
    );

    let err = run(&["parse", "1.5M", "--suffixes", "K,K"]).unwrap_err();
    assert!(format!("{err:#}").contains("listed more than once"));
}

#[test]
fn durations() {
    insta::assert_snapshot!(run(&["seconds", "1d", "2h", "3m", "2s"]).unwrap(), @"93782");
    insta::assert_snapshot!(run(&["seconds", "2 minutes 30s"]).unwrap(), @"150");
    insta::assert_snapshot!(run(&["remaining", "3910"]).unwrap(), @"1h 5m 10s");
    insta::assert_snapshot!(run(&["clock", "3910"]).unwrap(), @"01:05:10");
    insta::assert_snapshot!(run(&["clock", "360000"]).unwrap(), @"100:00:00");

    let err = run(&["seconds", "3", "fortnights"]).unwrap_err();
    assert!(format!("{err:#}").contains(r#"unknown time unit "fortnights""#));
}

#[test]
fn suffix_table_lists_every_tier() {
    let output = run(&["suffixes", "--suffixes", "K,M"]).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    // Border, header, separator, two rows, border.
    assert_eq!(lines.len(), 6);
    assert!(lines[1].contains("Tier") && lines[1].contains("Multiplier"));
    assert!(lines[3].contains('K') && lines[3].contains("10^3"));
    assert!(lines[4].contains('M') && lines[4].contains("10^6"));

    let output = run(&["suffixes"]).unwrap();
    assert!(output.contains("Utg") && output.contains("10^99"));
}

#[test]
fn units_table_groups_seconds() {
    let output = run(&["units"]).unwrap();
    assert!(output.contains("weeks"));
    assert!(output.contains("604,800"));
    assert!(output.contains("86,400"));
}

#[test]
fn config_file_supplies_defaults() {
    let path = unique_temp_file("config");
    let config = serde_json::json!({
        "grouping": { "separator": " " },
        "abbreviate": { "threshold": 1000000.0 },
        "remaining": { "minutes": "%d min", "seconds": "%d sec" },
        "suffixes": ["k", "mn", "bn"]
    });
    fs::write(&path, config.to_string()).unwrap();
    let path_arg = path.to_str().unwrap();

    insta::assert_snapshot!(
        run(&["comma", "1234567", "--config", path_arg]).unwrap(),
        @"1 234 567"
    );
    insta::assert_snapshot!(
        run(&["abbreviate", "5000", "--config", path_arg]).unwrap(),
        @"5 000"
    );
    insta::assert_snapshot!(
        run(&["parse", "1 500 000", "--config", path_arg]).unwrap(),
        @"1500000"
    );
    insta::assert_snapshot!(
        run(&["abbreviate", "7000000000", "--config", path_arg]).unwrap(),
        @"7bn"
    );
    insta::assert_snapshot!(
        run(&["remaining", "150", "--config", path_arg]).unwrap(),
        @"2 min 30 sec"
    );
    // Flags win over the file.
    insta::assert_snapshot!(
        run(&["comma", "1234567", "--config", path_arg, "--separator", "_"]).unwrap(),
        @"1_234_567"
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn abbreviate_section_can_override_grouping() {
    let path = unique_temp_file("override");
    let config = serde_json::json!({
        "grouping": { "separator": ".", "decimal": "," },
        "abbreviate": { "grouping": { "separator": "_" } }
    });
    fs::write(&path, config.to_string()).unwrap();
    let path_arg = path.to_str().unwrap();

    insta::assert_snapshot!(
        run(&["abbreviate", "999.5", "--threshold", "10000", "--config", path_arg]).unwrap(),
        @"999.5"
    );
    insta::assert_snapshot!(
        run(&["abbreviate", "2500", "--threshold", "10000", "--config", path_arg]).unwrap(),
        @"2_500"
    );
    insta::assert_snapshot!(
        run(&["parse", "1.234,5K", "--config", path_arg]).unwrap(),
        @"1234500"
    );

    fs::remove_file(&path).unwrap();
}

#[test]
fn logging_flags_parse() {
    let cli = Cli::try_parse_from([
        "numtext",
        "clock",
        "5",
        "--log-timestamps",
        "--log-format",
        "compact",
    ])
    .unwrap();
    assert!(cli.log_timestamps);
    assert!(cli.log_file.is_none());

    let cli = Cli::try_parse_from(["numtext", "clock", "5"]).unwrap();
    assert!(!cli.log_timestamps);
}

#[test]
fn malformed_config_is_reported() {
    let path = unique_temp_file("broken");
    fs::write(&path, "{ not json").unwrap();
    let err = load_config(Some(path.as_path())).unwrap_err();
    assert!(err.to_string().starts_with("parse config"));
    fs::remove_file(&path).unwrap();

    assert_eq!(load_config(None).unwrap(), FormatConfig::default());
}
