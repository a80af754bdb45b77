use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use tracing::{debug, info, info_span};

use numtext_core::duration::TIME_UNITS;
use numtext_core::{
    FormatConfig, GroupingOptions, SuffixTable, abbreviate, comma_format, normalize_grouping,
    parse_abbreviated, to_long_remaining_time, to_remaining_time, to_seconds,
};

use crate::cli::{
    AbbreviateArgs, ClockArgs, CommaArgs, Command, ParseArgs, RemainingArgs, SecondsArgs,
    SuffixesArgs,
};
use crate::config::resolve_suffixes;

/// Run `command` and return the text to print on stdout.
pub fn run_command(command: &Command, config: &FormatConfig) -> Result<String> {
    let _span = info_span!("command", name = command.name()).entered();
    let output = match command {
        Command::Comma(args) => Ok(run_comma(args, config)),
        Command::Abbreviate(args) => run_abbreviate(args, config),
        Command::Parse(args) => run_parse(args, config),
        Command::Seconds(args) => run_seconds(args),
        Command::Remaining(args) => Ok(run_remaining(args, config)),
        Command::Clock(args) => Ok(run_clock(args)),
        Command::Suffixes(args) => run_suffixes(args, config),
        Command::Units => Ok(run_units()),
    }?;
    info!(output_len = output.len(), "command finished");
    Ok(output)
}

pub fn run_comma(args: &CommaArgs, config: &FormatConfig) -> String {
    let mut options = config.grouping.clone();
    if let Some(minimum) = args.minimum {
        options.minimum = Some(minimum);
    }
    if let Some(separator) = &args.separator {
        options.separator.clone_from(separator);
    }
    if let Some(decimal) = args.decimal {
        options.decimal = decimal;
    }
    debug!(?options, "grouping");
    comma_format(args.value.trim(), &options)
}

pub fn run_abbreviate(args: &AbbreviateArgs, config: &FormatConfig) -> Result<String> {
    let suffixes = resolve_suffixes(config, args.suffixes.as_deref())?;
    let mut options = config.abbreviate_options();
    if let Some(threshold) = args.threshold {
        options.threshold = threshold;
    }
    debug!(threshold = options.threshold, tiers = suffixes.len(), "abbreviating");
    Ok(abbreviate(args.value, &options, &suffixes))
}

pub fn run_parse(args: &ParseArgs, config: &FormatConfig) -> Result<String> {
    let suffixes = resolve_suffixes(config, args.suffixes.as_deref())?;
    let text = normalize_grouping(&args.text, &config.grouping);
    let value = parse_abbreviated(&text, &suffixes)
        .with_context(|| format!("parse {:?}", args.text))?;
    Ok(value.to_string())
}

pub fn run_seconds(args: &SecondsArgs) -> Result<String> {
    let text = args.text.join(" ");
    let seconds = to_seconds(&text).with_context(|| format!("parse duration {text:?}"))?;
    Ok(seconds.to_string())
}

pub fn run_remaining(args: &RemainingArgs, config: &FormatConfig) -> String {
    let mut format = config.remaining.clone();
    let overrides = [
        (&args.seconds_format, &mut format.seconds),
        (&args.minutes_format, &mut format.minutes),
        (&args.hours_format, &mut format.hours),
        (&args.days_format, &mut format.days),
    ];
    for (flag, template) in overrides {
        if let Some(flag) = flag {
            template.clone_from(flag);
        }
    }
    to_remaining_time(args.seconds, &format)
}

pub fn run_clock(args: &ClockArgs) -> String {
    to_long_remaining_time(args.seconds)
}

pub fn run_suffixes(args: &SuffixesArgs, config: &FormatConfig) -> Result<String> {
    let suffixes = resolve_suffixes(config, args.suffixes.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Tier", "Tag", "Multiplier"]);
    apply_table_style(&mut table);
    for row in suffix_rows(&suffixes) {
        table.add_row(row.to_vec());
    }
    align_right(&mut table, 0);
    Ok(table.to_string())
}

pub fn run_units() -> String {
    let mut table = Table::new();
    table.set_header(vec!["Unit", "Seconds"]);
    apply_table_style(&mut table);
    for row in unit_rows() {
        table.add_row(row.to_vec());
    }
    align_right(&mut table, 1);
    table.to_string()
}

/// Tier number, tag and power-of-ten multiplier for each suffix.
pub fn suffix_rows(suffixes: &SuffixTable) -> Vec<[String; 3]> {
    suffixes
        .iter()
        .enumerate()
        .map(|(index, tag)| {
            [
                (index + 1).to_string(),
                tag.to_string(),
                format!("10^{}", 3 * (index + 1)),
            ]
        })
        .collect()
}

/// Unit literal and its grouped length in seconds.
pub fn unit_rows() -> Vec<[String; 2]> {
    let grouping = GroupingOptions::default();
    TIME_UNITS
        .iter()
        .map(|(literal, seconds)| {
            [
                (*literal).to_string(),
                comma_format(&seconds.to_string(), &grouping),
            ]
        })
        .collect()
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_right(table: &mut Table, index: usize) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_rows() {
        let rows = suffix_rows(SuffixTable::default_table());
        assert_eq!(rows.len(), 33);
        assert_eq!(rows[0], ["1", "K", "10^3"].map(String::from));
        assert_eq!(rows[32], ["33", "G", "10^99"].map(String::from));
    }

    #[test]
    fn test_unit_rows() {
        let rows = unit_rows();
        assert_eq!(rows.len(), TIME_UNITS.len());
        assert!(rows.contains(&["weeks", "604,800"].map(String::from)));
        assert!(rows.contains(&["s", "1"].map(String::from)));
    }

    #[test]
    fn test_remaining_overrides() {
        let args = RemainingArgs {
            seconds: 3910,
            hours_format: Some("%d hours".to_string()),
            ..RemainingArgs::default()
        };
        assert_eq!(run_remaining(&args, &FormatConfig::default()), "1 hours 5m 10s");
    }
}
