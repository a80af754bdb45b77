//! Loading formatter configuration for the CLI.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use numtext_core::{FormatConfig, SuffixTable};

/// Load a [`FormatConfig`] from a JSON file, or the defaults when `path` is `None`.
pub fn load_config(path: Option<&Path>) -> Result<FormatConfig> {
    let Some(path) = path else {
        return Ok(FormatConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: FormatConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse config {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Suffix table from `override_tags`, else the config's tags, else the built-in table.
pub fn resolve_suffixes(
    config: &FormatConfig,
    override_tags: Option<&[String]>,
) -> Result<SuffixTable> {
    let tags = override_tags.or(config.suffixes.as_deref());
    match tags {
        Some(tags) => SuffixTable::new(tags.iter().map(|tag| tag.trim().to_string()))
            .context("build suffix table"),
        None => Ok(SuffixTable::default_table().clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), FormatConfig::default());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = load_config(Some(Path::new("/nonexistent/numtext.json"))).unwrap_err();
        assert!(err.to_string().starts_with("read config"));
    }

    #[test]
    fn test_suffix_precedence() {
        let config = FormatConfig {
            suffixes: Some(vec!["k".to_string(), "mn".to_string()]),
            ..FormatConfig::default()
        };
        let from_config = resolve_suffixes(&config, None).unwrap();
        assert_eq!(from_config.tags(), ["k", "mn"]);

        let tags = vec!["K".to_string(), " M ".to_string(), "G".to_string()];
        let from_flag = resolve_suffixes(&config, Some(&tags)).unwrap();
        assert_eq!(from_flag.tags(), ["K", "M", "G"]);

        let default = resolve_suffixes(&FormatConfig::default(), None).unwrap();
        assert_eq!(default.len(), 33);
    }

    #[test]
    fn test_invalid_suffixes() {
        let tags = vec!["K".to_string(), "k".to_string()];
        let err = resolve_suffixes(&FormatConfig::default(), Some(&tags)).unwrap_err();
        assert_eq!(err.to_string(), "build suffix table");
    }
}
