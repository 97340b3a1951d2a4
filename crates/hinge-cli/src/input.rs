//! Input sourcing for every command.
//!
//! Values come from the command line, a file, or stdin. Text input is split
//! on whitespace and commas; input starting with `[` is read as a JSON array
//! whose elements may be numbers, numeric strings, or anything else (dropped
//! during ingestion).

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Args;
use hinge_stats::StatsEngine;
use serde_json::Value;

#[derive(Default, Debug, Clone, Args)]
pub(crate) struct InputArg {
    /// Values to analyze; entries that are not numbers are ignored
    #[arg(allow_negative_numbers = true, value_delimiter = ',')]
    pub values: Vec<String>,

    /// Read values from this file instead ("-" for stdin)
    #[arg(long, short, conflicts_with = "values")]
    pub input: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Write results to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl InputArg {
    /// Collects the raw input tokens, before any numeric filtering.
    pub(crate) fn read_tokens(&self) -> anyhow::Result<Vec<String>> {
        if !self.values.is_empty() {
            return Ok(self.values.clone());
        }
        let text = match &self.input {
            Some(path) if path != Path::new("-") => fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?,
            _ => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read values from stdin")?;
                text
            }
        };
        parse_tokens(&text)
    }

    /// Reads the input and builds an engine over its numeric values.
    pub(crate) fn load(&self) -> anyhow::Result<StatsEngine> {
        let tokens = self.read_tokens()?;
        let engine = StatsEngine::new(&tokens).context("No numeric values in input")?;
        let ignored = tokens.len() - engine.count();
        if ignored > 0 {
            eprintln!("Ignored {ignored} non-numeric value(s)");
        }
        Ok(engine)
    }
}

pub(crate) fn parse_tokens(text: &str) -> anyhow::Result<Vec<String>> {
    let text = text.trim();
    if text.starts_with('[') {
        let values = serde_json::from_str::<Vec<Value>>(text)
            .context("Failed to parse input as a JSON array")?;
        return Ok(values.into_iter().map(json_token).collect());
    }
    Ok(text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect())
}

fn json_token(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let tokens = parse_tokens(" 4 7,1\n9\t5 ,, ").unwrap();
        assert_eq!(tokens, ["4", "7", "1", "9", "5"]);
    }

    #[test]
    fn test_parse_json_array() {
        let tokens = parse_tokens(r#"[6, "47", null, true, 4.5, "abc", [1]]"#).unwrap();
        assert_eq!(tokens, ["6", "47", "null", "true", "4.5", "abc", "[1]"]);

        let engine = StatsEngine::new(&tokens).unwrap();
        assert_eq!(engine.sample().values(), &[6.0, 47.0, 4.5]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(parse_tokens("[1, 2").is_err());
    }

    #[test]
    fn test_load_from_values() {
        let arg = InputArg {
            values: vec!["8".into(), "x".into(), "12".into()],
            ..InputArg::default()
        };
        let engine = arg.load().unwrap();
        assert_eq!(engine.count(), 2);
        assert_eq!(engine.mean(), 10.0);
    }

    #[test]
    fn test_load_without_numbers_fails() {
        let arg = InputArg {
            values: vec!["a".into(), "b".into()],
            ..InputArg::default()
        };
        let err = arg.load().unwrap_err();
        assert_eq!(err.to_string(), "No numeric values in input");
    }
}
