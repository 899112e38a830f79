//! Output options shared by every analysis command.

use anyhow::{Context, Result};
use clap::Args;
use promo_lift_core::{AppConfig, OutputFormat};
use promo_lift_data::CsvStorage;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (text or json); defaults to `report.output_format`
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Export the command's table to this CSV file. Commands producing several
    /// tables write `<stem>_<table>.csv` next to it.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl OutputArgs {
    #[must_use]
    pub fn resolved_format(&self, config: &AppConfig) -> OutputFormat {
        self.format.unwrap_or(config.report.output_format)
    }

    /// Prints `value` as pretty JSON or the text produced by `text`.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn print<T, F>(&self, config: &AppConfig, value: &T, text: F) -> Result<()>
    where
        T: Serialize,
        F: FnOnce() -> String,
    {
        match self.resolved_format(config) {
            OutputFormat::Text => println!("{}", text()),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(value).context("Failed to serialize output")?
            ),
        }
        Ok(())
    }

    /// Writes `rows` to the export path, if one was given.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn export<T: Serialize>(&self, rows: &[T]) -> Result<()> {
        if let Some(path) = &self.export {
            CsvStorage::write_rows(path, rows)?;
        }
        Ok(())
    }

    /// Writes `rows` to `<stem>_<table>.csv` beside the export path, if one
    /// was given.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn export_table<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<()> {
        if let Some(path) = &self.export {
            CsvStorage::write_rows(&table_path(path, table), rows)?;
        }
        Ok(())
    }
}

/// `exports/report.csv` + `lift` -> `exports/report_lift.csv`
#[must_use]
pub fn table_path(base: &Path, table: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .map_or_else(|| "export".to_string(), |s| s.to_string_lossy().into_owned());
    base.with_file_name(format!("{stem}_{table}.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_path() {
        assert_eq!(
            table_path(Path::new("exports/report.csv"), "lift"),
            PathBuf::from("exports/report_lift.csv")
        );
        assert_eq!(
            table_path(Path::new("out"), "roi"),
            PathBuf::from("out_roi.csv")
        );
    }

    #[test]
    fn test_format_falls_back_to_config() {
        let mut config = AppConfig::default();
        config.report.output_format = OutputFormat::Json;

        let args = OutputArgs::default();
        assert_eq!(args.resolved_format(&config), OutputFormat::Json);

        let args = OutputArgs {
            format: Some(OutputFormat::Text),
            export: None,
        };
        assert_eq!(args.resolved_format(&config), OutputFormat::Text);
    }
}
