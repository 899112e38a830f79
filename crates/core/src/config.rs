use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub data: DataConfig,
    pub report: ReportConfig,
}

/// Locations of the exported tables.
///
/// Sales and promotions are required; the operational tables are optional
/// and the analyses that need them are skipped when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub sales_path: PathBuf,
    pub promotions_path: PathBuf,
    #[serde(default)]
    pub campaigns_path: Option<PathBuf>,
    #[serde(default)]
    pub inventory_path: Option<PathBuf>,
    #[serde(default)]
    pub shipments_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Month-over-month growth is clipped to `[-growth_clip_pct, growth_clip_pct]`
    pub growth_clip_pct: u32,
    /// Rows shown in "top N" tables
    pub top_n: usize,
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(anyhow::anyhow!(
                "Invalid output format: '{}'. Valid values: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig {
                sales_path: PathBuf::from("data/financial_transactions.csv"),
                promotions_path: PathBuf::from("data/promotions.csv"),
                campaigns_path: Some(PathBuf::from("data/marketing_campaigns.csv")),
                inventory_path: Some(PathBuf::from("data/inventory.csv")),
                shipments_path: Some(PathBuf::from("data/logistics_and_shipping.csv")),
            },
            report: ReportConfig {
                growth_clip_pct: 100,
                top_n: 5,
                output_format: OutputFormat::Text,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_default_config_serializes() {
        let json = serde_json::to_value(AppConfig::default()).unwrap();
        assert_eq!(json["report"]["output_format"], "text");
        assert_eq!(json["report"]["growth_clip_pct"], 100);
    }
}
