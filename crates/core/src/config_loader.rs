use crate::config::AppConfig;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use std::path::Path;

pub struct ConfigLoader;

impl ConfigLoader {
    fn base(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default())).merge(Toml::file(path))
    }

    /// Loads configuration by merging defaults, `config/Config.toml`,
    /// `PROMO_`-prefixed environment variables and `config/Config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(Path::new("config/Config.toml"))
    }

    /// Same as [`ConfigLoader::load`] with an explicit TOML path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<AppConfig> {
        let config: AppConfig = Self::base(path)
            .merge(Env::prefixed("PROMO_").split("__"))
            .join(Json::file("config/Config.json"))
            .extract()?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads configuration with a profile overlay (`config/Config.{profile}.toml`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_with_profile(profile: &str) -> Result<AppConfig> {
        Self::load_profile_from(Path::new("config/Config.toml"), profile)
    }

    /// Same as [`ConfigLoader::load_with_profile`] with an explicit base TOML
    /// path. The overlay `Config.{profile}.toml` is looked up next to it.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration files cannot be read or parsed.
    pub fn load_profile_from(path: &Path, profile: &str) -> Result<AppConfig> {
        let overlay = path.with_file_name(format!("Config.{profile}.toml"));
        let config: AppConfig = Self::base(path)
            .merge(Toml::file(&overlay))
            .merge(Env::prefixed("PROMO_").split("__"))
            .join(Json::file("config/Config.json"))
            .extract()?;

        tracing::debug!(
            "Loaded configuration from {} with overlay {}",
            path.display(),
            overlay.display()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_toml_and_env_layering() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/Config.toml",
                r#"
                [data]
                sales_path = "exports/sales.csv"
                promotions_path = "exports/promos.csv"

                [report]
                growth_clip_pct = 50
                top_n = 3
                output_format = "text"
                "#,
            )?;
            jail.set_env("PROMO_REPORT__OUTPUT_FORMAT", "json");

            let config = ConfigLoader::load().expect("config should load");
            assert_eq!(config.data.sales_path.to_str(), Some("exports/sales.csv"));
            assert_eq!(config.report.growth_clip_pct, 50);
            assert_eq!(config.report.output_format, OutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = ConfigLoader::load().expect("defaults should load");
            assert_eq!(config.report.top_n, 5);
            Ok(())
        });
    }

    #[test]
    fn test_profile_overlay() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/Config.toml",
                r#"
                [report]
                growth_clip_pct = 100
                top_n = 5
                output_format = "text"
                "#,
            )?;
            jail.create_file(
                "config/Config.audit.toml",
                r#"
                [report]
                top_n = 20
                "#,
            )?;

            let config = ConfigLoader::load_with_profile("audit").expect("profile should load");
            assert_eq!(config.report.top_n, 20);
            assert_eq!(config.report.growth_clip_pct, 100);
            Ok(())
        });
    }
}
