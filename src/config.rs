use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for chalkboard
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChalkboardConfig {
    /// Catalog presentation settings
    pub catalog: CatalogConfig,
    /// Publication lifecycle settings
    pub publication: PublicationConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Language assumed for items hydrated without one
    pub default_language: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublicationConfig {
    /// How often the external scheduler is expected to sweep for due
    /// items, in seconds
    pub sweep_interval_seconds: u64,
    /// Default lead time offered by scheduling UIs, in minutes
    pub default_schedule_lead_minutes: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Enable structured tracing output
    pub tracing_enabled: bool,
    /// Log level
    pub log_level: String,
}

impl Default for ChalkboardConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                default_language: "en".to_string(),
            },
            publication: PublicationConfig {
                sweep_interval_seconds: 60,
                default_schedule_lead_minutes: 1,
            },
            observability: ObservabilityConfig {
                tracing_enabled: true,
                log_level: "info".to_string(),
            },
        }
    }
}

impl ChalkboardConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (chalkboard.toml, .chalkboard-rc)
    /// 3. Environment variables (prefixed with CHALKBOARD_)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&ChalkboardConfig::default())?;
        let mut builder = Config::builder().add_source(defaults);

        if Path::new("chalkboard.toml").exists() {
            builder = builder.add_source(File::with_name("chalkboard"));
        }

        if Path::new(".chalkboard-rc").exists() {
            builder = builder.add_source(File::with_name(".chalkboard-rc"));
        }

        builder = builder.add_source(
            Environment::with_prefix("CHALKBOARD")
                .separator("_")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load from a specific file over the defaults, ignoring environment.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let defaults = Config::try_from(&ChalkboardConfig::default())?;
        let config = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path.as_ref()))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<ChalkboardConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = ChalkboardConfig::load_env_file();
        ChalkboardConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static ChalkboardConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize configuration (called at startup)
pub fn init_config() -> Result<()> {
    let _config = config()?;
    tracing::info!("Configuration loaded successfully");
    Ok(())
}
