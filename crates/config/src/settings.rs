//! Main settings module

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use ocrlang_core::{CandidateSet, Language};

use crate::ConfigError;

/// Main engine settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Text gating, default hints and candidate languages
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Confusion resolver switches and tuning
    #[serde(default)]
    pub resolvers: ResolverConfig,

    /// PDF intake limits
    #[serde(default)]
    pub pdf: PdfConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_detection()?;
        self.validate_resolvers()?;
        self.validate_pdf()?;
        Ok(())
    }

    fn validate_detection(&self) -> Result<(), ConfigError> {
        if self.detection.min_text_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "detection.min_text_length".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.detection.default_hint.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "detection.default_hint".to_string(),
                message: "must name at least one OCR model".to_string(),
            });
        }

        // Fails on the first unknown code
        self.detection.candidate_set()?;
        Ok(())
    }

    fn validate_resolvers(&self) -> Result<(), ConfigError> {
        let resolvers = &self.resolvers;
        if !resolvers.scandinavian_min_score.is_finite() || resolvers.scandinavian_min_score < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "resolvers.scandinavian_min_score".to_string(),
                message: format!("must be non-negative, got {}", resolvers.scandinavian_min_score),
            });
        }
        if !resolvers.scandinavian_min_margin.is_finite() || resolvers.scandinavian_min_margin < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "resolvers.scandinavian_min_margin".to_string(),
                message: format!("must be non-negative, got {}", resolvers.scandinavian_min_margin),
            });
        }
        Ok(())
    }

    fn validate_pdf(&self) -> Result<(), ConfigError> {
        let pdf = &self.pdf;
        if pdf.max_size_mb == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pdf.max_size_mb".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if pdf.max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "pdf.max_pages".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(pdf.render_scale.is_finite() && pdf.render_scale > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "pdf.render_scale".to_string(),
                message: format!("must be positive, got {}", pdf.render_scale),
            });
        }
        Ok(())
    }
}

/// Detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Shortest normalized text (in chars) sent to the statistical classifier
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,

    /// OCR hint used when detection fails in the recognize flow
    #[serde(default = "default_hint")]
    pub default_hint: String,

    /// OCR codes accepted by default; empty means every supported language
    #[serde(default)]
    pub candidates: Vec<String>,
}

impl DetectionConfig {
    /// Parse the configured candidate codes
    pub fn candidate_set(&self) -> Result<CandidateSet, ConfigError> {
        let mut languages = Vec::with_capacity(self.candidates.len());
        for code in &self.candidates {
            let lang = Language::from_code(code).ok_or_else(|| ConfigError::InvalidValue {
                field: "detection.candidates".to_string(),
                message: format!("unknown language code '{}'", code),
            })?;
            languages.push(lang);
        }
        Ok(CandidateSet::new(languages))
    }
}

fn default_min_text_length() -> usize {
    20
}
fn default_hint() -> String {
    "rus+eng".to_string()
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_text_length: default_min_text_length(),
            default_hint: default_hint(),
            candidates: Vec::new(),
        }
    }
}

/// Confusion resolver configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_true")]
    pub scandinavian: bool,

    #[serde(default = "default_true")]
    pub finnish: bool,

    #[serde(default = "default_true")]
    pub turkish: bool,

    #[serde(default = "default_true")]
    pub indonesian: bool,

    /// Lowest winning score for a Danish/Swedish/Norwegian override
    #[serde(default = "default_scandinavian_min_score")]
    pub scandinavian_min_score: f32,

    /// Required lead of the winner over the runner-up
    #[serde(default = "default_scandinavian_min_margin")]
    pub scandinavian_min_margin: f32,
}

fn default_true() -> bool {
    true
}
fn default_scandinavian_min_score() -> f32 {
    3.0
}
fn default_scandinavian_min_margin() -> f32 {
    2.0
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            scandinavian: true,
            finnish: true,
            turkish: true,
            indonesian: true,
            scandinavian_min_score: default_scandinavian_min_score(),
            scandinavian_min_margin: default_scandinavian_min_margin(),
        }
    }
}

/// PDF intake configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfConfig {
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,

    /// Only the first `max_pages` pages may be used for detection
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Rasterization scale; 2.0 renders at twice the natural size
    #[serde(default = "default_render_scale")]
    pub render_scale: f32,
}

fn default_max_size_mb() -> u64 {
    10
}
fn default_max_pages() -> usize {
    1
}
fn default_render_scale() -> f32 {
    2.0
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_size_mb: default_max_size_mb(),
            max_pages: default_max_pages(),
            render_scale: default_render_scale(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Install a global `tracing` subscriber for hosts that do not bring their own
///
/// `RUST_LOG` wins over the configured level. Fails if a global subscriber
/// is already set.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.log_level;
        format!(
            "ocrlang_detection={level},ocrlang_core={level},ocrlang_config={level}"
        )
        .into()
    });

    let fmt_layer = if config.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::Environment(e.to_string()))
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (`OCRLANG__` prefix, e.g. `OCRLANG__PDF__MAX_PAGES`)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("OCRLANG")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("detection.candidates"),
    );

    build_settings(builder)
}

fn build_settings(builder: ConfigBuilder<DefaultState>) -> Result<Settings, ConfigError> {
    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        min_text_length = settings.detection.min_text_length,
        candidates = settings.detection.candidates.len(),
        "Settings loaded"
    );

    Ok(settings)
}
