//! Configuration module

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_include_static")]
    pub include_static: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            include_static: default_include_static(),
        }
    }
}

fn default_include_static() -> bool {
    true
}

fn default_log_filter() -> String {
    "wpspin=warn".to_string()
}

impl Config {
    /// Load from `config/wpspin.*` (optional) and `WPSPIN__*` environment variables.
    pub fn load() -> Self {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/wpspin").required(false))
            .add_source(config::Environment::with_prefix("WPSPIN").separator("__"))
            .build();

        match settings.and_then(|s| s.try_deserialize::<Config>()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default configuration: {}", e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.include_static);
        assert_eq!(config.log_filter, "wpspin=warn");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config =
            serde_json::from_str(r#"{ "output": { "format": "json" } }"#).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.include_static);
        assert_eq!(config.log_filter, "wpspin=warn");
    }

    #[test]
    fn test_deserialize_from_config_source() {
        let settings = config::Config::builder()
            .set_override("output.include_static", false)
            .unwrap()
            .build()
            .unwrap();
        let config: Config = settings.try_deserialize().unwrap();
        assert!(!config.output.include_static);
        assert_eq!(config.output.format, OutputFormat::Text);
    }
}
