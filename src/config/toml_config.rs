use crate::core::projection::default_fields;
use crate::core::ConfigProvider;
use crate::utils::error::{ProjectorError, Result};
use crate::utils::validation::{
    validate_distinct_paths, validate_field_list, validate_log_level, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectorConfig {
    #[serde(default)]
    pub projection: ProjectionSection,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSection {
    #[serde(default = "default_input_path")]
    pub input_path: String,
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

fn default_input_path() -> String {
    "recipes.json".to_string()
}

fn default_output_path() -> String {
    "data_output.json".to_string()
}

impl Default for ProjectionSection {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            fields: default_fields(),
        }
    }
}

impl ProjectorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ProjectorError::io(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ProjectorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ProjectorError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for ProjectorConfig {
    fn input_path(&self) -> &str {
        &self.projection.input_path
    }

    fn output_path(&self) -> &str {
        &self.projection.output_path
    }

    fn fields(&self) -> &[String] {
        &self.projection.fields
    }
}

impl Validate for ProjectorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("projection.input_path", &self.projection.input_path)?;
        validate_path("projection.output_path", &self.projection.output_path)?;
        validate_distinct_paths(&self.projection.input_path, &self.projection.output_path)?;
        validate_field_list("projection.fields", &self.projection.fields)?;

        if let Some(level) = self.log_level() {
            validate_log_level("monitoring.log_level", level)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ProjectorConfig::from_toml_str("").unwrap();

        assert_eq!(config.input_path(), "recipes.json");
        assert_eq!(config.output_path(), "data_output.json");
        assert_eq!(config.fields(), ["input", "output"]);
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[projection]
input_path = "data/recipes.json"
output_path = "out/pairs.json"
fields = ["input", "output", "id"]

[monitoring]
enabled = true
log_level = "debug"
"#;

        let config = ProjectorConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/recipes.json");
        assert_eq!(config.output_path(), "out/pairs.json");
        assert_eq!(config.fields(), ["input", "output", "id"]);
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RECIPE_PROJECTOR_TEST_DIR", "/srv/recipes");

        let toml_content = r#"
[projection]
input_path = "${RECIPE_PROJECTOR_TEST_DIR}/recipes.json"
output_path = "${RECIPE_PROJECTOR_UNSET_VAR}/out.json"
"#;

        let config = ProjectorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "/srv/recipes/recipes.json");
        assert_eq!(config.output_path(), "${RECIPE_PROJECTOR_UNSET_VAR}/out.json");

        std::env::remove_var("RECIPE_PROJECTOR_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let empty_fields = ProjectorConfig::from_toml_str("[projection]\nfields = []\n").unwrap();
        assert!(empty_fields.validate().is_err());

        let bad_level =
            ProjectorConfig::from_toml_str("[monitoring]\nenabled = false\nlog_level = \"loud\"\n")
                .unwrap();
        assert!(bad_level.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ProjectorConfig::from_toml_str("[projection\n").unwrap_err();
        assert!(matches!(err, ProjectorError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[projection]\ninput_path = \"from-file.json\"\n")
            .unwrap();

        let config = ProjectorConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_path(), "from-file.json");
        assert_eq!(config.output_path(), "data_output.json");
    }
}
