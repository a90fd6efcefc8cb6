use crate::utils::error::{ProjectorError, Result};
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ProjectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ProjectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 投影欄位：至少一個、不可空白、不可重複
pub fn validate_field_list(field_name: &str, fields: &[String]) -> Result<()> {
    if fields.is_empty() {
        return Err(ProjectorError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for field in fields {
        if field.trim().is_empty() {
            return Err(ProjectorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: field.clone(),
                reason: "Field name cannot be empty or whitespace-only".to_string(),
            });
        }
        if !seen.insert(field.as_str()) {
            return Err(ProjectorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: field.clone(),
                reason: "Field is listed more than once".to_string(),
            });
        }
    }

    Ok(())
}

/// Lexical comparison only: `.` segments are dropped, `..` and symlinks are
/// not resolved.
pub fn validate_distinct_paths(input: &str, output: &str) -> Result<()> {
    if normalize(input) == normalize(output) {
        return Err(ProjectorError::ConfigError {
            message: format!("input and output both point at '{}'", input),
        });
    }
    Ok(())
}

fn normalize(path: &str) -> PathBuf {
    Path::new(path)
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
    if !LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(ProjectorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unsupported level. Valid levels: {}", LEVELS.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "recipes.json").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "   ").is_err());
        assert!(validate_path("input_path", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_field_list() {
        assert!(validate_field_list("fields", &fields(&["input", "output"])).is_ok());
        assert!(matches!(
            validate_field_list("fields", &[]),
            Err(ProjectorError::MissingConfigError { .. })
        ));
        assert!(validate_field_list("fields", &fields(&["input", " "])).is_err());
        assert!(validate_field_list("fields", &fields(&["input", "input"])).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        assert!(validate_distinct_paths("recipes.json", "data_output.json").is_ok());
        assert!(validate_distinct_paths("same.json", "same.json").is_err());
        assert!(validate_distinct_paths("recipes.json", "./recipes.json").is_err());
        assert!(validate_distinct_paths("data/./out.json", "data/out.json").is_err());
        assert!(validate_distinct_paths("data/out.json", "out.json").is_ok());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("monitoring.log_level", "debug").is_ok());
        assert!(validate_log_level("monitoring.log_level", "WARN").is_ok());
        assert!(validate_log_level("monitoring.log_level", "loud").is_err());
    }
}
