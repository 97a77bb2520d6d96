//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use hooksign_crypto::Verifier;
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; without one the standard locations are
    /// searched and defaults apply when none is found.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !Path::new(p).exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_string()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        schema.validate()?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Resolve the signing secret from the configured environment variable
    pub fn secret(&self) -> Result<String> {
        let env = &self.schema.secret.env;
        match std::env::var(env) {
            Ok(secret) if !secret.is_empty() => Ok(secret),
            _ => Err(Error::missing_secret(env)),
        }
    }

    /// Verifier using the configured scheme and tolerance
    pub fn verifier(&self) -> Verifier {
        Verifier::new()
            .scheme(self.schema.verify.scheme.clone())
            .tolerance(self.schema.verify.tolerance_secs)
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".hooksign.toml", "hooksign.toml", ".config/hooksign.toml"];

    for candidate in candidates {
        if Path::new(candidate).exists() {
            return Some(candidate.to_string());
        }
    }

    None
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path))?;

    let schema: ConfigSchema = toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path))?;

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.verify.tolerance_secs, 300);
    }

    #[test]
    fn test_config_load_explicit_file() {
        let file = write_config(
            "[verify]\ntolerance_secs = 60\nscheme = \"v2\"\n\n[secret]\nenv = \"MY_SECRET\"\n",
        );
        let path = file.path().to_str().unwrap();

        let config = Config::load(Some(path)).unwrap();
        assert_eq!(config.path.as_deref(), Some(path));
        assert_eq!(config.schema.verify.tolerance_secs, 60);
        assert_eq!(config.schema.verify.scheme, "v2");
        assert_eq!(config.schema.secret.env, "MY_SECRET");
    }

    #[test]
    fn test_config_load_missing_explicit_file() {
        let err = Config::load(Some("/nonexistent/hooksign.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let file = write_config("[verify\n");
        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_config_load_fails_validation() {
        let file = write_config("[verify]\nscheme = \"\"\n");
        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
    }

    #[test]
    fn test_secret_from_env() {
        let mut config = Config::default();
        config.schema.secret.env = "HOOKSIGN_TEST_SECRET_PRESENT".to_string();
        // SAFETY: no other test reads or writes this variable
        unsafe { std::env::set_var("HOOKSIGN_TEST_SECRET_PRESENT", "s3cret") };

        assert_eq!(config.secret().unwrap(), "s3cret");
    }

    #[test]
    fn test_secret_missing() {
        let mut config = Config::default();
        config.schema.secret.env = "HOOKSIGN_TEST_SECRET_ABSENT".to_string();

        let err = config.secret().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingSecret);
    }

    #[test]
    fn test_verifier_uses_config() {
        let mut config = Config::default();
        config.schema.verify.tolerance_secs = 10;

        let header = hooksign_crypto::generate_header("body", "k", Some(100));
        assert!(config.verifier().at(110).verify("body", header.as_str(), "k").is_ok());
        assert!(config.verifier().at(111).verify("body", header.as_str(), "k").is_err());
    }
}
