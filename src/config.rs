use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::charsets;
use crate::errors::RandomError;
use crate::param::{FileInfo, coerce_file_reference, coerce_string_list};

pub const DEFAULT_STRING_LENGTH: i64 = 16;
pub const DEFAULT_TOKEN_LENGTH: i64 = 32;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    string_length: Option<i64>,
    token_length: Option<i64>,
    charset: Option<Value>,
    preset: Option<String>,
    output: Option<Value>,
}

/// Defaults for the command line, read from `config.json`.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub string_length: i64,
    pub token_length: i64,
    pub charset: Option<String>,
    pub output: Option<FileInfo>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            string_length: DEFAULT_STRING_LENGTH,
            token_length: DEFAULT_TOKEN_LENGTH,
            charset: None,
            output: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("randkit").join("config.json"))
    }

    /// Loads `path`, or the default location when `None`.
    ///
    /// An explicit path must exist. A missing file at the default location
    /// yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, RandomError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::default_path() {
                Some(p) => (p, false),
                None => return Ok(Self::default()),
            },
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound && !explicit => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), "loading config file");
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, RandomError> {
        let file: ConfigFile =
            serde_json::from_str(text).map_err(|e| RandomError::Config(e.to_string()))?;

        let charset = match (&file.charset, &file.preset) {
            (Some(value), _) => Some(coerce_string_list(value)?.concat()),
            (None, Some(name)) => Some(
                charsets::preset(name)
                    .ok_or_else(|| RandomError::Config(format!("unknown preset: {}", name)))?
                    .to_string(),
            ),
            (None, None) => None,
        };

        let output = file.output.as_ref().map(coerce_file_reference).transpose()?;

        Ok(Self {
            string_length: file.string_length.unwrap_or(DEFAULT_STRING_LENGTH),
            token_length: file.token_length.unwrap_or(DEFAULT_TOKEN_LENGTH),
            charset,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn charset_list_is_concatenated() {
        let config =
            Config::from_json(r#"{ "charset": ["abc", "XYZ"], "string_length": 8 }"#).unwrap();
        assert_eq!(config.charset.as_deref(), Some("abcXYZ"));
        assert_eq!(config.string_length, 8);
        assert_eq!(config.token_length, DEFAULT_TOKEN_LENGTH);
    }

    #[test]
    fn charset_wins_over_preset() {
        let config = Config::from_json(r#"{ "charset": "01", "preset": "hex" }"#).unwrap();
        assert_eq!(config.charset.as_deref(), Some("01"));

        let config = Config::from_json(r#"{ "preset": "numeric" }"#).unwrap();
        assert_eq!(config.charset.as_deref(), Some(charsets::NUMERIC));
    }

    #[test]
    fn output_accepts_string_or_object() {
        let config = Config::from_json(r#"{ "output": "codes.txt" }"#).unwrap();
        assert_eq!(config.output, Some(FileInfo::from("codes.txt")));

        let config = Config::from_json(r#"{ "output": { "path": "codes.txt" } }"#).unwrap();
        assert_eq!(config.output, Some(FileInfo::from("codes.txt")));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_json(r#"{ "charset": ["a", 2] }"#).unwrap_err().is_invalid_input());
        assert!(Config::from_json(r#"{ "output": 5 }"#).unwrap_err().is_invalid_input());
        assert!(matches!(
            Config::from_json(r#"{ "preset": "emoji" }"#).unwrap_err(),
            RandomError::Config(_)
        ));
        assert!(matches!(
            Config::from_json(r#"{ "lenght": 3 }"#).unwrap_err(),
            RandomError::Config(_)
        ));
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let path = std::env::temp_dir().join("randkit-config-does-not-exist.json");
        assert!(matches!(Config::load(Some(&path)).unwrap_err(), RandomError::Io(_)));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("randkit-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "token_length": 64 }"#).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.token_length, 64);
    }
}
