//! Coercion of loosely typed parameters into strict forms.
//!
//! Values arrive as [`serde_json::Value`] (config files, JSON payloads) and
//! are narrowed here, failing with [`RandomError::InvalidInput`] on anything
//! outside the accepted shapes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RandomError;

/// Reference to a file by path. Does not open or require the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    path: PathBuf,
}

impl FileInfo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|name| name.to_str())
    }

    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn is_file(&self) -> bool {
        self.path.is_file()
    }

    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }
}

impl From<&str> for FileInfo {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FileInfo {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl From<PathBuf> for FileInfo {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl From<&Path> for FileInfo {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

/// A string path or an already-built file reference (`{"path": "..."}`).
pub fn coerce_file_reference(param: &Value) -> Result<FileInfo, RandomError> {
    match param {
        Value::String(path) => Ok(FileInfo::from(path.as_str())),
        Value::Object(_) => FileInfo::deserialize(param).map_err(|_| neither_string_nor_file()),
        _ => Err(neither_string_nor_file()),
    }
}

/// A single string becomes a one-element list; an array must hold only
/// strings.
pub fn coerce_string_list(param: &Value) -> Result<Vec<String>, RandomError> {
    match param {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    RandomError::invalid_input("a single item of the passed array is not a string")
                })
            })
            .collect(),
        _ => Err(RandomError::invalid_input(
            "the passed argument is neither an array of strings, nor a string",
        )),
    }
}

fn neither_string_nor_file() -> RandomError {
    RandomError::invalid_input("the passed argument is neither a string nor a file reference")
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn file_reference_from_string() {
        let info = coerce_file_reference(&json!("/tmp/out/tokens.txt")).unwrap();
        assert_eq!(info.path(), Path::new("/tmp/out/tokens.txt"));
        assert_eq!(info.file_name(), Some("tokens.txt"));
        assert_eq!(info.extension(), Some("txt"));
    }

    #[test]
    fn file_reference_passthrough() {
        let info = coerce_file_reference(&json!({ "path": "codes.csv" })).unwrap();
        assert_eq!(info, FileInfo::from("codes.csv"));
    }

    #[test]
    fn file_reference_rejects_other_values() {
        for value in [json!(42), json!(null), json!(["a"]), json!({ "name": "x" })] {
            let e = coerce_file_reference(&value).unwrap_err();
            assert_eq!(
                e.to_string(),
                "invalid input: the passed argument is neither a string nor a file reference"
            );
        }
    }

    #[test]
    fn file_info_reports_filesystem_state() {
        let dir = FileInfo::from(std::env::temp_dir());
        assert!(dir.exists());
        assert!(dir.is_dir());
        assert!(!dir.is_file());
    }

    #[test]
    fn string_list_from_string() {
        assert_eq!(coerce_string_list(&json!("abc")).unwrap(), vec!["abc"]);
    }

    #[test]
    fn string_list_from_array() {
        assert_eq!(
            coerce_string_list(&json!(["a", "b", "c"])).unwrap(),
            vec!["a", "b", "c"]
        );
        assert!(coerce_string_list(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn string_list_rejects_mixed_array() {
        let e = coerce_string_list(&json!(["a", 1, "c"])).unwrap_err();
        assert_eq!(
            e.to_string(),
            "invalid input: a single item of the passed array is not a string"
        );
    }

    #[test]
    fn string_list_rejects_other_values() {
        for value in [json!(1), json!(true), json!({ "a": "b" }), json!(null)] {
            assert!(coerce_string_list(&value).unwrap_err().is_invalid_input());
        }
    }
}
