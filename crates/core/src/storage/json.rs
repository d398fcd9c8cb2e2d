//! Whole-file JSON helpers shared by the stores

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Read a JSON document, or the default value if the file does not exist
pub fn read_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(T::default());
    }

    Ok(serde_json::from_str(&content)?)
}

/// Overwrite a file with the JSON form of `value`
pub fn write<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Create the parent directory of `path` if needed
pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let value: Vec<u32> = read_or_default(&dir.path().join("missing.json")).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_write_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("map.json");
        let mut map = BTreeMap::new();
        map.insert("k".to_string(), "v".to_string());

        write(&path, &map).unwrap();
        let loaded: BTreeMap<String, String> = read_or_default(&path).unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_blank_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blank.json");
        fs::write(&path, "  \n").unwrap();
        let value: Vec<u32> = read_or_default(&path).unwrap();
        assert!(value.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        fs::write(&path, "{not json").unwrap();
        let result: Result<Vec<u32>> = read_or_default(&path);
        assert!(matches!(result, Err(Error::Serialization(_))));
    }
}
