use std::{io::ErrorKind, path::Path};

use serde::{Serialize, de::DeserializeOwned};
use serde_json::ser::PrettyFormatter;

use crate::error::GrabError;

/// Serializes `record` as indented JSON and writes it to `path`.
///
/// Missing parent directories are created first. An existing file at `path`
/// is replaced wholesale.
pub async fn write_metadata<T: Serialize>(path: &Path, record: &T) -> Result<(), GrabError> {
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| GrabError::filesystem(parent, e))?;
    }

    let json = to_pretty_json(record)?;
    async_fs::write(path, json)
        .await
        .map_err(|e| GrabError::filesystem(path, e))
}

/// Reads a JSON record back from `path`, or `None` if there is no file.
pub async fn read_metadata<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, GrabError> {
    let content = match async_fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(GrabError::filesystem(path, e)),
    };

    let record = serde_json::from_str(&content)?;
    Ok(Some(record))
}

fn to_pretty_json<T: Serialize>(record: &T) -> Result<Vec<u8>, GrabError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut ser)?;
    Ok(buf)
}
