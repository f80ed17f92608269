//! JSON sidecar writing.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::Result;
use crate::output::print_json_write;

/// Indentation used for every JSON file written by this crate.
const JSON_INDENT: &[u8] = b"    ";

/// Serialize a value to indented JSON text, without a trailing newline.
pub(crate) fn to_json_string<T: Serialize>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(JSON_INDENT));
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a value as indented JSON followed by a newline, replacing any
/// existing file.
pub(crate) fn write_json<T: Serialize>(value: &T, fname: &Path, verbose: bool) -> Result<()> {
    let json_output = to_json_string(value)?;
    std::fs::write(fname, format!("{}\n", json_output))?;

    tracing::info!("Wrote {}", fname.display());

    if verbose {
        print_json_write(fname, &json_output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_to_json_string_uses_four_spaces() {
        let text = to_json_string(&json!({"Name": "x"})).unwrap();
        assert_eq!(text, "{\n    \"Name\": \"x\"\n}");
    }

    #[test]
    fn test_write_json_trailing_newline_and_overwrite() {
        let dir = TempDir::new().unwrap();
        let fname = dir.path().join("out.json");

        write_json(&json!({"a": "first", "b": "long value"}), &fname, false).unwrap();
        write_json(&json!({"a": "second"}), &fname, false).unwrap();

        let content = std::fs::read_to_string(&fname).unwrap();
        assert_eq!(content, "{\n    \"a\": \"second\"\n}\n");
    }

    #[test]
    fn test_write_json_missing_directory() {
        let dir = TempDir::new().unwrap();
        let fname = dir.path().join("missing").join("out.json");
        assert!(write_json(&json!({}), &fname, false).is_err());
    }
}
