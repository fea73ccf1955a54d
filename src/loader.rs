use std::fs;
use std::path::{Path, PathBuf};

use crate::DexError;
use crate::parser;
use crate::value::Value;

/// Read a document from disk and parse it.
///
/// This is the only place the core touches the filesystem; read failures
/// surface the underlying io error verbatim.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Value, DexError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| DexError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path.to_string_lossy().to_string(),
    })?;
    parser::parse(&text)
}

/// The `.yml` documents directly under a directory, sorted by file name.
pub fn list_data_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, DexError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| DexError::FileError {
        message: format!("Failed to read directory: {}", e),
        path: dir.to_string_lossy().to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| DexError::FileError {
            message: format!("Failed to read directory entry: {}", e),
            path: dir.to_string_lossy().to_string(),
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn test_load_file_parses_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("doc.yml");
        let mut file = File::create(&path).expect("create");
        writeln!(file, "id: 7\nslug: testling").expect("write");

        let doc = load_file(&path).expect("load");
        assert_eq!(doc.get("id"), Some(&Value::Number(7.0)));
        assert_eq!(doc.get("slug"), Some(&Value::String("testling".into())));
    }

    #[test]
    fn test_load_file_missing_path_is_a_file_error() {
        let err = load_file("no/such/file.yml").expect_err("must fail");
        assert!(matches!(err, DexError::FileError { .. }));
    }

    #[test]
    fn test_load_file_propagates_parse_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "id: 1\nbroken\n").expect("write");

        let err = load_file(&path).expect_err("must fail");
        assert_eq!(
            err,
            DexError::MalformedLine { line: 2, text: "broken".into() }
        );
    }

    #[test]
    fn test_list_data_files_filters_and_sorts() {
        let dir = tempfile::tempdir().expect("tempdir");
        for name in ["002_b.yml", "001_a.yml", "notes.txt"] {
            std::fs::write(dir.path().join(name), "id: 1\n").expect("write");
        }

        let files = list_data_files(dir.path()).expect("list");
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, ["001_a.yml", "002_b.yml"]);
    }
}
