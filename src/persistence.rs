// File: src/persistence.rs
use crate::core::converter::Converter;
use crate::core::engine::Script;
use crate::error::ConvertError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Writes `text` to `path` through a temp file in the same directory, so
/// readers see either the old file or the complete new one.
pub fn write_atomic(path: &Path, text: &str) -> Result<(), ConvertError> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir).map_err(|e| ConvertError::io(parent_dir, e))?;

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| ConvertError::io(parent_dir, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer
            .write_all(text.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ConvertError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|source| ConvertError::Persist { path: path.to_path_buf(), source })?;
    Ok(())
}

/// Reads UTF-8 text from `input`, converts it and writes the result to
/// `output` atomically.
pub fn convert_file(
    converter: &Converter,
    from: Script,
    to: Script,
    input: &Path,
    output: &Path,
) -> Result<(), ConvertError> {
    let text = fs::read_to_string(input).map_err(|e| ConvertError::io(input, e))?;
    let converted = converter.convert(&text, from, to);
    write_atomic(output, &converted)?;
    info!(input = %input.display(), output = %output.display(), %from, %to, "converted file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_atomic_creates_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        write_atomic(&path, "पहिलो").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "पहिलो");
        write_atomic(&path, "दोस्रो").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "दोस्रो");
    }

    #[test]
    fn convert_file_to_preeti() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.txt");
        let output = dir.path().join("out.txt");
        fs::write(&input, "नेपाल\nकाठमाडौं\n").unwrap();
        convert_file(Converter::global(), Script::Unicode, Script::Preeti, &input, &output)
            .unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "g]kfn\nsf7df8f}+\n");
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(
            Converter::global(),
            Script::English,
            Script::Unicode,
            &dir.path().join("missing.txt"),
            &dir.path().join("out.txt"),
        )
        .unwrap_err();
        assert!(matches!(err, ConvertError::Io { .. }));
        assert!(!dir.path().join("out.txt").exists());
    }
}
