use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::LevelError;

/**
 * This module contains all logic for reading level files and sprite images from disk.
 */
pub mod texture;

/// Reads a text file. Invalid UTF-8 sequences become U+FFFD instead of failing
/// the read; a damaged byte then shows up in the sprite id it belongs to.
pub fn load_string(path: &Path) -> Result<String, LevelError> {
    let bytes = std::fs::read(path).map_err(|e| LevelError::io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Every line of the file without its terminator (`\n` or `\r\n`).
/// A trailing newline does not produce an extra empty line.
pub fn read_lines(path: &Path) -> Result<Vec<String>, LevelError> {
    let txt = load_string(path)?;
    Ok(txt.lines().map(str::to_string).collect())
}

/// Replaces the file with `lines`, each followed by `\n`.
///
/// The file is truncated and written in place; a crash mid-write leaves a partial file.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), LevelError> {
    let file = File::create(path).map_err(|e| LevelError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(|e| LevelError::io(path, e))?;
    }
    writer.flush().map_err(|e| LevelError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_survive_a_write_read_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.txt");
        write_lines(&path, &["a 0 0 0 0 0 0 1 1 1", "b 1 0 0 0 0 0 1 1 1"]).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "a 0 0 0 0 0 0 1 1 1\nb 1 0 0 0 0 0 1 1 1\n"
        );
        assert_eq!(read_lines(&path).unwrap().len(), 2);
    }

    #[test]
    fn write_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.txt");
        write_lines(&path, &["long line that will be gone", "another"]).unwrap();
        write_lines(&path, &["x"]).unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["x".to_string()]);
    }

    #[test]
    fn crlf_files_are_read_without_carriage_returns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, "a 0 0 0 0 0 0 1 1 1\r\nb 0 0 0 0 0 0 1 1 1\r\n").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["a 0 0 0 0 0 0 1 1 1", "b 0 0 0 0 0 0 1 1 1"]);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"br\xffick 0 0 0 0 0 0 1 1 1\n").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["br\u{FFFD}ick 0 0 0 0 0 0 1 1 1"]);
    }

    #[test]
    fn missing_file_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("nope.txt"));
    }
}
