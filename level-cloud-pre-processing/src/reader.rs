use crate::error::LoadError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a delimited text file into its ordered lines.
/// Accepts both `\n` and `\r\n` terminators. Line 0 is returned as-is, header
/// skipping belongs to the record parser. Invalid UTF-8 is replaced with U+FFFD
/// so one bad byte only affects its own line.
pub fn read_lines(file_path: &Path) -> Result<Vec<String>, LoadError> {
    if !file_path.is_file() {
        return Err(LoadError::FileNotFound {
            path: file_path.to_path_buf(),
        });
    }

    let bytes = fs::read(file_path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            path: file_path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: file_path.to_path_buf(),
            source,
        },
    })?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_owned)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{unique_temp_dir, write_temp_csv};

    #[test]
    fn test_reads_all_lines_in_order() {
        let path = write_temp_csv("reader_order", "id,x,y,z\n1,1,2,3\r\n2,4,5,6\n");
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["id,x,y,z", "1,1,2,3", "2,4,5,6"]);
    }

    #[test]
    fn test_invalid_utf8_only_touches_its_line() {
        let path = unique_temp_dir("reader_lossy").join("data.csv");
        fs::write(&path, b"id,name\n1,Caf\xC9 Sword\n2,Shield\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,Caf\u{FFFD} Sword");
        assert_eq!(lines[2], "2,Shield");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("level_cloud_does_not_exist.csv");
        match read_lines(&path) {
            Err(LoadError::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_not_a_readable_file() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            read_lines(&dir),
            Err(LoadError::FileNotFound { .. })
        ));
    }
}
