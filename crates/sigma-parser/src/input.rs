//! Input file checks shared by the converters.

use std::path::Path;

use crate::ParseError;

/// Require an existing file named `*.{extension}` with a non-empty stem.
///
/// # Errors
///
/// [`ParseError::InvalidPath`] describing the first failed check.
pub fn validate_input(path: &Path, extension: &str) -> Result<(), ParseError> {
    let invalid = |reason: String| ParseError::InvalidPath {
        path: path.to_path_buf(),
        reason,
    };

    let has_extension = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if !has_extension {
        return Err(invalid(format!("expected a .{extension} file")));
    }
    if path.file_stem().is_none_or(|stem| stem.is_empty()) {
        return Err(invalid(String::from("file name is too short")));
    }
    if !path.is_file() {
        return Err(invalid(String::from("no such file")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("diary.xlsx")]
    #[case("diary")]
    #[case("csv")]
    fn wrong_extension(#[case] name: &str) {
        let err = validate_input(Path::new(name), "csv").unwrap_err();
        assert!(err.to_string().contains("expected a .csv file"), "{err}");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_input(&dir.path().join("absent.csv"), "csv").unwrap_err();
        assert!(err.to_string().contains("no such file"), "{err}");
    }

    #[test]
    fn existing_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.CSV");
        std::fs::write(&path, "a\n1\n").unwrap();
        assert!(validate_input(&path, "csv").is_ok());
    }
}
