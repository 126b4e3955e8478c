pub mod extract;
pub mod parse;

use forecast_core::discovery;
use forecast_core::error::ForecastError;
use std::path::{Path, PathBuf};

/// Resolve a CLI input into concrete PDF paths: a directory is scanned for
/// *.pdf, a file is taken as-is if it has the right suffix.
pub fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>, ForecastError> {
    if input.is_dir() {
        discovery::find_pdf_files(input)
    } else if discovery::is_pdf(input) {
        Ok(vec![input.to_path_buf()])
    } else {
        Err(ForecastError::NotAPdf {
            path: input.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn collect_inputs_scans_directory() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.pdf", "notes.txt"] {
            File::create(tmp.path().join(name)).unwrap();
        }

        let files = collect_inputs(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf"]);
    }

    #[test]
    fn collect_inputs_accepts_single_pdf() {
        let files = collect_inputs(Path::new("reports/june.pdf")).unwrap();
        assert_eq!(files, vec![PathBuf::from("reports/june.pdf")]);
    }

    #[test]
    fn collect_inputs_rejects_non_pdf() {
        let result = collect_inputs(Path::new("notes.txt"));
        assert!(matches!(result, Err(ForecastError::NotAPdf { .. })));
    }
}
