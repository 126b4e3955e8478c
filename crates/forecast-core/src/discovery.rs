use crate::error::ForecastError;
use std::path::{Path, PathBuf};

/// Find PDF files directly under `dir` (non-recursive), matched by the
/// `.pdf` suffix case-insensitively. Sorted by file name so processing
/// order is deterministic.
pub fn find_pdf_files(dir: &Path) -> Result<Vec<PathBuf>, ForecastError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_pdf(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Check the `.pdf` suffix, case-insensitive. Suffix matching on the file
/// name rather than `Path::extension`, so a bare `.pdf` name also counts.
pub fn is_pdf(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_is_pdf_case_insensitive() {
        assert!(is_pdf(Path::new("forecast.pdf")));
        assert!(is_pdf(Path::new("FORECAST.PDF")));
        assert!(is_pdf(Path::new("forecast.Pdf")));
        assert!(!is_pdf(Path::new("forecast.txt")));
        assert!(!is_pdf(Path::new("forecast")));
    }

    #[test]
    fn test_is_pdf_bare_suffix_name() {
        // A file literally named ".pdf" has no Path::extension but does
        // carry the suffix
        assert!(is_pdf(Path::new(".pdf")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn test_find_pdf_files_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.PDF", "notes.txt", "c.pdf.bak"] {
            File::create(tmp.path().join(name)).unwrap();
        }
        std::fs::create_dir(tmp.path().join("sub.pdf")).unwrap();

        let files = find_pdf_files(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }
}
