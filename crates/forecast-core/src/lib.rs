pub mod discovery;
pub mod error;
pub mod export;
pub mod extraction;
pub mod model;
pub mod parsing;

use error::ForecastError;
use extraction::PdfExtractor;
use model::DeliveryRecord;
use std::path::PathBuf;

/// Extract delivery records from one PDF.
///
/// Pages are extracted and parsed independently; records are returned in
/// scan order, not yet deduplicated.
pub fn extract_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<DeliveryRecord>, ForecastError> {
    let pages = extractor.extract_pages(pdf_bytes)?;
    Ok(parsing::extract_records(&pages))
}

/// Extract delivery records from a set of PDF files, deduplicated across
/// the whole set with first-occurrence order preserved.
///
/// An unreadable file fails the run; an empty result set is not an error
/// here (callers decide how to surface "no data").
pub fn extract_files(
    paths: &[PathBuf],
    extractor: &dyn PdfExtractor,
) -> Result<Vec<DeliveryRecord>, ForecastError> {
    let mut all = Vec::new();
    for path in paths {
        let pdf_bytes = std::fs::read(path)?;
        all.extend(extract_pdf(&pdf_bytes, extractor)?);
    }
    Ok(model::dedup_records(all))
}
