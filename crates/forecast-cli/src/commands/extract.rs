use forecast_core::error::ForecastError;
use forecast_core::export;
use forecast_core::extraction::PdfExtractor;
use std::path::PathBuf;

use crate::commands::collect_inputs;

pub fn run(
    input: PathBuf,
    out_dir: PathBuf,
    to_stdout: bool,
    extractor: &dyn PdfExtractor,
) -> Result<(), ForecastError> {
    let files = collect_inputs(&input)?;
    let records = forecast_core::extract_files(&files, extractor)?;

    if records.is_empty() {
        return Err(ForecastError::NoData);
    }

    if to_stdout {
        export::write_csv(std::io::stdout().lock(), &records)?;
    } else {
        let path = export::write_csv_file(&out_dir, &records)?;
        eprintln!(
            "{} record(s) from {} file(s), written to {}",
            records.len(),
            files.len(),
            path.display()
        );
    }

    Ok(())
}
