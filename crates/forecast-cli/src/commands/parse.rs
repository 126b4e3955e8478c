use forecast_core::error::ForecastError;
use forecast_core::extraction::PdfExtractor;
use std::path::PathBuf;

use crate::commands::collect_inputs;
use crate::output;

pub fn run(
    input: PathBuf,
    output_format: &str,
    extractor: &dyn PdfExtractor,
) -> Result<(), ForecastError> {
    let files = collect_inputs(&input)?;
    let records = forecast_core::extract_files(&files, extractor)?;

    match output_format {
        "json" => output::json::print(&records)?,
        _ => output::table::print(&records),
    }

    Ok(())
}
