use crate::error::ForecastError;
use crate::model::DeliveryRecord;
use chrono::Local;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: [&str; 4] = ["Product ID", "Product Name", "QTY", "Delivery Date"];

/// Write records as CSV, header row first.
pub fn write_csv<W: io::Write>(writer: W, records: &[DeliveryRecord]) -> Result<(), ForecastError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for r in records {
        wtr.write_record([&r.product_id, &r.product_name, &r.quantity, &r.delivery_date])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Output file name carrying the export time, e.g.
/// `Corrected_Forecast_20240201_153000.csv`.
pub fn timestamped_filename() -> String {
    format!(
        "Corrected_Forecast_{}.csv",
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

/// Write records to a timestamped CSV file under `dir`, creating the
/// directory if needed. Returns the path of the written file.
pub fn write_csv_file(dir: &Path, records: &[DeliveryRecord]) -> Result<PathBuf, ForecastError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(timestamped_filename());
    write_csv(File::create(&path)?, records)?;
    Ok(path)
}
