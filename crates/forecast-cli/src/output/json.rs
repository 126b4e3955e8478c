use forecast_core::error::ForecastError;
use forecast_core::model::DeliveryRecord;

pub fn print(records: &[DeliveryRecord]) -> Result<(), ForecastError> {
    let json = serde_json::to_string_pretty(records)?;
    println!("{json}");
    Ok(())
}
