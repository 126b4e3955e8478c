use forecast_core::export::CSV_HEADER;
use forecast_core::model::DeliveryRecord;

pub fn print(records: &[DeliveryRecord]) {
    if records.is_empty() {
        println!("(no records)");
        return;
    }

    let name_width = records
        .iter()
        .map(|r| r.product_name.len())
        .chain([CSV_HEADER[1].len()])
        .max()
        .unwrap_or(0);
    let qty_width = records
        .iter()
        .map(|r| r.quantity.len())
        .chain([CSV_HEADER[2].len()])
        .max()
        .unwrap_or(0);

    println!(
        "{:<10}  {:<name_width$}  {:>qty_width$}  {}",
        CSV_HEADER[0], CSV_HEADER[1], CSV_HEADER[2], CSV_HEADER[3]
    );
    for r in records {
        println!(
            "{:<10}  {:<name_width$}  {:>qty_width$}  {}",
            r.product_id, r.product_name, r.quantity, r.delivery_date
        );
    }
    eprintln!("\n{} record(s)", records.len());
}
