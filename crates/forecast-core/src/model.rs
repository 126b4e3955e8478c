use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Name sentinel used when a product block carries no recognizable name.
pub const UNKNOWN_NAME: &str = "UNKNOWN";

/// Quantity sentinel used when a delivery pair carries no quantity.
pub const ZERO_QUANTITY: &str = "0.000";

/// One forecasted delivery of one product.
///
/// All fields are carried as the strings found in the report: `quantity`
/// keeps its grouped-thousands formatting (e.g. "1,234.500") and
/// `delivery_date` stays in DD/MM/YYYY form. Records are value tuples;
/// two records are the same delivery iff all four fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub product_id: String,
    pub product_name: String,
    pub quantity: String,
    pub delivery_date: String,
}

impl DeliveryRecord {
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: impl Into<String>,
        delivery_date: impl Into<String>,
    ) -> Self {
        DeliveryRecord {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity: quantity.into(),
            delivery_date: delivery_date.into(),
        }
    }
}

/// Remove exact duplicate records, keeping the first occurrence of each.
pub fn dedup_records(records: Vec<DeliveryRecord>) -> Vec<DeliveryRecord> {
    let mut seen: HashSet<DeliveryRecord> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| seen.insert(r.clone()))
        .collect()
}
