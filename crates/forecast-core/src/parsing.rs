use crate::extraction::PageContent;
use crate::model::{DeliveryRecord, UNKNOWN_NAME, ZERO_QUANTITY};
use regex::Regex;
use std::sync::LazyLock;

/// A run of 10 digits opens a product block.
static PRODUCT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{10}").unwrap());

/// Product name: the text between the product ID and the "PC" unit token.
static PRODUCT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{10}\s+([A-Za-z0-9\-\s]+?)\s+PC").unwrap());

/// One forecasted delivery: an optional quantity (grouped thousands, 3
/// decimal places) followed by a DD/MM/YYYY date.
static DELIVERY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,3}(?:,\d{3})*\.\d{3})?\s+(\d{2}/\d{2}/\d{4})").unwrap());

/// Collapse every run of whitespace to a single space.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse one page of raw text into delivery records.
///
/// The page is whitespace-normalized, split into product blocks at each
/// 10-digit product ID, and each block is scanned for a product name and
/// its delivery pairs. A block runs from one product-ID match to the start
/// of the next (or end of page). Blocks with no delivery pairs contribute
/// nothing; a missing name becomes "UNKNOWN", a missing quantity "0.000".
pub fn parse_page(text: &str) -> Vec<DeliveryRecord> {
    let text = normalize_whitespace(text);

    let id_matches: Vec<_> = PRODUCT_ID.find_iter(&text).collect();

    let mut records = Vec::new();
    for (i, id_match) in id_matches.iter().enumerate() {
        let block_end = id_matches
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(text.len());
        let block = &text[id_match.start()..block_end];

        let product_id = id_match.as_str();
        let product_name = PRODUCT_NAME
            .captures(block)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim())
            .unwrap_or(UNKNOWN_NAME);

        for pair in DELIVERY_PAIR.captures_iter(block) {
            let quantity = pair
                .get(1)
                .map(|m| m.as_str())
                .unwrap_or(ZERO_QUANTITY);
            let delivery_date = &pair[2];
            records.push(DeliveryRecord::new(
                product_id,
                product_name,
                quantity,
                delivery_date,
            ));
        }
    }

    records
}

/// Parse every page into records, in page order.
///
/// Pages are independent; a product block never spans a page boundary.
/// Pages with no extractable text naturally contribute nothing.
pub fn extract_records(pages: &[PageContent]) -> Vec<DeliveryRecord> {
    pages.iter().flat_map(|p| parse_page(&p.text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  0123456789 \t WIDGET\n\nA  PC "),
            "0123456789 WIDGET A PC"
        );
    }

    #[test]
    fn test_no_product_id_yields_no_records() {
        assert!(parse_page("Forecast report 01/02/2024 no ten digit runs 123456789").is_empty());
    }

    #[test]
    fn test_block_with_name_and_two_pairs() {
        let records = parse_page("0123456789 WIDGET A PC 1,234.500 01/02/2024 02/03/2024");
        assert_eq!(
            records,
            vec![
                DeliveryRecord::new("0123456789", "WIDGET A", "1,234.500", "01/02/2024"),
                DeliveryRecord::new("0123456789", "WIDGET A", "0.000", "02/03/2024"),
            ]
        );
    }

    #[test]
    fn test_missing_name_falls_back_to_unknown() {
        let records = parse_page("0123456789 ??? 500.000 15/06/2024");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_name, "UNKNOWN");
        assert_eq!(records[0].quantity, "500.000");
    }

    #[test]
    fn test_pair_without_quantity_gets_zero_sentinel() {
        let records = parse_page("0123456789 BOLT M8 PC 15/06/2024");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].quantity, "0.000");
        assert_eq!(records[0].delivery_date, "15/06/2024");
    }

    #[test]
    fn test_block_without_pairs_contributes_nothing() {
        assert!(parse_page("0123456789 WIDGET A PC no dates here").is_empty());
    }

    #[test]
    fn test_multiple_blocks_on_one_page() {
        let records = parse_page(
            "0123456789 WIDGET A PC 1.000 01/02/2024 \
             9876543210 GASKET B PC 2,000.250 05/06/2024",
        );
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product_id, "0123456789");
        assert_eq!(records[0].product_name, "WIDGET A");
        assert_eq!(records[1].product_id, "9876543210");
        assert_eq!(records[1].product_name, "GASKET B");
        assert_eq!(records[1].quantity, "2,000.250");
    }

    #[test]
    fn test_hyphenated_name() {
        let records = parse_page("0123456789 A-200 MK3 PC 10.000 01/02/2024");
        assert_eq!(records[0].product_name, "A-200 MK3");
    }

    #[test]
    fn test_normalization_applies_before_matching() {
        let records = parse_page("0123456789   WIDGET\tA\n PC   1,234.500\n01/02/2024");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].product_name, "WIDGET A");
        assert_eq!(records[0].quantity, "1,234.500");
    }

    #[test]
    fn test_empty_pages_skipped() {
        let pages = vec![
            PageContent {
                page_number: 1,
                text: "   \n  ".to_string(),
            },
            PageContent {
                page_number: 2,
                text: "0123456789 WIDGET A PC 1.000 01/02/2024".to_string(),
            },
        ];
        let records = extract_records(&pages);
        assert_eq!(records.len(), 1);
    }
}
