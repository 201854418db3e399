//! Delimited-text adapter for product imports
//!
//! Columns are positional: `name,unit,cost_price,is_available`. Extra
//! columns are ignored, shorter rows are dropped here and never reach the
//! pipeline.

use shared::models::ProductDraft;

const HEADER: [&str; 4] = ["name", "unit", "cost_price", "is_available"];

/// Decode an uploaded file into candidate records
pub fn decode_products(data: &[u8]) -> Result<Vec<ProductDraft>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut drafts = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() < HEADER.len() {
            continue;
        }
        let field = |i: usize| row.get(i).unwrap_or_default().trim_start();
        if index == 0 && is_header(&row) {
            continue;
        }
        drafts.push(ProductDraft {
            name: field(0).to_string(),
            unit: field(1).to_string(),
            cost_price: field(2).trim_end().parse::<f64>().ok(),
            is_available: field(3).trim_end().eq_ignore_ascii_case("true"),
        });
    }
    Ok(drafts)
}

fn is_header(row: &csv::StringRecord) -> bool {
    row.len() == HEADER.len()
        && row
            .iter()
            .zip(HEADER)
            .all(|(got, want)| got.trim().eq_ignore_ascii_case(want))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rows() {
        let data = b"Tomato,kg,1.5,true\n  Onion, kg, abc, TRUE\nSalt,g,,no\n";
        let drafts = decode_products(data).unwrap();
        assert_eq!(drafts.len(), 3);

        assert_eq!(drafts[0].name, "Tomato");
        assert_eq!(drafts[0].cost_price, Some(1.5));
        assert!(drafts[0].is_available);

        assert_eq!(drafts[1].name, "Onion");
        assert_eq!(drafts[1].unit, "kg");
        assert_eq!(drafts[1].cost_price, None);
        assert!(drafts[1].is_available);

        assert_eq!(drafts[2].cost_price, None);
        assert!(!drafts[2].is_available);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let data = b"Tomato,kg,1.5\nMilk,l,0.9,true,extra\n\n,kg,1,true\n";
        let drafts = decode_products(data).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].name, "Milk");
        // empty name survives decoding; the pipeline rejects it
        assert_eq!(drafts[1].name, "");
    }

    #[test]
    fn test_header_row_skipped_only_at_top() {
        let data = b"Name,Unit,Cost_Price,Is_Available\nTomato,kg,1.5,true\nname,unit,cost_price,is_available\n";
        let drafts = decode_products(data).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].name, "Tomato");
        assert_eq!(drafts[1].name, "name");
    }

    #[test]
    fn test_empty_input() {
        assert!(decode_products(b"").unwrap().is_empty());
    }
}
