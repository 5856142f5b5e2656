use std::collections::HashSet;

use log::info;

use crate::error::SeedError;
use crate::expense::ExpenseRecord;

const SEED_JSON: &str = include_str!("../data/expenses.json");

/// Expenses every session starts with
pub fn load_seed() -> Result<Vec<ExpenseRecord>, SeedError> {
    parse_seed(SEED_JSON)
}

/// Decode a JSON array of `{id, name, amount}` objects
pub fn parse_seed(json: &str) -> Result<Vec<ExpenseRecord>, SeedError> {
    let records: Vec<ExpenseRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !seen.insert(record.id.as_str()) {
            return Err(SeedError::DuplicateId(record.id.clone()));
        }
    }

    info!("Loaded {} seed expenses", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_seed_loads() {
        let records = load_seed().unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| !r.name.is_empty() && r.amount.is_finite()));
    }

    #[test]
    fn test_parse_seed() {
        let records = parse_seed(
            r#"[{"id":"a","name":"Rent","amount":1000},{"id":"b","name":"Internet","amount":50}]"#,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                ExpenseRecord::new("a", "Rent", 1000.0),
                ExpenseRecord::new("b", "Internet", 50.0),
            ]
        );
    }

    #[test]
    fn test_parse_seed_rejects_duplicate_ids() {
        let result = parse_seed(
            r#"[{"id":"a","name":"Rent","amount":1000},{"id":"a","name":"Water","amount":20}]"#,
        );
        assert!(matches!(result, Err(SeedError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_parse_seed_rejects_malformed_json() {
        assert!(matches!(parse_seed("not json"), Err(SeedError::Malformed(_))));
        assert!(matches!(
            parse_seed(r#"[{"id":"a","name":"Rent"}]"#),
            Err(SeedError::Malformed(_))
        ));
    }
}
