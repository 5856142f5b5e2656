use log::info;
use serde::{Deserialize, Serialize};

/// A single household expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique within the store for the session lifetime
    pub id: String,
    /// Name shown in the list and matched by the filter
    pub name: String,
    /// Expense amount; finite unless the permissive amount policy let a NaN through
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }
}

/// Insertion-ordered collection of expense records for one session.
///
/// The store performs no validation of its own: the entry form guarantees
/// non-empty names and the id generator guarantees unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    /// Add a record at the end of the sequence
    pub fn append(&mut self, record: ExpenseRecord) {
        info!("Appending expense {} ({})", record.id, record.name);
        self.records.push(record);
    }

    /// Remove the first record with the given id.
    ///
    /// Returns `false` and leaves the store untouched when no record matches.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        match self.records.iter().position(|record| record.id == id) {
            Some(index) => {
                let removed = self.records.remove(index);
                info!("Removed expense {} ({})", removed.id, removed.name);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
