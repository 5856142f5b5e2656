//! Draft state of the "add expense" form.
//!
//! The drafts mirror the raw keystrokes, so intermediate text such as `12.`
//! is held as-is. Nothing is validated until `submit`.

use log::{debug, info, warn};

use crate::amount::AmountPolicy;
use crate::error::EntryError;
use crate::expense::{ExpenseRecord, ExpenseStore};
use crate::ids::IdGenerator;

/// Whether the form currently holds any draft text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
}

/// Result of a submit that did not fail
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A record was built from the drafts and appended to the store
    Added(ExpenseRecord),
    /// A draft was empty; store and drafts are unchanged
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    draft_name: String,
    draft_amount: String,
}

impl EntryForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn draft_amount(&self) -> &str {
        &self.draft_amount
    }

    pub fn set_draft_name(&mut self, text: impl Into<String>) {
        self.draft_name = text.into();
    }

    pub fn set_draft_amount(&mut self, text: impl Into<String>) {
        self.draft_amount = text.into();
    }

    pub fn state(&self) -> FormState {
        if self.draft_name.is_empty() && self.draft_amount.is_empty() {
            FormState::Idle
        } else {
            FormState::Editing
        }
    }

    /// Turn the drafts into a new record and append it to `store`.
    ///
    /// Whitespace-only drafts count as present. The name is stored untrimmed.
    /// On success both drafts are cleared; on `Ignored` or an error they are
    /// left exactly as typed.
    pub fn submit<G: IdGenerator + ?Sized>(
        &mut self,
        store: &mut ExpenseStore,
        ids: &mut G,
        policy: AmountPolicy,
    ) -> Result<SubmitOutcome, EntryError> {
        if self.draft_name.is_empty() || self.draft_amount.is_empty() {
            debug!("Ignoring submit with an empty draft");
            return Ok(SubmitOutcome::Ignored);
        }

        let amount = policy.parse(&self.draft_amount).inspect_err(|e| {
            warn!("Rejected expense {:?}: {}", self.draft_name, e);
        })?;

        let record = ExpenseRecord {
            id: ids.generate_id(),
            name: self.draft_name.clone(),
            amount,
        };
        info!("Submitting expense {:?} for {}", record.name, record.amount);
        store.append(record.clone());

        self.draft_name.clear();
        self.draft_amount.clear();

        Ok(SubmitOutcome::Added(record))
    }
}
