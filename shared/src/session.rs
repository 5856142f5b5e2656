//! The session controller that owns every piece of tracker state.
//!
//! One `ExpenseSession` lives for the lifetime of the page. The render layer
//! calls its operations in response to user input and reads `view()` to draw
//! the list and the total.

use crate::config::TrackerConfig;
use crate::entry_form::{EntryForm, SubmitOutcome};
use crate::error::{EntryError, SeedError};
use crate::expense::{ExpenseRecord, ExpenseStore};
use crate::filter::FilterView;
use crate::format::format_currency;
use crate::ids::{IdGenerator, UuidIdGenerator};
use crate::seed::load_seed;

/// Snapshot of the filtered records and their total
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseView {
    pub records: Vec<ExpenseRecord>,
    pub total: f64,
}

impl ExpenseView {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn formatted_total(&self, config: &TrackerConfig) -> String {
        format_currency(self.total, &config.currency_symbol)
    }
}

#[derive(Debug, Clone)]
pub struct ExpenseSession<G: IdGenerator = UuidIdGenerator> {
    store: ExpenseStore,
    filter: FilterView,
    form: EntryForm,
    config: TrackerConfig,
    ids: G,
}

impl ExpenseSession<UuidIdGenerator> {
    /// Start a session from the bundled seed expenses
    pub fn from_seed(config: TrackerConfig) -> Result<Self, SeedError> {
        Ok(Self::new(load_seed()?, config, UuidIdGenerator))
    }
}

impl<G: IdGenerator> ExpenseSession<G> {
    pub fn new(records: Vec<ExpenseRecord>, config: TrackerConfig, ids: G) -> Self {
        Self {
            store: ExpenseStore::from_records(records),
            filter: FilterView::new(),
            form: EntryForm::new(),
            config,
            ids,
        }
    }

    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn filter(&self) -> &str {
        self.filter.filter()
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn append_expense(&mut self, record: ExpenseRecord) {
        self.store.append(record);
    }

    pub fn remove_expense(&mut self, id: &str) -> bool {
        self.store.remove_by_id(id)
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter.set_filter(text);
    }

    pub fn set_draft_name(&mut self, text: impl Into<String>) {
        self.form.set_draft_name(text);
    }

    pub fn set_draft_amount(&mut self, text: impl Into<String>) {
        self.form.set_draft_amount(text);
    }

    pub fn submit(&mut self) -> Result<SubmitOutcome, EntryError> {
        self.form
            .submit(&mut self.store, &mut self.ids, self.config.amount_policy)
    }

    /// Recompute the visible records and total from the current store and filter
    pub fn view(&self) -> ExpenseView {
        ExpenseView {
            records: self.filter.visible_records(&self.store).cloned().collect(),
            total: self.filter.total(&self.store),
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format_currency(amount, &self.config.currency_symbol)
    }
}
