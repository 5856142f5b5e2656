use yew::prelude::*;
use web_sys::HtmlInputElement;
use shared::{ExpenseSession, ExpenseView, SubmitOutcome, TrackerConfig, UuidIdGenerator};
use crate::services::logging::Logger;

const COMPONENT: &str = "use_expenses";

#[derive(Clone)]
pub struct ExpenseState {
    pub view: ExpenseView,
    pub formatted_total: String,
    pub currency_symbol: String,
    pub filter: String,

    // Entry form state
    pub draft_name: String,
    pub draft_amount: String,
    pub form_error: Option<String>,
}

pub struct UseExpensesResult {
    pub state: ExpenseState,
    pub actions: UseExpensesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseExpensesActions {
    pub on_filter_input: Callback<InputEvent>,
    pub on_name_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
    pub on_delete: Callback<String>,
}

fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

fn start_session(config: TrackerConfig) -> ExpenseSession {
    match ExpenseSession::from_seed(config.clone()) {
        Ok(session) => session,
        Err(e) => {
            Logger::error_with_component(COMPONENT, &format!("Failed to load seed expenses: {}", e));
            ExpenseSession::new(Vec::new(), config, UuidIdGenerator)
        }
    }
}

#[hook]
pub fn use_expenses(config: &TrackerConfig) -> UseExpensesResult {
    let session = use_state({
        let config = config.clone();
        move || start_session(config)
    });
    let form_error = use_state(|| Option::<String>::None);

    // Filter input, applied on every keystroke
    let on_filter_input = {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*session).clone();
            next.set_filter(input_value(e));
            session.set(next);
        })
    };

    let on_name_input = {
        let session = session.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*session).clone();
            next.set_draft_name(input_value(e));
            session.set(next);
            form_error.set(None);
        })
    };

    let on_amount_input = {
        let session = session.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*session).clone();
            next.set_draft_amount(input_value(e));
            session.set(next);
            form_error.set(None);
        })
    };

    let on_submit = {
        let session = session.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            let mut next = (*session).clone();
            match next.submit() {
                Ok(SubmitOutcome::Added(record)) => {
                    Logger::info_with_component(
                        COMPONENT,
                        &format!("Added {} for {}", record.name, next.format_amount(record.amount)),
                    );
                    session.set(next);
                    form_error.set(None);
                }
                Ok(SubmitOutcome::Ignored) => {}
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                }
            }
        })
    };

    let on_delete = {
        let session = session.clone();
        Callback::from(move |id: String| {
            let mut next = (*session).clone();
            if next.remove_expense(&id) {
                session.set(next);
            } else {
                Logger::debug_with_component(COMPONENT, &format!("Nothing to delete for id {}", id));
            }
        })
    };

    let view = session.view();
    let state = ExpenseState {
        formatted_total: view.formatted_total(session.config()),
        currency_symbol: session.config().currency_symbol.clone(),
        filter: session.filter().to_string(),
        draft_name: session.form().draft_name().to_string(),
        draft_amount: session.form().draft_amount().to_string(),
        form_error: (*form_error).clone(),
        view,
    };

    let actions = UseExpensesActions {
        on_filter_input,
        on_name_input,
        on_amount_input,
        on_submit,
        on_delete,
    };

    UseExpensesResult { state, actions }
}
