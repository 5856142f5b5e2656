use yew::prelude::*;
use shared::TrackerConfig;

mod components;
mod hooks;
mod services;

use components::expenses::ExpenseList;
use components::filter_bar::FilterBar;
use components::forms::expense_form::ExpenseForm;
use components::header::Header;
use components::total_display::TotalDisplay;
use hooks::use_expenses::use_expenses;
use services::logging::{self, Logger};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: TrackerConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let expenses = use_expenses(&props.config);
    let state = expenses.state;
    let actions = expenses.actions;

    html! {
        <div class="app">
            <Header title="🏠 Household Expenses" />

            <div class="container">
                <FilterBar
                    filter={state.filter.clone()}
                    on_filter_input={actions.on_filter_input.clone()}
                />

                <ExpenseForm
                    draft_name={state.draft_name.clone()}
                    draft_amount={state.draft_amount.clone()}
                    form_error={state.form_error.clone()}
                    on_name_input={actions.on_name_input.clone()}
                    on_amount_input={actions.on_amount_input.clone()}
                    on_submit={actions.on_submit.clone()}
                />

                <ExpenseList
                    records={state.view.records.clone()}
                    currency_symbol={state.currency_symbol.clone()}
                    on_delete={actions.on_delete.clone()}
                />

                <TotalDisplay formatted_total={state.formatted_total.clone()} />
            </div>
        </div>
    }
}

fn main() {
    let config = TrackerConfig::default();
    logging::init(&config);
    Logger::info_with_component("main", "Starting household expense tracker");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
