use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormProps {
    // Form state
    pub draft_name: String,
    pub draft_amount: String,
    pub form_error: Option<String>,

    // Event handlers
    pub on_name_input: Callback<InputEvent>,
    pub on_amount_input: Callback<InputEvent>,
    pub on_submit: Callback<()>,
}

#[function_component(ExpenseForm)]
pub fn expense_form(props: &ExpenseFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="form-section">
            <h2>{"Add a new expense"}</h2>

            {if let Some(error) = props.form_error.as_ref() {
                html! {
                    <div class="form-message error">
                        {error}
                    </div>
                }
            } else { html! {} }}

            <form class="expense-form" {onsubmit}>
                <input
                    type="text"
                    class="input-name"
                    name="expense-name"
                    placeholder="Expense name"
                    value={props.draft_name.clone()}
                    oninput={props.on_name_input.clone()}
                />
                <input
                    type="text"
                    inputmode="decimal"
                    class="input-amount"
                    name="expense-amount"
                    placeholder="Amount"
                    value={props.draft_amount.clone()}
                    oninput={props.on_amount_input.clone()}
                />
                <button type="submit" class="btn-add">
                    {"➕ Add"}
                </button>
            </form>
        </section>
    }
}
