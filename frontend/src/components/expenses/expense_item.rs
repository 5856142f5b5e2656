use yew::prelude::*;
use shared::{format_currency, ExpenseRecord};

#[derive(Properties, PartialEq)]
pub struct ExpenseItemProps {
    pub record: ExpenseRecord,
    pub currency_symbol: String,
    pub on_delete: Callback<String>,
}

#[function_component(ExpenseItem)]
pub fn expense_item(props: &ExpenseItemProps) -> Html {
    let onclick = {
        let id = props.record.id.clone();
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <div class="expense-item">
            <div class="expense-info">
                <h3>{&props.record.name}</h3>
            </div>
            <div class="expense-actions">
                <span class="expense-amount">
                    {format_currency(props.record.amount, &props.currency_symbol)}
                </span>
                <button class="btn-delete" title="Delete" {onclick}>
                    {"🗑️"}
                </button>
            </div>
        </div>
    }
}
