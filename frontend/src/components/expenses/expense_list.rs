use yew::prelude::*;
use shared::ExpenseRecord;
use super::expense_item::ExpenseItem;

#[derive(Properties, PartialEq)]
pub struct ExpenseListProps {
    pub records: Vec<ExpenseRecord>,
    pub currency_symbol: String,
    pub on_delete: Callback<String>,
}

#[function_component(ExpenseList)]
pub fn expense_list(props: &ExpenseListProps) -> Html {
    html! {
        <section class="expenses-list">
            {if props.records.is_empty() {
                html! { <p class="no-expenses">{"No expenses to show"}</p> }
            } else {
                html! {
                    <>
                        {for props.records.iter().map(|record| {
                            html! {
                                <ExpenseItem
                                    key={record.id.clone()}
                                    record={record.clone()}
                                    currency_symbol={props.currency_symbol.clone()}
                                    on_delete={props.on_delete.clone()}
                                />
                            }
                        })}
                    </>
                }
            }}
        </section>
    }
}
