use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TotalDisplayProps {
    pub formatted_total: String,
}

#[function_component(TotalDisplay)]
pub fn total_display(props: &TotalDisplayProps) -> Html {
    html! {
        <div class="total-section">
            <h2>{format!("Total: {}", props.formatted_total)}</h2>
        </div>
    }
}
