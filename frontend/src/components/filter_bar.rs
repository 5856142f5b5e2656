use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filter: String,
    pub on_filter_input: Callback<InputEvent>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    html! {
        <div class="filter-section">
            <input
                type="text"
                class="filter-input"
                placeholder="🔍 Filter by name..."
                value={props.filter.clone()}
                oninput={props.on_filter_input.clone()}
            />
        </div>
    }
}
