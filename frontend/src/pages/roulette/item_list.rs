use shared::palette::item_color;
use yew::prelude::*;

use crate::components::TrashIcon;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ItemListProps {
    pub items: Vec<String>,
    pub disabled: bool,
    pub on_remove: Callback<usize>,
}

#[function_component(ItemList)]
pub fn item_list(props: &ItemListProps) -> Html {
    if props.items.is_empty() {
        return html! {};
    }

    html! {
        <div>
            <h3 class={styles::TEXT_H3}>{"Current items:"}</h3>
            <ul class={styles::ITEM_LIST}>
                { for props.items.iter().enumerate().map(|(index, item)| {
                    let on_remove = props.on_remove.clone();
                    html! {
                        <li key={index} class={styles::ITEM_ROW}>
                            <span class={styles::ITEM_LABEL} style={format!("color: {};", item_color(index))}>
                                {item.clone()}
                            </span>
                            <button
                                onclick={move |_| on_remove.emit(index)}
                                disabled={props.disabled}
                                class={styles::BUTTON_REMOVE}
                                aria-label={format!("Remove {}", item)}
                            >
                                <TrashIcon />
                            </button>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
