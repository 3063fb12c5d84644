use shared::validation::{is_blank, validate_label};
use web_sys::{HtmlInputElement, InputEvent, KeyboardEvent};
use yew::prelude::*;

use crate::components::PlusIcon;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ItemInputProps {
    pub items: Vec<String>,
    /// False once the wheel holds `max_items`.
    pub has_room: bool,
    pub disabled: bool,
    pub on_add: Callback<String>,
}

#[function_component(ItemInput)]
pub fn item_input(props: &ItemInputProps) -> Html {
    let new_item = use_state(String::new);

    // The wheel re-validates; this only decides whether to clear the field.
    let submit = {
        let new_item = new_item.clone();
        let items = props.items.clone();
        let has_room = props.has_room;
        let on_add = props.on_add.clone();
        Callback::from(move |_: ()| {
            let value = (*new_item).clone();
            let accepted = has_room && validate_label(&value, &items).is_ok();
            on_add.emit(value);
            if accepted {
                new_item.set(String::new());
            }
        })
    };

    let oninput = {
        let new_item = new_item.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_item.set(input.value());
        })
    };

    let onkeydown = {
        let submit = submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit(());
            }
        })
    };

    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };

    html! {
        <div>
            <label for="new-item" class={styles::TEXT_LABEL}>{"New item"}</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    id="new-item"
                    value={(*new_item).clone()}
                    placeholder="e.g. Luxury dinner"
                    class={styles::INPUT}
                    disabled={props.disabled}
                    {oninput}
                    {onkeydown}
                />
                <button
                    {onclick}
                    disabled={props.disabled || is_blank(&new_item)}
                    class={styles::BUTTON_ADD}
                    aria-label="Add item"
                >
                    <PlusIcon />
                </button>
            </div>
        </div>
    }
}
