use yew::prelude::*;

use crate::components::SparklesIcon;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin!" };
    let icon_class = if props.is_spinning { "w-6 h-6 animate-spin" } else { "w-6 h-6" };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={!props.can_spin}
            class={styles::BUTTON_SPIN}
        >
            <SparklesIcon class={icon_class} />
            <span>{button_text}</span>
        </button>
    }
}
