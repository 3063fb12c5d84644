use shared::palette::{item_color, with_alpha};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinnerPopupProps {
    pub index: usize,
    pub label: String,
    pub on_close: Callback<()>,
}

#[function_component(WinnerPopup)]
pub fn winner_popup(props: &WinnerPopupProps) -> Html {
    let color = item_color(props.index);
    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::POPUP_OVERLAY}>
            <div class={styles::POPUP_CARD}>
                <h2 class={styles::POPUP_TITLE} style={format!("color: {};", color)}>
                    {"Congratulations!"}
                </h2>
                <p
                    class={styles::POPUP_WINNER}
                    style={format!("background-color: {}; color: {};", with_alpha(color, "20"), color)}
                >
                    {props.label.clone()}
                </p>
                <button {onclick} class={styles::BUTTON_PRIMARY}>
                    {"Close"}
                </button>
            </div>
        </div>
    }
}
