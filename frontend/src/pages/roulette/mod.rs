mod item_input;
mod item_list;
mod spin_button;
mod wheel_svg;
mod winner_popup;

use yew::prelude::*;

use crate::hooks::use_roulette::use_roulette;
use crate::styles;
use item_input::ItemInput;
use item_list::ItemList;
use spin_button::SpinButton;
use wheel_svg::WheelSvg;
use winner_popup::WinnerPopup;

#[function_component(RoulettePage)]
pub fn roulette_page() -> Html {
    let roulette = use_roulette();
    let game = &roulette.state.game;
    let items = game.items().to_vec();
    let render = game.render();

    let on_spin = {
        let spin = roulette.spin.clone();
        Callback::from(move |_: MouseEvent| spin.emit(()))
    };
    let on_dismiss_notice = {
        let clear_notice = roulette.clear_notice.clone();
        Callback::from(move |_: MouseEvent| clear_notice.emit(()))
    };

    let winner = game
        .winner_revealed()
        .then(|| game.winning_index().zip(game.winner_label()))
        .flatten();

    html! {
        <div class={styles::CONTAINER}>
            <header class={styles::HEADER}>
                <h1 class={styles::TEXT_H1}>{"Roulette Master"}</h1>
                <p class={styles::TEXT_SUBTITLE}>{"Add your items and spin the wheel of fortune!"}</p>
            </header>

            <div class={styles::LAYOUT}>
                <div class={styles::CONTROLS_CARD}>
                    <ItemInput
                        items={items.clone()}
                        has_room={game.has_room()}
                        disabled={!game.can_edit()}
                        on_add={roulette.add_item.clone()}
                    />

                    if let Some(notice) = roulette.state.notice {
                        <div class={styles::ALERT_WARNING} role="alert">
                            <span>{notice}</span>
                            <button onclick={on_dismiss_notice} aria-label="Dismiss">{"×"}</button>
                        </div>
                    }

                    <ItemList
                        items={items}
                        disabled={!game.can_edit()}
                        on_remove={roulette.remove_item.clone()}
                    />
                </div>

                <div class={styles::WHEEL_SECTION}>
                    <div class={styles::WHEEL_FRAME}>
                        <WheelSvg {render} />
                        <div class={styles::POINTER_WRAPPER}>
                            <div class={styles::POINTER}></div>
                        </div>
                    </div>
                    <SpinButton
                        is_spinning={game.is_spinning()}
                        can_spin={game.can_spin()}
                        onclick={on_spin}
                    />
                </div>
            </div>

            if let Some((index, label)) = winner {
                <WinnerPopup
                    {index}
                    label={label.to_string()}
                    on_close={roulette.dismiss_winner.clone()}
                />
            }

            <footer class={styles::FOOTER}>
                <p>{"Roulette Master"}</p>
            </footer>
        </div>
    }
}
