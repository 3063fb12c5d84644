use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::{SpinTicket, WheelError, WheelGame};
use yew::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct RouletteState {
    pub game: WheelGame,
    /// Warning for the last rejected command.
    pub notice: Option<&'static str>,
}

pub enum RouletteAction {
    AddItem(String),
    RemoveItem(usize),
    Spin,
    Reveal(SpinTicket),
    DismissWinner,
    ClearNotice,
    Dispose,
}

impl RouletteState {
    fn record<T>(&mut self, result: Result<T, WheelError>) {
        self.notice = match result {
            Ok(_) => None,
            Err(err) => err.user_message(),
        };
    }
}

impl Reducible for RouletteState {
    type Action = RouletteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RouletteAction::AddItem(label) => {
                let result = next.game.add_item(&label);
                next.record(result);
            }
            RouletteAction::RemoveItem(index) => {
                let result = next.game.remove_item(index);
                next.record(result);
            }
            RouletteAction::Spin => {
                let mut rng = SmallRng::from_entropy();
                let result = next.game.spin(&mut rng);
                next.record(result);
            }
            RouletteAction::Reveal(ticket) => {
                if let Err(err) = next.game.reveal(&ticket) {
                    warn!("reveal for spin {} dropped: {}", ticket.id, err);
                    return self;
                }
            }
            RouletteAction::DismissWinner => next.game.dismiss_winner(),
            RouletteAction::ClearNotice => next.notice = None,
            RouletteAction::Dispose => {
                if next.game.is_disposed() {
                    return self;
                }
                next.game.dispose();
            }
        }
        next.into()
    }
}

#[derive(Clone)]
pub struct RouletteHandle {
    pub state: UseReducerHandle<RouletteState>,
    pub add_item: Callback<String>,
    pub remove_item: Callback<usize>,
    pub spin: Callback<()>,
    pub dismiss_winner: Callback<()>,
    pub clear_notice: Callback<()>,
}

/// Wheel state plus the reveal timer. One `Timeout` exists per pending spin;
/// it is dropped, and so cancelled, when the spin settles or the component
/// unmounts. Unmounting also disposes the wheel.
#[hook]
pub fn use_roulette() -> RouletteHandle {
    let state = use_reducer(RouletteState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with((), move |_| {
            move || {
                debug!("disposing wheel");
                dispatcher.dispatch(RouletteAction::Dispose);
            }
        });
    }

    {
        let pending = state.game.pending_spin().copied();
        let dispatcher = state.dispatcher();
        use_effect_with(pending.map(|ticket| ticket.id), move |_| {
            let timeout = pending.map(|ticket| {
                debug!("scheduling reveal {} in {}ms", ticket.id, ticket.delay_ms);
                Timeout::new(ticket.delay_ms, move || {
                    dispatcher.dispatch(RouletteAction::Reveal(ticket));
                })
            });
            move || drop(timeout)
        });
    }

    let add_item = {
        let state = state.clone();
        Callback::from(move |label: String| state.dispatch(RouletteAction::AddItem(label)))
    };
    let remove_item = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(RouletteAction::RemoveItem(index)))
    };
    let spin = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(RouletteAction::Spin))
    };
    let dismiss_winner = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(RouletteAction::DismissWinner))
    };
    let clear_notice = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(RouletteAction::ClearNotice))
    };

    RouletteHandle {
        state,
        add_item,
        remove_item,
        spin,
        dismiss_winner,
        clear_notice,
    }
}
