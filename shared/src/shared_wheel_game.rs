use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::WheelConfig;
use crate::constants::{DEFAULT_ITEMS, MIN_SPIN_ITEMS};
use crate::error::WheelError;
use crate::validation::validate_label;
use crate::wheel_geometry::{render_wheel, WheelRender};
use crate::wheel_math::{plan_spin, SpinDraw};

/// Handle for the one delayed reveal a spin schedules.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct SpinTicket {
    pub id: u64,
    pub delay_ms: u32,
    pub winner_index: usize,
    pub target_rotation: f64,
}

/// Session state of the wheel: items, accumulated rotation and the
/// spinning -> settled -> revealed sequence.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WheelGame {
    items: Vec<String>,
    accumulated_rotation: f64,
    is_spinning: bool,
    winning_index: Option<usize>,
    winner_revealed: bool,
    pending: Option<SpinTicket>,
    next_ticket_id: u64,
    disposed: bool,
    config: WheelConfig,
}

impl Default for WheelGame {
    fn default() -> Self {
        Self::new()
    }
}

impl WheelGame {
    /// A wheel holding the default prize list.
    pub fn new() -> Self {
        Self {
            items: DEFAULT_ITEMS.iter().map(|item| item.to_string()).collect(),
            accumulated_rotation: 0.0,
            is_spinning: false,
            winning_index: None,
            winner_revealed: false,
            pending: None,
            next_ticket_id: 1,
            disposed: false,
            config: WheelConfig::default(),
        }
    }

    /// Builds a wheel from `items`, applying the same rules as [`WheelGame::add_item`].
    pub fn with_items<S: AsRef<str>>(items: &[S], config: WheelConfig) -> Result<Self, WheelError> {
        config.validate()?;
        let mut game = Self {
            items: Vec::with_capacity(items.len()),
            config,
            ..Self::new()
        };
        for item in items {
            game.add_item(item.as_ref())?;
        }
        Ok(game)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn accumulated_rotation(&self) -> f64 {
        self.accumulated_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn winning_index(&self) -> Option<usize> {
        self.winning_index
    }

    pub fn winner_label(&self) -> Option<&str> {
        self.winning_index
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    /// Whether the winner popup should be visible.
    pub fn winner_revealed(&self) -> bool {
        self.winner_revealed && self.winning_index.is_some()
    }

    pub fn pending_spin(&self) -> Option<&SpinTicket> {
        self.pending.as_ref()
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn can_spin(&self) -> bool {
        !self.disposed && !self.is_spinning && self.items.len() >= MIN_SPIN_ITEMS
    }

    pub fn can_edit(&self) -> bool {
        !self.disposed && !self.is_spinning
    }

    /// Whether one more item fits under `max_items`.
    pub fn has_room(&self) -> bool {
        self.items.len() < self.config.max_items
    }

    pub fn render(&self) -> WheelRender {
        render_wheel(&self.items, self.accumulated_rotation, self.is_spinning, &self.config)
    }

    fn ensure_editable(&self) -> Result<(), WheelError> {
        if self.disposed {
            return Err(WheelError::Disposed);
        }
        if self.is_spinning {
            warn!("wheel edit rejected while spinning");
            return Err(WheelError::SpinInProgress);
        }
        Ok(())
    }

    /// Appends a trimmed label. Returns the new item's index.
    pub fn add_item(&mut self, label: &str) -> Result<usize, WheelError> {
        self.ensure_editable()?;
        let label = validate_label(label, &self.items).map_err(|err| {
            warn!("rejected wheel item {:?}: {}", label, err.code);
            if err.code == "empty_label" {
                WheelError::EmptyLabel
            } else {
                WheelError::DuplicateLabel(label.trim().to_string())
            }
        })?;
        if !self.has_room() {
            warn!("wheel is full, rejected {:?}", label);
            return Err(WheelError::TooManyItems(self.config.max_items));
        }
        self.items.push(label.to_string());
        debug!("added wheel item {:?} at {}", label, self.items.len() - 1);
        Ok(self.items.len() - 1)
    }

    /// Removes the item at `index`, keeping `winning_index` on the same item.
    pub fn remove_item(&mut self, index: usize) -> Result<String, WheelError> {
        self.ensure_editable()?;
        if index >= self.items.len() {
            return Err(WheelError::IndexOutOfRange { index, len: self.items.len() });
        }
        let removed = self.items.remove(index);
        match self.winning_index {
            Some(winner) if winner == index => {
                self.winning_index = None;
                self.winner_revealed = false;
            }
            Some(winner) if winner > index => self.winning_index = Some(winner - 1),
            _ => {}
        }
        debug!("removed wheel item {:?} from {}", removed, index);
        Ok(removed)
    }

    fn ensure_spinnable(&self) -> Result<(), WheelError> {
        if self.disposed {
            return Err(WheelError::Disposed);
        }
        if self.is_spinning {
            warn!("spin rejected, wheel already spinning");
            return Err(WheelError::SpinInProgress);
        }
        if self.items.len() < MIN_SPIN_ITEMS {
            warn!("spin rejected with {} items", self.items.len());
            return Err(WheelError::NotEnoughItems(self.items.len()));
        }
        Ok(())
    }

    /// Draws a winner and an extra-turn count for the current item set.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> SpinDraw {
        SpinDraw {
            winner_index: rng.gen_range(0..self.items.len().max(1)),
            extra_spins: rng.gen_range(self.config.min_extra_spins..=self.config.max_extra_spins),
        }
    }

    /// Starts a spin with a random draw. The caller must call
    /// [`WheelGame::reveal`] with the returned ticket after `ticket.delay_ms`.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SpinTicket, WheelError> {
        self.ensure_spinnable()?;
        let draw = self.draw(rng);
        self.spin_with(draw)
    }

    /// Starts a spin with a given draw.
    pub fn spin_with(&mut self, draw: SpinDraw) -> Result<SpinTicket, WheelError> {
        self.ensure_spinnable()?;
        if draw.winner_index >= self.items.len() {
            return Err(WheelError::IndexOutOfRange {
                index: draw.winner_index,
                len: self.items.len(),
            });
        }

        let plan = plan_spin(
            self.accumulated_rotation,
            self.items.len(),
            draw,
            self.config.pointer_angle,
        );
        debug!("spin plan: {:?}", plan);

        let ticket = SpinTicket {
            id: self.next_ticket_id,
            delay_ms: self.config.reveal_delay_ms(),
            winner_index: plan.winner_index,
            target_rotation: plan.target_rotation,
        };
        self.next_ticket_id += 1;
        self.accumulated_rotation = plan.target_rotation;
        self.is_spinning = true;
        self.winning_index = None;
        self.winner_revealed = false;
        self.pending = Some(ticket);

        info!(
            "spin {} started: {} extra turns to {:.3} degrees",
            ticket.id, plan.extra_spins, plan.target_rotation
        );
        Ok(ticket)
    }

    /// Settles the wheel and reveals the winner of `ticket`'s spin.
    pub fn reveal(&mut self, ticket: &SpinTicket) -> Result<usize, WheelError> {
        if self.disposed {
            warn!("reveal {} ignored on disposed wheel", ticket.id);
            return Err(WheelError::Disposed);
        }
        match self.pending {
            Some(pending) if pending.id == ticket.id => {
                self.pending = None;
                self.is_spinning = false;
                self.winning_index = Some(pending.winner_index);
                self.winner_revealed = true;
                info!(
                    "spin {} settled on {:?}",
                    pending.id,
                    self.items.get(pending.winner_index)
                );
                Ok(pending.winner_index)
            }
            _ => {
                warn!("stale reveal {} ignored", ticket.id);
                Err(WheelError::StaleReveal)
            }
        }
    }

    /// Closes the winner popup. The winning index stays until the next spin.
    pub fn dismiss_winner(&mut self) {
        self.winner_revealed = false;
    }

    /// Marks the wheel torn down. Pending reveals and later commands are rejected.
    pub fn dispose(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!("dropping pending reveal {} on dispose", pending.id);
        }
        self.disposed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_ITEMS;
    use crate::wheel_math::{normalize_degrees, segment_under_pointer};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn abcd() -> WheelGame {
        WheelGame::with_items(&["A", "B", "C", "D"], WheelConfig::default()).unwrap()
    }

    fn spin_and_reveal(game: &mut WheelGame, draw: SpinDraw) -> usize {
        let ticket = game.spin_with(draw).unwrap();
        game.reveal(&ticket).unwrap()
    }

    #[test]
    fn test_new_has_default_items() {
        let game = WheelGame::new();
        assert_eq!(game.items().len(), 6);
        assert_eq!(game.items()[3], "Try Again");
        assert_eq!(game.accumulated_rotation(), 0.0);
        assert!(!game.is_spinning());
        assert!(game.can_spin());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut game = abcd();
        let ticket = game.spin_with(SpinDraw { winner_index: 2, extra_spins: 5 }).unwrap();
        assert_eq!(ticket.delay_ms, 7000);
        assert_eq!(ticket.target_rotation, 1845.0);
        assert!(game.is_spinning());
        assert_eq!(game.winning_index(), None);
        assert!(!game.winner_revealed());

        assert_eq!(game.reveal(&ticket), Ok(2));
        assert!(!game.is_spinning());
        assert_eq!(game.accumulated_rotation(), 1845.0);
        assert_eq!(normalize_degrees(game.accumulated_rotation()), 45.0);
        assert_eq!(game.winner_label(), Some("C"));
        assert!(game.winner_revealed());
    }

    #[test]
    fn test_spin_while_spinning_is_noop() {
        let mut game = abcd();
        let mut rng = StdRng::seed_from_u64(7);
        let ticket = game.spin(&mut rng).unwrap();
        let before = game.clone();
        assert_eq!(game.spin(&mut rng), Err(WheelError::SpinInProgress));
        assert_eq!(
            game.spin_with(SpinDraw { winner_index: 0, extra_spins: 5 }),
            Err(WheelError::SpinInProgress)
        );
        assert_eq!(game.accumulated_rotation(), before.accumulated_rotation());
        assert_eq!(game.items(), before.items());
        assert_eq!(game.winning_index(), before.winning_index());
        assert_eq!(game.winner_revealed(), before.winner_revealed());
        assert!(game.is_spinning());
        assert_eq!(game.pending_spin(), before.pending_spin());
        assert_eq!(game.pending_spin(), Some(&ticket));
    }

    #[test]
    fn test_spin_needs_two_items() {
        let mut game = WheelGame::with_items(&["Only"], WheelConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(game.spin(&mut rng), Err(WheelError::NotEnoughItems(1)));
        assert!(!game.is_spinning());
        assert!(!game.can_spin());

        let mut empty = WheelGame::with_items::<&str>(&[], WheelConfig::default()).unwrap();
        assert_eq!(empty.spin(&mut rng), Err(WheelError::NotEnoughItems(0)));
    }

    #[test]
    fn test_spin_with_rejects_bad_index() {
        let mut game = abcd();
        let result = game.spin_with(SpinDraw { winner_index: 4, extra_spins: 5 });
        assert_eq!(result, Err(WheelError::IndexOutOfRange { index: 4, len: 4 }));
        assert!(!game.is_spinning());
    }

    #[test]
    fn test_spin_clears_previous_winner() {
        let mut game = abcd();
        spin_and_reveal(&mut game, SpinDraw { winner_index: 1, extra_spins: 5 });
        assert!(game.winner_revealed());
        game.spin_with(SpinDraw { winner_index: 3, extra_spins: 6 }).unwrap();
        assert_eq!(game.winning_index(), None);
        assert!(!game.winner_revealed());
    }

    #[test]
    fn test_random_spin_draws_within_range() {
        let mut game = abcd();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let before = game.accumulated_rotation();
            let ticket = game.spin(&mut rng).unwrap();
            let turns = ((ticket.target_rotation - before) / 360.0).floor() as u32;
            assert!((5..=7).contains(&turns));
            let winner = game.reveal(&ticket).unwrap();
            assert!(winner < 4);
            assert_eq!(
                segment_under_pointer(game.accumulated_rotation(), 270.0, 4),
                Some(winner)
            );
        }
    }

    #[test]
    fn test_add_duplicate_keeps_one() {
        let mut game = abcd();
        assert_eq!(game.add_item("X"), Ok(4));
        assert_eq!(game.add_item("X"), Err(WheelError::DuplicateLabel("X".into())));
        assert_eq!(game.items().iter().filter(|item| *item == "X").count(), 1);
    }

    #[test]
    fn test_add_blank_is_rejected() {
        let mut game = abcd();
        assert_eq!(game.add_item(""), Err(WheelError::EmptyLabel));
        assert_eq!(game.add_item("   "), Err(WheelError::EmptyLabel));
        assert_eq!(game.items(), abcd().items());
    }

    #[test]
    fn test_add_trims_label() {
        let mut game = abcd();
        game.add_item("  Dinner  ").unwrap();
        assert_eq!(game.items().last().map(String::as_str), Some("Dinner"));
        assert_eq!(game.add_item("Dinner "), Err(WheelError::DuplicateLabel("Dinner".into())));
    }

    #[test]
    fn test_add_respects_item_limit() {
        let config = WheelConfig { max_items: 2, ..WheelConfig::default() };
        let mut game = WheelGame::with_items(&["A", "B"], config).unwrap();
        assert_eq!(game.add_item("C"), Err(WheelError::TooManyItems(2)));
        assert_eq!(game.item_count(), 2);
    }

    #[test]
    fn test_full_wheel_rejects_valid_label() {
        let labels: Vec<String> = (0..MAX_ITEMS).map(|i| format!("Prize {}", i)).collect();
        let mut game = WheelGame::with_items(&labels, WheelConfig::default()).unwrap();
        assert!(!game.has_room());
        // the label itself is fine, only the wheel is full
        assert!(validate_label("Bonus", game.items()).is_ok());
        assert_eq!(game.add_item("Bonus"), Err(WheelError::TooManyItems(MAX_ITEMS)));
        assert_eq!(game.item_count(), MAX_ITEMS);

        game.remove_item(0).unwrap();
        assert!(game.has_room());
        assert_eq!(game.add_item("Bonus"), Ok(MAX_ITEMS - 1));
    }

    #[test]
    fn test_edits_rejected_while_spinning() {
        let mut game = abcd();
        game.spin_with(SpinDraw { winner_index: 0, extra_spins: 5 }).unwrap();
        assert!(!game.can_edit());
        assert_eq!(game.add_item("E"), Err(WheelError::SpinInProgress));
        assert_eq!(game.remove_item(0), Err(WheelError::SpinInProgress));
        assert_eq!(game.item_count(), 4);
    }

    #[test]
    fn test_remove_winner_clears_it() {
        let mut game = abcd();
        spin_and_reveal(&mut game, SpinDraw { winner_index: 2, extra_spins: 5 });
        assert_eq!(game.remove_item(2), Ok("C".to_string()));
        assert_eq!(game.winning_index(), None);
        assert!(!game.winner_revealed());
    }

    #[test]
    fn test_remove_before_winner_shifts_index() {
        let mut game = abcd();
        spin_and_reveal(&mut game, SpinDraw { winner_index: 2, extra_spins: 5 });
        game.remove_item(0).unwrap();
        assert_eq!(game.winning_index(), Some(1));
        assert_eq!(game.winner_label(), Some("C"));
        assert!(game.winner_revealed());
    }

    #[test]
    fn test_remove_after_winner_keeps_index() {
        let mut game = abcd();
        spin_and_reveal(&mut game, SpinDraw { winner_index: 1, extra_spins: 5 });
        game.remove_item(3).unwrap();
        assert_eq!(game.winning_index(), Some(1));
        assert_eq!(game.winner_label(), Some("B"));
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut game = abcd();
        assert_eq!(game.remove_item(9), Err(WheelError::IndexOutOfRange { index: 9, len: 4 }));
    }

    #[test]
    fn test_stale_reveal_is_ignored() {
        let mut game = abcd();
        let first = game.spin_with(SpinDraw { winner_index: 0, extra_spins: 5 }).unwrap();
        game.reveal(&first).unwrap();
        assert_eq!(game.reveal(&first), Err(WheelError::StaleReveal));

        let second = game.spin_with(SpinDraw { winner_index: 1, extra_spins: 5 }).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(game.reveal(&first), Err(WheelError::StaleReveal));
        assert!(game.is_spinning());
    }

    #[test]
    fn test_dispose_blocks_pending_reveal() {
        let mut game = abcd();
        let ticket = game.spin_with(SpinDraw { winner_index: 3, extra_spins: 5 }).unwrap();
        game.dispose();
        assert!(game.is_disposed());
        assert!(!game.can_spin());
        assert_eq!(game.reveal(&ticket), Err(WheelError::Disposed));
        assert_eq!(game.winning_index(), None);
        assert!(game.pending_spin().is_none());
        assert_eq!(game.add_item("Z"), Err(WheelError::Disposed));
    }

    #[test]
    fn test_dismiss_winner_keeps_index() {
        let mut game = abcd();
        spin_and_reveal(&mut game, SpinDraw { winner_index: 3, extra_spins: 5 });
        game.dismiss_winner();
        assert!(!game.winner_revealed());
        assert_eq!(game.winning_index(), Some(3));
    }

    #[test]
    fn test_with_items_rejects_duplicates() {
        let result = WheelGame::with_items(&["A", "A"], WheelConfig::default());
        assert!(matches!(result, Err(WheelError::DuplicateLabel(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]

        #[test]
        fn prop_rotation_never_decreases(seed in any::<u64>(), item_count in 2usize..=20, spins in 1usize..=15) {
            let labels: Vec<String> = (0..item_count).map(|i| format!("Item {}", i)).collect();
            let mut game = WheelGame::with_items(&labels, WheelConfig::default()).unwrap();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut last = game.accumulated_rotation();
            for _ in 0..spins {
                let ticket = game.spin(&mut rng).unwrap();
                prop_assert!(game.accumulated_rotation() >= last);
                last = game.accumulated_rotation();
                let winner = game.reveal(&ticket).unwrap();
                prop_assert_eq!(
                    segment_under_pointer(game.accumulated_rotation(), 270.0, item_count),
                    Some(winner)
                );
            }
        }
    }
}
