use thiserror::Error;

use crate::constants::*;

/// Why a wheel command was rejected. A rejected command never changes state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WheelError {
    #[error("item label is empty")]
    EmptyLabel,
    #[error("item {0:?} is already on the wheel")]
    DuplicateLabel(String),
    #[error("wheel is full ({0} items)")]
    TooManyItems(usize),
    #[error("need at least two items to spin, have {0}")]
    NotEnoughItems(usize),
    #[error("a spin is already in progress")]
    SpinInProgress,
    #[error("index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("reveal does not belong to the pending spin")]
    StaleReveal,
    #[error("wheel has been disposed")]
    Disposed,
    #[error("invalid wheel config: {0}")]
    InvalidConfig(String),
}

impl WheelError {
    /// Warning shown to the user, or `None` for rejections the user cannot trigger.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::EmptyLabel => Some(EMPTY_LABEL_WARNING),
            Self::DuplicateLabel(_) => Some(DUPLICATE_LABEL_WARNING),
            Self::TooManyItems(_) => Some(TOO_MANY_ITEMS_WARNING),
            Self::NotEnoughItems(_) => Some(NOT_ENOUGH_ITEMS_WARNING),
            Self::SpinInProgress => Some(SPIN_IN_PROGRESS_WARNING),
            Self::IndexOutOfRange { .. }
            | Self::StaleReveal
            | Self::Disposed
            | Self::InvalidConfig(_) => None,
        }
    }
}
