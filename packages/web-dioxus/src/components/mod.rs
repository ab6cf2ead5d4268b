//! Reusable UI components

mod board_card;
mod moderation_alert;
mod post_card;

pub use board_card::*;
pub use moderation_alert::*;
pub use post_card::*;
