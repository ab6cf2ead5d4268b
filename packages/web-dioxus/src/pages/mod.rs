//! Application pages

mod board;
mod home;
mod moderation;
mod new_post;

pub use board::*;
pub use home::*;
pub use moderation::*;
pub use new_post::*;
