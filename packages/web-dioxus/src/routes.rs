//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::{BoardPage, Home, ModerationDashboard, NewPostPage};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/boards/:board_id")]
    BoardPage { board_id: String },

    #[route("/boards/:board_id/new")]
    NewPostPage { board_id: String },

    #[route("/moderation")]
    ModerationDashboard {},
}
