//! Dugout - Dioxus Fullstack Web Application
//!
//! This is a fullstack SSR web application built with Dioxus.
//! It talks to the Dugout REST API for boards, posts, and moderation.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod gateways;
mod pages;
mod routes;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
