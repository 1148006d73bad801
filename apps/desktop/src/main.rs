//! Roster Desktop — Dioxus-powered project member picker.

use std::sync::Mutex;

use dioxus::prelude::*;

mod app;
mod picker;
mod state;

use app::App;
use roster_core::User;

/// Pre-runtime storage — roster loaded before Dioxus launches, consumed on first render.
pub static INITIAL_ROSTER: Mutex<Option<Vec<User>>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("roster=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    // Load the directory at startup (blocking) — store in Mutex, NOT in the signal
    *INITIAL_ROSTER.lock().unwrap() = Some(state::load_directory());

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((16, 16, 20, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Roster")
                            .with_inner_size(LogicalSize::new(1100.0, 720.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 480.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
