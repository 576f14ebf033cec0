//! Lightning ATM kiosk
//!
//! # What this program is
//! The screen of a Bitcoin ATM (built with the `iced` GUI library). A note
//! acceptor feeds Brazilian Real banknotes into a backend session; this app
//! shows the scanned notes and the accumulated total, lets the customer
//! withdraw everything over Lightning (LNURL-withdraw), shows the QR code to
//! scan, and resets for the next customer.
//!
//! # How it runs (iced message loop)
//! - `Kiosk` = all client state (last polled session, current payout, errors)
//! - `Message` = something happened (timer tick, button press, HTTP reply)
//! - `update(state, message)` mutates state, maybe starts an async `Task`
//! - `view(state)` draws the screen from state
//!
//! **Message happens -> update changes state -> view redraws**
//!
//! # Who owns what
//! - The backend owns the session (notes, total) and issues payouts.
//!   The client never merges or edits it; every poll replaces it.
//! - The client only owns what is on screen: the current payout,
//!   the QR image, the busy flag and the error line.
//!
//! # Concurrency model
//! - Every HTTP call is a `Task::perform` future on iced's tokio executor.
//! - Results come back as Messages, so all mutation stays inside `update()`.
//! - Polls carry a sequence number; stale replies are dropped.
//!
//! # Configuration
//! Defaults, then `kiosk.toml`, then `KIOSK_*` env vars (see `core::config`).
//! Logging via `RUST_LOG`.

mod core;
mod gui;

use anyhow::anyhow;
use iced::{Size, window};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::core::api::KioskClient;
use crate::core::config::KioskConfig;

/// Used when `RUST_LOG` is unset. The GPU/text stack is chatty at info.
const DEFAULT_LOG_FILTER: &str = "info,wgpu=warn,wgpu_core=warn,wgpu_hal=warn,naga=warn,cosmic_text=warn,iced_wgpu=warn";

fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = KioskConfig::load()?;
    info!(
        api_url = %config.api_url,
        poll_ms = config.poll_interval_ms,
        "starting kiosk"
    );

    let client = KioskClient::new(&config)?;
    let poll_interval = config.poll_interval();

    // `iced::application` glues together:
    // - boot (initial state + first poll)
    // - update (logic)
    // - view (UI layout)
    // Close requests go through `Message::Shutdown` so polling stops first.
    iced::application(
        move || gui::boot(client.clone(), poll_interval),
        gui::update,
        gui::view,
    )
    .title("ATM Bitcoin Lightning")
    .subscription(gui::subscription)
    .window(window::Settings {
        size: Size::new(760.0, 1000.0),
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .run()
    .map_err(|e| anyhow!("GUI failed: {e}"))
}
