//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events.

use iced::Task;
use std::time::Duration;

use super::state::{Kiosk, Message};
use crate::core::api::KioskClient;

mod payout;
mod poll;
mod reset;
mod withdraw;

/// Initial state plus the first poll, so the ledger fills immediately
/// instead of one interval after launch.
pub(crate) fn boot(client: KioskClient, poll_interval: Duration) -> (Kiosk, Task<Message>) {
    let mut state = Kiosk::new(client, poll_interval);
    let first_poll = poll::poll_session(&mut state);
    (state, first_poll)
}

pub(crate) fn update(state: &mut Kiosk, message: Message) -> Task<Message> {
    match message {
        // Polling
        Message::PollTick => poll::poll_session(state),
        Message::SessionFetched(seq, result) => poll::session_fetched(state, seq, result),

        // Withdrawal
        Message::WithdrawPressed => withdraw::request_withdrawal(state),
        Message::WithdrawFinished(result) => withdraw::withdraw_finished(state, result),

        // Payout view
        Message::QrFetched(id, result) => payout::qr_fetched(state, id, result),
        Message::RetryQr => payout::retry_qr(state),
        Message::CopyPayoutCode => payout::copy_payout_code(state),

        // Reset
        Message::ResetPressed => reset::reset_session(state),
        Message::ResetFinished(result) => reset::reset_finished(state, result),

        Message::Shutdown => poll::shutdown(state),
    }
}
