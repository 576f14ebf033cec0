//! gui/update/poll.rs
//! Session polling lifecycle + teardown.
//!
//! - Every poll is tagged with `poll_seq`; a response older than the last
//!   applied one is dropped, so a slow poll can't roll the ledger back.
//! - Failures are logged only. The next tick retries on its own.
//! - After `Shutdown`, ticks and late responses are ignored.

use iced::Task;
use tracing::{debug, info, warn};

use super::super::state::{Kiosk, Message};
use crate::core::error::KioskError;
use crate::core::types::Session;

pub(crate) fn poll_session(state: &mut Kiosk) -> Task<Message> {
    if !state.polling {
        return Task::none();
    }

    state.poll_seq += 1;
    let seq = state.poll_seq;
    let client = state.client.clone();

    Task::perform(
        async move { client.fetch_session().await },
        move |result| Message::SessionFetched(seq, result),
    )
}

pub(crate) fn session_fetched(
    state: &mut Kiosk,
    seq: u64,
    result: Result<Session, KioskError>,
) -> Task<Message> {
    if !state.polling {
        return Task::none();
    }

    match result {
        Ok(session) => {
            if seq < state.applied_seq {
                debug!(seq, applied = state.applied_seq, "dropping stale session poll");
                return Task::none();
            }

            if session.total_mismatch() {
                warn!(
                    total = session.total_amount,
                    notes_sum = session.notes_sum(),
                    "session total disagrees with its notes"
                );
            }

            state.applied_seq = seq;
            state.session = session;
        }
        Err(e) => {
            // Transient; keep showing the last good session.
            warn!(seq, error = %e, "session poll failed");
        }
    }

    Task::none()
}

pub(crate) fn shutdown(state: &mut Kiosk) -> Task<Message> {
    if state.polling {
        info!(polls = state.poll_seq, "stopping session polling");
        state.polling = false;
    }
    iced::exit()
}
