//! gui/update/reset.rs
//! "Nova Transação": clear server session, go back to the ledger.
//!
//! Best-effort: a failed reset is logged and the payout stays on screen.
//! The next poll shows whatever the server really holds.

use iced::Task;
use tracing::{info, warn};

use super::super::state::{Kiosk, Message};
use crate::core::error::KioskError;

pub(crate) fn reset_session(state: &mut Kiosk) -> Task<Message> {
    let client = state.client.clone();
    Task::perform(
        async move { client.reset_session().await },
        Message::ResetFinished,
    )
}

pub(crate) fn reset_finished(state: &mut Kiosk, result: Result<(), KioskError>) -> Task<Message> {
    match result {
        Ok(()) => {
            info!("session reset");
            state.withdrawal = None;
            state.qr = None;
            state.error = None;
            state.status = None;
        }
        Err(e) => warn!(error = %e, "session reset failed"),
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{kiosk, withdrawal};
    use super::*;
    use crate::gui::state::{QrStatus, Screen};

    #[test]
    fn reset_returns_to_ledger_and_clears_error() {
        let mut state = kiosk();
        state.withdrawal = Some(withdrawal(25.5, 7650, 0.0));
        state.qr = Some(QrStatus::Loading);
        state.error = Some(KioskError::NoBalance);
        state.status = Some("LNURL copiado!".into());

        let _ = reset_finished(&mut state, Ok(()));

        assert_eq!(state.screen(), Screen::Ledger);
        assert!(state.qr.is_none());
        assert!(state.error.is_none());
        assert!(state.status.is_none());
    }

    #[test]
    fn failed_reset_keeps_payout() {
        let mut state = kiosk();
        state.withdrawal = Some(withdrawal(25.5, 7650, 0.0));

        let _ = reset_finished(&mut state, Err(KioskError::Http("connection reset".into())));

        assert_eq!(state.screen(), Screen::Payout);
        assert!(state.error.is_none());
    }
}
