//! gui/update/withdraw.rs
//! Withdraw button -> backend -> payout view.

use iced::Task;
use tracing::{info, warn};

use super::super::state::{Kiosk, Message, QrStatus};
use super::payout::fetch_qr;
use crate::core::error::KioskError;
use crate::core::types::{Session, WithdrawalResult};

/// Amount to submit, or `NoBalance` when nothing is accumulated.
pub(crate) fn withdrawal_amount(session: &Session) -> Result<f64, KioskError> {
    if session.total_amount > 0.0 {
        Ok(session.total_amount)
    } else {
        Err(KioskError::NoBalance)
    }
}

pub(crate) fn request_withdrawal(state: &mut Kiosk) -> Task<Message> {
    // One request at a time.
    if state.withdrawing {
        return Task::none();
    }

    let amount = match withdrawal_amount(&state.session) {
        Ok(amount) => amount,
        Err(e) => {
            state.error = Some(e);
            return Task::none();
        }
    };

    state.withdrawing = true;
    state.error = None;
    info!(amount, "requesting withdrawal");

    let client = state.client.clone();
    Task::perform(
        async move { client.request_withdrawal(amount).await },
        Message::WithdrawFinished,
    )
}

pub(crate) fn withdraw_finished(
    state: &mut Kiosk,
    result: Result<WithdrawalResult, KioskError>,
) -> Task<Message> {
    // Busy flag clears whatever the outcome.
    state.withdrawing = false;

    match result {
        Ok(withdrawal) => {
            info!(
                id = %withdrawal.id,
                brl = withdrawal.amount_brl,
                sats = withdrawal.amount_sats,
                "withdrawal issued"
            );

            let task = fetch_qr(state, &withdrawal);
            state.qr = Some(QrStatus::Loading);
            state.withdrawal = Some(withdrawal);
            state.error = None;
            state.status = None;
            task
        }
        Err(e) => {
            warn!(error = %e, "withdrawal failed");
            state.error = Some(match e {
                KioskError::WithdrawalFailed(_) => e,
                _ => KioskError::WithdrawalFailed(None),
            });
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{kiosk, note, session, withdrawal};
    use super::*;
    use crate::gui::state::Screen;

    #[test]
    fn zero_balance_fails_without_a_request() {
        let mut state = kiosk();
        state.session = session(0.0, vec![]);

        let task = request_withdrawal(&mut state);

        assert_eq!(task.units(), 0);
        assert_eq!(state.error, Some(KioskError::NoBalance));
        assert!(!state.withdrawing);
        assert_eq!(state.screen(), Screen::Ledger);
    }

    #[test]
    fn withdrawal_amount_is_the_whole_total() {
        assert_eq!(withdrawal_amount(&session(25.5, vec![])), Ok(25.5));
        assert_eq!(
            withdrawal_amount(&session(0.0, vec![])),
            Err(KioskError::NoBalance)
        );
        assert_eq!(
            withdrawal_amount(&session(-1.0, vec![])),
            Err(KioskError::NoBalance)
        );
    }

    #[test]
    fn request_marks_busy_and_clears_previous_error() {
        let mut state = kiosk();
        state.session = session(25.5, vec![note(5, 25.5, "2025-01-10T14:03:07Z")]);
        state.error = Some(KioskError::NoBalance);

        let task = request_withdrawal(&mut state);

        assert_eq!(task.units(), 1);
        assert!(state.withdrawing);
        assert!(state.error.is_none());
    }

    #[test]
    fn second_press_while_in_flight_is_ignored() {
        let mut state = kiosk();
        state.session = session(25.5, vec![]);
        let _ = request_withdrawal(&mut state);

        // Balance vanished meanwhile; an unguarded second press would set NoBalance.
        state.session = session(0.0, vec![]);
        let _ = request_withdrawal(&mut state);

        assert!(state.withdrawing);
        assert!(state.error.is_none());
    }

    #[test]
    fn success_switches_to_payout_view() {
        let mut state = kiosk();
        state.session = session(25.5, vec![]);
        let _ = request_withdrawal(&mut state);

        let w = withdrawal(25.5, 7650, 0.0);
        let _ = withdraw_finished(&mut state, Ok(w.clone()));

        assert!(!state.withdrawing);
        assert_eq!(state.screen(), Screen::Payout);
        assert_eq!(state.withdrawal, Some(w));
        assert!(matches!(state.qr, Some(QrStatus::Loading)));
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_surfaces_server_message_and_clears_busy() {
        let mut state = kiosk();
        state.session = session(25.5, vec![]);
        let _ = request_withdrawal(&mut state);

        let _ = withdraw_finished(
            &mut state,
            Err(KioskError::WithdrawalFailed(Some("Serviço Lightning indisponível".into()))),
        );

        assert!(!state.withdrawing);
        assert!(state.withdrawal.is_none());
        assert_eq!(state.screen(), Screen::Ledger);
        assert_eq!(
            state.error.as_ref().map(ToString::to_string).as_deref(),
            Some("Serviço Lightning indisponível")
        );
    }

    #[test]
    fn other_failures_become_generic_withdrawal_error() {
        let mut state = kiosk();
        state.withdrawing = true;

        let _ = withdraw_finished(&mut state, Err(KioskError::Http("timed out".into())));

        assert!(!state.withdrawing);
        assert_eq!(state.error, Some(KioskError::WithdrawalFailed(None)));
        assert_eq!(
            state.error.as_ref().map(ToString::to_string).as_deref(),
            Some("Erro ao gerar saque")
        );
    }
}
