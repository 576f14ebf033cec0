//! GUI state + messages.
//! Pure data definitions used by update/ + view/.

use iced::widget::image;
use std::time::Duration;

use crate::core::api::KioskClient;
use crate::core::error::KioskError;
use crate::core::types::{Session, WithdrawalResult};

/// Which renderer the center card shows. Binary by construction:
/// a held `WithdrawalResult` means payout, otherwise ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Ledger,
    Payout,
}

/// QR image fetch status for the current payout.
#[derive(Debug, Clone)]
pub(crate) enum QrStatus {
    Loading,
    Ready(image::Handle),
    Failed(String),
}

/// App state. The one and only owner of session/withdrawal data;
/// renderers get `&Kiosk`.
pub(crate) struct Kiosk {
    pub client: KioskClient,

    // Session (replaced wholesale by each applied poll)
    pub session: Session,

    // Polling
    pub poll_interval: Duration,
    /// False after shutdown; the subscription drops the timer.
    pub polling: bool,
    /// Sequence number of the last poll sent.
    pub poll_seq: u64,
    /// Sequence number of the last poll response applied.
    pub applied_seq: u64,

    // Withdrawal
    pub withdrawing: bool,
    pub withdrawal: Option<WithdrawalResult>,
    pub qr: Option<QrStatus>,

    // Feedback
    pub error: Option<KioskError>,
    /// Transient notice (copy confirmation).
    pub status: Option<String>,
}

impl Kiosk {
    pub(crate) fn new(client: KioskClient, poll_interval: Duration) -> Self {
        Self {
            client,
            session: Session::default(),

            poll_interval,
            polling: true,
            poll_seq: 0,
            applied_seq: 0,

            withdrawing: false,
            withdrawal: None,
            qr: None,

            error: None,
            status: None,
        }
    }

    pub(crate) fn screen(&self) -> Screen {
        if self.withdrawal.is_some() {
            Screen::Payout
        } else {
            Screen::Ledger
        }
    }
}

/// Message = “something happened”.
#[derive(Debug, Clone)]
pub(crate) enum Message {
    // Polling
    PollTick,
    SessionFetched(u64, Result<Session, KioskError>),

    // Withdrawal
    WithdrawPressed,
    WithdrawFinished(Result<WithdrawalResult, KioskError>),

    // Payout view
    QrFetched(String, Result<image::Handle, KioskError>),
    RetryQr,
    CopyPayoutCode,

    // Reset
    ResetPressed,
    ResetFinished(Result<(), KioskError>),

    // Teardown
    Shutdown,
}
