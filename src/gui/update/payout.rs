//! gui/update/payout.rs
//! Payout view side effects: QR image fetch (+ retry) and clipboard copy.
//!
//! QR results are keyed by withdrawal id. A result for a withdrawal that is
//! no longer on screen (reset happened meanwhile) is dropped.

use iced::Task;
use iced::widget::image;
use tracing::{debug, warn};

use super::super::state::{Kiosk, Message, QrStatus};
use crate::core::error::KioskError;
use crate::core::types::WithdrawalResult;

pub(crate) const COPIED_NOTICE: &str = "LNURL copiado!";

/// Start downloading the QR image for `withdrawal`.
pub(crate) fn fetch_qr(state: &Kiosk, withdrawal: &WithdrawalResult) -> Task<Message> {
    let client = state.client.clone();
    let id = withdrawal.id.clone();
    let code = withdrawal.payout_code.clone();

    Task::perform(
        async move {
            client
                .fetch_qr_image(&code)
                .await
                .map(image::Handle::from_bytes)
        },
        move |result| Message::QrFetched(id, result),
    )
}

pub(crate) fn qr_fetched(
    state: &mut Kiosk,
    id: String,
    result: Result<image::Handle, KioskError>,
) -> Task<Message> {
    if state.withdrawal.as_ref().map(|w| w.id.as_str()) != Some(id.as_str()) {
        debug!(%id, "dropping QR image for a payout no longer shown");
        return Task::none();
    }

    state.qr = Some(match result {
        Ok(handle) => QrStatus::Ready(handle),
        Err(e) => {
            warn!(%id, error = %e, "QR image fetch failed");
            QrStatus::Failed(e.to_string())
        }
    });

    Task::none()
}

pub(crate) fn retry_qr(state: &mut Kiosk) -> Task<Message> {
    let Some(withdrawal) = state.withdrawal.as_ref() else {
        return Task::none();
    };
    if matches!(state.qr, Some(QrStatus::Loading)) {
        return Task::none();
    }

    let task = fetch_qr(state, withdrawal);
    state.qr = Some(QrStatus::Loading);
    task
}

/// Copy the raw payout code, exactly as the backend sent it.
pub(crate) fn copy_payout_code(state: &mut Kiosk) -> Task<Message> {
    let Some(withdrawal) = state.withdrawal.as_ref() else {
        return Task::none();
    };

    let code = withdrawal.payout_code.clone();
    state.status = Some(COPIED_NOTICE.to_string());
    iced::clipboard::write(code)
}
