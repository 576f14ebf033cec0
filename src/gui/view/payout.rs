//! Payout view (completed withdrawal).
//!
//! Shows the server's authoritative amounts, the QR image (loading,
//! ready or failed-with-retry), the raw LNURL + copy button and, only
//! when something is left over, the remaining balance.

use iced::widget::{Column, button, column, container, image, text};
use iced::{Alignment, Length};

use super::super::state::{Message, QrStatus};
use super::super::util::fmt_brl;
use super::constants::{AMBER, AMOUNT_TEXT, GREEN, MUTED, QR_DISPLAY, RED, SMALL_TEXT};
use crate::core::types::WithdrawalResult;

/// Formatted payout lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PayoutSummary {
    pub amount: String,
    pub sats: String,
    /// `Some` only when `remaining_balance > 0`.
    pub remaining: Option<String>,
    /// Exactly what the copy button puts on the clipboard.
    pub code: String,
}

impl From<&WithdrawalResult> for PayoutSummary {
    fn from(w: &WithdrawalResult) -> Self {
        Self {
            amount: fmt_brl(w.amount_brl),
            sats: format!("{} satoshis", w.amount_sats),
            remaining: (w.remaining_balance > 0.0).then(|| fmt_brl(w.remaining_balance)),
            code: w.payout_code.clone(),
        }
    }
}

pub(crate) fn build_payout<'a>(
    withdrawal: &'a WithdrawalResult,
    qr: Option<&'a QrStatus>,
    status: Option<&'a str>,
) -> Column<'a, Message> {
    let summary = PayoutSummary::from(withdrawal);

    let amount_panel = container(
        column![
            text("Valor do Saque").size(14),
            text(summary.amount).size(AMOUNT_TEXT).color(GREEN),
            text(summary.sats).size(18),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(container::bordered_box);

    let instructions = column![
        text("📱 Como Sacar").size(18),
        text("1. Abra sua carteira Lightning (Phoenix, Muun, Wallet of Satoshi, etc)"),
        text("2. Escaneie o QR Code acima"),
        text(format!("3. Confirme o recebimento dos {} sats", withdrawal.amount_sats)),
    ]
    .spacing(6);

    let mut copy = column![
        text("Ou copie o código LNURL:").size(SMALL_TEXT).color(MUTED),
        container(text(summary.code).size(SMALL_TEXT))
            .padding(8)
            .width(Length::Fill)
            .style(container::rounded_box),
        button("📋 Copiar LNURL").on_press(Message::CopyPayoutCode),
    ]
    .spacing(6)
    .align_x(Alignment::Center);
    if let Some(notice) = status {
        copy = copy.push(text(notice).size(SMALL_TEXT).color(GREEN));
    }

    let mut col = column![
        text("✅ QR Code Gerado!").size(22),
        amount_panel,
        qr_panel(qr),
        instructions,
        copy,
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    if let Some(remaining) = summary.remaining {
        col = col.push(
            container(text(format!("💰 Saldo restante: {remaining}")).color(AMBER))
                .padding(12)
                .width(Length::Fill)
                .style(container::bordered_box),
        );
    }

    col.push(
        text("⚠️ Este QR code é de uso único e expira em breve")
            .size(SMALL_TEXT)
            .color(MUTED),
    )
}

fn qr_panel(qr: Option<&QrStatus>) -> iced::widget::Container<'_, Message> {
    let inner: iced::Element<'_, Message> = match qr {
        Some(QrStatus::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(QR_DISPLAY))
            .height(Length::Fixed(QR_DISPLAY))
            .into(),
        Some(QrStatus::Failed(reason)) => column![
            text("Não foi possível carregar o QR Code").color(RED),
            text(reason).size(SMALL_TEXT).color(MUTED),
            button("Tentar novamente").on_press(Message::RetryQr),
        ]
        .spacing(8)
        .align_x(Alignment::Center)
        .into(),
        Some(QrStatus::Loading) | None => text("Carregando QR Code...").color(MUTED).into(),
    };

    container(inner)
        .center_x(Length::Fixed(QR_DISPLAY))
        .center_y(Length::Fixed(QR_DISPLAY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::update::test_support::withdrawal;

    #[test]
    fn no_remaining_notice_when_balance_is_zero() {
        let summary = PayoutSummary::from(&withdrawal(25.5, 7650, 0.0));
        assert_eq!(summary.remaining, None);
    }

    #[test]
    fn remaining_notice_when_balance_left() {
        let summary = PayoutSummary::from(&withdrawal(10.0, 3000, 12.5));
        assert_eq!(summary.remaining.as_deref(), Some("R$ 12.50"));
    }

    #[test]
    fn scenario_completed_withdrawal() {
        let mut w = withdrawal(25.5, 7650, 0.0);
        w.payout_code = "LNURL1...".into();

        let summary = PayoutSummary::from(&w);
        assert_eq!(summary.amount, "R$ 25.50");
        assert_eq!(summary.sats, "7650 satoshis");
        assert_eq!(summary.remaining, None);
        assert_eq!(summary.code, "LNURL1...");
    }

    #[test]
    fn copy_text_is_not_upper_cased() {
        let mut w = withdrawal(1.0, 300, 0.0);
        w.payout_code = "lnurl1abc".into();
        assert_eq!(PayoutSummary::from(&w).code, "lnurl1abc");
    }
}
