//! Accumulated total, sats estimate, waiting notice and withdraw button.

use iced::widget::{Column, button, column, container, text};
use iced::{Alignment, Length};

use super::super::state::{Kiosk, Message};
use super::super::util::fmt_brl;
use super::constants::{BUTTON_TEXT, GREEN, MUTED, TOTAL_TEXT};
use super::widgets::error_box;
use crate::core::money::sats_estimate;

/// "≈ N sats": provisional, the payout uses the server's number.
pub(crate) fn estimate_label(total: f64) -> String {
    format!("≈ {} sats", sats_estimate(total))
}

pub(crate) fn withdraw_label(withdrawing: bool) -> &'static str {
    if withdrawing {
        "⚡ Gerando QR Code..."
    } else {
        "⚡ SACAR AGORA"
    }
}

pub(crate) fn build_balance(state: &Kiosk) -> Column<'_, Message> {
    let total = state.session.total_amount;

    let total_panel = container(
        column![
            text("Total Acumulado").size(18),
            text(fmt_brl(total)).size(TOTAL_TEXT).color(GREEN),
            text(estimate_label(total)).size(14).color(MUTED),
        ]
        .spacing(4)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .width(Length::Fill)
    .style(container::bordered_box);

    let mut col = column![total_panel].spacing(16).align_x(Alignment::Center);

    if total == 0.0 {
        col = col.push(
            column![
                text("💵").size(48),
                text("Aguardando inserção de notas...").size(18).color(MUTED),
            ]
            .spacing(8)
            .align_x(Alignment::Center),
        );
    }

    if let Some(e) = &state.error {
        col = col.push(error_box(e.to_string()));
    }

    if total > 0.0 {
        let press = (!state.withdrawing).then_some(Message::WithdrawPressed);
        col = col.push(
            button(
                text(withdraw_label(state.withdrawing))
                    .size(BUTTON_TEXT)
                    .width(Length::Fill)
                    .center(),
            )
            .on_press_maybe(press)
            .padding(20)
            .width(Length::Fill),
        );
    }

    col
}
