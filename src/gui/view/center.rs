//! Center card router (ledger vs payout).

use iced::widget::{button, column, container, text};
use iced::Length;

use super::super::state::{Kiosk, Message, Screen};
use super::balance::build_balance;
use super::ledger::build_ledger;
use super::payout::build_payout;

pub(crate) fn build_center_panel(state: &Kiosk) -> iced::widget::Container<'_, Message> {
    let inner: iced::Element<'_, Message> = match (state.screen(), &state.withdrawal) {
        (Screen::Payout, Some(withdrawal)) => column![
            build_payout(withdrawal, state.qr.as_ref(), state.status.as_deref()),
            button(text("🔄 Nova Transação").size(20).width(Length::Fill).center())
                .on_press(Message::ResetPressed)
                .padding(16)
                .width(Length::Fill),
        ]
        .spacing(24)
        .into(),
        _ => {
            let mut col = column![].spacing(24);
            if let Some(ledger) = build_ledger(&state.session) {
                col = col.push(ledger);
            }
            col.push(build_balance(state)).into()
        }
    };

    container(inner)
        .padding(24)
        .width(Length::Fill)
        .style(container::rounded_box)
}
