//! GUI renderer (reads state, produces widgets; no mutation).

mod balance;
mod center;
mod constants;
mod ledger;
mod payout;
mod widgets;

use iced::widget::{column, container, scrollable};
use iced::{Alignment, Element, Length};

use super::state::{Kiosk, Message};
use constants::CARD_MAX_W;

pub(crate) fn view(state: &Kiosk) -> Element<'_, Message> {
    let page = column![
        widgets::header(),
        center::build_center_panel(state).max_width(CARD_MAX_W),
        widgets::footer(),
    ]
    .spacing(24)
    .padding(24)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    scrollable(container(page).center_x(Length::Fill)).into()
}
