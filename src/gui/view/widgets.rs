//! Reusable small widgets used across view modules.

use iced::widget::{column, container, text};
use iced::{Alignment, Length};

use super::super::state::Message;
use super::constants::{MUTED, RED, SMALL_TEXT, SUBTITLE_TEXT, TITLE_TEXT};
use crate::core::money::SATS_PER_BRL;

pub(crate) fn error_box(message: String) -> iced::widget::Container<'static, Message> {
    container(text(message).color(RED))
        .padding([12, 16])
        .width(Length::Fill)
        .style(container::bordered_box)
}

pub(crate) fn header() -> iced::widget::Column<'static, Message> {
    column![
        text("⚡ ATM Bitcoin Lightning").size(TITLE_TEXT),
        text("Insira suas notas de Real e saque em Bitcoin").size(SUBTITLE_TEXT),
    ]
    .spacing(6)
    .align_x(Alignment::Center)
}

pub(crate) fn footer() -> iced::widget::Column<'static, Message> {
    column![
        text("🔒 Saque único e seguro via Lightning Network")
            .size(SMALL_TEXT)
            .color(MUTED),
        text(format!("Taxa atual: 1 BRL = {SATS_PER_BRL} sats"))
            .size(SMALL_TEXT)
            .color(MUTED),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
}
