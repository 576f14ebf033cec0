//! View constants (layout/sizing/colors).

use iced::Color;

pub(crate) const CARD_MAX_W: f32 = 720.0;

pub(crate) const TITLE_TEXT: f32 = 36.0;
pub(crate) const SUBTITLE_TEXT: f32 = 18.0;
pub(crate) const SECTION_TEXT: f32 = 20.0;
pub(crate) const TOTAL_TEXT: f32 = 56.0;
pub(crate) const AMOUNT_TEXT: f32 = 36.0;
pub(crate) const ROW_TEXT: f32 = 22.0;
pub(crate) const SMALL_TEXT: f32 = 12.0;
pub(crate) const BUTTON_TEXT: f32 = 24.0;

// ledger
pub(crate) const LEDGER_H: f32 = 240.0;
pub(crate) const LEDGER_ROW_PAD: f32 = 12.0;
pub(crate) const LEDGER_SPACING: f32 = 8.0;

// payout
pub(crate) const QR_DISPLAY: f32 = 400.0;

pub(crate) const GREEN: Color = Color::from_rgb(0.08, 0.50, 0.24);
pub(crate) const RED: Color = Color::from_rgb(0.73, 0.11, 0.11);
pub(crate) const AMBER: Color = Color::from_rgb(0.57, 0.38, 0.02);
pub(crate) const MUTED: Color = Color::from_rgb(0.42, 0.45, 0.50);
