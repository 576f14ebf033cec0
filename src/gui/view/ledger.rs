//! Note ledger (scanned notes list).
//!
//! Pure function of the session's notes: rows come out in scan order,
//! duplicates stay duplicates, and an empty list renders nothing at all.

use iced::widget::{Column, column, container, row, scrollable, text};
use iced::{Alignment, Length};

use super::super::state::Message;
use super::super::util::{fmt_brl, fmt_time_of_day, pulse_time};
use super::constants::{
    GREEN, LEDGER_H, LEDGER_ROW_PAD, LEDGER_SPACING, MUTED, ROW_TEXT, SECTION_TEXT, SMALL_TEXT,
};
use crate::core::types::{Note, Session};

/// One display row, already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LedgerRow {
    pub value: String,
    pub time: String,
    pub pulses: String,
}

pub(crate) fn ledger_rows(notes: &[Note]) -> Vec<LedgerRow> {
    notes
        .iter()
        .map(|n| LedgerRow {
            value: fmt_brl(n.value),
            time: fmt_time_of_day(&n.timestamp),
            pulses: format!("{} pulsos", n.pulses),
        })
        .collect()
}

/// `None` for an empty session: no header, no container.
pub(crate) fn build_ledger(session: &Session) -> Option<Column<'_, Message>> {
    let rows = ledger_rows(&session.notes);
    if rows.is_empty() {
        return None;
    }

    let mut header = row![text("Notas Escaneadas").size(SECTION_TEXT).width(Length::Fill)]
        .align_y(Alignment::Center);
    if let Some(ts) = session.last_pulse_time.and_then(pulse_time) {
        header = header.push(
            text(format!("Último pulso: {}", fmt_time_of_day(&ts)))
                .size(SMALL_TEXT)
                .color(MUTED),
        );
    }

    let mut list = column![].spacing(LEDGER_SPACING);
    for r in rows {
        let cells = row![
            text("💵").size(ROW_TEXT),
            column![
                text(r.value).size(ROW_TEXT).color(GREEN),
                text(r.time).size(SMALL_TEXT).color(MUTED),
            ]
            .width(Length::Fill),
            text(r.pulses).size(14).color(MUTED),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        list = list.push(
            container(cells)
                .padding(LEDGER_ROW_PAD)
                .width(Length::Fill)
                .style(container::bordered_box),
        );
    }

    Some(
        column![header, scrollable(list).height(Length::Fixed(LEDGER_H))]
            .spacing(12)
            .width(Length::Fill),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::update::test_support::{note, session};

    #[test]
    fn empty_ledger_renders_nothing() {
        assert!(ledger_rows(&[]).is_empty());
        assert!(build_ledger(&session(0.0, vec![])).is_none());
    }

    #[test]
    fn one_row_per_note_in_scan_order() {
        let notes = vec![
            note(2, 10.0, "2025-01-10T14:00:00Z"),
            note(1, 5.0, "2025-01-10T14:01:00Z"),
            note(10, 50.0, "2025-01-10T14:02:00Z"),
        ];

        let rows = ledger_rows(&notes);
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, ["R$ 10.00", "R$ 5.00", "R$ 50.00"]);
    }

    #[test]
    fn duplicates_are_separate_rows() {
        let n = note(4, 20.0, "2025-01-10T14:00:00Z");
        let rows = ledger_rows(&[n.clone(), n]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], rows[1]);
    }

    #[test]
    fn scenario_single_note_row() {
        let s = session(25.5, vec![note(5, 25.5, "2025-01-10T14:03:07Z")]);
        let rows = ledger_rows(&s.notes);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].value, "R$ 25.50");
        assert_eq!(rows[0].pulses, "5 pulsos");
        assert_eq!(rows[0].time.len(), "HH:MM:SS".len());
        assert!(build_ledger(&s).is_some());
    }
}
