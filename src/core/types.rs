//! Core data types shared between the backend client and the UI.
//!
//! Rule of thumb:
//! - These structs are “boring bags of data” decoded from the backend JSON
//! - No GUI code
//! - No HTTP code
//!
//! Field names are English; `serde` renames map them onto the backend's
//! wire names (`pulsos`, `valor`, `saldoRestante`, ...).

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// One scanned banknote, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Note {
    /// Pulses counted by the note acceptor (proportional to value).
    #[serde(rename = "pulsos")]
    pub pulses: u32,

    /// Declared value in BRL.
    #[serde(rename = "valor")]
    pub value: f64,

    /// When the note was captured.
    pub timestamp: DateTime<Utc>,
}

/// Current accumulation state of the kiosk session.
///
/// The server is the only authority: every successful poll replaces this
/// wholesale, nothing is merged client-side.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Total BRL accumulated (server keeps it equal to the sum of `notes`).
    pub total_amount: f64,

    /// Notes in scan order.
    #[serde(default)]
    pub notes: Vec<Note>,

    /// Last acceptor pulse, epoch milliseconds.
    #[serde(default)]
    pub last_pulse_time: Option<i64>,
}

impl Session {
    /// Sum of the note values, used only to sanity-check `total_amount`.
    pub fn notes_sum(&self) -> f64 {
        self.notes.iter().map(|n| n.value).sum()
    }

    /// True when the server total disagrees with its own notes
    /// by more than half a centavo.
    pub fn total_mismatch(&self) -> bool {
        (self.total_amount - self.notes_sum()).abs() > 0.005
    }
}

/// Outcome of `POST /api/withdraw`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WithdrawalResult {
    pub success: bool,

    /// LNURL-withdraw code (case-insensitive). Copied to the clipboard verbatim.
    #[serde(rename = "lnurl")]
    pub payout_code: String,

    /// Opaque withdrawal identifier.
    pub id: String,

    #[serde(rename = "amountBRL")]
    pub amount_brl: f64,

    /// Authoritative sats amount (never the client-side estimate).
    #[serde(rename = "amountSats", deserialize_with = "sats_from_number")]
    pub amount_sats: u64,

    /// Balance left in the session after this withdrawal.
    #[serde(rename = "saldoRestante")]
    pub remaining_balance: f64,

    pub url: String,
}

/// `amountSats` is any JSON number. A backend that multiplies without
/// flooring sends `7650.0` or `7653.000000000001`; both floor to whole sats.
fn sats_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let sats = f64::deserialize(deserializer)?;
    if sats.is_finite() && sats >= 0.0 {
        Ok(sats.floor() as u64)
    } else {
        Err(D::Error::custom(format!("invalid amountSats {sats}")))
    }
}

/// Body of `POST /api/withdraw`.
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawRequest {
    pub amount: f64,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_session_payload() {
        let json = r#"{
            "totalAmount": 25.5,
            "notes": [{"pulsos": 5, "valor": 25.5, "timestamp": "2025-01-10T14:03:07.000Z"}],
            "lastPulseTime": 1736517787000
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.total_amount, 25.5);
        assert_eq!(session.notes.len(), 1);
        assert_eq!(session.notes[0].pulses, 5);
        assert_eq!(session.notes[0].value, 25.5);
        assert_eq!(
            session.notes[0].timestamp.to_rfc3339(),
            "2025-01-10T14:03:07+00:00"
        );
        assert_eq!(session.last_pulse_time, Some(1_736_517_787_000));
        assert!(!session.total_mismatch());
    }

    #[test]
    fn decodes_empty_session_with_null_pulse_time() {
        let json = r#"{"totalAmount": 0, "notes": [], "lastPulseTime": null}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn missing_optional_fields_default() {
        let session: Session = serde_json::from_str(r#"{"totalAmount": 2}"#).unwrap();
        assert!(session.notes.is_empty());
        assert_eq!(session.last_pulse_time, None);
        // 2 BRL with no notes is inconsistent.
        assert!(session.total_mismatch());
    }

    #[test]
    fn decodes_withdrawal_result() {
        let json = r#"{
            "success": true,
            "lnurl": "LNURL1DP68GURN8GHJ7",
            "id": "w-42",
            "amountBRL": 25.5,
            "amountSats": 7650,
            "saldoRestante": 0,
            "url": "https://example.invalid/withdraw/w-42"
        }"#;

        let w: WithdrawalResult = serde_json::from_str(json).unwrap();
        assert!(w.success);
        assert_eq!(w.payout_code, "LNURL1DP68GURN8GHJ7");
        assert_eq!(w.id, "w-42");
        assert_eq!(w.amount_sats, 7650);
        assert_eq!(w.remaining_balance, 0.0);
    }

    fn withdrawal_with_sats(sats: &str) -> Result<WithdrawalResult, serde_json::Error> {
        serde_json::from_str(&format!(
            r#"{{"success": true, "lnurl": "LNURL1X", "id": "w-1", "amountBRL": 25.5,
                "amountSats": {sats}, "saldoRestante": 0, "url": ""}}"#
        ))
    }

    #[test]
    fn float_sats_amount_is_accepted_and_floored() {
        assert_eq!(withdrawal_with_sats("7650.0").unwrap().amount_sats, 7650);
        assert_eq!(withdrawal_with_sats("7653.000000000001").unwrap().amount_sats, 7653);
        assert_eq!(withdrawal_with_sats("7650").unwrap().amount_sats, 7650);
    }

    #[test]
    fn negative_sats_amount_is_rejected() {
        assert!(withdrawal_with_sats("-1").is_err());
    }

    #[test]
    fn withdraw_request_uses_amount_field() {
        let body = serde_json::to_string(&WithdrawRequest { amount: 25.5 }).unwrap();
        assert_eq!(body, r#"{"amount":25.5}"#);
    }

    #[test]
    fn error_body_tolerates_missing_message() {
        let e: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(e.error, None);

        let e: ErrorBody = serde_json::from_str(r#"{"error":"Saldo insuficiente"}"#).unwrap();
        assert_eq!(e.error.as_deref(), Some("Saldo insuficiente"));
    }
}
