//! core/api.rs
//!
//! HTTP client for the kiosk backend and the QR rendering service.
//!
//! Three backend calls, all JSON:
//! - `GET  /api/session`  -> `Session`
//! - `POST /api/withdraw` -> `WithdrawalResult` (non-2xx carries `{ error }`)
//! - `POST /api/reset`    -> body ignored
//!
//! Plus one read-only image GET against the QR service.
//!
//! `KioskClient` is cheap to clone (reqwest's client is an `Arc` inside), so the
//! GUI clones it into every `Task::perform` future.

use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::config::KioskConfig;
use super::error::{KioskError, Result};
use super::types::{ErrorBody, Session, WithdrawRequest, WithdrawalResult};

const SESSION_PATH: &str = "/api/session";
const WITHDRAW_PATH: &str = "/api/withdraw";
const RESET_PATH: &str = "/api/reset";

#[derive(Debug, Clone)]
pub struct KioskClient {
    http: Client,
    base: Url,
    qr_service: Url,
    qr_size: u32,
}

impl KioskClient {
    pub fn new(config: &KioskConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        let base = Url::parse(&config.api_url)
            .map_err(|e| KioskError::Config(format!("api_url {:?}: {e}", config.api_url)))?;
        let qr_service = Url::parse(&config.qr_service_url).map_err(|e| {
            KioskError::Config(format!("qr_service_url {:?}: {e}", config.qr_service_url))
        })?;

        Ok(Self {
            http,
            base,
            qr_service,
            qr_size: config.qr_size,
        })
    }

    /// Full URL for a backend path. Keeps any path prefix on the base.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    pub async fn fetch_session(&self) -> Result<Session> {
        let resp = self.http.get(self.endpoint(SESSION_PATH)).send().await?;
        let resp = check_status(resp, SESSION_PATH)?;
        Ok(resp.json::<Session>().await?)
    }

    /// Submit the whole accumulated amount for withdrawal.
    ///
    /// Every failure collapses into `WithdrawalFailed`; only a server-supplied
    /// `error` string is kept, the rest is logged.
    pub async fn request_withdrawal(&self, amount: f64) -> Result<WithdrawalResult> {
        let resp = self
            .http
            .post(self.endpoint(WITHDRAW_PATH))
            .json(&WithdrawRequest { amount })
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "withdraw request failed to send");
                KioskError::WithdrawalFailed(None)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error.filter(|m| !m.trim().is_empty()),
                Err(e) => {
                    warn!(%status, error = %e, "withdraw error body unreadable");
                    None
                }
            };
            return Err(KioskError::WithdrawalFailed(message));
        }

        let result = resp.json::<WithdrawalResult>().await.map_err(|e| {
            warn!(error = %e, "withdraw response undecodable");
            KioskError::WithdrawalFailed(None)
        })?;

        if !result.success {
            warn!(id = %result.id, "backend answered withdraw with success=false");
            return Err(KioskError::WithdrawalFailed(None));
        }

        Ok(result)
    }

    pub async fn reset_session(&self) -> Result<()> {
        let resp = self.http.post(self.endpoint(RESET_PATH)).send().await?;
        check_status(resp, RESET_PATH)?;
        Ok(())
    }

    /// QR service URL for a payout code: upper-cased (denser QR alphanumeric
    /// mode) and URL-encoded.
    pub fn qr_image_url(&self, payout_code: &str) -> Url {
        let mut url = self.qr_service.clone();
        url.query_pairs_mut()
            .append_pair("size", &format!("{0}x{0}", self.qr_size))
            .append_pair("data", &payout_code.to_uppercase());
        url
    }

    /// Download the QR image bytes for a payout code.
    pub async fn fetch_qr_image(&self, payout_code: &str) -> Result<Vec<u8>> {
        let url = self.qr_image_url(payout_code);
        debug!(%url, "requesting QR image");

        let resp = self.http.get(url).send().await?;
        let resp = check_status(resp, self.qr_service.path())?;
        Ok(resp.bytes().await?.to_vec())
    }
}

fn check_status(resp: reqwest::Response, path: &str) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(status_error(status, path))
    }
}

fn status_error(status: StatusCode, path: &str) -> KioskError {
    KioskError::Status {
        status: status.as_u16(),
        path: path.to_string(),
    }
}
