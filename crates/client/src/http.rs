//! Low-level HTTP binding to the stock-movement API.
//!
//! Paths and payload shapes here mirror the backend contract exactly; the
//! higher layers (`store`, `lifecycle`, `distribution`) add the client's
//! semantics on top. Every call attaches the session's bearer credential
//! and maps failures into the client error taxonomy: listings fail as
//! `FetchFailed`, mutations as `ActionFailed`. Error bodies are expected
//! to carry a `detail` string (`message` as a fallback).

use chrono::{DateTime, Utc};
use serde::Deserialize;

use wareflow_auth::{CurrentUser, Session};
use wareflow_core::{MovementId, ProductId, ReferenceId, RequestId, UserId, WarehouseId};
use wareflow_movements::{
    NewStockMovement, NewStockTransfer, StockDistribution, StockMovementRequest,
};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// A committed movement from the movement log.
///
/// `quantity` is signed here (outbound legs are negative) and transfers
/// appear as two `transfer_out`/`transfer_in` rows sharing `reference_id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovementRecord {
    pub id: MovementId,
    pub product_id: ProductId,
    pub warehouse_id: WarehouseId,
    pub movement_type: String,
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub reference_id: Option<ReferenceId>,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Response to recording a single-warehouse movement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MovementCreated {
    pub message: String,
    pub movement_id: MovementId,
}

/// Response to recording a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferCreated {
    pub message: String,
    pub reference_id: ReferenceId,
    pub from_id: MovementId,
    pub to_id: MovementId,
}

/// Approver decision on a pending request, named as the endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Approve,
    Reject,
}

impl RequestAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestAction::Approve => "approve",
            RequestAction::Reject => "reject",
        }
    }
}

/// HTTP client bound to one backend.
///
/// Cheap to clone behind an `Arc`; holds no session state, as the session
/// is passed to each call.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::fetch(format!("failed to build http client: {e}")))?;

        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            http,
        })
    }

    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Resolve the user behind a bearer token and bind both into a session.
    pub async fn establish_session(&self, token: impl Into<String>) -> ClientResult<Session> {
        let token = token.into();
        let user = self.current_user(&token).await?;
        Ok(Session::new(token, user))
    }

    /// `GET /auth/me`
    pub async fn current_user(&self, token: &str) -> ClientResult<CurrentUser> {
        let response = self
            .http
            .get(self.url("/auth/me"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ClientError::fetch(transport_message(&e)))?;

        decode_or_fetch_error(response).await
    }

    /// `GET /stock-movements/requests/mine`
    pub async fn list_my_requests(
        &self,
        session: &Session,
    ) -> ClientResult<Vec<StockMovementRequest>> {
        self.get_list(session, "/stock-movements/requests/mine").await
    }

    /// `GET /stock-movements/requests/pending`
    pub async fn list_pending_requests(
        &self,
        session: &Session,
    ) -> ClientResult<Vec<StockMovementRequest>> {
        self.get_list(session, "/stock-movements/requests/pending").await
    }

    async fn get_list(
        &self,
        session: &Session,
        path: &str,
    ) -> ClientResult<Vec<StockMovementRequest>> {
        tracing::debug!(path, "listing movement requests");

        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(session.bearer())
            .send()
            .await
            .map_err(|e| ClientError::fetch(transport_message(&e)))?;

        decode_or_fetch_error(response).await
    }

    /// `GET /stock-movements`
    pub async fn list_movements(&self, session: &Session) -> ClientResult<Vec<MovementRecord>> {
        let response = self
            .http
            .get(self.url("/stock-movements"))
            .bearer_auth(session.bearer())
            .send()
            .await
            .map_err(|e| ClientError::fetch(transport_message(&e)))?;

        decode_or_fetch_error(response).await
    }

    /// `GET /stock-movements/stock/{product_id}`
    pub async fn stock_distribution(
        &self,
        session: &Session,
        product_id: ProductId,
    ) -> ClientResult<StockDistribution> {
        let response = self
            .http
            .get(self.url(&format!("/stock-movements/stock/{product_id}")))
            .bearer_auth(session.bearer())
            .send()
            .await
            .map_err(|e| ClientError::fetch(transport_message(&e)))?;

        decode_or_fetch_error(response).await
    }

    /// `POST /stock-movements`
    pub async fn create_movement(
        &self,
        session: &Session,
        draft: &NewStockMovement,
    ) -> ClientResult<MovementCreated> {
        tracing::debug!(
            product_id = %draft.product_id,
            kind = draft.movement_type.as_str(),
            "recording stock movement"
        );

        let response = self
            .http
            .post(self.url("/stock-movements"))
            .bearer_auth(session.bearer())
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::action(transport_message(&e)))?;

        decode_or_action_error(response).await
    }

    /// `POST /stock-movements/transfers`
    pub async fn create_transfer(
        &self,
        session: &Session,
        draft: &NewStockTransfer,
    ) -> ClientResult<TransferCreated> {
        tracing::debug!(product_id = %draft.product_id, "recording stock transfer");

        let response = self
            .http
            .post(self.url("/stock-movements/transfers"))
            .bearer_auth(session.bearer())
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::action(transport_message(&e)))?;

        decode_or_action_error(response).await
    }

    /// `POST /stock-movements/requests/{id}/{action}`
    ///
    /// One transport function for both decisions, parameterized by the
    /// action name; `reason` accompanies rejections.
    pub async fn decide_request(
        &self,
        session: &Session,
        id: RequestId,
        action: RequestAction,
        reason: Option<&str>,
    ) -> ClientResult<()> {
        tracing::debug!(request_id = %id, action = action.as_str(), "deciding request");

        let mut body = serde_json::Map::new();
        if let Some(reason) = reason {
            body.insert("reason".to_string(), serde_json::Value::from(reason));
        }

        let response = self
            .http
            .post(self.url(&format!(
                "/stock-movements/requests/{id}/{}",
                action.as_str()
            )))
            .bearer_auth(session.bearer())
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::action(transport_message(&e)))?;

        ack_or_action_error(response).await
    }

    /// `DELETE /stock-movements/requests/{id}`
    ///
    /// Shared by cancellation of a pending request and dismissal of a
    /// rejected one; the lifecycle layer keeps the two as distinct
    /// operations over this single transport call.
    pub async fn delete_request(&self, session: &Session, id: RequestId) -> ClientResult<()> {
        tracing::debug!(request_id = %id, "deleting request");

        let response = self
            .http
            .delete(self.url(&format!("/stock-movements/requests/{id}")))
            .bearer_auth(session.bearer())
            .send()
            .await
            .map_err(|e| ClientError::action(transport_message(&e)))?;

        ack_or_action_error(response).await
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "request timed out".to_string()
    } else {
        format!("network error: {err}")
    }
}

/// Pull the server's message out of an error body.
///
/// The backend reports failures as `{"detail": "..."}`; a `message` field
/// is accepted as a fallback, anything else degrades to a generic line.
async fn server_message(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.json::<serde_json::Value>().await.ok();

    body.as_ref()
        .and_then(|v| {
            v.get("detail")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

async fn decode_or_fetch_error<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<T> {
    if !response.status().is_success() {
        return Err(ClientError::fetch(server_message(response).await));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::fetch(format!("malformed response: {e}")))
}

async fn decode_or_action_error<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<T> {
    if !response.status().is_success() {
        return Err(ClientError::action(server_message(response).await));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::action(format!("malformed response: {e}")))
}

async fn ack_or_action_error(response: reqwest::Response) -> ClientResult<()> {
    if !response.status().is_success() {
        return Err(ClientError::action(server_message(response).await));
    }
    Ok(())
}
