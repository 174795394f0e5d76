//! HTTP Handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use dashboard_core::{ReportOutcome, generate_report};

use crate::loader;
use crate::state::AppState;

/// The trigger command understood by the service.
const DASHBOARD_COMMAND: &str = "/dashboard";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Inbound update, reduced to the fields the service reads. Everything
/// else in the payload is ignored.
#[derive(Debug, Deserialize)]
pub struct TelegramUpdate {
    #[serde(default)]
    pub message: Option<IncomingMessage>,
}

#[derive(Debug, Deserialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub text: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// Liveness text for platform probes
pub async fn home() -> &'static str {
    "dashboard-bot is alive"
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Webhook ingestion. Always answers 200 so the Bot API does not
/// redeliver; failures are logged and reported to the chat instead.
pub async fn telegram_webhook(
    State(state): State<AppState>,
    Json(update): Json<TelegramUpdate>,
) -> StatusCode {
    let text = update
        .message
        .and_then(|m| m.text)
        .unwrap_or_default();

    if text.trim() == DASHBOARD_COMMAND {
        run_dashboard(&state).await;
    }

    StatusCode::OK
}

/// One full pipeline run: load tables, generate, deliver.
async fn run_dashboard(state: &AppState) {
    let (snapshot, config) = match loader::load_portfolio(&state.config.portfolio_dir) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("portfolio load failed: {e:#}");
            deliver(state, "Input tables unavailable: portfolio data could not be read").await;
            return;
        }
    };

    let outcome = generate_report(&snapshot, &config, state.gateway.as_ref()).await;
    match &outcome {
        ReportOutcome::Report(_) => tracing::info!("dashboard generated"),
        ReportOutcome::Diagnostic(d) => tracing::warn!("dashboard degraded: {d}"),
    }

    deliver(state, outcome.text()).await;
}

async fn deliver(state: &AppState, text: &str) {
    if let Err(e) = state.telegram.send_report(text).await {
        tracing::error!("report delivery failed: {e:#}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_payload_deserializes_with_extra_fields() {
        let update: TelegramUpdate = serde_json::from_str(
            r#"{"update_id":12345,
                "message":{"message_id":1,
                           "chat":{"id":99,"type":"private"},
                           "text":"/dashboard"}}"#,
        )
        .unwrap();

        assert_eq!(update.message.unwrap().text.as_deref(), Some("/dashboard"));
    }

    #[test]
    fn non_message_update_deserializes_empty() {
        let update: TelegramUpdate =
            serde_json::from_str(r#"{"update_id":12345,"edited_message":{}}"#).unwrap();
        assert!(update.message.is_none());
    }
}
