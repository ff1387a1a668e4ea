use super::render::render_home;
use super::service::{IngressService, SubmitError};
use super::types::{PeersResponse, SubmitResponse};
use super::validate::parse_link_body;
use crate::peers::address::parse_peer_batch;

use axum::body::Bytes;
use axum::response::Html;
use axum::{Extension, Json, http::StatusCode};
use std::sync::Arc;

pub async fn handle_submit_link(
    Extension(ingress): Extension<Arc<IngressService>>,
    body: Bytes,
) -> (StatusCode, Json<SubmitResponse>) {
    let result = match parse_link_body(&body) {
        Ok(submission) => ingress.submit(submission).await,
        Err(e) => Err(SubmitError::from(e)),
    };

    match result {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SubmitResponse {
                status: "ok",
                outcome: Some(outcome),
                error: None,
            }),
        ),
        Err(SubmitError::Invalid(e)) => {
            tracing::debug!("Rejected link submission: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(SubmitResponse {
                    status: "rejected",
                    outcome: None,
                    error: Some(e.to_string()),
                }),
            )
        }
        Err(SubmitError::Commit(e)) => {
            tracing::error!("Link commit did not complete: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SubmitResponse {
                    status: "failed",
                    outcome: None,
                    error: Some(e.to_string()),
                }),
            )
        }
        Err(SubmitError::Enqueue(e)) => {
            tracing::error!("Failed to queue link for title resolution: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(SubmitResponse {
                    status: "unavailable",
                    outcome: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_announce_peers(
    Extension(ingress): Extension<Arc<IngressService>>,
    body: Bytes,
) -> (StatusCode, Json<PeersResponse>) {
    match parse_peer_batch(&body).and_then(|batch| ingress.announce_peers(batch)) {
        Ok(added) => {
            tracing::debug!("Peer batch accepted: {} new", added);
            (
                StatusCode::OK,
                Json(PeersResponse {
                    status: "ok",
                    added,
                    total: ingress.peer_count(),
                    error: None,
                }),
            )
        }
        Err(e) => {
            tracing::debug!("Rejected peer batch: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(PeersResponse {
                    status: "rejected",
                    added: 0,
                    total: ingress.peer_count(),
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}

pub async fn handle_home(Extension(ingress): Extension<Arc<IngressService>>) -> Html<String> {
    Html(render_home(&ingress.list().await))
}
