use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

// Wire types are defined independently from the client crate; the
// integration tests catch schema drift between the two.

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Present {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_id: Option<String>,
    pub present_title: String,
    pub img_url: String,
    pub product_url: String,
    pub bought: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_id: Option<String>,
    pub name: String,
    pub surname: String,
    pub attending: bool,
    pub eating: String,
    pub allergies: String,
    pub textfield: String,
}

/// Echo body for a created present. The real service answers present
/// creation in snake_case, unlike every other payload.
#[derive(Serialize)]
struct PresentCreated {
    present_id: String,
    present_title: String,
    img_url: String,
    product_url: String,
    bought: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmationCreated {
    confirmation_id: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// The two shared secrets the service distinguishes. Guest-reachable routes
/// accept either; dashboard-only routes require the dashboard key.
#[derive(Clone, Debug)]
pub struct Keys {
    pub guest: String,
    pub dashboard: String,
}

pub struct AppState {
    keys: Keys,
    presents: RwLock<HashMap<String, Present>>,
    confirmations: RwLock<HashMap<String, Confirmation>>,
}

type SharedState = Arc<AppState>;

type ErrorReply = (StatusCode, Json<ErrorBody>);

pub fn app(keys: Keys) -> Router {
    let state: SharedState = Arc::new(AppState {
        keys,
        presents: RwLock::new(HashMap::new()),
        confirmations: RwLock::new(HashMap::new()),
    });
    // The stage segment mirrors the deployed URL shape; its value is not
    // interpreted.
    Router::new()
        .route(
            "/{stage}/presents",
            get(list_presents).post(upsert_present).delete(delete_present),
        )
        .route(
            "/{stage}/confirmations",
            get(list_confirmations)
                .post(upsert_confirmation)
                .delete(delete_confirmation),
        )
        .with_state(state)
}

pub async fn run(listener: TcpListener, keys: Keys) -> Result<(), std::io::Error> {
    axum::serve(listener, app(keys)).await
}

fn error_reply(status: StatusCode, message: &str) -> ErrorReply {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

fn unauthorized() -> ErrorReply {
    error_reply(StatusCode::UNAUTHORIZED, "Unauthorized")
}

fn not_found() -> ErrorReply {
    error_reply(StatusCode::NOT_FOUND, "Not Found")
}

fn auth_value<'a>(headers: &'a HeaderMap) -> Option<&'a str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

/// Accept either key.
fn require_any(state: &AppState, headers: &HeaderMap) -> Result<(), ErrorReply> {
    match auth_value(headers) {
        Some(v) if v == state.keys.guest || v == state.keys.dashboard => Ok(()),
        _ => Err(unauthorized()),
    }
}

/// Accept the dashboard key only.
fn require_dashboard(state: &AppState, headers: &HeaderMap) -> Result<(), ErrorReply> {
    match auth_value(headers) {
        Some(v) if v == state.keys.dashboard => Ok(()),
        _ => Err(unauthorized()),
    }
}

// --- presents ---

async fn list_presents(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Present>>, ErrorReply> {
    require_any(&state, &headers)?;
    let presents = state.presents.read().await;
    Ok(Json(presents.values().cloned().collect()))
}

/// POST serves both creation (no id in the body) and update (id present),
/// because the client issues its logical PUTs as POSTs.
async fn upsert_present(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(input): Json<Present>,
) -> Result<Response, ErrorReply> {
    require_any(&state, &headers)?;
    let mut presents = state.presents.write().await;
    match input.present_id.clone() {
        Some(id) => {
            if !presents.contains_key(&id) {
                return Err(not_found());
            }
            presents.insert(id, input.clone());
            Ok((StatusCode::OK, Json(input)).into_response())
        }
        None => {
            let id = Uuid::new_v4().to_string();
            let stored = Present {
                present_id: Some(id.clone()),
                ..input
            };
            let echo = PresentCreated {
                present_id: id.clone(),
                present_title: stored.present_title.clone(),
                img_url: stored.img_url.clone(),
                product_url: stored.product_url.clone(),
                bought: stored.bought,
            };
            presents.insert(id, stored);
            Ok((StatusCode::CREATED, Json(echo)).into_response())
        }
    }
}

#[derive(Deserialize)]
struct DeletePresentParams {
    #[serde(rename = "presentId")]
    present_id: String,
}

async fn delete_present(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<DeletePresentParams>,
) -> Result<StatusCode, ErrorReply> {
    require_dashboard(&state, &headers)?;
    let mut presents = state.presents.write().await;
    presents
        .remove(&params.present_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}

// --- confirmations ---

async fn list_confirmations(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Confirmation>>, ErrorReply> {
    require_dashboard(&state, &headers)?;
    let confirmations = state.confirmations.read().await;
    Ok(Json(confirmations.values().cloned().collect()))
}

async fn upsert_confirmation(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(input): Json<Confirmation>,
) -> Result<Response, ErrorReply> {
    require_any(&state, &headers)?;
    let mut confirmations = state.confirmations.write().await;
    match input.confirmation_id.clone() {
        Some(id) => {
            if !confirmations.contains_key(&id) {
                return Err(not_found());
            }
            confirmations.insert(id, input.clone());
            Ok((StatusCode::OK, Json(input)).into_response())
        }
        None => {
            let id = Uuid::new_v4().to_string();
            let stored = Confirmation {
                confirmation_id: Some(id.clone()),
                ..input
            };
            confirmations.insert(id.clone(), stored);
            let echo = ConfirmationCreated {
                confirmation_id: id,
            };
            Ok((StatusCode::CREATED, Json(echo)).into_response())
        }
    }
}

#[derive(Deserialize)]
struct DeleteConfirmationParams {
    #[serde(rename = "confirmationId")]
    confirmation_id: String,
}

async fn delete_confirmation(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(params): Query<DeleteConfirmationParams>,
) -> Result<StatusCode, ErrorReply> {
    require_dashboard(&state, &headers)?;
    let mut confirmations = state.confirmations.write().await;
    confirmations
        .remove(&params.confirmation_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(not_found)
}
