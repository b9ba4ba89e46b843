// 🌐 Web Server - Views, navigation, entry forms and a small JSON API
//
// Entry submissions call the spreadsheet synchronously; they run on the
// blocking pool so the runtime keeps serving other requests.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use chrono::{Local, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::connector::SheetConnector;
use crate::error::{ConnectorError, EntryError};
use crate::form::{submit_form, RawEntryForm};
use crate::ledger::{EntryType, LedgerRow};
use crate::navigator::{Action, Navigator, View};
use crate::pages::{render, Notice, PageContext};

const STYLESHEET: &str = include_str!("../web/style.css");

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    connector: Arc<dyn SheetConnector>,
    dashboard_url: Arc<str>,
    today: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl AppState {
    pub fn new(connector: Arc<dyn SheetConnector>, dashboard_url: impl Into<String>) -> Self {
        let dashboard_url: String = dashboard_url.into();
        AppState {
            connector,
            dashboard_url: Arc::from(dashboard_url),
            today: local_today,
        }
    }

    /// Replace the clock used for defaults and the future-date check
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn today(&self) -> NaiveDate {
        (self.today)()
    }
}

// ============================================================================
// API Types
// ============================================================================

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Appended row (as returned by the API)
#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct EntryResponse {
    #[serde(rename = "type")]
    entry_type: String,
    category: String,
    date: String,
    year: i32,
    amount: String,
}

impl From<LedgerRow> for EntryResponse {
    fn from(row: LedgerRow) -> Self {
        Self {
            entry_type: row.entry_type.as_str().to_string(),
            date: row.date_string(),
            year: row.year(),
            amount: row.amount_string(),
            category: row.category,
        }
    }
}

#[derive(Deserialize)]
struct CreateEntryRequest {
    #[serde(rename = "type")]
    entry_type: EntryType,
    category: String,
    date: String,
    amount: f64,
}

#[derive(Deserialize)]
struct ViewQuery {
    view: Option<String>,
}

#[derive(Deserialize)]
struct NavigateForm {
    #[serde(default)]
    from: Option<String>,
    action: String,
    #[serde(default)]
    target: Option<String>,
}

// ============================================================================
// Submission
// ============================================================================

async fn run_submission(
    state: &AppState,
    entry_type: EntryType,
    raw: RawEntryForm,
    today: NaiveDate,
) -> Result<LedgerRow, EntryError> {
    let connector = Arc::clone(&state.connector);

    tokio::task::spawn_blocking(move || submit_form(connector.as_ref(), entry_type, &raw, today))
        .await
        .unwrap_or_else(|e| {
            Err(EntryError::Connection(ConnectorError::Api(format!(
                "submission task failed: {}",
                e
            ))))
        })
}

fn status_for(error: &EntryError) -> StatusCode {
    if error.is_validation() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::BAD_GATEWAY
    }
}

fn view_location(view: View) -> String {
    match view {
        View::Home => "/".to_string(),
        other => format!("/?view={}", other),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /?view=<name> - Render a view
async fn serve_view(State(state): State<AppState>, Query(query): Query<ViewQuery>) -> Html<String> {
    let navigator = Navigator::resume(query.view.as_deref());
    let ctx = PageContext::new(state.today(), &state.dashboard_url);
    Html(render(navigator.current(), &ctx))
}

/// POST /navigate - Apply a button press and redirect to the next view
async fn navigate(Form(form): Form<NavigateForm>) -> Redirect {
    let mut navigator = Navigator::resume(form.from.as_deref());

    let next = match Action::parse(&form.action, form.target.as_deref()) {
        Ok(action) => navigator.dispatch(action),
        Err(e) => {
            warn!("Ignoring navigation request: {}", e);
            View::Home
        }
    };

    Redirect::to(&view_location(next))
}

/// POST /entries/:entry_type - Submit an entry form
async fn submit_entry_form(
    State(state): State<AppState>,
    Path(entry): Path<String>,
    Form(raw): Form<RawEntryForm>,
) -> Response {
    let entry_type = match entry.parse::<EntryType>() {
        Ok(entry_type) => entry_type,
        Err(e) => return (StatusCode::NOT_FOUND, e.to_string()).into_response(),
    };

    let today = state.today();
    let view = View::for_entry(entry_type);
    let ctx = PageContext::new(today, &state.dashboard_url);

    match run_submission(&state, entry_type, raw.clone(), today).await {
        Ok(_) => {
            // Keep date and category, clear the amount
            let form = RawEntryForm {
                amount: String::new(),
                ..raw
            };
            let ctx = ctx
                .with_form(form)
                .with_notice(Notice::success(entry_type.success_message()));
            (StatusCode::OK, Html(render(view, &ctx))).into_response()
        }
        Err(e) => {
            let ctx = ctx.with_form(raw).with_notice(Notice::error(e.user_message()));
            (status_for(&e), Html(render(view, &ctx))).into_response()
        }
    }
}

/// GET /static/style.css
async fn serve_stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}

/// GET /api/health - Health check
async fn api_health() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/categories - Category options per entry type
async fn api_categories() -> impl IntoResponse {
    let categories: BTreeMap<&str, &[&str]> = EntryType::ALL
        .into_iter()
        .map(|entry_type| (entry_type.as_str(), entry_type.categories()))
        .collect();

    Json(ApiResponse::ok(categories))
}

/// POST /api/entries - Append one entry from JSON
async fn api_create_entry(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return (
                rejection.status(),
                Json(ApiResponse::<EntryResponse>::err(rejection.body_text())),
            )
                .into_response()
        }
    };

    let raw = RawEntryForm {
        date: request.date,
        category: request.category,
        amount: request.amount.to_string(),
    };

    match run_submission(&state, request.entry_type, raw, state.today()).await {
        Ok(row) => (StatusCode::CREATED, Json(ApiResponse::ok(EntryResponse::from(row)))).into_response(),
        Err(e) => (
            status_for(&e),
            Json(ApiResponse::<EntryResponse>::err(e.user_message())),
        )
            .into_response(),
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api_health))
        .route("/categories", get(api_categories))
        .route("/entries", post(api_create_entry))
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/", get(serve_view))
        .route("/navigate", post(navigate))
        .route("/entries/:entry_type", post(submit_entry_form))
        .route("/static/style.css", get(serve_stylesheet))
        .nest("/api", api_routes)
        .with_state(state)
}
