//! Alquimia Web Server
//!
//! Axum-based REST API for the Alquimia life-planning application.
//!
//! The server owns one `LifeState` behind a mutex. Every mutation is applied
//! in memory first and then the whole document is written to the store.
//! A failed write keeps the in-memory change and reports a `warning`.
//!
//! Security features:
//! - Restrictive CORS policy
//! - Security headers on every response
//! - Sanitized error responses

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info, warn};

use alquimia_core::{DocumentStore, InsightEngine, LifeState};

mod handlers;

/// Environment variable with comma-separated allowed CORS origins
pub const ALLOWED_ORIGINS_ENV: &str = "ALQUIMIA_ALLOWED_ORIGINS";

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    /// Read configuration from `ALQUIMIA_ALLOWED_ORIGINS`
    pub fn from_env() -> Self {
        Self {
            allowed_origins: std::env::var(ALLOWED_ORIGINS_ENV)
                .map(|v| parse_origins(&v))
                .unwrap_or_default(),
        }
    }
}

/// Parse a comma-separated origin list, skipping blanks
pub fn parse_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Shared application state
pub struct AppState {
    pub life: Mutex<LifeState>,
    pub store: Box<dyn DocumentStore>,
    pub engine: InsightEngine,
    pub config: ServerConfig,
}

impl AppState {
    /// Load the saved document (or defaults) from the store
    pub fn load(store: Box<dyn DocumentStore>, engine: InsightEngine, config: ServerConfig) -> Self {
        let life = LifeState::load_from(store.as_ref());
        Self {
            life: Mutex::new(life),
            store,
            engine,
            config,
        }
    }

    /// Lock the session state
    pub fn lock(&self) -> Result<MutexGuard<'_, LifeState>, AppError> {
        self.life
            .lock()
            .map_err(|_| AppError::internal("State lock poisoned"))
    }

    /// Write the state, returning a warning instead of failing the request
    pub fn persist(&self, life: &LifeState) -> Option<String> {
        match life.persist(self.store.as_ref()) {
            Ok(()) => None,
            Err(e) => {
                warn!(store = self.store.name(), error = %e, "Could not save data");
                Some(format!("Change kept in memory but not saved: {}", e))
            }
        }
    }
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Response to a mutation: the updated value plus an optional save warning
#[derive(Serialize)]
pub struct Saved<T: Serialize> {
    #[serde(flatten)]
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl<T: Serialize> Saved<T> {
    pub fn new(data: T, warning: Option<String>) -> Self {
        Self { data, warning }
    }
}

/// Create the application router
pub fn create_router(
    store: Box<dyn DocumentStore>,
    engine: InsightEngine,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> Router {
    let state = Arc::new(AppState::load(store, engine, config.clone()));

    let api_routes = Router::new()
        .route("/state", get(handlers::get_state))
        .route("/summary", get(handlers::get_summary))
        // Wheel of Life
        .route("/scores", get(handlers::get_scores))
        .route("/scores/:area", put(handlers::set_score))
        .route("/insights", get(handlers::get_insights))
        // SMART goals
        .route(
            "/goals",
            get(handlers::list_goals).post(handlers::create_goal),
        )
        .route(
            "/goals/:index",
            get(handlers::get_goal)
                .put(handlers::update_goal)
                .delete(handlers::delete_goal),
        )
        .route("/goals/:index/complete", post(handlers::complete_goal))
        .route("/goals/:index/reopen", post(handlers::reopen_goal))
        // Check-in history
        .route(
            "/history",
            get(handlers::list_history)
                .post(handlers::check_in)
                .delete(handlers::clear_history),
        )
        // Reflections, vision board and archetypes
        .route("/reflections/:key", put(handlers::set_reflection))
        .route("/vision/:area", put(handlers::set_vision_intention))
        .route("/archetypes/:name", put(handlers::set_archetype_score))
        // Export
        .route("/export/json", get(handlers::export_json))
        .route("/export/csv", get(handlers::export_csv));

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    // CSP: same-origin scripts, inline styles for the static UI, data: images for charts
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' blob: data:; font-src 'self'; connect-src 'self'; frame-ancestors 'none'",
    );

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server with default configuration
pub async fn serve(
    store: Box<dyn DocumentStore>,
    engine: InsightEngine,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
) -> anyhow::Result<()> {
    serve_with_config(store, engine, host, port, static_dir, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    store: Box<dyn DocumentStore>,
    engine: InsightEngine,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if host != "127.0.0.1" && host != "localhost" {
        warn!("⚠️  Listening on {} - the API has no authentication", host);
    }
    info!("Using {} store", store.name());

    let app = create_router(store, engine, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map a core error to the matching status; other errors stay sanitized
    pub fn from_core(err: alquimia_core::Error) -> Self {
        match err {
            alquimia_core::Error::InvalidData(msg) => Self::bad_request(&msg),
            alquimia_core::Error::NotFound(what) => Self::not_found(&format!("{} not found", what)),
            other => other.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
