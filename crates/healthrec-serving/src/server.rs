//! HTTP server for the prediction UI.
//!
//! Routes:
//!
//! - `GET /`: the input page
//! - `POST /predict`: form submission, re-renders the page with the result
//! - `POST /api/predict`: JSON prediction
//! - `GET /health`: `ok` once the model is loaded

use crate::config::ServerConfig;
use crate::error::{ServingError, ServingResult};
use crate::model_loader::ModelLoader;
use crate::predictor::Predictor;
use crate::render::render_page;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use healthrec_core::{AdvisoryRecord, PatientInput};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    predictor: Arc<Predictor>,
}

impl AppState {
    /// State around a shared predictor.
    pub fn new(predictor: Arc<Predictor>) -> Self {
        Self { predictor }
    }

    /// State around a loader.
    pub fn from_loader(loader: Arc<ModelLoader>) -> Self {
        Self::new(Arc::new(Predictor::new(loader)))
    }
}

/// Form fields posted by the input page.
///
/// Browsers omit unchecked checkboxes, so the symptoms are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictForm {
    /// Age in years.
    pub age: f64,
    /// Systolic blood pressure in mmHg.
    pub blood_pressure: f64,
    /// Glucose level in mg/dL.
    pub glucose_level: f64,
    /// Heart rate in beats per minute.
    pub heart_rate: f64,
    /// Body mass index.
    pub bmi: f64,
    /// Fever checkbox.
    #[serde(default)]
    pub symptom_fever: Option<String>,
    /// Cough checkbox.
    #[serde(default)]
    pub symptom_cough: Option<String>,
    /// Fatigue checkbox.
    #[serde(default)]
    pub symptom_fatigue: Option<String>,
    /// Pain checkbox.
    #[serde(default)]
    pub symptom_pain: Option<String>,
}

fn is_checked(value: &Option<String>) -> bool {
    match value.as_deref().map(str::trim) {
        None => false,
        Some(v) => !(v.is_empty()
            || v == "0"
            || v.eq_ignore_ascii_case("false")
            || v.eq_ignore_ascii_case("off")),
    }
}

impl From<PredictForm> for PatientInput {
    fn from(form: PredictForm) -> Self {
        PatientInput {
            age: form.age,
            blood_pressure: form.blood_pressure,
            glucose_level: form.glucose_level,
            heart_rate: form.heart_rate,
            bmi: form.bmi,
            symptom_fever: is_checked(&form.symptom_fever),
            symptom_cough: is_checked(&form.symptom_cough),
            symptom_fatigue: is_checked(&form.symptom_fatigue),
            symptom_pain: is_checked(&form.symptom_pain),
        }
    }
}

/// JSON body of a successful `/api/predict` response.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    /// Predicted label.
    pub diagnosis: String,
    /// Whether the label has its own advisory record.
    pub known: bool,
    /// Advice for the label.
    pub recommendations: &'static AdvisoryRecord,
}

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/predict", post(predict_form_handler))
        .route("/api/predict", post(predict_json_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let schema = state.predictor.loader().schema();
    Html(render_page(schema, &PatientInput::default(), None, None))
}

async fn predict_form_handler(
    State(state): State<AppState>,
    form: Result<Form<PredictForm>, FormRejection>,
) -> Response {
    let schema = state.predictor.loader().schema();
    let input: PatientInput = match form {
        Ok(Form(form)) => form.into(),
        Err(rejection) => {
            warn!("Rejected form submission: {}", rejection.body_text());
            let message = format!("Invalid request: {}", rejection.body_text());
            let page = render_page(schema, &PatientInput::default(), None, Some(&message));
            return (StatusCode::BAD_REQUEST, Html(page)).into_response();
        }
    };

    match state.predictor.predict(&input) {
        Ok(outcome) => Html(render_page(schema, &input, Some(&outcome), None)).into_response(),
        Err(e) => {
            if e.is_server_error() {
                error!("Prediction failed: {}", e);
            }
            let page = render_page(schema, &input, None, Some(&e.to_string()));
            (e.status_code(), Html(page)).into_response()
        }
    }
}

async fn predict_json_handler(
    State(state): State<AppState>,
    body: Result<Json<PatientInput>, JsonRejection>,
) -> ServingResult<Json<PredictResponse>> {
    let Json(input) = body.map_err(|rejection| ServingError::invalid_request(rejection.body_text()))?;
    let outcome = state.predictor.predict(&input)?;
    Ok(Json(PredictResponse {
        known: outcome.is_known(),
        diagnosis: outcome.label,
        recommendations: outcome.recommendations,
    }))
}

async fn health_handler(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.predictor.loader().is_loaded() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "model not loaded")
    }
}

/// The prediction web server.
///
/// # Example
///
/// ```no_run
/// use healthrec_serving::config::ServerConfig;
/// use healthrec_serving::server::Server;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let server = Server::new(ServerConfig::default());
/// server.serve().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Server {
    config: ServerConfig,
    loader: Arc<ModelLoader>,
}

impl Server {
    /// Server that loads the artifacts named in `config`.
    pub fn new(config: ServerConfig) -> Self {
        let loader = Arc::new(ModelLoader::new(config.artifact_paths()));
        Self { config, loader }
    }

    /// Server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Router serving this server's model.
    pub fn router(&self) -> Router {
        create_router(AppState::from_loader(Arc::clone(&self.loader)))
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> ServingResult<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Validate the config, load the model, bind and serve until `signal`
    /// resolves.
    ///
    /// The model is loaded before binding, so bad artifacts fail here and
    /// no port is opened.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> ServingResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.config
            .validate()
            .map_err(|e| ServingError::config(e.to_string()))?;
        self.loader.get_or_load()?;

        let addr = self.config.socket_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!("Serving on http://{}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await
            .map_err(|e| ServingError::server(e.to_string()))?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
