//! HTTP boundary: maps `/api/v1/planets` routes onto `PlanetManager`.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use spaceweather_common::{ErrorBody, ListParams, PlanetPayload};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::BackendConfig;
use crate::error::PlanetError;
use crate::model::planet::{PlanetManager, PlanetQuery};

pub const PLANETS_PATH: &str = "/api/v1/planets";
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

impl IntoResponse for PlanetError {
    fn into_response(self) -> Response {
        let status = match self {
            PlanetError::NotFound(_) => StatusCode::NOT_FOUND,
            PlanetError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        };
        let body = ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Build the application router around a shared manager
pub fn router(manager: Arc<PlanetManager>, enable_cors: bool) -> Router {
    let app = Router::new()
        .route("/health", get(health_check))
        .route("/stats", get(stats))
        .route(PLANETS_PATH, get(list_planets).post(create_planet))
        .route(
            &format!("{}/{{id}}", PLANETS_PATH),
            get(get_planet).put(update_planet).delete(delete_planet),
        )
        .with_state(manager)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        app.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
                .expose_headers([header::LOCATION, HeaderName::from_static(TOTAL_COUNT_HEADER)]),
        )
    } else {
        app
    }
}

/// Bind and serve until ctrl-c
pub async fn serve(config: &BackendConfig, manager: Arc<PlanetManager>) -> anyhow::Result<()> {
    let app = router(manager, config.enable_cors);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn stats(State(manager): State<Arc<PlanetManager>>) -> impl IntoResponse {
    let (total, active) = manager.get_planet_count();
    Json(serde_json::json!({
        "status": "running",
        "service": "spaceweather-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "planets": { "total": total, "active": active },
    }))
}

async fn list_planets(
    State(manager): State<Arc<PlanetManager>>,
    Query(params): Query<ListParams>,
) -> Result<Response, PlanetError> {
    let page = manager.list(&PlanetQuery::from(params))?;
    Ok((
        [(TOTAL_COUNT_HEADER, page.total_count.to_string())],
        Json(page.items),
    )
        .into_response())
}

async fn get_planet(
    State(manager): State<Arc<PlanetManager>>,
    Path(id): Path<i64>,
) -> Result<Response, PlanetError> {
    let planet = manager.get_by_id(id)?;
    Ok(Json(planet).into_response())
}

async fn create_planet(
    State(manager): State<Arc<PlanetManager>>,
    Json(payload): Json<PlanetPayload>,
) -> Response {
    let planet = manager.create(payload);
    let location = format!("{}/{}", PLANETS_PATH, planet.id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(planet),
    )
        .into_response()
}

async fn update_planet(
    State(manager): State<Arc<PlanetManager>>,
    Path(id): Path<i64>,
    Json(payload): Json<PlanetPayload>,
) -> Result<Response, PlanetError> {
    let planet = manager.update(id, payload)?;
    Ok(Json(planet).into_response())
}

async fn delete_planet(
    State(manager): State<Arc<PlanetManager>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, PlanetError> {
    manager.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request};
    use spaceweather_common::PlanetDto;
    use tower::ServiceExt;

    fn seeded_app() -> Router {
        let manager = Arc::new(PlanetManager::new());
        manager.seed_demo_data();
        router(manager, false)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_default_page() {
        let app = seeded_app();
        let response = send(&app, Method::GET, "/api/v1/planets", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[TOTAL_COUNT_HEADER], "5");
        let planets: Vec<PlanetDto> = json(response).await;
        assert_eq!(planets.len(), 5);
        assert_eq!(planets[0].name, "Earth");
        assert_eq!(planets[1].satellites.len(), 2);
    }

    #[tokio::test]
    async fn test_list_with_query_string() {
        let app = seeded_app();
        let response = send(
            &app,
            Method::GET,
            "/api/v1/planets?status=E&sort=name,desc&page=1&size=2",
            None,
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[TOTAL_COUNT_HEADER], "3");
        let planets: Vec<PlanetDto> = json(response).await;
        let names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Neptune", "Jupiter"]);
    }

    #[tokio::test]
    async fn test_list_rejects_zero_size() {
        let app = seeded_app();
        let response = send(&app, Method::GET, "/api/v1/planets?size=0", None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = json(response).await;
        assert_eq!(body.error, "invalid_query");
    }

    #[tokio::test]
    async fn test_out_of_range_page_is_empty() {
        let app = seeded_app();
        let response = send(&app, Method::GET, "/api/v1/planets?page=9", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        let planets: Vec<PlanetDto> = json(response).await;
        assert!(planets.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_planet_is_404() {
        let app = seeded_app();
        let response = send(&app, Method::GET, "/api/v1/planets/42", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorBody = json(response).await;
        assert_eq!(body.error, "not_found");
        assert_eq!(body.message, "planet 42 not found");
    }

    #[tokio::test]
    async fn test_create_update_delete_flow() {
        let app = seeded_app();

        let response = send(
            &app,
            Method::POST,
            "/api/v1/planets",
            Some(r#"{"id": 1, "name": "Venus", "satellites": [{"id": 1, "name": "Zoozve", "weather": "Acid Rain"}]}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/v1/planets/6");
        let created: PlanetDto = json(response).await;
        assert_eq!(created.id, 6);
        assert!(!created.is_active);

        let response = send(
            &app,
            Method::PUT,
            "/api/v1/planets/6",
            Some(r#"{"id": 99, "name": "Venus II", "isActive": true, "satellites": []}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: PlanetDto = json(response).await;
        assert_eq!(updated.id, 6);
        assert_eq!(updated.name, "Venus II");
        assert_eq!(updated.created_date, created.created_date);
        assert!(updated.is_active);
        assert!(updated.satellites.is_empty());

        let response = send(&app, Method::GET, "/api/v1/planets?status=active", None).await;
        let planets: Vec<PlanetDto> = json(response).await;
        assert_eq!(planets.len(), 1);
        assert_eq!(planets[0].id, 6);

        let response = send(&app, Method::DELETE, "/api/v1/planets/6", None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());

        let response = send(&app, Method::DELETE, "/api/v1/planets/6", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Original planet 1 was untouched by the client-supplied id
        let response = send(&app, Method::GET, "/api/v1/planets/1", None).await;
        let earth: PlanetDto = json(response).await;
        assert_eq!(earth.name, "Earth");
    }

    #[tokio::test]
    async fn test_update_missing_planet_is_404() {
        let app = seeded_app();
        let response = send(
            &app,
            Method::PUT,
            "/api/v1/planets/-3",
            Some(r#"{"name": "Nowhere"}"#),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_and_stats() {
        let app = seeded_app();

        let response = send(&app, Method::GET, "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, Method::GET, "/stats", None).await;
        let stats: serde_json::Value = json(response).await;
        assert_eq!(stats["planets"]["total"], 5);
        assert_eq!(stats["planets"]["active"], 0);
    }
}
