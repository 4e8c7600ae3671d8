use axum::Router;

pub mod beers;
pub mod health;

/// Mount point of the beer routes below `/api`
pub const BEERS_PATH: &str = "/v1/beers";

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest(BEERS_PATH, beers::router(state))
}

/// Router with the `/ready` endpoint, merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn in_memory_app() -> Router {
        let state = AppState {
            config: Config {
                app: app_info!(),
                database: None,
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            db: None,
        };

        axum_helpers::create_router::<crate::openapi::ApiDoc>(
            routes(&state),
            &state.config.server,
            &state.config.environment,
        )
        .unwrap()
        .merge(ready_router(state))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_beer_lifecycle_through_full_router() {
        let app = in_memory_app();

        let (status, created) = send(
            &app,
            json_request(
                "POST",
                "/api/v1/beers",
                json!({
                    "name": "Brahma",
                    "brand": "Ambev",
                    "max": 50,
                    "quantity": 10,
                    "type": "LAGER"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_str().unwrap().to_string();

        let (status, beer) = send(
            &app,
            json_request(
                "PATCH",
                &format!("/api/v1/beers/{id}/increment"),
                json!({ "quantity": 10 }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(beer["quantity"], 20);

        let (status, beer) = send(&app, get("/api/v1/beers/Brahma")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(beer["quantity"], 20);

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1/beers/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, beers) = send(&app, get("/api/v1/beers")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(beers, json!([]));
    }

    #[tokio::test]
    async fn test_unknown_route_returns_404() {
        let app = in_memory_app();

        let (status, body) = send(&app, get("/api/v2/wines")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_405() {
        let app = in_memory_app();

        let request = Request::builder()
            .method("PUT")
            .uri("/api/v1/beers")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_ready_without_database() {
        let app = in_memory_app();

        let (status, body) = send(&app, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_openapi_document_lists_beer_routes() {
        let app = in_memory_app();

        let (status, doc) = send(&app, get("/api-docs/openapi.json")).await;
        assert_eq!(status, StatusCode::OK);

        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.keys().any(|path| path.ends_with("/increment")));
        assert!(paths.keys().any(|path| path.ends_with("/decrement")));
        assert_eq!(doc["servers"][0]["url"], "/api");
    }
}
