use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};

use rota_types::api::{
    CreateRotaRequest, DeleteRotaResponse, RandomChoreResponse, RotaEntryResponse,
};

use crate::error::RotaError;
use crate::service::RotaService;

pub type AppState = Arc<RotaService>;

/// The `/api` routes. Static assets and middleware are layered on by the
/// server binary.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chores", get(list_chores))
        .route("/api/random-chore", get(random_chore))
        .route("/api/rota", get(list_rota).post(create_rota))
        .route("/api/rota/{id}", delete(delete_rota))
        .with_state(state)
}

pub async fn list_chores(State(service): State<AppState>) -> Json<&'static [&'static str]> {
    Json(service.chores())
}

pub async fn random_chore(State(service): State<AppState>) -> Json<RandomChoreResponse> {
    Json(RandomChoreResponse {
        chore: service.random_chore().to_string(),
    })
}

pub async fn list_rota(
    State(service): State<AppState>,
) -> Result<Json<Vec<RotaEntryResponse>>, RotaError> {
    let entries = service.list_entries().await?;
    Ok(Json(entries.into_iter().map(|e| e.into_api()).collect()))
}

pub async fn create_rota(
    State(service): State<AppState>,
    Json(req): Json<CreateRotaRequest>,
) -> Result<impl IntoResponse, RotaError> {
    let entry = service.create_entry(req).await?;
    Ok((StatusCode::CREATED, Json(entry.into_api())))
}

pub async fn delete_rota(
    State(service): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRotaResponse>, RotaError> {
    service.delete_entry(&id).await?;
    Ok(Json(DeleteRotaResponse {
        message: "Item deleted successfully".into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use rota_db::Store;
    use rota_types::api::ErrorResponse;

    use crate::chores::HOUSEHOLD_CHORES;

    // Parsing the URI performs no I/O; only the delete test below would hit
    // the network, and it fails on id validation before reaching the store.
    async fn app() -> Router {
        let client = mongodb::Client::with_uri_str("mongodb://127.0.0.1:27017")
            .await
            .unwrap();
        let service = Arc::new(RotaService::new(Store::with_client(&client)));
        api_router(service)
    }

    async fn body_json<T: serde::de::DeserializeOwned>(res: axum::response::Response) -> T {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn chores_route_returns_the_full_list() {
        let res = app()
            .await
            .oneshot(Request::get("/api/chores").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let chores: Vec<String> = body_json(res).await;
        assert_eq!(chores.len(), 14);
        assert_eq!(chores[0], "Vacuuming");
    }

    #[tokio::test]
    async fn random_chore_route_returns_a_known_chore() {
        let res = app()
            .await
            .oneshot(
                Request::get("/api/random-chore")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        let picked: RandomChoreResponse = body_json(res).await;
        assert!(HOUSEHOLD_CHORES.contains(&picked.chore.as_str()));
    }

    #[tokio::test]
    async fn delete_with_malformed_id_is_a_400() {
        let res = app()
            .await
            .oneshot(
                Request::delete("/api/rota/definitely-not-hex")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let err: ErrorResponse = body_json(res).await;
        assert_eq!(err.error, "Invalid item ID");
    }
}
