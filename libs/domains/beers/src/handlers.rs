use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use axum_helpers::{
    UuidPath, ValidatedJson,
    errors::responses::{
        BadRequestResponse, BadRequestUuidResponse, BadRequestValidationResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::BeerResult;
use crate::models::{Beer, BeerType, CreateBeer, QuantityUpdate};
use crate::repository::BeerRepository;
use crate::service::BeerService;

const TAG: &str = "beers";

/// OpenAPI documentation for the Beers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_beers,
        create_beer,
        get_beer_by_name,
        delete_beer,
        increment_stock,
        decrement_stock,
    ),
    components(
        schemas(Beer, BeerType, CreateBeer, QuantityUpdate),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Beer stock management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the beer router with all HTTP endpoints
///
/// `GET /{beer}` looks the beer up by name while `DELETE /{beer}` and the
/// stock routes take its id.
pub fn router<R: BeerRepository + 'static>(service: BeerService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_beers).post(create_beer))
        .route("/{beer}", get(get_beer_by_name).delete(delete_beer))
        .route("/{beer}/increment", patch(increment_stock))
        .route("/{beer}/decrement", patch(decrement_stock))
        .with_state(shared_service)
}

/// List every beer, ordered by name
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "List of beers (possibly empty)", body = Vec<Beer>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_beers<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
) -> BeerResult<Json<Vec<Beer>>> {
    let beers = service.list_all().await?;
    Ok(Json(beers))
}

/// Register a new beer
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateBeer,
    responses(
        (status = 201, description = "Beer created successfully", body = Beer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_beer<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateBeer>,
) -> BeerResult<impl IntoResponse> {
    let beer = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(beer)))
}

/// Get a beer by its name
#[utoipa::path(
    get,
    path = "/{name}",
    tag = TAG,
    params(
        ("name" = String, Path, description = "Beer name")
    ),
    responses(
        (status = 200, description = "Beer found", body = Beer),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_beer_by_name<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    Path(name): Path<String>,
) -> BeerResult<Json<Beer>> {
    let beer = service.find_by_name(&name).await?;
    Ok(Json(beer))
}

/// Delete a beer
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Beer ID")
    ),
    responses(
        (status = 204, description = "Beer deleted successfully"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_beer<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    UuidPath(id): UuidPath,
) -> BeerResult<StatusCode> {
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add units to a beer's stock
#[utoipa::path(
    patch,
    path = "/{id}/increment",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Beer ID")
    ),
    request_body = QuantityUpdate,
    responses(
        (status = 200, description = "Stock incremented", body = Beer),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn increment_stock<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<QuantityUpdate>,
) -> BeerResult<Json<Beer>> {
    let beer = service.increment(id, input).await?;
    Ok(Json(beer))
}

/// Remove units from a beer's stock
#[utoipa::path(
    patch,
    path = "/{id}/decrement",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Beer ID")
    ),
    request_body = QuantityUpdate,
    responses(
        (status = 200, description = "Stock decremented", body = Beer),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn decrement_stock<R: BeerRepository>(
    State(service): State<Arc<BeerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<QuantityUpdate>,
) -> BeerResult<Json<Beer>> {
    let beer = service.decrement(id, input).await?;
    Ok(Json(beer))
}
