use axum_helpers::ErrorResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Beer Stock API",
        description = "Manage a beer inventory and its stock levels"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    components(schemas(ErrorResponse)),
    nest(
        (path = crate::api::BEERS_PATH, api = domain_beers::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
