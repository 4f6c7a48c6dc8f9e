use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::{
    api::{
        config::ApiConfig,
        error::ApiError,
        handlers::{
            admin::admin_stats,
            expenses::{
                create_expense, delete_expense, get_expense, list_expenses, replace_expense,
                search_expenses, trigger_error, update_expense,
            },
            health::{health, index},
        },
        middleware::{auth::validate_admin, logging::log_request},
        response::ErrorBody,
    },
    utils::app_config::AppConfig,
};

/// Build the full application router.
///
/// The expense routes live in one sub-router mounted under `/expenses`; the
/// admin sub-router carries its own header-gate layer, so the rest of the
/// surface stays public.
pub fn create_router(app_config: AppConfig, api_config: &ApiConfig) -> Router {
    let admin_token = api_config.admin_token.clone();

    let admin_gate = middleware::from_fn(move |req: Request, next: Next| {
        let token = admin_token.clone();
        async move {
            validate_admin(req.headers(), &token).await?;
            Ok::<Response, ApiError>(next.run(req).await.into_response())
        }
    });

    let admin_routes = Router::new()
        .route("/stats", get(admin_stats))
        .layer(admin_gate);

    // "/error" is static, so it wins over the ":id" capture.
    let expense_routes = Router::new()
        .route("/", get(list_expenses).post(create_expense))
        .route("/search", get(search_expenses))
        .route("/error", get(trigger_error))
        .route(
            "/:id",
            get(get_expense)
                .put(replace_expense)
                .patch(update_expense)
                .delete(delete_expense),
        );

    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .nest("/expenses", expense_routes)
        .nest("/admin", admin_routes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}

/// Catch-all for unmatched paths
async fn route_not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::with_message(
            "Resource not found",
            "Check the request path",
        )),
    )
}
