use crate::{cors, handlers, AppState};
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use core_types::{History, Plane, Resource, Train};
use database::Repositories;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// `GET /{table}`, `POST /{table}/add` and `DELETE /{table}/:id` for one resource.
fn resource_routes<R: Resource>() -> Router<Arc<AppState>> {
    let base = format!("/{}", R::KIND.table());
    Router::new()
        .route(&base, get(handlers::list_all::<R>))
        .route(&format!("{base}/add"), post(handlers::insert::<R>))
        .route(&format!("{base}/:id"), delete(handlers::delete_by_id::<R>))
}

/// Builds the complete application without binding a socket.
pub fn router(repositories: Repositories) -> Router {
    let app_state = Arc::new(AppState { repositories });

    Router::new()
        .route("/", get(handlers::home))
        .merge(resource_routes::<Train>())
        .merge(resource_routes::<Plane>())
        .merge(resource_routes::<History>())
        .with_state(app_state)
        .layer(middleware::from_fn(cors::cors))
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}
