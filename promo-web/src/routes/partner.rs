use super::*;
use crate::handlers::partner::*;
use axum::routing::{get, post};

macro_rules! api {
    ($path:literal) => {
        concat!("/api/v1/partners", $path)
    };
}

pub fn routes<S: PartnerStore>() -> Router<Arc<AppState<S>>> {
    Router::new()
        .route(api!(""), get(list::<S>))
        .route(api!("/{id}/limits"), post(set_limit::<S>))
        .route(api!("/{id}/limits/{limit_id}"), get(limit::<S>))
        .route(api!("/{id}/canceledLimits"), post(cancel_limit::<S>))
}
