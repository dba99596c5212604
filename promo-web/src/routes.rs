mod partner;

use crate::AppState;
use axum::Router;
use promo::domain::PartnerStore;
use std::sync::Arc;

pub fn partner_routes<S: PartnerStore>() -> Router<Arc<AppState<S>>> {
    partner::routes()
}
