use actix_web::web;
use std::sync::Arc;

use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};

pub const STORE_UNAVAILABLE: &str = "database unavailable";

/// Liveness plus a round trip to the store.
pub async fn health(db: web::Data<Arc<DbService>>) -> ApiResult<()> {
    db.ping().await.map_err(AppError::during(STORE_UNAVAILABLE))?;
    Ok(ApiResponse::EmptyOk)
}
