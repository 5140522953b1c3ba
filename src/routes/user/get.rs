use actix_web::{get, web};
use std::sync::Arc;

use super::GET_FAILED;
use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;

#[get("/{id}")]
pub async fn get_user(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<UserRes> {
    let user = db
        .get_user_by_id(path.into_inner())
        .await
        .map_err(AppError::during(GET_FAILED))?;

    Ok(ApiResponse::Ok(UserRes { user }))
}
