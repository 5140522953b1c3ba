use actix_web::{delete, web};
use std::sync::Arc;
use tracing::info;

use super::{DELETE_FAILED, USER_DELETED};
use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserDeleteRes;

#[delete("/{id}")]
pub async fn delete_user(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
) -> ApiResult<UserDeleteRes> {
    let id = path.into_inner();
    db.delete_user(id)
        .await
        .map_err(AppError::during(DELETE_FAILED))?;

    info!(user_id = id, "user deleted");

    Ok(ApiResponse::Ok(UserDeleteRes {
        message: USER_DELETED.to_string(),
    }))
}
