use actix_web::{get, web};
use std::sync::Arc;

use super::LIST_FAILED;
use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UsersRes;

#[get("")]
pub async fn list_users(db: web::Data<Arc<DbService>>) -> ApiResult<UsersRes> {
    let users = db.list_users().await.map_err(AppError::during(LIST_FAILED))?;
    Ok(ApiResponse::Ok(UsersRes { users }))
}
