use actix_web::{route, web};
use std::sync::Arc;
use validator::Validate;

use super::UPDATE_FAILED;
use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserUpdate, RUserUpdate, UserRes};
use crate::utils::password::hash_off_thread;

#[route("/{id}", method = "PUT", method = "PATCH")]
pub async fn update_user(
    db: web::Data<Arc<DbService>>,
    path: web::Path<i32>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserRes> {
    let id = path.into_inner();
    // a missing user is reported before validation or hashing
    db.get_user_by_id(id)
        .await
        .map_err(AppError::during(UPDATE_FAILED))?;

    let body = body.into_inner();
    body.validate()?;

    // an empty password means "keep the current one"
    let password_hash = match body.password.filter(|p| !p.is_empty()) {
        Some(password) => Some(
            hash_off_thread(password)
                .await
                .map_err(AppError::during(UPDATE_FAILED))?,
        ),
        None => None,
    };

    let user = db
        .update_user(
            id,
            DBUserUpdate {
                email: body.email,
                name: body.name,
                login: body.login,
                password_hash,
                img: body.img,
                token: body.token,
            },
        )
        .await
        .map_err(AppError::during(UPDATE_FAILED))?;

    Ok(ApiResponse::Ok(UserRes { user }))
}
