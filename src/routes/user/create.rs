use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use super::{CREATE_FAILED, USER_CREATED};
use crate::db::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserCreateRes};
use crate::utils::password::hash_off_thread;

#[post("")]
pub async fn create_user(
    db: web::Data<Arc<DbService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserCreateRes> {
    let body = body.into_inner();
    // nothing is written unless the input is valid
    body.validate()?;

    let password_hash = hash_off_thread(body.password)
        .await
        .map_err(AppError::during(CREATE_FAILED))?;

    let user = db
        .create_user(DBUserCreate {
            email: body.email,
            name: body.name,
            login: body.login,
            password_hash,
            img: body.img,
            token: body.token,
        })
        .await
        .map_err(AppError::during(CREATE_FAILED))?;

    info!(user_id = user.id, "user created");

    Ok(ApiResponse::Ok(UserCreateRes {
        user,
        message: USER_CREATED.to_string(),
    }))
}
