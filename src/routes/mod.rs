use actix_web::web;

use crate::types::error::AppError;

pub mod health;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    );

    // guard on the route, not the resource: other methods answer 405
    cfg.service(
        web::scope("/health")
            .service(web::resource("").route(web::get().to(health::health))),
    );
    cfg.service(
        web::scope("/users")
            .service(user::list::list_users)
            .service(user::create::create_user)
            .service(user::get::get_user)
            .service(user::update::update_user)
            .service(user::delete::delete_user),
    );
}
