use actix_web::{web, App};
use sea_orm::ConnectionTrait;
use entity::user::Model as UserModel;
use std::sync::Arc;
use user_service::{
    db::DbService,
    types::{error::AppError, user::DBUserCreate},
    utils::password::hash_password,
};

pub struct TestClient {
    pub db: Arc<DbService>,
}

impl TestClient {
    pub fn new(db: Arc<DbService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(user_service::routes::configure_routes)
    }

    /// Inserts a user straight through the store, bypassing HTTP.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, email: &str, password: &str) -> Result<UserModel, AppError> {
        self.db
            .create_user(DBUserCreate {
                email: email.to_string(),
                name: "Test User".to_string(),
                login: "test".to_string(),
                password_hash: hash_password(password).expect("Failed to hash password"),
                img: None,
                token: None,
            })
            .await
    }

    /// Drops the user table so every query against it fails.
    #[allow(dead_code)]
    pub async fn drop_user_table(&self) {
        self.db
            .connection()
            .execute_unprepared(r#"DROP TABLE "user""#)
            .await
            .expect("Failed to drop user table");
    }

    /// Closes the pool shared by the app under test.
    #[allow(dead_code)]
    pub async fn close_store(&self) {
        self.db
            .connection()
            .clone()
            .close()
            .await
            .expect("Failed to close pool");
    }
}
