use sea_orm::ConnectOptions;
use std::sync::Arc;
use user_service::db::DbService;

pub mod client;

pub struct TestContext {
    pub db: Arc<DbService>,
}

impl TestContext {
    /// Fresh in-memory SQLite store, migrated by the same `Migrator` the
    /// server runs. One connection so every query sees the same database.
    pub async fn new() -> TestContext {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Arc::new(
            DbService::connect(options)
                .await
                .expect("Failed to initialize DbService"),
        );

        TestContext { db }
    }
}

// Test data helpers
#[allow(dead_code)]
pub mod test_data {
    use user_service::types::user::{RUserCreate, RUserUpdate};

    pub fn sample_user() -> RUserCreate {
        sample_user_with_email("a@b.com")
    }

    pub fn sample_user_with_email(email: &str) -> RUserCreate {
        RUserCreate {
            email: email.to_string(),
            name: "A".to_string(),
            login: "a".to_string(),
            password: "pw".to_string(),
            img: None,
            token: None,
        }
    }

    pub fn rename(name: &str) -> RUserUpdate {
        RUserUpdate {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}
