pub mod service;
pub mod user;

pub use service::DbService;
