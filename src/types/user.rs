use entity::user::Model as UserModel;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

pub static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Body of `POST /users`.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RUserCreate {
    #[validate(
        length(
            min = 5,
            max = 100,
            message = "Email must be between 5 and 100 characters"
        ),
        regex(path = *RE_EMAIL, message = "Email must be a valid email address")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Login is required"))]
    pub login: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub img: Option<String>,
    pub token: Option<String>,
}

/// Body of `PUT`/`PATCH /users/{id}`. Absent fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct RUserUpdate {
    #[validate(
        length(
            min = 5,
            max = 100,
            message = "Email must be between 5 and 100 characters"
        ),
        regex(path = *RE_EMAIL, message = "Email must be a valid email address")
    )]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Login cannot be empty"))]
    pub login: Option<String>,
    pub password: Option<String>,
    pub img: Option<String>,
    pub token: Option<String>,
}

pub struct DBUserCreate {
    pub email: String,
    pub name: String,
    pub login: String,
    pub password_hash: String,
    pub img: Option<String>,
    pub token: Option<String>,
}

#[derive(Default)]
pub struct DBUserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub login: Option<String>,
    pub password_hash: Option<String>,
    pub img: Option<String>,
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UsersRes {
    pub users: Vec<UserModel>,
}

#[derive(Serialize, Deserialize)]
pub struct UserRes {
    pub user: UserModel,
}

#[derive(Serialize, Deserialize)]
pub struct UserCreateRes {
    pub user: UserModel,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserDeleteRes {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_body(email: &str) -> RUserCreate {
        RUserCreate {
            email: email.to_string(),
            name: "A".to_string(),
            login: "a".to_string(),
            password: "pw".to_string(),
            img: None,
            token: None,
        }
    }

    #[test]
    fn accepts_well_formed_email() {
        assert!(create_body("a@b.com").validate().is_ok());
        assert!(create_body("a@b.c").validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["not-an-email", "a b@c.com", "a@b", "@b.com", "a@@b.com"] {
            let errs = create_body(email).validate().unwrap_err();
            assert!(errs.field_errors().contains_key("email"), "{email} should be rejected");
        }
    }

    #[test]
    fn rejects_email_outside_length_bounds() {
        assert!(create_body("a@b.").validate().is_err());
        let long = format!("{}@example.com", "a".repeat(100));
        assert!(create_body(&long).validate().is_err());
    }

    #[test]
    fn rejects_empty_password() {
        let mut body = create_body("a@b.com");
        body.password.clear();
        let errs = body.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("password"));
    }

    #[test]
    fn update_without_fields_is_valid() {
        assert!(RUserUpdate::default().validate().is_ok());
    }

    #[test]
    fn update_checks_supplied_email() {
        let update = RUserUpdate {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
