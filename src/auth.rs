//! 5mods Login
//!
//! Logs the session in. On success the cookie store holds the authenticated
//! identity for every later request.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Credentials;
use crate::error::{PublishError, Stage};
use crate::session::{Page, Session};

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Serialize)]
struct LoginForm<'a> {
    utf8: &'a str,
    #[serde(rename = "user[username]")]
    username: &'a str,
    #[serde(rename = "user[password]")]
    password: &'a str,
    #[serde(rename = "user[remember_me]")]
    remember_me: u8,
    commit: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginErrorResponse {
    errors: serde_json::Value,
}

/// Server-reported reason for a failed login
fn login_error_message(body: &str) -> String {
    match serde_json::from_str::<LoginErrorResponse>(body) {
        Ok(LoginErrorResponse {
            errors: serde_json::Value::String(message),
        }) => message,
        Ok(LoginErrorResponse { errors }) => errors.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Log in with `credentials`, keeping the session cookie
pub async fn login(session: &Session, credentials: &Credentials) -> Result<(), PublishError> {
    info!("🔐 Logging in as {}", credentials.username);

    let form = LoginForm {
        utf8: "✓",
        username: &credentials.username,
        password: &credentials.password,
        remember_me: 1,
        commit: "Log In",
    };

    let response = session
        .post_form(LOGIN_PATH, &form)
        .send()
        .await
        .map_err(PublishError::transport(Stage::Login))?;
    let page = Page::read(response, Stage::Login).await?;

    if page.status != reqwest::StatusCode::OK {
        debug!("Login rejected with {}", page.status);
        return Err(PublishError::LoginFailed(login_error_message(&page.body)));
    }

    info!("✅ Logged in");
    Ok(())
}
