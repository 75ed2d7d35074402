//! Mocked 5mods site shared by the integration tests.

#![allow(dead_code)]

use std::io::Write;

use tempfile::NamedTempFile;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const HOME_PAGE: &str = r#"<html><head>
<meta name="csrf-param" content="authenticity_token" />
<meta name="csrf-token" content="home-token" />
</head><body>Welcome</body></html>"#;

pub const MOD_PAGE: &str = r#"<html><head>
<meta name="csrf-token" content="mod-token" />
</head><body><div id="file" data-user-file-id="987"><h1>My Script</h1></div></body></html>"#;

pub const COMMENT_BLOB: &str = r#"$('.comments-list').prepend("<li class=\"comment\" data-comment-id=\"555\"><p>v1<\/p><\/li>");"#;

/// Event document for release v1.0.0
pub fn release_event() -> NamedTempFile {
    let mut event = NamedTempFile::new().unwrap();
    event
        .write_all(br#"{"release":{"tag_name":"v1.0.0","body":"- Fixed the thing"}}"#)
        .unwrap();
    event
}

pub async fn mount_home(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("X-CSRF-Token", "home-token"))
        .and(body_string_contains("lemon"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_mod_page(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/scripts/my-script"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_comment_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/comments"))
        .and(header("X-CSRF-Token", "mod-token"))
        .and(body_string_contains("user_file%5Bid%5D=987"))
        .respond_with(ResponseTemplate::new(200).set_body_string(COMMENT_BLOB))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_pin(server: &MockServer, expected: u64) {
    Mock::given(method("PATCH"))
        .and(path("/api/comments/pin"))
        .and(header("X-CSRF-Token", "mod-token"))
        .and(body_json(serde_json::json!({"comment": {"id": 555}})))
        .respond_with(ResponseTemplate::new(200))
        .expect(expected)
        .mount(server)
        .await;
}

pub async fn mount_feature(server: &MockServer, expected: u64) {
    Mock::given(method("PATCH"))
        .and(path("/api/comments/feature"))
        .and(header("X-CSRF-Token", "mod-token"))
        .and(body_json(
            serde_json::json!({"comment": {"id": 555, "featured": true}}),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(expected)
        .mount(server)
        .await;
}
