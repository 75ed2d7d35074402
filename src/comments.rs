//! Comment Publishing
//!
//! Posts the changelog comment, then pins and features it.

use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{PublishError, Stage};
use crate::extract;
use crate::session::{Page, Session};

pub const COMMENTS_PATH: &str = "/api/comments";
pub const PIN_PATH: &str = "/api/comments/pin";
pub const FEATURE_PATH: &str = "/api/comments/feature";

// ============================================================
// Request Bodies
// ============================================================

#[derive(Debug, Serialize)]
struct CommentForm<'a> {
    utf8: &'a str,
    #[serde(rename = "user_file[id]")]
    mod_id: &'a str,
    #[serde(rename = "comment[comment]")]
    comment: &'a str,
    commit: &'a str,
}

#[derive(Debug, Serialize)]
struct CommentRef {
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    featured: Option<bool>,
}

/// JSON body of the pin and feature endpoints
#[derive(Debug, Serialize)]
struct CommentUpdate {
    comment: CommentRef,
}

impl CommentUpdate {
    fn pin(id: u64) -> Self {
        Self {
            comment: CommentRef { id, featured: None },
        }
    }

    fn feature(id: u64) -> Self {
        Self {
            comment: CommentRef {
                id,
                featured: Some(true),
            },
        }
    }
}

// ============================================================
// Comment Operations
// ============================================================

/// Comment text for a release
pub fn compose_message(tag: &str, body: &str) -> String {
    format!("{} Changelog: \n\n{}", tag, body)
}

/// Post `message` on the mod and return the id of the new comment
pub async fn post_comment(
    session: &Session,
    mod_id: &str,
    message: &str,
) -> Result<u64, PublishError> {
    info!("💬 Posting changelog comment on mod {}", mod_id);

    let form = CommentForm {
        utf8: "✓",
        mod_id,
        comment: message,
        commit: "Post Comment",
    };

    let response = session
        .post_form(COMMENTS_PATH, &form)
        .send()
        .await
        .map_err(PublishError::transport(Stage::Comment))?;
    let page = Page::read(response, Stage::Comment).await?;

    if page.status != StatusCode::OK {
        return Err(PublishError::CommentPost {
            status: page.status,
        });
    }

    let comment_id = extract::comment_id(&page.body)?;
    info!("✅ Posted comment {}", comment_id);
    Ok(comment_id)
}

/// Pin the comment on its mod page
pub async fn pin_comment(session: &Session, comment_id: u64) -> Result<(), PublishError> {
    info!("📌 Pinning comment {}", comment_id);

    let response = session
        .patch_json(PIN_PATH, &CommentUpdate::pin(comment_id))
        .send()
        .await
        .map_err(PublishError::transport(Stage::Pin))?;
    let page = Page::read(response, Stage::Pin).await?;

    if page.status != StatusCode::OK {
        return Err(PublishError::Pin {
            comment_id,
            status: page.status,
            body: page.body,
        });
    }

    debug!("Pinned comment {}", comment_id);
    Ok(())
}

/// Feature the comment (expected to be pinned already)
pub async fn feature_comment(session: &Session, comment_id: u64) -> Result<(), PublishError> {
    info!("⭐ Featuring comment {}", comment_id);

    let response = session
        .patch_json(FEATURE_PATH, &CommentUpdate::feature(comment_id))
        .send()
        .await
        .map_err(PublishError::transport(Stage::Feature))?;
    let status = response.status();

    if status != StatusCode::OK {
        return Err(PublishError::Feature { comment_id, status });
    }

    debug!("Featured comment {}", comment_id);
    Ok(())
}
