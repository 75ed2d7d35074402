//! Mod Page Resolution
//!
//! Comments are attached to the numeric id of a mod, which only appears in
//! the markup of its page.

use reqwest::StatusCode;
use tracing::{debug, info};

use crate::config::ModType;
use crate::error::{PublishError, Stage};
use crate::extract;
use crate::session::{Page, Session};

pub fn mod_path(mod_type: ModType, slug: &str) -> String {
    format!("/{}/{}", mod_type, slug)
}

/// Fetch the page of a mod, failing on any status other than 200
pub async fn fetch_mod_page(
    session: &Session,
    mod_type: ModType,
    slug: &str,
) -> Result<Page, PublishError> {
    let page = session.get(&mod_path(mod_type, slug), Stage::ModPage).await?;

    if page.status != StatusCode::OK {
        return Err(PublishError::ModPage {
            status: page.status,
        });
    }

    Ok(page)
}

/// Fetch the mod page and read its numeric id
///
/// The page is returned as well, since it carries a fresh CSRF token.
pub async fn resolve_mod_id(
    session: &Session,
    mod_type: ModType,
    slug: &str,
) -> Result<(String, Page), PublishError> {
    info!("🔎 Resolving mod {}/{}", mod_type, slug);

    let page = fetch_mod_page(session, mod_type, slug).await?;
    let id = extract::mod_id(&page.body)?;

    debug!("Found mod ID: {}", id);
    Ok((id, page))
}
