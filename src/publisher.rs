//! Publishing Pipeline
//!
//! Runs every step in order against a single session:
//! bootstrap → login → resolve → post → (pin) → (feature).
//! The first failure stops the run; nothing already done is rolled back.

use tracing::info;

use crate::auth;
use crate::comments;
use crate::config::Config;
use crate::error::{PublishError, Stage};
use crate::event::ReleaseEvent;
use crate::mods;
use crate::session::Session;

/// Post the changelog of `event` and return the new comment id
pub async fn publish(config: &Config, event: &ReleaseEvent) -> Result<u64, PublishError> {
    let mut session = Session::new(&config.base_url)?;

    // The home page sets the session cookie and the first token
    let home = session.get("/", Stage::Csrf).await?;
    session.update_csrf(&home)?;

    auth::login(&session, &config.credentials).await?;

    let (mod_id, mod_page) =
        mods::resolve_mod_id(&session, config.mod_type, &config.mod_name).await?;
    session.update_csrf(&mod_page)?;

    let message = comments::compose_message(event.tag(&config.git_ref), event.release.body());
    let comment_id = comments::post_comment(&session, &mod_id, &message).await?;

    // Featuring needs the comment to be pinned first
    if config.pin || config.feature {
        session.reload_csrf(&config.mod_path()).await?;
        comments::pin_comment(&session, comment_id).await?;
    }
    if config.feature {
        session.reload_csrf(&config.mod_path()).await?;
        comments::feature_comment(&session, comment_id).await?;
    }

    info!("🎉 Changelog published (comment {})", comment_id);
    Ok(comment_id)
}
