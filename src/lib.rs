//! Fangy: 5mods Changelog Publisher
//!
//! Posts the changelog of a GitHub release as a comment on a mod page hosted
//! on gta5-mods.com, then optionally pins and features that comment.
//!
//! ## Pipeline
//!
//! 1. Validate the inputs ([`config::Config::from_inputs`])
//! 2. Load the release from the event document ([`event::ReleaseEvent::load`])
//! 3. Bootstrap the session and its CSRF token ([`session::Session`])
//! 4. Log in ([`auth::login`])
//! 5. Resolve the numeric mod id ([`mods::resolve_mod_id`])
//! 6. Post the comment ([`comments::post_comment`])
//! 7. Pin and/or feature it ([`comments::pin_comment`], [`comments::feature_comment`])
//!
//! Every step is fatal on failure and maps to its own process exit code
//! ([`error::PublishError::exit_code`]).
//!
//! ## Usage
//! ```bash
//! GITHUB_EVENT_NAME=release \
//! GITHUB_EVENT_PATH=/github/workflow/event.json \
//! GITHUB_REF=refs/tags/v1.2.0 \
//! INPUT_USERNAME=me INPUT_PASSWORD=secret \
//! INPUT_MODTYPE=scripts INPUT_MODNAME=my-script \
//! fangy
//! ```

pub mod auth;
pub mod comments;
pub mod config;
pub mod error;
pub mod event;
pub mod extract;
pub mod mods;
pub mod publisher;
pub mod session;

pub use config::{Config, ConfigError, Inputs, ModType};
pub use error::{PublishError, Stage};
pub use publisher::publish;
