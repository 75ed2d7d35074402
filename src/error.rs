//! Publisher Errors
//!
//! Every failure is fatal. Each variant maps to a process exit code so the
//! cause can be told apart from outside (e.g. in a CI log).

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

/// Exit code when the log subscriber cannot be installed
pub const LOGGING_EXIT_CODE: i32 = 17;

/// Pipeline stage, used to attribute transport failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Client,
    Csrf,
    Login,
    ModPage,
    Comment,
    Pin,
    Feature,
}

impl Stage {
    pub fn exit_code(&self) -> i32 {
        match self {
            Stage::Csrf => 2,
            Stage::Login => 3,
            Stage::ModPage => 4,
            Stage::Comment => 6,
            Stage::Pin => 7,
            Stage::Feature => 8,
            Stage::Client => 16,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Client => write!(f, "client setup"),
            Stage::Csrf => write!(f, "csrf refresh"),
            Stage::Login => write!(f, "login"),
            Stage::ModPage => write!(f, "mod page"),
            Stage::Comment => write!(f, "comment"),
            Stage::Pin => write!(f, "pin"),
            Stage::Feature => write!(f, "feature"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unable to read the event document {path:?}: {reason}")]
    EventDocument { path: PathBuf, reason: String },

    #[error("Unable to update CSRF for URL {url} (Code {status})")]
    CsrfPage { url: String, status: StatusCode },

    #[error("No csrf-token meta tag was found! (For URL {url})")]
    MissingCsrfToken { url: String },

    #[error("Unable to Log In: {0}")]
    LoginFailed(String),

    #[error("Unable to fetch the Mod Page: Code {}", .status.as_u16())]
    ModPage { status: StatusCode },

    #[error("Unable to get the Mod ID from the Mod Page")]
    MissingModId,

    #[error("Unable to Post the comment to 5mods: Code {}", .status.as_u16())]
    CommentPost { status: StatusCode },

    #[error("Unable to find the Comment ID in the response to the posted comment")]
    MissingCommentId,

    #[error("Unable to Pin Comment {comment_id}: Code {} ({body})", .status.as_u16())]
    Pin {
        comment_id: u64,
        status: StatusCode,
        body: String,
    },

    #[error("Unable to Feature Comment {comment_id}: Code {}", .status.as_u16())]
    Feature { comment_id: u64, status: StatusCode },

    #[error("Request failed during {stage}: {source}")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },
}

impl PublishError {
    /// Wrap a transport error with the stage it happened in
    pub fn transport(stage: Stage) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| PublishError::Transport { stage, source }
    }

    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            PublishError::Config(err) => err.exit_code(),
            PublishError::CsrfPage { .. } | PublishError::MissingCsrfToken { .. } => 2,
            PublishError::LoginFailed(_) => 3,
            PublishError::ModPage { .. } => 4,
            PublishError::MissingModId => 5,
            PublishError::CommentPost { .. } => 6,
            PublishError::Pin { .. } => 7,
            PublishError::Feature { .. } => 8,
            PublishError::MissingCommentId => 9,
            PublishError::EventDocument { .. } => 10,
            PublishError::Transport { stage, .. } => stage.exit_code(),
        }
    }
}
