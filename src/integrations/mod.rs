//! Outbound integrations: social posting and page snapshots.

pub mod arcade;
pub mod page;

pub use arcade::{ArcadeClient, SocialPoster};
pub use page::{HttpPageFetcher, PageFetcher, PageSnapshot};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IntegrationError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{service} returned HTTP {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service} error: {message}")]
    Api {
        service: &'static str,
        message: String,
    },

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    Parse(String),
}

impl IntegrationError {
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            IntegrationError::Timeout
        } else {
            IntegrationError::Http(e)
        }
    }
}
