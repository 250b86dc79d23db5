//! Per-resource accessors. Each one borrows the [`Client`] and does nothing
//! but pick an endpoint, build its parameters and run local validation.

mod transcript;
mod web;
mod youtube;

pub use transcript::Transcripts;
pub use web::Web;
pub use youtube::YouTube;

use crate::Client;

impl Client {
    pub fn youtube(&self) -> YouTube<'_> {
        YouTube::new(self)
    }

    pub fn web(&self) -> Web<'_> {
        Web::new(self)
    }

    /// Platform-agnostic transcripts (YouTube, TikTok, Instagram, X, or a
    /// direct file URL).
    pub fn transcript(&self) -> Transcripts<'_> {
        Transcripts::new(self)
    }
}

/// Percent-encode a job ID for use as a path segment.
pub(crate) fn job_path(prefix: &str, job_id: &str) -> String {
    format!("{}/{}", prefix, urlencoding::encode(job_id.trim()))
}
