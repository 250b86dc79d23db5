//! Blocking client for the Supadata API: YouTube and multi-platform
//! transcripts, YouTube metadata and search, web scraping, mapping and
//! crawling, and batch jobs.
//!
//! ```rust,no_run
//! use supadata_client::{Client, Config, TranscriptParams, VideoRef};
//!
//! let client = Client::new(Config::new("your-api-key"));
//! let transcript = client
//!     .youtube()
//!     .transcript(&TranscriptParams::new(VideoRef::id("dQw4w9WgXcQ")).text(true))?;
//! println!("{:?}", transcript.content);
//! # Ok::<(), supadata_client::Error>(())
//! ```

pub use crate::config::*;
pub use crate::error::{Error, ErrorBody, ErrorKind, DEFAULT_ERROR_TEXT};
pub use crate::http::{
    Client, HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use crate::query::{ParamValue, Params, Scalar};
pub use crate::requests::*;
pub use crate::responses::*;
pub use crate::services::{Transcripts, Web, YouTube};

pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod query;
pub mod requests;
pub mod responses;
pub mod services;

pub type Result<T> = std::result::Result<T, Error>;
