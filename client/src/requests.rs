//! Typed parameters for each endpoint and the local checks that run before
//! anything is sent.

use crate::{query::Params, Error, ErrorKind, Result};

pub const MAX_LIMIT: u32 = 5000;

/// Identifies a YouTube video either by ID or by URL, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoRef {
    Id(String),
    Url(String),
}

impl VideoRef {
    pub fn id<S: Into<String>>(id: S) -> Self {
        VideoRef::Id(id.into())
    }

    pub fn url<S: Into<String>>(url: S) -> Self {
        VideoRef::Url(url.into())
    }

    fn apply(&self, params: Params) -> Params {
        match self {
            VideoRef::Id(id) => params.set("videoId", id),
            VideoRef::Url(url) => params.set("url", url),
        }
    }
}

/// The set of videos a batch job works on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchSource {
    VideoIds(Vec<String>),
    Playlist(String),
    Channel(String),
}

impl BatchSource {
    fn apply(&self, params: Params) -> Params {
        match self {
            BatchSource::VideoIds(ids) => params.set("videoIds", ids.as_slice()),
            BatchSource::Playlist(id) => params.set("playlistId", id),
            BatchSource::Channel(id) => params.set("channelId", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptParams {
    pub video: VideoRef,
    pub lang: Option<String>,
    pub text: Option<bool>,
}

impl TranscriptParams {
    pub fn new(video: VideoRef) -> Self {
        Self {
            video,
            lang: None,
            text: None,
        }
    }

    pub fn lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn text(mut self, text: bool) -> Self {
        self.text = Some(text);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        self.video
            .apply(Params::new())
            .set_opt("lang", self.lang.as_ref())
            .set_opt("text", self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateParams {
    pub video: VideoRef,
    pub lang: String,
    pub text: Option<bool>,
}

impl TranslateParams {
    pub fn new<S: Into<String>>(video: VideoRef, lang: S) -> Self {
        Self {
            video,
            lang: lang.into(),
            text: None,
        }
    }

    pub fn text(mut self, text: bool) -> Self {
        self.text = Some(text);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        self.video
            .apply(Params::new())
            .set("lang", &self.lang)
            .set_opt("text", self.text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoType {
    Video,
    Short,
    All,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Video => "video",
            VideoType::Short => "short",
            VideoType::All => "all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelVideosParams {
    pub id: String,
    pub limit: Option<u32>,
    pub video_type: Option<VideoType>,
}

impl ChannelVideosParams {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            limit: None,
            video_type: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn video_type(mut self, video_type: VideoType) -> Self {
        self.video_type = Some(video_type);
        self
    }

    pub(crate) fn to_params(&self) -> Result<Params> {
        validate_limit(self.limit)?;
        Ok(Params::new()
            .set("id", &self.id)
            .set_opt("limit", self.limit)
            .set_opt("type", self.video_type.map(|t| t.as_str())))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistVideosParams {
    pub id: String,
    pub limit: Option<u32>,
}

impl PlaylistVideosParams {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_params(&self) -> Result<Params> {
        validate_limit(self.limit)?;
        Ok(Params::new()
            .set("id", &self.id)
            .set_opt("limit", self.limit))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptBatchRequest {
    pub source: BatchSource,
    pub limit: Option<u32>,
    pub lang: Option<String>,
    pub text: Option<bool>,
}

impl TranscriptBatchRequest {
    pub fn new(source: BatchSource) -> Self {
        Self {
            source,
            limit: None,
            lang: None,
            text: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn text(mut self, text: bool) -> Self {
        self.text = Some(text);
        self
    }

    pub(crate) fn to_params(&self) -> Result<Params> {
        validate_batch_limit(self.limit)?;
        Ok(self
            .source
            .apply(Params::new())
            .set_opt("limit", self.limit)
            .set_opt("lang", self.lang.as_ref())
            .set_opt("text", self.text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoBatchRequest {
    pub source: BatchSource,
    pub limit: Option<u32>,
}

impl VideoBatchRequest {
    pub fn new(source: BatchSource) -> Self {
        Self {
            source,
            limit: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_params(&self) -> Result<Params> {
        validate_batch_limit(self.limit)?;
        Ok(self.source.apply(Params::new()).set_opt("limit", self.limit))
    }
}

/// Filters for `/youtube/search`. Enumerated filters are passed through as
/// the API spells them (e.g. `upload_date = "week"`, `sort_by = "views"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: String,
    pub upload_date: Option<String>,
    pub result_type: Option<String>,
    pub duration: Option<String>,
    pub sort_by: Option<String>,
    pub features: Vec<String>,
    pub limit: Option<u32>,
    pub next_page_token: Option<String>,
}

impl SearchParams {
    pub fn new<S: Into<String>>(query: S) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn upload_date<S: Into<String>>(mut self, upload_date: S) -> Self {
        self.upload_date = Some(upload_date.into());
        self
    }

    pub fn result_type<S: Into<String>>(mut self, result_type: S) -> Self {
        self.result_type = Some(result_type.into());
        self
    }

    pub fn duration<S: Into<String>>(mut self, duration: S) -> Self {
        self.duration = Some(duration.into());
        self
    }

    pub fn sort_by<S: Into<String>>(mut self, sort_by: S) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    pub fn feature<S: Into<String>>(mut self, feature: S) -> Self {
        self.features.push(feature.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn next_page_token<S: Into<String>>(mut self, token: S) -> Self {
        self.next_page_token = Some(token.into());
        self
    }

    pub(crate) fn to_params(&self) -> Result<Params> {
        if self.query.trim().is_empty() {
            return Err(Error::new(ErrorKind::MissingParameters)
                .with_message("Missing query")
                .with_details("The query parameter is required to search YouTube."));
        }
        validate_limit(self.limit)?;
        Ok(Params::new()
            .set("query", &self.query)
            .set_opt("uploadDate", self.upload_date.as_ref())
            .set_opt("type", self.result_type.as_ref())
            .set_opt("duration", self.duration.as_ref())
            .set_opt("sortBy", self.sort_by.as_ref())
            .set("features", self.features.as_slice())
            .set_opt("limit", self.limit)
            .set_opt("nextPageToken", self.next_page_token.as_ref()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptMode {
    Native,
    Auto,
    Generate,
}

impl TranscriptMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranscriptMode::Native => "native",
            TranscriptMode::Auto => "auto",
            TranscriptMode::Generate => "generate",
        }
    }
}

/// Parameters for the platform-agnostic `/transcript` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralTranscriptParams {
    pub url: String,
    pub lang: Option<String>,
    pub text: Option<bool>,
    pub chunk_size: Option<u32>,
    pub mode: Option<TranscriptMode>,
}

impl GeneralTranscriptParams {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            lang: None,
            text: None,
            chunk_size: None,
            mode: None,
        }
    }

    pub fn lang<S: Into<String>>(mut self, lang: S) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn text(mut self, text: bool) -> Self {
        self.text = Some(text);
        self
    }

    pub fn chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    pub fn mode(mut self, mode: TranscriptMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .set("url", &self.url)
            .set_opt("lang", self.lang.as_ref())
            .set_opt("text", self.text)
            .set_opt("chunkSize", self.chunk_size)
            .set_opt("mode", self.mode.map(|m| m.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlRequest {
    pub url: String,
    pub limit: Option<u32>,
}

impl CrawlRequest {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: url.into(),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .set("url", &self.url)
            .set_opt("limit", self.limit)
    }
}

fn limit_in_range(limit: Option<u32>) -> bool {
    limit.map_or(true, |l| (1..=MAX_LIMIT).contains(&l))
}

pub(crate) fn validate_limit(limit: Option<u32>) -> Result<()> {
    if limit_in_range(limit) {
        return Ok(());
    }
    Err(Error::invalid_request(
        "Invalid limit.",
        "The limit must be between 1 and 5000.",
    ))
}

pub(crate) fn validate_batch_limit(limit: Option<u32>) -> Result<()> {
    if limit_in_range(limit) {
        return Ok(());
    }
    Err(Error::invalid_request(
        "Invalid limit for batch operation.",
        "The limit must be between 1 and 5000.",
    ))
}

/// Reject an empty job ID before it turns into a request for the
/// collection endpoint.
pub(crate) fn require_job_id(job_id: &str, kind: ErrorKind, what: &str) -> Result<()> {
    if !job_id.trim().is_empty() {
        return Ok(());
    }
    Err(Error::new(kind)
        .with_message("Missing jobId")
        .with_details(format!("The jobId parameter is required to get {}.", what)))
}
