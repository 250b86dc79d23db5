use crate::{
    http::HttpMethod,
    query::Params,
    requests::{
        require_job_id, ChannelVideosParams, PlaylistVideosParams, SearchParams,
        TranscriptBatchRequest, TranscriptParams, TranslateParams, VideoBatchRequest,
    },
    Client, ErrorKind, Result, Transcript, TranslatedTranscript, VideoIds, YoutubeBatchJob,
    YoutubeBatchResults, YoutubeChannel, YoutubePlaylist, YoutubeSearchResults, YoutubeVideo,
};

use super::job_path;

/// YouTube transcripts, metadata, search and batch jobs.
#[derive(Debug, Clone, Copy)]
pub struct YouTube<'a> {
    client: &'a Client,
}

impl<'a> YouTube<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub fn transcript(&self, params: &TranscriptParams) -> Result<Transcript> {
        self.get("/youtube/transcript", &params.to_params())
    }

    pub fn translate(&self, params: &TranslateParams) -> Result<TranslatedTranscript> {
        self.get("/youtube/transcript/translate", &params.to_params())
    }

    /// Start an asynchronous job fetching transcripts for many videos.
    pub fn transcript_batch(&self, request: &TranscriptBatchRequest) -> Result<YoutubeBatchJob> {
        let params = request.to_params()?;
        self.client
            .fetch("/youtube/transcript/batch", &params, HttpMethod::Post)
    }

    pub fn video(&self, id: &str) -> Result<YoutubeVideo> {
        self.get("/youtube/video", &Params::new().set("id", id))
    }

    /// Start an asynchronous job fetching metadata for many videos.
    pub fn video_batch(&self, request: &VideoBatchRequest) -> Result<YoutubeBatchJob> {
        let params = request.to_params()?;
        self.client
            .fetch("/youtube/video/batch", &params, HttpMethod::Post)
    }

    pub fn channel(&self, id: &str) -> Result<YoutubeChannel> {
        self.get("/youtube/channel", &Params::new().set("id", id))
    }

    pub fn channel_videos(&self, params: &ChannelVideosParams) -> Result<VideoIds> {
        let params = params.to_params()?;
        self.get("/youtube/channel/videos", &params)
    }

    pub fn playlist(&self, id: &str) -> Result<YoutubePlaylist> {
        self.get("/youtube/playlist", &Params::new().set("id", id))
    }

    pub fn playlist_videos(&self, params: &PlaylistVideosParams) -> Result<VideoIds> {
        let params = params.to_params()?;
        self.get("/youtube/playlist/videos", &params)
    }

    /// Status and results of a transcript or video batch job.
    pub fn batch_results(&self, job_id: &str) -> Result<YoutubeBatchResults> {
        require_job_id(job_id, ErrorKind::MissingParameters, "batch results")?;
        self.get(&job_path("/youtube/batch", job_id), &Params::new())
    }

    pub fn search(&self, params: &SearchParams) -> Result<YoutubeSearchResults> {
        let params = params.to_params()?;
        self.get("/youtube/search", &params)
    }

    fn get<T>(&self, endpoint: &str, params: &Params) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.client.fetch(endpoint, params, HttpMethod::Get)
    }
}
