use crate::{
    http::HttpMethod, query::Params, requests::require_job_id, Client, ErrorKind,
    GeneralTranscriptParams, JobResult, Result, Transcript, TranscriptOrJobId,
};

use super::job_path;

#[derive(Debug, Clone, Copy)]
pub struct Transcripts<'a> {
    client: &'a Client,
}

impl<'a> Transcripts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch a transcript for a video or file URL. Long media yields a job
    /// ID to poll with [`Transcripts::job_status`] instead.
    pub fn get(&self, params: &GeneralTranscriptParams) -> Result<TranscriptOrJobId> {
        self.client
            .fetch("/transcript", &params.to_params(), HttpMethod::Get)
    }

    pub fn job_status(&self, job_id: &str) -> Result<JobResult<Transcript>> {
        require_job_id(job_id, ErrorKind::InvalidRequest, "transcript job status")?;
        self.client.fetch(
            &job_path("/transcript", job_id),
            &Params::new(),
            HttpMethod::Get,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::http::testing::{client, FakeHttpClient};
    use crate::{ErrorKind, GeneralTranscriptParams, JobStatus, TranscriptMode, TranscriptOrJobId};
    use serde_json::json;

    #[test]
    fn test_get_returns_transcript() {
        let fake = FakeHttpClient::new().json(json!({
            "content": "Hello there",
            "lang": "en",
            "availableLangs": ["en", "de"]
        }));
        let result = client(&fake)
            .transcript()
            .get(&GeneralTranscriptParams::new("https://youtu.be/abc").text(true))
            .unwrap();

        match result {
            TranscriptOrJobId::Transcript(t) => assert_eq!(t.available_langs, vec!["en", "de"]),
            TranscriptOrJobId::Job(_) => panic!("expected transcript"),
        }
        assert_eq!(
            fake.recorded()[0].url,
            "https://api.supadata.ai/v1/transcript?url=https%3A%2F%2Fyoutu.be%2Fabc&text=true"
        );
    }

    #[test]
    fn test_get_returns_job_id() {
        let fake = FakeHttpClient::new().json(json!({"jobId": "job-9"}));
        let result = client(&fake)
            .transcript()
            .get(
                &GeneralTranscriptParams::new("https://example.com/talk.mp4")
                    .mode(TranscriptMode::Generate),
            )
            .unwrap();
        match result {
            TranscriptOrJobId::Job(job) => assert_eq!(job.job_id, "job-9"),
            TranscriptOrJobId::Transcript(_) => panic!("expected job id"),
        }
    }

    #[test]
    fn test_job_status() {
        let fake = FakeHttpClient::new().json(json!({
            "status": "completed",
            "result": {"content": "done", "lang": "en", "availableLangs": ["en"]}
        }));
        let job = client(&fake).transcript().job_status("job 9").unwrap();

        assert_eq!(job.status, JobStatus::Completed);
        assert_eq!(job.result.unwrap().lang, "en");
        assert_eq!(
            fake.recorded()[0].url,
            "https://api.supadata.ai/v1/transcript/job%209"
        );
    }

    #[test]
    fn test_failed_job_keeps_status_and_message() {
        let fake = FakeHttpClient::new().json(json!({
            "status": "failed",
            "error": {
                "error": "not-found",
                "message": "The requested item could not be found",
                "details": "job-1"
            }
        }));
        let job = client(&fake).transcript().job_status("job-1").unwrap();

        assert_eq!(job.status, JobStatus::Failed);
        assert!(job.result.is_none());
        let error = job.error.unwrap();
        assert_eq!(error.error, "not-found");
        assert_eq!(
            error.message.as_deref(),
            Some("The requested item could not be found")
        );
    }

    #[test]
    fn test_job_status_requires_job_id() {
        let fake = FakeHttpClient::new();
        let err = client(&fake).transcript().job_status("").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidRequest);
        assert_eq!(err.message, "Missing jobId");
        assert!(fake.recorded().is_empty());
    }
}
