use std::collections::HashSet;

use tracing::{debug, warn};
use url::Url;

use crate::{
    http::HttpMethod, query::Params, requests::require_job_id, Client, CrawlJob, CrawlRequest,
    Error, ErrorKind, JobId, Result, Scrape, SiteMap,
};

use super::job_path;

/// Web scraping, link mapping and crawling.
#[derive(Debug, Clone, Copy)]
pub struct Web<'a> {
    client: &'a Client,
}

impl<'a> Web<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Extract the content of a page as Markdown.
    pub fn scrape(&self, url: &str) -> Result<Scrape> {
        self.client
            .fetch("/web/scrape", &Params::new().set("url", url), HttpMethod::Get)
    }

    /// List every link found on a page.
    pub fn map(&self, url: &str) -> Result<SiteMap> {
        self.client
            .fetch("/web/map", &Params::new().set("url", url), HttpMethod::Get)
    }

    /// Start a crawl job over a whole site.
    pub fn crawl(&self, request: &CrawlRequest) -> Result<JobId> {
        self.client
            .fetch("/web/crawl", &request.to_params(), HttpMethod::Post)
    }

    /// Status of a crawl job, following `next` links until every page has
    /// been collected. The returned job carries the last reported status and
    /// all pages in the order received.
    ///
    /// A `next` link must stay on the configured API origin and must not
    /// repeat an earlier one.
    pub fn crawl_results(&self, job_id: &str) -> Result<CrawlJob> {
        require_job_id(job_id, ErrorKind::InvalidRequest, "crawl results")?;

        let mut job: CrawlJob = self.client.fetch(
            &job_path("/web/crawl", job_id),
            &Params::new(),
            HttpMethod::Get,
        )?;
        let mut pages = job.pages.take().unwrap_or_default();
        let mut visited = HashSet::new();

        while let Some(next) = job.next.take() {
            self.check_next_link(&next)?;
            if !visited.insert(next.clone()) {
                warn!(next = %next, "crawl pagination revisits a page");
                return Err(Error::internal(
                    "Invalid pagination link",
                    format!("Crawl results link {} was already followed", next),
                ));
            }
            debug!(next = %next, collected = pages.len(), "following crawl page");
            job = self.client.fetch_url(&next, HttpMethod::Get, None)?;
            pages.extend(job.pages.take().unwrap_or_default());
        }

        job.pages = Some(pages);
        Ok(job)
    }

    // The API key goes out with every hop, so links may not leave the API.
    fn check_next_link(&self, next: &str) -> Result<()> {
        let invalid = |details: String| {
            warn!(next = %next, "rejecting crawl pagination link");
            Error::internal("Invalid pagination link", details)
        };
        let base = Url::parse(self.client.config().base_url())
            .map_err(|err| invalid(format!("Invalid base URL: {}", err)))?;
        let link = Url::parse(next).map_err(|err| invalid(format!("{}: {}", next, err)))?;
        if link.origin() != base.origin() {
            return Err(invalid(format!(
                "Crawl results link {} is outside {}",
                next,
                self.client.config().base_url()
            )));
        }
        Ok(())
    }
}
