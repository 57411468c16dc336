//! Rating service client.
//!
//! Each submission runs on its own short-lived worker thread so the UI
//! thread never waits on the network. A failed submission is logged and
//! dropped; there is no retry.
//!
//! After a successful submission the worker asks the service for the next
//! unrated item and forwards it over a channel, which the card view polls.

use super::error::{SinkError, SinkResult};
use super::{DecisionSink, Submission};
use crate::constants::API_TIMEOUT_SECS;
use crate::types::RatingSubject;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Path of the "next unrated item" query
pub const NEXT_ITEM_PATH: &str = "/api/items/next-for-user";

/// Body of the next-item query: an item, or a status such as `NO_ITEMS`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NextItemResponse {
    Item(RatingSubject),
    Status { status: String },
}

/// Parse a next-item response body. `Ok(None)` means nothing left to rate.
pub fn parse_next_item(body: &str) -> SinkResult<Option<RatingSubject>> {
    match serde_json::from_str::<NextItemResponse>(body)? {
        NextItemResponse::Item(subject) => Ok(Some(subject)),
        NextItemResponse::Status { status } => {
            debug!(%status, "no next item");
            Ok(None)
        }
    }
}

/// Decision sink backed by the rating service's REST API.
#[derive(Clone)]
pub struct HttpDecisionSink {
    client: Client,
    base_url: String,
    token: Option<String>,
    next_items: Option<Sender<RatingSubject>>,
}

impl HttpDecisionSink {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> SinkResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(API_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            next_items: None,
        })
    }

    /// Forward the next unrated item to `tx` after each successful submission.
    pub fn with_next_items(mut self, tx: Sender<RatingSubject>) -> Self {
        self.next_items = Some(tx);
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn check(url: String, response: Response) -> SinkResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(SinkError::Status {
                status: status.as_u16(),
                url,
            })
        }
    }

    /// Post one submission and wait for the answer.
    pub fn post_decision(&self, submission: &Submission) -> SinkResult<()> {
        let Some(endpoint) = submission.endpoint() else {
            return Ok(());
        };
        let url = self.url(&endpoint.path);
        let mut request = self.authorized(self.client.post(&url));
        if let Some(stars) = endpoint.stars {
            request = request.json(&stars);
        }
        let response = request.send()?;
        Self::check(url, response)?;
        Ok(())
    }

    /// Ask the service for the next unrated item.
    pub fn fetch_next(&self) -> SinkResult<Option<RatingSubject>> {
        let url = self.url(NEXT_ITEM_PATH);
        let response = self.authorized(self.client.get(&url)).send()?;
        let body = Self::check(url, response)?.text()?;
        parse_next_item(&body)
    }

    fn run_submission(&self, submission: Submission) {
        if let Err(e) = self.post_decision(&submission) {
            if e.is_auth_failure() {
                warn!(subject = %submission.subject(), "Decision rejected, session expired: {}", e);
            } else {
                error!(subject = %submission.subject(), "Failed to submit decision: {}", e);
            }
            return;
        }
        info!(subject = %submission.subject(), decision = ?submission.decision(), "Decision submitted");

        let Some(tx) = &self.next_items else {
            return;
        };
        match self.fetch_next() {
            Ok(Some(subject)) => {
                // Receiver gone means the window closed
                let _ = tx.send(subject);
            }
            Ok(None) => info!("No unrated items left"),
            Err(e) => error!("Failed to fetch next item: {}", e),
        }
    }
}

impl DecisionSink for HttpDecisionSink {
    fn submit(&self, submission: Submission) {
        let worker = self.clone();
        let spawned = thread::Builder::new()
            .name("decision-submit".into())
            .spawn(move || worker.run_submission(submission));
        if let Err(e) = spawned {
            error!("Failed to spawn submission worker: {}", e);
        }
    }
}
