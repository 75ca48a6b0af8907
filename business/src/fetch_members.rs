//! Members data source: one `GET` at mount time.
//!
//! `fetch_members` performs the request and classifies the outcome.
//! `MembersLoader` is the fire-once mount effect around it. The callback runs
//! off the UI thread, so the result travels back over a channel and is only
//! applied to the row collection when the UI thread calls
//! [`MembersLoader::poll`].

use chrono::{DateTime, Utc};
use flume::{Receiver, Sender};
use log::{debug, error, info};
use thiserror::Error;

use crate::{FetchService, Member, RosterRows};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("endpoint returned status {0}")]
    Status(u16),
    #[error("malformed members payload: {0}")]
    Parse(String),
}

pub type FetchMembersResult = Result<Vec<Member>, FetchError>;

/// Classifies a finished request.
pub fn parse_members_response(result: ehttp::Result<ehttp::Response>) -> FetchMembersResult {
    let response = result.map_err(FetchError::Network)?;
    if !(200..300).contains(&response.status) {
        return Err(FetchError::Status(response.status));
    }
    serde_json::from_slice::<Vec<Member>>(&response.bytes)
        .map_err(|err| FetchError::Parse(err.to_string()))
}

/// Issues one `GET` to `url` and hands the classified result to `on_done`.
pub fn fetch_members(
    fetcher: &dyn FetchService,
    url: &str,
    on_done: impl FnOnce(FetchMembersResult) + Send + 'static,
) {
    debug!("Fetching members from {url}");
    let request = ehttp::Request::get(url);
    fetcher.fetch(
        request,
        Box::new(move |result| on_done(parse_members_response(result))),
    );
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Pending,
    Loaded {
        count: usize,
        at: DateTime<Utc>,
    },
    Failed(FetchError),
}

impl LoadStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Fire-once loader for the members table.
#[derive(Debug)]
pub struct MembersLoader {
    status: LoadStatus,
    /// Taken by the first `start`; later calls find it gone.
    sender: Option<Sender<FetchMembersResult>>,
    receiver: Receiver<FetchMembersResult>,
}

impl Default for MembersLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MembersLoader {
    pub fn new() -> Self {
        let (sender, receiver) = flume::bounded(1);
        Self {
            status: LoadStatus::Idle,
            sender: Some(sender),
            receiver,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Starts the request. Only the first call does anything.
    ///
    /// `on_ready` runs on the transport thread once the result is queued,
    /// typically to wake the UI.
    pub fn start(
        &mut self,
        fetcher: &dyn FetchService,
        url: &str,
        on_ready: impl FnOnce() + Send + 'static,
    ) {
        let Some(sender) = self.sender.take() else {
            return;
        };

        info!("Loading members");
        self.status = LoadStatus::Pending;

        fetch_members(fetcher, url, move |result| {
            if sender.send(result).is_err() {
                debug!("Members table is gone, dropping fetch result");
                return;
            }
            on_ready();
        });
    }

    /// Applies a finished fetch to `rows`. Returns `true` when a result was
    /// consumed this call.
    ///
    /// On success the whole collection is replaced. On failure the error is
    /// logged and `rows` keeps its previous contents.
    pub fn poll(&mut self, rows: &mut RosterRows) -> bool {
        let Ok(result) = self.receiver.try_recv() else {
            return false;
        };

        match result {
            Ok(members) => {
                rows.replace_all(members);
                info!("Loaded {} members", rows.len());
                self.status = LoadStatus::Loaded {
                    count: rows.len(),
                    at: Utc::now(),
                };
            }
            Err(err) => {
                error!("Error fetching members: {err}");
                self.status = LoadStatus::Failed(err);
            }
        }
        true
    }
}
