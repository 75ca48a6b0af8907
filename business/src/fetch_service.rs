use std::fmt::Debug;

use ehttp::{Request, Response, Result};

/// Completion callback of a request. Runs on whatever thread the transport
/// finishes on.
pub type OnDone = Box<dyn FnOnce(Result<Response>) + Send + 'static>;

/// Transport seam for outgoing requests.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: OnDone);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        ehttp::fetch(request, on_done);
    }
}

/// Answers every request synchronously with a canned result and remembers
/// the requested urls.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockFetcher {
    pub response: Option<Result<Response>>,
    requests: std::sync::Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockFetcher {
    pub fn ok(status: u16, body: &[u8]) -> Self {
        Self {
            response: Some(Ok(Response {
                url: String::new(),
                ok: (200..300).contains(&status),
                status,
                status_text: String::new(),
                headers: ehttp::Headers::default(),
                bytes: body.to_vec(),
            })),
            requests: Default::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Some(Err(message.to_owned())),
            requests: Default::default(),
        }
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl FetchService for MockFetcher {
    fn fetch(&self, request: Request, on_done: OnDone) {
        if let Ok(mut urls) = self.requests.lock() {
            urls.push(request.url);
        }
        if let Some(response) = &self.response {
            on_done(response.clone());
        } else {
            on_done(Err("MockFetcher: no response set".to_owned()));
        }
    }
}
