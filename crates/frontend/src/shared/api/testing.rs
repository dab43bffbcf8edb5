//! In-memory transport for tests

use super::{ApiError, ApiRequest, ApiResponse, ApiTransport, Method};
use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

type Reply = Result<ApiResponse, ApiError>;

struct Route {
    method: Method,
    path: String,
    replies: VecDeque<Reply>,
}

/// Records every request and answers from per-route reply queues.
///
/// The last queued reply of a route is repeated; unknown routes get a 404.
#[derive(Default)]
pub struct FakeTransport {
    routes: RefCell<Vec<Route>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.reply(
            method,
            path,
            Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        )
    }

    pub fn fail(self, method: Method, path: &str, error: ApiError) -> Self {
        self.reply(method, path, Err(error))
    }

    fn reply(self, method: Method, path: &str, reply: Reply) -> Self {
        {
            let mut routes = self.routes.borrow_mut();
            match routes
                .iter_mut()
                .find(|r| r.method == method && r.path == path)
            {
                Some(route) => route.replies.push_back(reply),
                None => routes.push(Route {
                    method,
                    path: path.to_string(),
                    replies: VecDeque::from([reply]),
                }),
            }
        }
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl ApiTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request.clone());
        let mut routes = self.routes.borrow_mut();
        let route = routes
            .iter_mut()
            .find(|r| r.method == request.method && r.path == request.path);
        match route {
            Some(route) if route.replies.len() > 1 => route
                .replies
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Network("no reply".into()))),
            Some(route) => route
                .replies
                .front()
                .cloned()
                .unwrap_or_else(|| Err(ApiError::Network("no reply".into()))),
            None => Ok(ApiResponse {
                status: 404,
                body: String::new(),
            }),
        }
    }
}
