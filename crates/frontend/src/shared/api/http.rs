use super::{ApiError, ApiRequest, ApiResponse, ApiTransport, Method};
use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use gloo_net::http::Request;

/// Browser transport over `fetch` (gloo-net)
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpTransport;

#[async_trait(?Send)]
impl ApiTransport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = api_url(&request.path);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        }
        .header("Accept", "application/json");

        let sent = match &request.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };

        let response = sent.map_err(|e| {
            log::error!("{:?} {} failed: {}", request.method, url, e);
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if !(200..300).contains(&status) {
            log::error!("{:?} {} returned HTTP {}", request.method, url, status);
        }

        Ok(ApiResponse { status, body })
    }
}
