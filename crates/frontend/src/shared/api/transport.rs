use super::ApiError;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Request to a backend resource; `path` is relative to the API base (e.g. "/Banks/3")
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(encode(body)?),
        })
    }

    pub fn put<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::Put,
            path: path.into(),
            body: Some(encode(body)?),
        })
    }
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Seam between screens and the network.
///
/// Any HTTP status is an `Ok` response; only transport failures are `Err`.
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Send a request and turn non-2xx statuses into [`ApiError::Status`]
pub async fn send_checked<A: ApiTransport + ?Sized>(
    api: &A,
    request: ApiRequest,
) -> Result<ApiResponse, ApiError> {
    let response = api.send(request).await?;
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: response.status,
            body: response.body,
        })
    }
}

pub async fn get_json<T: DeserializeOwned, A: ApiTransport + ?Sized>(
    api: &A,
    path: &str,
) -> Result<T, ApiError> {
    let response = send_checked(api, ApiRequest::get(path)).await?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::super::testing::FakeTransport;
    use super::*;
    use contracts::domain::a005_role::Role;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_json_decodes_list() {
        let api = FakeTransport::new().respond(
            Method::Get,
            "/Roles",
            200,
            json!([{"roleId": 1, "roleName": "Admin"}]),
        );
        let roles: Vec<Role> = get_json(&api, "/Roles").await.unwrap();
        assert_eq!(roles.len(), 1);
        assert_eq!(roles[0].role_name, "Admin");
    }

    #[tokio::test]
    async fn test_error_status_is_err() {
        let api = FakeTransport::new().respond(Method::Put, "/Roles/1", 404, json!("not found"));
        let request = ApiRequest::put("/Roles/1", &json!({"roleId": 1})).unwrap();
        let result = send_checked(&api, request).await;
        assert_eq!(result.unwrap_err().status(), Some(404));
    }

    #[tokio::test]
    async fn test_decode_error() {
        let api = FakeTransport::new().respond(Method::Get, "/Roles", 200, json!({"unexpected": true}));
        let result: Result<Vec<Role>, _> = get_json(&api, "/Roles").await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
