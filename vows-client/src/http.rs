//! HTTP client for the wedding site API

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::error::ApiResponse;
use shared::models::{
    AccessRequest, AccessResponse, CanvasChartResponse, GuestDirectory, ListChartResponse,
    PositionedTable, RsvpRequest, SaveChartRequest, SimpleTable,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// Error body returned by the server
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    code: Option<u16>,
    message: String,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

/// Wedding site API
///
/// Save and submit calls return the server's success message.
#[async_trait]
pub trait SeatingApi: Send + Sync {
    async fn fetch_directory(&self) -> ClientResult<GuestDirectory>;
    async fn fetch_list_chart(&self) -> ClientResult<ListChartResponse>;
    async fn save_list_chart(&self, tables: &[SimpleTable]) -> ClientResult<String>;
    async fn fetch_canvas_chart(&self) -> ClientResult<CanvasChartResponse>;
    async fn save_canvas_chart(&self, tables: &[PositionedTable]) -> ClientResult<String>;
    async fn submit_rsvp(&self, rsvp: &RsvpRequest) -> ClientResult<String>;
    async fn check_access(&self, password: &str) -> ClientResult<bool>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    code: api_err.code,
                    message: api_err.message,
                    details: api_err.details,
                });
            }
            return Err(ClientError::Unexpected {
                status: status.as_u16(),
                body: text,
            });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl SeatingApi for NetworkHttpClient {
    async fn fetch_directory(&self) -> ClientResult<GuestDirectory> {
        self.get("/api/get-rsvps").await
    }

    async fn fetch_list_chart(&self) -> ClientResult<ListChartResponse> {
        self.get("/api/get-seating-chart").await
    }

    async fn save_list_chart(&self, tables: &[SimpleTable]) -> ClientResult<String> {
        let body = SaveChartRequest {
            tables: tables.to_vec(),
        };
        let response: ApiResponse = self.post("/api/save-seating-chart", &body).await?;
        Ok(response.message)
    }

    async fn fetch_canvas_chart(&self) -> ClientResult<CanvasChartResponse> {
        self.get("/api/get-seating-chart-2").await
    }

    async fn save_canvas_chart(&self, tables: &[PositionedTable]) -> ClientResult<String> {
        let body = SaveChartRequest {
            tables: tables.to_vec(),
        };
        let response: ApiResponse = self.post("/api/save-seating-chart-2", &body).await?;
        Ok(response.message)
    }

    async fn submit_rsvp(&self, rsvp: &RsvpRequest) -> ClientResult<String> {
        let response: ApiResponse = self.post("/api/rsvp", rsvp).await?;
        Ok(response.message)
    }

    async fn check_access(&self, password: &str) -> ClientResult<bool> {
        let body = AccessRequest {
            password: password.to_string(),
        };
        let response: AccessResponse = self.post("/api/access", &body).await?;
        Ok(response.authenticated)
    }
}
