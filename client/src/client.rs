use reqwest::{Client, Response, header};
use tracing::debug;

use crate::error::ClientError;

pub const USER_AGENT: &str = "rawilder-test";

#[derive(Clone)]
pub struct StatusClient {
    client: Client,
    base_url: String,
}

impl StatusClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn auth(&self, authorization: &str) -> Result<String, ClientError> {
        let response = self
            .client
            .get(format!("{}/auth", self.base_url))
            .header(header::AUTHORIZATION, authorization)
            .send()
            .await?;
        read_body(response).await
    }

    pub async fn bad(&self) -> Result<String, ClientError> {
        let response = self
            .client
            .get(format!("{}/bad", self.base_url))
            .send()
            .await?;
        read_body(response).await
    }

    pub async fn error(&self) -> Result<String, ClientError> {
        let response = self
            .client
            .get(format!("{}/error", self.base_url))
            .send()
            .await?;
        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<String, ClientError> {
    let status = response.status();
    if !status.is_success() {
        debug!(%status, "request failed");
        return Err(ClientError::Status { status });
    }

    Ok(response.text().await?)
}
