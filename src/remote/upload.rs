use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::store::check_status;
use super::ImageUploader;
use crate::error::RemoteError;
use crate::media::normalize::NormalizedImage;

/// Upload endpoint reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpImageUploader {
    client: reqwest::Client,
    endpoint: String,
}

/// Request body: the data URI plus its content type
#[derive(Serialize, Debug)]
struct UploadRequest<'a> {
    image: &'a str,
    #[serde(rename = "type")]
    content_type: &'a str,
}

#[derive(Deserialize, Debug)]
struct UploadReceipt {
    url: String,
}

impl HttpImageUploader {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl ImageUploader for HttpImageUploader {
    async fn upload(&self, image: &NormalizedImage) -> Result<String, RemoteError> {
        let request = UploadRequest {
            image: &image.data_uri,
            content_type: image.content_type,
        };

        tracing::debug!(
            "Uploading {}KB payload to {}",
            image.data_uri.len() / 1024,
            self.endpoint
        );
        let response = self.client.post(&self.endpoint).json(&request).send().await?;
        let receipt: UploadReceipt = check_status(response).await?.json().await?;
        Ok(receipt.url)
    }
}
