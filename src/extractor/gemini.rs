//! Gemini API連携（reqwest）

use async_trait::async_trait;
use namecard_common::gemini::{
    api_error_message, build_extraction_request, endpoint_url, extract_card_from_body,
};
use namecard_common::{BusinessCardData, Error, ImagePayload};
use tracing::{debug, error, warn};

use super::CardExtractor;

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn request(&self, image: &ImagePayload) -> namecard_common::Result<BusinessCardData> {
        let request = build_extraction_request(image);
        debug!(model = %self.model, mime_type = %image.mime_type, "sending extraction request");

        let response = self
            .client
            .post(endpoint_url(&self.model, &self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::extraction(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::extraction(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::extraction(api_error_message(status.as_u16(), &body)));
        }

        debug!(size = body.len(), "received extraction response");
        extract_card_from_body(&body)
    }
}

#[async_trait]
impl CardExtractor for GeminiClient {
    async fn extract(&self, image: &ImagePayload) -> namecard_common::Result<BusinessCardData> {
        self.request(image).await.map_err(|e| {
            let e = e.into_extraction_failure();
            if e.requires_key_selection() {
                warn!("API key might be invalid or not selected");
            } else {
                error!(error = %e, "error extracting business card data");
            }
            e
        })
    }
}
