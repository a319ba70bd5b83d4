use crate::domain::{
    bill::{
        ports::LLMClient,
        schema::{BILL_EXTRACTION_PROMPT, bill_extraction_schema},
        value_objects::ExtractionResult,
    },
    common::{FoodchainConfig, entities::app_errors::CoreError},
};
use crate::infrastructure::llm::GeminiVisionClient;

/// Orchestrates the extraction step: one photographed bill in, one parsed
/// `ExtractionResult` out. Everything downstream of the result is the split
/// session's business.
#[derive(Debug, Clone)]
pub struct BillProcessingService<L: LLMClient> {
    llm_client: L,
}

pub type FoodchainService = BillProcessingService<GeminiVisionClient>;

pub fn create_service(config: FoodchainConfig) -> Result<FoodchainService, anyhow::Error> {
    let llm_client = GeminiVisionClient::new(config.llm.gemini_api_key, config.llm.gemini_model)?;

    Ok(BillProcessingService::with_client(llm_client))
}

impl<L: LLMClient> BillProcessingService<L> {
    pub fn with_client(llm_client: L) -> Self {
        Self { llm_client }
    }

    pub async fn process_bill(
        &self,
        image_data: Vec<u8>,
        mime_type: String,
    ) -> Result<ExtractionResult, CoreError> {
        // 1. Call the vision model with the receipt photo
        let raw_response = self
            .llm_client
            .generate_with_image(
                BILL_EXTRACTION_PROMPT.to_string(),
                image_data,
                mime_type,
                bill_extraction_schema(),
            )
            .await?;

        // 2. Strip markdown code fences some models wrap around the JSON
        let clean_text = raw_response
            .replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string();

        // 3. Parse into the extraction shape the session consumes
        let extraction: ExtractionResult = serde_json::from_str(&clean_text).map_err(|e| {
            tracing::error!("Failed to parse extraction response: {}", e);
            CoreError::ExternalServiceError(format!("failed to parse extraction response: {}", e))
        })?;

        tracing::debug!(items = extraction.items.len(), "extracted bill items");

        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::ports::MockLLMClient;

    #[tokio::test]
    async fn test_process_bill_parses_fenced_json() {
        let mut llm_client = MockLLMClient::new();
        llm_client.expect_generate_with_image().return_once(
            |_prompt, _image, _mime, _schema| {
                Box::pin(async {
                    Ok("```json\n{\"items\":[{\"name\":\"Burger\",\"price\":12.99,\"quantity\":2}],\"total\":25.98}\n```".to_string())
                })
            },
        );

        let service = BillProcessingService::with_client(llm_client);
        let extraction = service
            .process_bill(vec![1, 2, 3], "image/jpeg".to_string())
            .await
            .unwrap();

        assert_eq!(extraction.items.len(), 1);
        assert_eq!(extraction.items[0].name, "Burger");
        assert_eq!(extraction.items[0].quantity, Some(2));
        assert_eq!(extraction.total, Some(25.98));
    }

    #[tokio::test]
    async fn test_process_bill_surfaces_unparseable_output() {
        let mut llm_client = MockLLMClient::new();
        llm_client
            .expect_generate_with_image()
            .return_once(|_, _, _, _| {
                Box::pin(async { Ok("the receipt looks delicious".to_string()) })
            });

        let service = BillProcessingService::with_client(llm_client);
        let err = service
            .process_bill(Vec::new(), "image/png".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn test_process_bill_propagates_client_failure() {
        let mut llm_client = MockLLMClient::new();
        llm_client
            .expect_generate_with_image()
            .return_once(|_, _, _, _| {
                Box::pin(async {
                    Err(CoreError::ExternalServiceError(
                        "vision API returned error: 503".to_string(),
                    ))
                })
            });

        let service = BillProcessingService::with_client(llm_client);
        let err = service
            .process_bill(vec![0xFF], "image/jpeg".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
