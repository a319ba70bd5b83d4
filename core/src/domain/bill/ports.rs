use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// LLM client abstraction for the vision extraction step.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
