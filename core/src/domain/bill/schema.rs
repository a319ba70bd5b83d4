use serde_json::json;

/// Prompt sent with the receipt photo. The response is additionally
/// constrained to the schema below; the bare-JSON instruction still matters
/// for models that ignore the schema.
pub const BILL_EXTRACTION_PROMPT: &str = "Analyze this bill/receipt image and extract all food items with their prices.\n\
Return the data as a JSON object with this exact structure:\n\
{\n\
  \"items\": [\n\
    {\n\
      \"name\": \"item name\",\n\
      \"price\": number,\n\
      \"quantity\": number\n\
    }\n\
  ],\n\
  \"total\": number,\n\
  \"tax\": number,\n\
  \"subtotal\": number\n\
}\n\
\n\
Only return valid JSON, no other text.";

/// Returns the JSON schema for bill extraction LLM responses
pub fn bill_extraction_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "items": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "price": { "type": "number" },
                        "quantity": { "type": "integer" }
                    },
                    "required": ["name", "price"]
                }
            },
            "total": { "type": "number" },
            "tax": { "type": "number" },
            "subtotal": { "type": "number" }
        },
        "required": ["items"]
    })
}
