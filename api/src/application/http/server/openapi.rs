use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "FoodChain API",
    description = "Photograph a restaurant bill, extract line items with a vision model, and split them among a group",
    version = "0.1.0"
))]
pub struct ApiDoc;
