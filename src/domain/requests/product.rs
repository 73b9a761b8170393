use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    #[schema(example = "Widget")]
    pub name: String,

    #[schema(example = "A widget")]
    pub description: String,

    #[schema(example = 9.99)]
    pub price: f64,

    #[schema(example = "https://example.com/widget.png")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    #[schema(example = "Widget")]
    pub name: String,

    #[schema(example = "A widget")]
    pub description: String,

    #[schema(example = 9.99)]
    pub price: f64,

    #[schema(example = "https://example.com/widget.png")]
    pub image: Option<String>,
}
