use crate::model::product::Product as ProductModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            image: value.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_carries_all_row_fields() {
        let model = ProductModel {
            id: 7,
            name: "Widget".to_string(),
            description: "A widget".to_string(),
            price: 9.99,
            image: None,
        };

        let response = ProductResponse::from(model);

        assert_eq!(response.id, 7);
        assert_eq!(response.name, "Widget");
        assert_eq!(response.description, "A widget");
        assert_eq!(response.price, 9.99);
        assert_eq!(response.image, None);
    }
}
