use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        response::ProductResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating new product: {}", req.name);

        let product = self.command.create_product(req).await.map_err(|err| {
            error!("❌ Failed to create product: {err:?}");
            ServiceError::Repo(err)
        })?;

        info!(
            "✅ Product created successfully: {} (ID: {})",
            product.name, product.id
        );

        Ok(ProductResponse::from(product))
    }

    async fn update_product(
        &self,
        id: i32,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("✏️ Updating product with ID: {id}");

        let product = self.command.update_product(id, req).await.map_err(|err| {
            error!("❌ Failed to update product ID {id}: {err:?}");
            ServiceError::Repo(err)
        })?;

        info!("✅ Product updated successfully: ID {}", product.id);

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product with ID: {id}");

        self.command.delete_product(id).await.map_err(|err| {
            error!("❌ Failed to delete product ID {id}: {err:?}");
            ServiceError::Repo(err)
        })?;

        info!("✅ Product deleted: ID {id}");
        Ok(())
    }
}
