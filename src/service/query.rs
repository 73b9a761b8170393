use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::response::ProductResponse,
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.query.find_all().await.map_err(|err| {
            error!("❌ Failed to fetch products: {err:?}");
            ServiceError::Repo(err)
        })?;

        info!("✅ Fetched {} products", products.len());

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<ProductResponse, ServiceError> {
        let product = self.query.find_by_id(id).await.map_err(|err| {
            error!("❌ Failed to fetch product ID {id}: {err:?}");
            ServiceError::Repo(err)
        })?;

        match product {
            Some(product) => {
                info!("✅ Found product ID {id}");
                Ok(ProductResponse::from(product))
            }
            None => Err(ServiceError::Repo(RepositoryError::NotFound)),
        }
    }
}
