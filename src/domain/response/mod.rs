mod api;
mod product;

pub use self::api::MessageResponse;
pub use self::product::ProductResponse;
