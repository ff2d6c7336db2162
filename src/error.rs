use thiserror::Error;

use crate::core::ProductId;

pub type ShopResult<T> = Result<T, ShopError>;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unknown product id {0}")]
    UnknownProduct(ProductId),

    #[error("duplicate product id {0} in catalog")]
    DuplicateProduct(ProductId),

    #[error("cart line index {index} out of range (len={len})")]
    CartLineOutOfRange { index: usize, len: usize },
}
