use std::fmt;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Size variant of a product (shoe sizes in the reference storefront).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductSize(pub u16);

impl ProductSize {
    pub const DEFAULT: Self = Self(9);
}

impl Default for ProductSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ProductSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable catalog record. Owned by the host; the engine only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub tag: String,
    #[serde(default, alias = "image")]
    pub image_ref: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            price,
            tag: String::new(),
            image_ref: String::new(),
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

/// Ordered, id-addressed product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: IndexMap<ProductId, Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> ShopResult<Self> {
        let mut map = IndexMap::with_capacity(products.len());
        for product in products {
            if product.price.is_sign_negative() {
                return Err(ShopError::InvalidData(format!(
                    "product {} has a negative price",
                    product.id
                )));
            }
            let id = product.id;
            if map.insert(id, product).is_some() {
                return Err(ShopError::DuplicateProduct(id));
            }
        }
        Ok(Self { products: map })
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(input: &str) -> ShopResult<Self> {
        let products: Vec<Product> = serde_json::from_str(input)
            .map_err(|e| ShopError::InvalidData(format!("failed to parse catalog: {e}")))?;
        Self::new(products)
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn require(&self, id: ProductId) -> ShopResult<&Product> {
        self.get(id).ok_or(ShopError::UnknownProduct(id))
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
