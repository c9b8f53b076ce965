//! Product Models

use std::str::FromStr;

use jiff::Timestamp;
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Category Model
#[derive(Debug, Clone)]
pub struct Category {
    pub uuid: CategoryUuid,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Category Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
}

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Product Model
#[derive(Debug, Clone)]
pub struct Product {
    pub uuid: ProductUuid,
    pub category_uuid: Option<CategoryUuid>,
    pub title: String,
    pub description: String,
    pub sku: String,
    pub price: u64,
    pub on_sale: bool,
    pub sale_price: Option<u64>,
    pub stock_quantity: u32,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl Product {
    /// The price a buyer pays right now: the sale price while the product
    /// is on sale, the base price otherwise.
    #[must_use]
    pub fn effective_price(&self) -> u64 {
        match self.sale_price {
            Some(sale_price) if self.on_sale => sale_price,
            _ => self.price,
        }
    }
}

/// New Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub category_uuid: Option<CategoryUuid>,
    pub title: String,
    pub description: String,
    pub sku: String,
    pub price: u64,
    pub on_sale: bool,
    pub sale_price: Option<u64>,
    pub stock_quantity: u32,
    pub is_featured: bool,
}

/// Product Update Model
#[derive(Debug, Clone, PartialEq)]
pub struct ProductUpdate {
    pub category_uuid: Option<CategoryUuid>,
    pub title: String,
    pub description: String,
    pub sku: String,
    pub price: u64,
    pub on_sale: bool,
    pub sale_price: Option<u64>,
    pub stock_quantity: u32,
    pub is_featured: bool,
}

/// Catalog listing sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    #[default]
    Newest,
    TitleAsc,
    TitleDesc,
    PriceAsc,
    PriceDesc,
    Featured,
}

impl ProductSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::TitleAsc => "title_asc",
            Self::TitleDesc => "title_desc",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Featured => "featured",
        }
    }
}

#[derive(Debug, Error)]
#[error("unrecognized sort {0:?}")]
pub struct ParseSortError(String);

impl FromStr for ProductSort {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "title_asc" => Ok(Self::TitleAsc),
            "title_desc" => Ok(Self::TitleDesc),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "featured" => Ok(Self::Featured),
            other => Err(ParseSortError(other.to_string())),
        }
    }
}

/// Catalog listing filter. All fields are optional; the default filter
/// lists every live product, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-insensitive title substring search.
    pub search: Option<String>,

    /// Restrict to one category.
    pub category_uuid: Option<CategoryUuid>,

    /// Restrict to featured products.
    pub featured_only: bool,

    pub sort: ProductSort,

    pub limit: Option<u32>,

    pub offset: Option<u32>,
}
