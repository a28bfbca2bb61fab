//! Store records as returned by the Admin API.

use serde::{Deserialize, Serialize};

use super::ids::ResourceId;
use super::price::Price;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: ResourceId,
    pub display_name: String,

    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: ResourceId,
    pub price: Price,

    #[serde(default)]
    pub barcode: Option<String>,

    pub created_at: String,
}

/// A product with its variants flattened out of the connection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ResourceId,
    pub title: String,
    pub handle: String,
    pub status: String,
    pub variants: Vec<Variant>,
}

impl Product {
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreateInput {
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantUpdateInput {
    pub id: ResourceId,
    pub price: Price,
}
