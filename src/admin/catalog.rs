//! Product and collection listings used to feed the picker.

use serde::Deserialize;

use super::queries::{LIST_COLLECTIONS, LIST_PRODUCTS};
use super::*;
use crate::model::ResourceId;
use crate::picker::{PickedImage, PickedResource};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductListNode {
    id: ResourceId,
    title: String,
    handle: String,

    #[serde(default)]
    featured_image: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
struct CollectionListNode {
    id: ResourceId,
    title: String,
    handle: String,

    #[serde(default)]
    image: Option<ImageNode>,
}

#[derive(Debug, Deserialize)]
struct ProductsData {
    products: Connection<ProductListNode>,
}

#[derive(Debug, Deserialize)]
struct CollectionsData {
    collections: Connection<CollectionListNode>,
}

impl AdminClient {
    pub fn list_products(&self, first: usize) -> Result<Vec<PickedResource>, TransportError> {
        let data: ProductsData =
            self.query("products", LIST_PRODUCTS, serde_json::json!({ "first": first }))?;
        Ok(data
            .products
            .into_nodes()
            .into_iter()
            .map(|p| PickedResource {
                id: Some(p.id),
                title: Some(p.title),
                handle: Some(p.handle),
                images: p
                    .featured_image
                    .into_iter()
                    .map(|img| PickedImage {
                        original_src: Some(img.url),
                    })
                    .collect(),
                image: None,
            })
            .collect())
    }

    pub fn list_collections(&self, first: usize) -> Result<Vec<PickedResource>, TransportError> {
        let data: CollectionsData = self.query(
            "collections",
            LIST_COLLECTIONS,
            serde_json::json!({ "first": first }),
        )?;
        Ok(data
            .collections
            .into_nodes()
            .into_iter()
            .map(|c| PickedResource {
                id: Some(c.id),
                title: Some(c.title),
                handle: Some(c.handle),
                images: Vec::new(),
                image: c.image.map(|img| img.url),
            })
            .collect())
    }
}
