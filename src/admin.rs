use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::{
    Customer, Product, ProductCreateInput, ShopConfig, Variant, VariantUpdateInput,
};

mod http_client;

mod types;
pub use self::types::*;
mod catalog;
mod customers;
mod mutations;
mod queries;

/// The authorized request channel the selection and provisioning core talks through.
///
/// Implementations must not retry; each call is a single attempt.
pub trait AdminChannel: Send + Sync {
    fn first_customers(&self, limit: usize) -> Result<Vec<Customer>, TransportError>;

    fn create_product(
        &self,
        input: &ProductCreateInput,
    ) -> Result<MutationOutcome<Product>, TransportError>;

    fn update_variant(
        &self,
        input: &VariantUpdateInput,
    ) -> Result<MutationOutcome<Variant>, TransportError>;
}

impl<T: AdminChannel + ?Sized> AdminChannel for std::sync::Arc<T> {
    fn first_customers(&self, limit: usize) -> Result<Vec<Customer>, TransportError> {
        (**self).first_customers(limit)
    }

    fn create_product(
        &self,
        input: &ProductCreateInput,
    ) -> Result<MutationOutcome<Product>, TransportError> {
        (**self).create_product(input)
    }

    fn update_variant(
        &self,
        input: &VariantUpdateInput,
    ) -> Result<MutationOutcome<Variant>, TransportError> {
        (**self).update_variant(input)
    }
}

/// Blocking Admin GraphQL client for one shop.
pub struct AdminClient {
    shop: ShopConfig,
    token: String,
    client: reqwest::blocking::Client,
}

impl AdminClient {
    pub fn new(shop: ShopConfig) -> anyhow::Result<Self> {
        let token = shop
            .access_token
            .clone()
            .context("shop config has no access token")?;
        let client = reqwest::blocking::Client::builder()
            .user_agent("stockroom")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            shop,
            token,
            client,
        })
    }

    pub fn shop(&self) -> &ShopConfig {
        &self.shop
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/admin/api/{}/graphql.json",
            self.shop.base_url, self.shop.api_version
        )
    }

    fn query<T: DeserializeOwned>(
        &self,
        label: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, TransportError> {
        let resp: GraphqlResponse<T> = self.post_graphql(label, query, variables)?;
        match resp.data {
            Some(data) if resp.errors.is_empty() => Ok(data),
            Some(data) => {
                debug!(label, errors = ?resp.errors, "query returned partial data");
                Ok(data)
            }
            None => Err(TransportError::Rejected {
                label: label.to_string(),
                messages: error_messages(&resp.errors),
            }),
        }
    }
}

impl AdminChannel for AdminClient {
    fn first_customers(&self, limit: usize) -> Result<Vec<Customer>, TransportError> {
        self.fetch_first_customers(limit)
    }

    fn create_product(
        &self,
        input: &ProductCreateInput,
    ) -> Result<MutationOutcome<Product>, TransportError> {
        self.product_create(input)
    }

    fn update_variant(
        &self,
        input: &VariantUpdateInput,
    ) -> Result<MutationOutcome<Variant>, TransportError> {
        self.product_variant_update(input)
    }
}

fn error_messages(errors: &[GraphqlError]) -> Vec<String> {
    errors.iter().map(|e| e.message.clone()).collect()
}

#[cfg(test)]
#[path = "tests/admin/decode_tests.rs"]
mod tests;
