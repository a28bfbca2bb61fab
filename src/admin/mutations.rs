//! Product creation and variant update mutations.

use serde::Deserialize;

use super::queries::{PRODUCT_CREATE, VARIANT_UPDATE};
use super::*;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductCreateData {
    product_create: Option<ProductCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductCreatePayload {
    product: Option<ProductNode>,

    #[serde(default)]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantUpdateData {
    product_variant_update: Option<VariantUpdatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantUpdatePayload {
    product_variant: Option<Variant>,

    #[serde(default)]
    user_errors: Vec<UserError>,
}

impl AdminClient {
    pub fn product_create(
        &self,
        input: &ProductCreateInput,
    ) -> Result<MutationOutcome<Product>, TransportError> {
        let resp: GraphqlResponse<ProductCreateData> = self.post_graphql(
            "productCreate",
            PRODUCT_CREATE,
            serde_json::json!({ "input": input }),
        )?;
        let mut errors = error_messages(&resp.errors);
        let payload = resp.data.and_then(|d| d.product_create);
        let Some(payload) = payload else {
            return Ok(MutationOutcome::rejected(errors));
        };
        errors.extend(payload.user_errors.iter().map(UserError::describe));
        Ok(MutationOutcome {
            record: payload.product.map(Product::from),
            errors,
        })
    }

    pub fn product_variant_update(
        &self,
        input: &VariantUpdateInput,
    ) -> Result<MutationOutcome<Variant>, TransportError> {
        let resp: GraphqlResponse<VariantUpdateData> = self.post_graphql(
            "productVariantUpdate",
            VARIANT_UPDATE,
            serde_json::json!({ "input": input }),
        )?;
        let mut errors = error_messages(&resp.errors);
        let payload = resp.data.and_then(|d| d.product_variant_update);
        let Some(payload) = payload else {
            return Ok(MutationOutcome::rejected(errors));
        };
        errors.extend(payload.user_errors.iter().map(UserError::describe));
        Ok(MutationOutcome {
            record: payload.product_variant,
            errors,
        })
    }
}
