use super::*;
use crate::model::Price;

#[test]
fn product_node_flattens_variant_connection() {
    let raw = serde_json::json!({
        "data": {
            "id": "gid://shopify/Product/7",
            "title": "Red Snowboard",
            "handle": "red-snowboard",
            "status": "ACTIVE",
            "variants": { "edges": [
                { "node": { "id": "gid://shopify/ProductVariant/70", "price": "0.00",
                            "barcode": null, "createdAt": "2024-05-01T10:00:00Z" } }
            ] }
        }
    });
    let resp: GraphqlResponse<ProductNode> = serde_json::from_value(raw).unwrap();
    assert!(resp.errors.is_empty());
    let product = Product::from(resp.data.unwrap());
    assert_eq!(product.variants.len(), 1);
    assert_eq!(product.default_variant().unwrap().id.short(), "70");
    assert_eq!(product.variants[0].price, Price::from_cents(0));
}

#[test]
fn top_level_errors_without_data_decode() {
    let raw = serde_json::json!({ "errors": [{ "message": "Throttled" }] });
    let resp: GraphqlResponse<ProductNode> = serde_json::from_value(raw).unwrap();
    assert!(resp.data.is_none());
    assert_eq!(error_messages(&resp.errors), vec!["Throttled".to_string()]);
}

#[test]
fn user_error_includes_field_path() {
    let e: UserError =
        serde_json::from_value(serde_json::json!({ "field": ["input", "price"], "message": "is invalid" }))
            .unwrap();
    assert_eq!(e.describe(), "input.price: is invalid");

    let e: UserError =
        serde_json::from_value(serde_json::json!({ "field": null, "message": "nope" })).unwrap();
    assert_eq!(e.describe(), "nope");
}

#[test]
fn rejected_transport_error_lists_messages() {
    let err = TransportError::Rejected {
        label: "customers".to_string(),
        messages: vec!["a".to_string(), "b".to_string()],
    };
    assert_eq!(err.to_string(), "customers: rejected: a; b");
}

#[test]
fn client_requires_access_token() {
    let shop = ShopConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_version: "2024-10".to_string(),
        access_token: None,
    };
    assert!(AdminClient::new(shop).is_err());
}

#[test]
fn endpoint_includes_api_version() {
    let shop = ShopConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_version: "2024-10".to_string(),
        access_token: Some("t".to_string()),
    };
    let client = AdminClient::new(shop).unwrap();
    assert_eq!(
        client.endpoint(),
        "http://127.0.0.1:9/admin/api/2024-10/graphql.json"
    );
}
