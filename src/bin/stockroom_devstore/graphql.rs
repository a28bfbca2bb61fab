//! Tiny GraphQL dispatcher: recognizes the handful of operations the client sends.

use stockroom::model::Price;

use super::*;

const MAX_PAGE: u64 = 250;

#[derive(Debug, serde::Deserialize)]
pub(super) struct GraphqlRequest {
    pub(super) query: String,

    #[serde(default)]
    pub(super) variables: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Operation {
    Customers,
    Products,
    Collections,
    ProductCreate,
    VariantUpdate,
}

pub(super) fn classify(query: &str) -> Option<Operation> {
    // Mutations first: their selection sets mention `product`/`variants`.
    if query.contains("productVariantUpdate(") {
        Some(Operation::VariantUpdate)
    } else if query.contains("productCreate(") {
        Some(Operation::ProductCreate)
    } else if query.contains("customers(") {
        Some(Operation::Customers)
    } else if query.contains("collections(") {
        Some(Operation::Collections)
    } else if query.contains("products(") {
        Some(Operation::Products)
    } else {
        None
    }
}

pub(super) fn execute(store: &mut Store, faults: Faults, req: &GraphqlRequest) -> Value {
    let Some(op) = classify(&req.query) else {
        return errors(&["Field is not supported by the development store"]);
    };
    let first = req
        .variables
        .get("first")
        .and_then(Value::as_u64)
        .unwrap_or(10)
        .min(MAX_PAGE) as usize;

    match op {
        Operation::Customers => {
            let edges: Vec<Value> = store
                .customers
                .iter()
                .take(first)
                .map(|c| {
                    edge(json!({
                        "id": gid("Customer", c.id),
                        "displayName": c.display_name,
                        "email": c.email,
                    }))
                })
                .collect();
            json!({ "data": { "customers": { "edges": edges } } })
        }
        Operation::Products => {
            let edges: Vec<Value> = store
                .products
                .iter()
                .take(first)
                .map(|p| {
                    edge(json!({
                        "id": gid("Product", p.id),
                        "title": p.title,
                        "handle": p.handle,
                        "featuredImage": p.image.as_ref().map(|url| json!({ "url": url })),
                    }))
                })
                .collect();
            json!({ "data": { "products": { "edges": edges } } })
        }
        Operation::Collections => {
            let edges: Vec<Value> = store
                .collections
                .iter()
                .take(first)
                .map(|c| {
                    edge(json!({
                        "id": gid("Collection", c.id),
                        "title": c.title,
                        "handle": c.handle,
                        "image": c.image.as_ref().map(|url| json!({ "url": url })),
                    }))
                })
                .collect();
            json!({ "data": { "collections": { "edges": edges } } })
        }
        Operation::ProductCreate => product_create(store, faults, &req.variables),
        Operation::VariantUpdate => variant_update(store, faults, &req.variables),
    }
}

fn product_create(store: &mut Store, faults: Faults, variables: &Value) -> Value {
    if faults.fail_product_create {
        return errors(&["Internal error. Looks like something went wrong on our end."]);
    }
    let title = variables
        .pointer("/input/title")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    if title.is_empty() {
        return json!({ "data": { "productCreate": {
            "product": null,
            "userErrors": [user_error("title", "Title can't be blank")],
        } } });
    }

    let rec = store.create_product(title, !faults.no_default_variant);
    json!({ "data": { "productCreate": {
        "product": product_json(&rec),
        "userErrors": [],
    } } })
}

fn variant_update(store: &mut Store, faults: Faults, variables: &Value) -> Value {
    let reject = |field: &str, message: &str| {
        json!({ "data": { "productVariantUpdate": {
            "productVariant": null,
            "userErrors": [user_error(field, message)],
        } } })
    };
    if faults.fail_variant_update {
        return reject("price", "Price can't be changed right now");
    }

    let Some(variant_id) = variables
        .pointer("/input/id")
        .and_then(Value::as_str)
        .and_then(|id| parse_gid("ProductVariant", id))
    else {
        return reject("id", "Product variant does not exist");
    };
    let price = match variables.pointer("/input/price") {
        Some(raw) => match serde_json::from_value::<Price>(raw.clone()) {
            Ok(p) => p,
            Err(_) => return reject("price", "Price is invalid"),
        },
        None => return reject("price", "Price can't be blank"),
    };

    match store.update_variant_price(variant_id, price) {
        Some(v) => json!({ "data": { "productVariantUpdate": {
            "productVariant": variant_json(&v),
            "userErrors": [],
        } } }),
        None => reject("id", "Product variant does not exist"),
    }
}

fn product_json(p: &ProductRec) -> Value {
    let edges: Vec<Value> = p.variants.iter().map(|v| edge(variant_json(v))).collect();
    json!({
        "id": gid("Product", p.id),
        "title": p.title,
        "handle": p.handle,
        "status": p.status,
        "variants": { "edges": edges },
    })
}

fn variant_json(v: &VariantRec) -> Value {
    json!({
        "id": gid("ProductVariant", v.id),
        "price": v.price.to_string(),
        "barcode": v.barcode,
        "createdAt": v.created_at,
    })
}

fn edge(node: Value) -> Value {
    json!({ "node": node })
}

fn user_error(field: &str, message: &str) -> Value {
    json!({ "field": ["input", field], "message": message })
}

fn errors(messages: &[&str]) -> Value {
    let list: Vec<Value> = messages.iter().map(|m| json!({ "message": m })).collect();
    json!({ "errors": list })
}

pub(super) fn gid(kind: &str, id: u64) -> String {
    format!("gid://shopify/{}/{}", kind, id)
}

pub(super) fn parse_gid(kind: &str, gid: &str) -> Option<u64> {
    gid.strip_prefix("gid://shopify/")?
        .strip_prefix(kind)?
        .strip_prefix('/')?
        .parse()
        .ok()
}

#[cfg(test)]
#[path = "../../tests/bin/stockroom_devstore/graphql_tests.rs"]
mod tests;
