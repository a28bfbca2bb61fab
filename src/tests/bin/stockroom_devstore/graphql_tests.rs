use super::*;

fn request(query: &str, variables: Value) -> GraphqlRequest {
    GraphqlRequest {
        query: query.to_string(),
        variables,
    }
}

const CREATE: &str = "mutation populateProduct($input: ProductInput!) { productCreate(input: $input) { product { id variants(first: 10) { edges { node { id } } } } } }";
const UPDATE: &str = "mutation updateVariant($input: ProductVariantInput!) { productVariantUpdate(input: $input) { productVariant { id price } } }";

#[test]
fn classifies_mutations_before_queries() {
    assert_eq!(classify(CREATE), Some(Operation::ProductCreate));
    assert_eq!(classify(UPDATE), Some(Operation::VariantUpdate));
    assert_eq!(
        classify("query { customers(first: 10) { edges { node { id } } } }"),
        Some(Operation::Customers)
    );
    assert_eq!(
        classify("query { collections(first: 2) { edges { node { id } } } }"),
        Some(Operation::Collections)
    );
    assert_eq!(classify("query { shop { name } }"), None);
}

#[test]
fn customers_honor_first() {
    let mut store = Store::seeded();
    let out = execute(
        &mut store,
        Faults::default(),
        &request("query { customers(first: $first) { edges { node { id } } } }", json!({"first": 10})),
    );
    let edges = out.pointer("/data/customers/edges").unwrap().as_array().unwrap();
    assert_eq!(edges.len(), 10);
    assert_eq!(edges[0].pointer("/node/id").unwrap(), "gid://shopify/Customer/1");
}

#[test]
fn created_product_gets_default_variant_that_can_be_updated() {
    let mut store = Store::seeded();
    let created = execute(
        &mut store,
        Faults::default(),
        &request(CREATE, json!({"input": {"title": "Red Snowboard"}})),
    );
    let product = created.pointer("/data/productCreate/product").unwrap();
    assert_eq!(product["handle"], "red-snowboard");
    let variant_id = product
        .pointer("/variants/edges/0/node/id")
        .and_then(Value::as_str)
        .unwrap()
        .to_string();

    let updated = execute(
        &mut store,
        Faults::default(),
        &request(UPDATE, json!({"input": {"id": variant_id, "price": 12.5}})),
    );
    let v = updated.pointer("/data/productVariantUpdate/productVariant").unwrap();
    assert_eq!(v["id"], variant_id.as_str());
    assert_eq!(v["price"], "12.50");
}

#[test]
fn faults_shape_error_responses() {
    let mut store = Store::seeded();
    let faults = Faults {
        fail_product_create: true,
        ..Faults::default()
    };
    let out = execute(&mut store, faults, &request(CREATE, json!({"input": {"title": "X"}})));
    assert!(out.get("data").is_none());
    assert!(out["errors"][0]["message"].as_str().unwrap().contains("Internal error"));

    let faults = Faults {
        no_default_variant: true,
        ..Faults::default()
    };
    let out = execute(&mut store, faults, &request(CREATE, json!({"input": {"title": "X"}})));
    let edges = out.pointer("/data/productCreate/product/variants/edges").unwrap();
    assert_eq!(edges.as_array().unwrap().len(), 0);
}

#[test]
fn unknown_variant_is_a_user_error() {
    let mut store = Store::seeded();
    let out = execute(
        &mut store,
        Faults::default(),
        &request(UPDATE, json!({"input": {"id": "gid://shopify/ProductVariant/999999", "price": "1.00"}})),
    );
    assert!(out.pointer("/data/productVariantUpdate/productVariant").unwrap().is_null());
    assert_eq!(
        out.pointer("/data/productVariantUpdate/userErrors/0/message").unwrap(),
        "Product variant does not exist"
    );
}

#[test]
fn duplicate_titles_get_distinct_handles() {
    let mut store = Store::seeded();
    let a = store.create_product("Green Snowboard", true);
    let b = store.create_product("Green Snowboard", true);
    assert_eq!(a.handle, "green-snowboard");
    assert_eq!(b.handle, "green-snowboard-1");
}

#[test]
fn gid_round_trips_only_for_matching_kind() {
    assert_eq!(parse_gid("ProductVariant", &gid("ProductVariant", 7)), Some(7));
    assert_eq!(parse_gid("Product", &gid("ProductVariant", 7)), None);
}
