//! GraphQL documents sent to the Admin API.

pub(super) const FIRST_CUSTOMERS: &str = r#"query firstCustomers($first: Int!) {
  customers(first: $first) {
    edges {
      node {
        id
        displayName
        email
      }
    }
  }
}"#;

pub(super) const LIST_PRODUCTS: &str = r#"query pickerProducts($first: Int!) {
  products(first: $first) {
    edges {
      node {
        id
        title
        handle
        featuredImage {
          url
        }
      }
    }
  }
}"#;

pub(super) const LIST_COLLECTIONS: &str = r#"query pickerCollections($first: Int!) {
  collections(first: $first) {
    edges {
      node {
        id
        title
        handle
        image {
          url
        }
      }
    }
  }
}"#;

pub(super) const PRODUCT_CREATE: &str = r#"mutation populateProduct($input: ProductInput!) {
  productCreate(input: $input) {
    product {
      id
      title
      handle
      status
      variants(first: 10) {
        edges {
          node {
            id
            price
            barcode
            createdAt
          }
        }
      }
    }
    userErrors {
      field
      message
    }
  }
}"#;

pub(super) const VARIANT_UPDATE: &str = r#"mutation updateVariant($input: ProductVariantInput!) {
  productVariantUpdate(input: $input) {
    productVariant {
      id
      price
      barcode
      createdAt
    }
    userErrors {
      field
      message
    }
  }
}"#;
