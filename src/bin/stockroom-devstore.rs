//! Local stand-in for a store's Admin GraphQL endpoint (development and tests).

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::RwLock;

#[path = "stockroom_devstore/store.rs"]
mod store;
use self::store::*;
#[path = "stockroom_devstore/graphql.rs"]
mod graphql;
use self::graphql::*;
#[path = "stockroom_devstore/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "stockroom_devstore/handlers.rs"]
mod handlers;
use self::handlers::*;
#[path = "stockroom_devstore/runtime.rs"]
mod runtime;

/// Failures the operator can switch on to exercise error paths.
#[derive(Clone, Copy, Debug, Default)]
struct Faults {
    fail_product_create: bool,
    no_default_variant: bool,
    fail_variant_update: bool,
}

struct AppState {
    token: String,
    faults: Faults,
    store: RwLock<Store>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
