//! GraphQL envelopes and error types for the Admin API.

use serde::Deserialize;

use crate::model::{Product, ResourceId, Variant};

/// Failure of the channel itself, as opposed to a well-formed response that lacks data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("{label}: request failed: {message}")]
    Request { label: String, message: String },

    #[error("{label}: unauthorized (access token invalid or revoked)")]
    Unauthorized { label: String },

    #[error("{label}: forbidden (access token lacks the required scope)")]
    Forbidden { label: String },

    #[error("{label}: HTTP {status}: {body}")]
    Status {
        label: String,
        status: u16,
        body: String,
    },

    #[error("{label}: could not decode response: {message}")]
    Decode { label: String, message: String },

    #[error("{label}: rejected: {}", messages.join("; "))]
    Rejected { label: String, messages: Vec<String> },
}

/// Result of a mutation that reached the server.
///
/// `record` is `None` when the server answered with errors instead of data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationOutcome<T> {
    pub record: Option<T>,
    pub errors: Vec<String>,
}

impl<T> MutationOutcome<T> {
    pub fn ok(record: T) -> Self {
        Self {
            record: Some(record),
            errors: Vec::new(),
        }
    }

    pub fn rejected(errors: Vec<String>) -> Self {
        Self {
            record: None,
            errors,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct GraphqlResponse<T> {
    pub(super) data: Option<T>,

    #[serde(default)]
    pub(super) errors: Vec<GraphqlError>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct Connection<T> {
    pub(super) edges: Vec<Edge<T>>,
}

impl<T> Connection<T> {
    pub(super) fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|e| e.node).collect()
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Edge<T> {
    pub(super) node: T,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UserError {
    #[serde(default)]
    pub(super) field: Option<Vec<String>>,
    pub(super) message: String,
}

impl UserError {
    pub(super) fn describe(&self) -> String {
        match &self.field {
            Some(path) if !path.is_empty() => format!("{}: {}", path.join("."), self.message),
            _ => self.message.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProductNode {
    pub(super) id: ResourceId,
    pub(super) title: String,
    pub(super) handle: String,
    pub(super) status: String,
    pub(super) variants: Connection<Variant>,
}

impl From<ProductNode> for Product {
    fn from(node: ProductNode) -> Self {
        Product {
            id: node.id,
            title: node.title,
            handle: node.handle,
            status: node.status,
            variants: node.variants.into_nodes(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ImageNode {
    pub(super) url: String,
}
