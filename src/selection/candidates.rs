use std::sync::OnceLock;

use tracing::info;

use crate::admin::{AdminChannel, TransportError};
use crate::model::{Customer, DEFAULT_CANDIDATE_LIMIT};

/// Customers offered in the overlay, fetched at most once.
#[derive(Debug)]
pub struct CandidateList {
    limit: usize,
    loaded: OnceLock<Vec<Customer>>,
}

impl CandidateList {
    /// `limit` is capped at ten; the overlay never offers more.
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.min(DEFAULT_CANDIDATE_LIMIT),
            loaded: OnceLock::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fetches on first success; every later call returns the cached list.
    pub fn load(&self, channel: &dyn AdminChannel) -> Result<&[Customer], TransportError> {
        if let Some(list) = self.loaded.get() {
            return Ok(list);
        }
        let mut customers = channel.first_customers(self.limit)?;
        customers.truncate(self.limit);
        info!(count = customers.len(), "loaded customer candidates");
        Ok(self.loaded.get_or_init(|| customers))
    }

    pub fn get(&self) -> &[Customer] {
        self.loaded.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }
}

#[cfg(test)]
#[path = "../tests/selection/candidates_tests.rs"]
mod tests;
