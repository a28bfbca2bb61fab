use serde::Deserialize;

use super::queries::FIRST_CUSTOMERS;
use super::*;

#[derive(Debug, Deserialize)]
struct CustomersData {
    customers: Connection<Customer>,
}

impl AdminClient {
    /// One-shot, non-paginated read of the first `limit` customers.
    pub fn fetch_first_customers(&self, limit: usize) -> Result<Vec<Customer>, TransportError> {
        let data: CustomersData = self.query(
            "customers",
            FIRST_CUSTOMERS,
            serde_json::json!({ "first": limit }),
        )?;
        let mut customers = data.customers.into_nodes();
        customers.truncate(limit);
        Ok(customers)
    }
}
