//! Per-kind selection state: a multi-valued customer set and single-valued
//! product and collection slots.

use std::collections::BTreeSet;

use tracing::debug;

use crate::model::{
    Customer, CustomerKeyMode, ResourceForm, ResourceId, ResourceKind, SelectableRecord,
};
use crate::picker::{PickKind, PickedResource};

mod candidates;
pub use self::candidates::CandidateList;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPickResult {
    #[error("picked {kind} has no identifier")]
    MissingId { kind: PickKind },

    #[error("picked {kind} {id} has no display label")]
    MissingLabel { kind: PickKind, id: ResourceId },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    Replaced(SelectableRecord),
    /// Cancelled or empty picker result; stored state is untouched.
    Unchanged,
}

/// Read-only projection of one kind's state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionView<'a> {
    Customers(&'a BTreeSet<String>),
    Single(Option<&'a SelectableRecord>),
}

#[derive(Clone, Debug, Default)]
pub struct SelectionReconciler {
    customer_key: CustomerKeyMode,
    customers: BTreeSet<String>,
    product: Option<SelectableRecord>,
    collection: Option<SelectableRecord>,
}

impl SelectionReconciler {
    pub fn new(customer_key: CustomerKeyMode) -> Self {
        Self {
            customer_key,
            ..Self::default()
        }
    }

    pub fn customer_key_mode(&self) -> CustomerKeyMode {
        self.customer_key
    }

    /// Stores the first record of a non-empty pick, replacing any previous one.
    ///
    /// The first record is validated before anything is stored, so a malformed
    /// pick leaves the slot as it was.
    pub fn pick(
        &mut self,
        kind: PickKind,
        records: Option<&[PickedResource]>,
    ) -> Result<PickOutcome, InvalidPickResult> {
        let Some(first) = records.and_then(|r| r.first()) else {
            debug!(%kind, "picker returned nothing; selection unchanged");
            return Ok(PickOutcome::Unchanged);
        };
        let record = first.to_record(kind)?;
        *self.slot_mut(kind) = Some(record.clone());
        Ok(PickOutcome::Replaced(record))
    }

    /// Flips membership of `key`; returns whether it is now selected.
    pub fn toggle_customer_key(&mut self, key: &str) -> bool {
        if self.customers.remove(key) {
            false
        } else {
            self.customers.insert(key.to_string());
            true
        }
    }

    pub fn toggle_customer(&mut self, customer: &Customer) -> bool {
        let key = self.customer_key(customer);
        self.toggle_customer_key(&key)
    }

    pub fn customer_key(&self, customer: &Customer) -> String {
        match self.customer_key {
            CustomerKeyMode::Id => customer.id.as_str().to_string(),
            CustomerKeyMode::Label => customer.display_name.clone(),
        }
    }

    pub fn is_customer_selected(&self, customer: &Customer) -> bool {
        self.customers.contains(&self.customer_key(customer))
    }

    /// Candidates whose key is currently checked, in candidate order.
    pub fn selected_customers<'a>(&self, candidates: &'a [Customer]) -> Vec<&'a Customer> {
        candidates
            .iter()
            .filter(|c| self.is_customer_selected(c))
            .collect()
    }

    pub fn current_selection(&self, kind: ResourceKind) -> SelectionView<'_> {
        match kind {
            ResourceKind::Customer => SelectionView::Customers(&self.customers),
            ResourceKind::Product => SelectionView::Single(self.product.as_ref()),
            ResourceKind::Collection => SelectionView::Single(self.collection.as_ref()),
        }
    }

    pub fn selected(&self, kind: PickKind) -> Option<&SelectableRecord> {
        match kind {
            PickKind::Product => self.product.as_ref(),
            PickKind::Collection => self.collection.as_ref(),
        }
    }

    pub fn form(&self, kind: PickKind) -> ResourceForm {
        ResourceForm::from(self.selected(kind))
    }

    fn slot_mut(&mut self, kind: PickKind) -> &mut Option<SelectableRecord> {
        match kind {
            PickKind::Product => &mut self.product,
            PickKind::Collection => &mut self.collection,
        }
    }
}

#[cfg(test)]
#[path = "tests/selection/reconciler_tests.rs"]
mod tests;
