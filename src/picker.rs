//! Resource picker gateway: an external selection surface that hands back zero or
//! more records of a requested kind, or nothing when the operator cancels.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::model::{ResourceId, ResourceKind, SelectableRecord};
use crate::selection::{InvalidPickResult, PickOutcome, SelectionReconciler};

/// Kinds the picker can be asked for. Customers use the overlay flow instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickKind {
    Product,
    Collection,
}

impl PickKind {
    pub fn resource_kind(self) -> ResourceKind {
        match self {
            PickKind::Product => ResourceKind::Product,
            PickKind::Collection => ResourceKind::Collection,
        }
    }
}

impl std::fmt::Display for PickKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.resource_kind().fmt(f)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickVerb {
    #[default]
    Select,
    Add,
}

impl PickVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            PickVerb::Select => "select",
            PickVerb::Add => "add",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickedImage {
    #[serde(default)]
    pub original_src: Option<String>,
}

/// Raw picker output. Fields are optional because the surface is not trusted.
///
/// Products carry `images`, collections carry a single `image`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickedResource {
    #[serde(default)]
    pub id: Option<ResourceId>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub handle: Option<String>,

    #[serde(default)]
    pub images: Vec<PickedImage>,

    #[serde(default)]
    pub image: Option<String>,
}

impl PickedResource {
    /// Resolves the raw output into a stored record, or reports what is missing.
    pub fn to_record(&self, kind: PickKind) -> Result<SelectableRecord, InvalidPickResult> {
        let id = self
            .id
            .as_ref()
            .filter(|id| !id.as_str().trim().is_empty())
            .cloned()
            .ok_or(InvalidPickResult::MissingId { kind })?;
        let display_label = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or_else(|| InvalidPickResult::MissingLabel {
                kind,
                id: id.clone(),
            })?;

        let first_image = self.images.first().and_then(|i| i.original_src.clone());
        let image_url = match kind {
            PickKind::Product => first_image.or_else(|| self.image.clone()),
            PickKind::Collection => self.image.clone().or(first_image),
        };

        Ok(SelectableRecord {
            kind: kind.resource_kind(),
            id,
            display_label,
            image_url,
            handle: self.handle.clone(),
        })
    }
}

pub trait ResourcePicker {
    /// `Ok(None)` means the operator cancelled.
    fn pick(
        &mut self,
        kind: PickKind,
        verb: PickVerb,
    ) -> anyhow::Result<Option<Vec<PickedResource>>>;
}

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("resource picker failed: {0:#}")]
    Gateway(anyhow::Error),

    #[error(transparent)]
    Invalid(#[from] InvalidPickResult),
}

/// Asks the gateway for a record of `kind` and reconciles the answer into `selection`.
pub fn select_into(
    selection: &mut SelectionReconciler,
    picker: &mut dyn ResourcePicker,
    kind: PickKind,
    verb: PickVerb,
) -> Result<PickOutcome, SelectError> {
    let picked = picker.pick(kind, verb).map_err(SelectError::Gateway)?;
    let outcome = selection.pick(kind, picked.as_deref())?;
    if let PickOutcome::Replaced(record) = &outcome {
        info!(%kind, id = %record.id, label = %record.display_label, "selection replaced");
    }
    Ok(outcome)
}

#[cfg(test)]
#[path = "tests/picker_tests.rs"]
mod tests;
