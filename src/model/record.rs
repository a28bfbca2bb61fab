use serde::{Deserialize, Serialize};

use super::ids::ResourceId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Customer,
    Product,
    Collection,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Customer => "customer",
            ResourceKind::Product => "product",
            ResourceKind::Collection => "collection",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A picked external record, owned by the reconciler once stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableRecord {
    pub kind: ResourceKind,
    pub id: ResourceId,
    pub display_label: String,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub handle: Option<String>,
}

/// View-facing projection of a selected product or collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceForm {
    pub id: Option<ResourceId>,
    pub title: Option<String>,
    pub handle: Option<String>,
    pub image_url: Option<String>,
}

impl ResourceForm {
    pub fn is_selected(&self) -> bool {
        self.id.is_some()
    }
}

impl From<Option<&SelectableRecord>> for ResourceForm {
    fn from(record: Option<&SelectableRecord>) -> Self {
        match record {
            Some(r) => ResourceForm {
                id: Some(r.id.clone()),
                title: Some(r.display_label.clone()),
                handle: r.handle.clone(),
                image_url: r.image_url.clone(),
            },
            None => ResourceForm::default(),
        }
    }
}
