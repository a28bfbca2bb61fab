use serde::{Deserialize, Serialize};

pub const DEFAULT_API_VERSION: &str = "2024-10";
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;
pub const DEFAULT_PICKER_PAGE_SIZE: usize = 25;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StockroomConfig {
    pub version: u32,

    #[serde(default)]
    pub shop: Option<ShopConfig>,

    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub picker: PickerConfig,
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            version: 1,
            shop: None,
            selection: SelectionConfig::default(),
            picker: PickerConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Store origin, e.g. `https://example.myshopify.com`.
    pub base_url: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,

    // Admin API access token. May instead come from STOCKROOM_ACCESS_TOKEN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

/// How checked customers are keyed in the selection set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerKeyMode {
    /// Stable resource id; customers sharing a display name stay distinct.
    #[default]
    Id,
    /// Display name; customers sharing a display name collide.
    Label,
}

impl CustomerKeyMode {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerKeyMode::Id => "id",
            CustomerKeyMode::Label => "label",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SelectionConfig {
    #[serde(default)]
    pub customer_key: CustomerKeyMode,

    /// Number of customers loaded into the candidate list; at most ten are used.
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            customer_key: CustomerKeyMode::default(),
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }
}

fn default_candidate_limit() -> usize {
    DEFAULT_CANDIDATE_LIMIT
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_picker_page_size")]
    pub page_size: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PICKER_PAGE_SIZE,
        }
    }
}

fn default_picker_page_size() -> usize {
    DEFAULT_PICKER_PAGE_SIZE
}
