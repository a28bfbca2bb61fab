mod catalog;
mod config;
mod ids;
mod price;
mod record;

pub use self::catalog::{Customer, Product, ProductCreateInput, Variant, VariantUpdateInput};
pub use self::config::{
    CustomerKeyMode, DEFAULT_API_VERSION, DEFAULT_CANDIDATE_LIMIT, DEFAULT_PICKER_PAGE_SIZE,
    PickerConfig, SelectionConfig, ShopConfig, StockroomConfig,
};
pub use self::ids::ResourceId;
pub use self::price::Price;
pub use self::record::{ResourceForm, ResourceKind, SelectableRecord};
