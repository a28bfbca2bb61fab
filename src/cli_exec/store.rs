use super::*;

pub(super) fn with_store<F>(f: F) -> Result<()>
where
    F: FnOnce(&ConfigStore) -> Result<()>,
{
    let store = ConfigStore::open_cwd()?;
    f(&store)
}

pub(super) fn connect(store: &ConfigStore, overrides: &ShopOverrides) -> Result<AdminClient> {
    let shop = require_shop(store, overrides)?;
    AdminClient::new(shop).context("create admin client")
}
