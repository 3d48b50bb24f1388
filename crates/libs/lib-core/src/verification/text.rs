//! User-facing copy for the asset list and the warning slide-up.

pub const HEADER: &str = "Asset automatically imported";

pub const TITLE_UNVERIFIED: &str = "Asset has not been verified yet!";
pub const TITLE_VERIFIED: &str = "Asset verified";
pub const DESCRIPTION: &str = "Be sure to always check the contract address before trading";
pub const LEGACY_DESCRIPTION: &str = "Only transact with assets you trust.";

pub const SYMBOL: &str = "Symbol";
pub const CONTRACT: &str = "Contract address";
pub const DISCOVERY_TX_HASH: &str = "Discovery transaction hash";

pub const DONT_SHOW: &str = "Don't show";
pub const ADD_TO_ASSET_LIST: &str = "Add to asset list";
pub const CLOSE: &str = "Close";

pub const SNACKBAR_ADDED: &str = "Asset added to list";
pub const SNACKBAR_UPDATE_FAILED: &str = "Couldn't update the asset. Try again.";

pub const LOADING_ACTIVITIES: &str = "Digging deeper...";
