//! UI Components

pub mod asset_list;
pub mod asset_list_item;
pub mod asset_warning;
pub mod navbar;
pub mod slide_up_menu;
pub mod snackbar;

pub use asset_list::WalletAssetList;
pub use asset_list_item::WalletAssetListItem;
pub use asset_warning::AssetWarningSlideUp;
pub use navbar::Navbar;
pub use slide_up_menu::SharedSlideUpMenu;
pub use snackbar::Snackbar;
