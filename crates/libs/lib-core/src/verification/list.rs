//! # Asset List
//!
//! Row view-models for the wallet asset list and the one piece of local state
//! the list owns: which asset, if any, is currently warned.

use std::collections::HashSet;

use shared::dto::asset::{Asset, AssetAmount, AssetKey};
use shared::utils::{format_main_currency, format_number};

use super::text;
use super::trust::is_unverified_by_user;

/// The warned-asset cell. `None` is the idle state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetListState {
    warned: Option<Asset>,
}

impl AssetListState {
    pub fn warned(&self) -> Option<&Asset> {
        self.warned.as_ref()
    }

    pub fn is_panel_open(&self) -> bool {
        self.warned.is_some()
    }

    /// Open the panel for `asset`, replacing any asset already warned.
    /// Returns the replaced asset.
    pub fn warn(&mut self, asset: Asset) -> Option<Asset> {
        tracing::debug!(symbol = %asset.symbol, "Asset warned");
        self.warned.replace(asset)
    }

    pub fn close(&mut self) -> Option<Asset> {
        self.warned.take()
    }

    /// Close the panel only if it is showing the asset identified by `key`.
    pub fn close_if(&mut self, key: &AssetKey) -> Option<Asset> {
        if self.warned.as_ref().is_some_and(|asset| &asset.key() == key) {
            self.warned.take()
        } else {
            None
        }
    }

    /// [`close_if`](Self::close_if), then notify `on_close` when something closed.
    ///
    /// A close that arrives after the user already dismissed the panel, or
    /// opened another asset, is a no-op.
    pub fn close_then<F: FnOnce()>(&mut self, key: &AssetKey, on_close: F) -> Option<Asset> {
        let closed = self.close_if(key);
        if closed.is_some() {
            on_close();
        }
        closed
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    /// List key. Symbols are assumed unique.
    pub key: String,
    pub symbol: String,
    pub name: String,
    pub amount: String,
    pub main_currency: Option<String>,
    /// Whether the row exposes the trigger that opens the warning panel.
    pub shows_unverified_warning: bool,
    pub asset: Asset,
}

impl AssetRow {
    /// Identity for keyed rendering. Changes whenever the warning trigger
    /// does, so a row rendered from stale metadata is rebuilt.
    pub fn render_key(&self) -> (String, bool) {
        (self.key.clone(), self.shows_unverified_warning)
    }

    pub fn from_amount(amount: &AssetAmount) -> Self {
        let asset = &amount.asset;
        let decimals = if amount.decimal_amount.abs() < 1.0 { 4 } else { 2 };

        Self {
            key: asset.symbol.clone(),
            symbol: asset.symbol.clone(),
            name: asset.name.clone(),
            amount: format_number(amount.decimal_amount, decimals),
            main_currency: amount.main_currency_amount.map(format_main_currency),
            shows_unverified_warning: is_unverified_by_user(asset),
            asset: asset.clone(),
        }
    }
}

/// The list as rendered: rows in input order plus an optional trailing loader.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetListView {
    pub rows: Vec<AssetRow>,
    pub loading_indicator: Option<&'static str>,
}

impl AssetListView {
    pub fn render(amounts: &[AssetAmount], loading_expired: bool) -> Self {
        let mut seen = HashSet::new();
        for amount in amounts {
            if !seen.insert(amount.asset.symbol.as_str()) {
                tracing::warn!(symbol = %amount.asset.symbol, "Duplicate asset symbol in list");
            }
        }

        Self {
            rows: amounts.iter().map(AssetRow::from_amount).collect(),
            loading_indicator: (!loading_expired).then_some(text::LOADING_ACTIVITIES),
        }
    }
}
