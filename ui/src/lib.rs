//! Shared UI crate for Préstamos DeFi. Components, pages, routes and loan helpers live here.

pub mod core;
pub mod i18n;
pub mod routes;
pub mod views;

pub mod components {
    // Site header with navigation and connect-wallet button (components/header.rs)
    mod header;
    pub use header::{connect_wallet, nav_links, Header, NavLink};
}

pub use routes::{Route, WalletPrompt};
