//! Application routes shared by every platform launcher.

use dioxus::prelude::*;

use crate::components::Header;
use crate::views::{About, Home, Loans};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
    #[route("/")]
    Home {},
    #[route("/prestamos")]
    Loans {},
    #[route("/sobre-nosotros")]
    About {},
}

/// Connect-wallet handler provided by the launching platform as context.
#[derive(Clone, Copy)]
pub struct WalletPrompt(pub EventHandler);

/// Layout wrapping every page: the header followed by the routed view.
#[component]
pub fn AppShell() -> Element {
    let prompt = try_use_context::<WalletPrompt>();

    rsx! {
        if let Some(WalletPrompt(handler)) = prompt {
            Header { on_connect_wallet: handler }
        } else {
            Header {}
        }
        main { class: "page-outlet", Outlet::<Route> {} }
    }
}
