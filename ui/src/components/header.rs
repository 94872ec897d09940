use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::i18n;
use crate::routes::Route;
use crate::t;

const LOGO: Asset = asset!("/assets/logo.svg");

/// One entry of the header navigation: a localized label and its route.
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub route: Route,
    pub label: String,
}

impl NavLink {
    /// Path the link points to (`/`, `/prestamos`, ...).
    pub fn href(&self) -> String {
        self.route.to_string()
    }
}

/// The header navigation, in display order.
pub fn nav_links() -> [NavLink; 3] {
    i18n::init();
    [
        NavLink {
            route: Route::Home {},
            label: t!("nav-home"),
        },
        NavLink {
            route: Route::Loans {},
            label: t!("nav-loans"),
        },
        NavLink {
            route: Route::About {},
            label: t!("nav-about"),
        },
    ]
}

/// Site header: logo, navigation and the connect-wallet button.
///
/// Connecting a wallet is owned by the caller: each button click invokes
/// `on_connect_wallet` once, with no arguments. Without a handler the click does nothing.
#[component]
pub fn Header(on_connect_wallet: Option<EventHandler>) -> Element {
    let links = nav_links();

    rsx! {
        header { class: "header",
            div { class: "container",
                Link { to: Route::Home {},
                    img { src: LOGO, alt: t!("logo-alt"), class: "logo" }
                }
                nav { class: "navbar",
                    ul {
                        for link in links {
                            li { key: "{link.href()}",
                                Link { to: link.route.clone(), "{link.label}" }
                            }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "connect-wallet-btn",
                    onclick: move |_| connect_wallet(on_connect_wallet),
                    {t!("connect-wallet")}
                }
            }
        }
    }
}

/// Click dispatch for the connect-wallet button.
pub fn connect_wallet(handler: Option<EventHandler>) {
    match handler {
        Some(handler) => handler.call(()),
        None => debug!("connect-wallet clicked without a handler"),
    }
}
