use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::{Route, WalletPrompt};

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Wallet connection lives outside the shared UI; the header only reports the click.
    use_context_provider(|| {
        WalletPrompt(EventHandler::new(|_| {
            info!(platform = "web", "wallet connection requested");
        }))
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        Router::<Route> {}
    }
}
