//! Server-side renders the app shell and checks the header markup.

use dioxus::prelude::*;
use ui::views::Loans;
use ui::{Route, WalletPrompt};

#[component]
fn BareApp() -> Element {
    rsx! { Router::<Route> {} }
}

#[component]
fn AppWithWallet() -> Element {
    use_context_provider(|| WalletPrompt(EventHandler::new(|_| {})));
    rsx! { Router::<Route> {} }
}

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn section<'a>(html: &'a str, open: &str, close: &str) -> &'a str {
    let start = html
        .find(open)
        .unwrap_or_else(|| panic!("{open} missing in {html}"));
    let rest = &html[start..];
    let end = rest.find(close).expect("unclosed section");
    &rest[..end]
}

#[test]
fn header_has_three_links_in_order() {
    let html = render(BareApp);
    let nav = section(&html, "<nav", "</nav>");

    assert_eq!(nav.matches("<a ").count(), 3, "nav: {nav}");

    let expected = [
        ("href=\"/\"", "Inicio"),
        ("href=\"/prestamos\"", "Préstamos"),
        ("href=\"/sobre-nosotros\"", "Sobre Nosotros"),
    ];
    let mut cursor = 0;
    for (href, label) in expected {
        let at = nav[cursor..]
            .find(href)
            .unwrap_or_else(|| panic!("{href} missing or out of order in {nav}"));
        cursor += at;
        let label_at = nav[cursor..].find(label).expect("label follows its href");
        cursor += label_at + label.len();
    }
}

#[test]
fn logo_has_accessible_text() {
    let html = render(BareApp);
    let header = section(&html, "<header", "</header>");
    assert!(header.contains("<img"));
    assert!(header.contains("alt=\"Logo\""), "header: {header}");
    assert!(header.contains("class=\"logo\""));
}

#[test]
fn renders_without_wallet_handler() {
    let html = render(BareApp);
    let header = section(&html, "<header", "</header>");
    assert!(header.contains("connect-wallet-btn"));
    assert!(header.contains("Conectar Wallet"));
}

#[test]
fn renders_with_wallet_handler() {
    let html = render(AppWithWallet);
    assert!(html.contains("Conectar Wallet"));
    // Home page is routed below the header.
    assert!(html.contains("page-home"));
}

#[test]
fn loans_page_starts_with_placeholder_and_legend() {
    ui::i18n::init();
    let mut dom = VirtualDom::new(Loans);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert_eq!(html.matches("loans-check__placeholder").count(), 4);
    assert!(html.contains("loans-records__placeholder"));
    for title in [
        "Depositar garantía",
        "Reembolsar préstamo",
        "Gestión del prestamista",
        "Consultar préstamos",
    ] {
        assert!(html.contains(title), "{title} section missing");
    }
    assert!(html.contains("Aprobar préstamo") && html.contains("Liquidar garantía"));
    for label in ["Pendiente", "Aprobado", "Reembolsado", "Liquidado"] {
        assert!(html.contains(label), "{label} missing from legend");
    }
    assert!(!html.contains("Desconocido"));
}
