use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        section { class: "page page-about",
            h1 { {crate::t!("about-title")} }
            p { {crate::t!("about-body-1")} }
            p { {crate::t!("about-body-2")} }
        }
    }
}
