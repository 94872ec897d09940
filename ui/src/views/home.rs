use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    #[cfg(debug_assertions)]
    dioxus::logger::tracing::debug!("Home render");

    rsx! {
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-intro")} }

            ul { class: "page-home__features",
                li { {crate::t!("home-feature-collateral")} }
                li { {crate::t!("home-feature-request")} }
                li { {crate::t!("home-feature-repay")} }
            }
            p { class: "page-home__cta",
                {crate::t!("home-cta")}
            }
        }
    }
}
