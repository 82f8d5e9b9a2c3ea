use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use hermes_ui::components::App as DashboardApp;

const MAIN_CSS: Asset = asset!("/assets/hermes.css");

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window();
        let has_document = window.as_ref().and_then(|w| w.document()).is_some();

        if window.is_none() || !has_document {
            // Running outside a page context — skip mounting the UI.
            return;
        }
    }

    // Cross-platform logger (web console + stdout). DEBUG for development
    // builds, INFO for release builds.
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    dioxus::launch(Root);
}

#[component]
fn Root() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        body { class: "hm-body",
            // Rendering-failure guard: any descendant failure is caught
            // once, logged, and replaced with a static fallback. No retry;
            // recovery requires a full reload.
            ErrorBoundary {
                handle_error: |errors: ErrorContext| {
                    error!("Rendering failed below the app root; showing static fallback");
                    rsx! {
                        div { class: "hm-error-fallback",
                            h2 { "Something went wrong." }
                            p { "There was an error rendering this part of the application." }
                            for failure in errors.error().iter() {
                                pre { class: "hm-error-detail", "{failure}" }
                            }
                            p { "Please refresh the page to continue." }
                        }
                    }
                },
                DashboardApp {}
            }
        }
    }
}
