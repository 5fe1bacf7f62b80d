use dioxus::prelude::*;
use dioxus_router::{Link, Routable};

use crate::views::LandingView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LandingView)] Landing {},
    #[route("/:..segments")] NotFound { segments: Vec<String> },
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "btn btn--primary", to: Route::Landing {}, "Back to Luxe Vision" }
        }
    }
}
