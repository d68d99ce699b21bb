use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteHead};
use ui::views::{Home, Lesson, PageNotFound, Playground};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/lessons/:id")]
    Lesson { id: String },
    #[route("/playground")]
    Playground {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_lessons(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Lesson { id: "1".to_string() },
        "{label}"
    })
}
fn nav_playground(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Playground {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        lessons: nav_lessons,
        playground: nav_playground,
    });

    // AppNavbar writes the selected language here; views read it back.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        SiteHead {}

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
