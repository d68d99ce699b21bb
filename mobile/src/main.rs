use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, SiteHead};
use ui::views::{Home, Lesson, PageNotFound, Playground};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
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
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_lessons(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Lesson { id: "1".to_string() }, "{label}" })
}
fn nav_playground(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Playground {}, "{label}" })
}

// Mobile bundles ship without a separate asset directory.
const THEME_CSS_INLINE: &str = ui::THEME_CSS_INLINE;

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

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{THEME_CSS_INLINE}" }
        SiteHead {}

        Router::<Route> {}
    }
}

#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
