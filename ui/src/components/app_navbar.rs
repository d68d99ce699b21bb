use crate::core::site::SiteConfig;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::debug;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Link constructors supplied by each platform crate, so `ui` never needs
/// the platform `Route` enum.
///
/// Each function receives the localized label and returns a `Link` that
/// already contains it:
/// ```ignore
/// fn nav_home(label: &str) -> Element {
///     rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
/// }
/// register_nav(NavBuilder { home: nav_home, lessons: nav_lessons, playground: nav_playground });
/// ```
///
/// Without a registered builder `AppNavbar` renders its `children` instead.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub lessons: fn(label: &str) -> Element,
    pub playground: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    debug!(lang = %lang_marker, "AppNavbar render");

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let internal_nav = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let lessons = (b.lessons)(&t!("nav-lessons"));
        let playground = (b.playground)(&t!("nav-playground"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {lessons}
                {playground}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Re-render on global language changes.
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true", "⚛" }
                        span { class: "navbar__brand-mark", {SiteConfig::SHORT_NAME} }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
