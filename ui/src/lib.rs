//! Shared UI crate for React Native Academy. Catalog data, the logic behind
//! the interactive widgets, and every view live here; the platform crates
//! only add routing and window chrome.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod code_block;
    pub use code_block::CodeBlock;

    mod site_head;
    pub use site_head::SiteHead;

    pub mod component_translator;
    pub use component_translator::ComponentTranslator;

    mod curriculum_overview;
    pub use curriculum_overview::CurriculumOverview;

    mod featured_projects;
    pub use featured_projects::FeaturedProjects;

    mod flexbox_visualizer;
    pub use flexbox_visualizer::FlexboxVisualizer;
}

use dioxus::prelude::manganis;

/// Stylesheet shared by every platform.
pub const THEME_CSS: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/theme/main.css");

/// The same stylesheet embedded at compile time, for native release builds.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[cfg(test)]
mod tests {
    mod i18n_completeness;
    mod theme_selectors;
}
