use dioxus::prelude::*;
use tracing::warn;

use crate::core::site::{SiteConfig, WebManifest};

/// Document title, description/keyword meta, theme color and the inline
/// web app manifest. Rendered once by each platform's root component.
#[component]
pub fn SiteHead() -> Element {
    let manifest_href = use_hook(|| match WebManifest::default().data_url() {
        Ok(url) => Some(url),
        Err(err) => {
            warn!(%err, "skipping web app manifest");
            None
        }
    });
    let title = SiteConfig::TITLE;
    let keywords = SiteConfig::keywords();

    rsx! {
        document::Title { "{title}" }
        document::Meta { name: "description", content: SiteConfig::DESCRIPTION }
        document::Meta { name: "keywords", content: keywords }
        document::Meta { name: "author", content: SiteConfig::NAME }
        document::Meta { name: "theme-color", content: SiteConfig::THEME_COLOR }
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1, maximum-scale=1, user-scalable=no",
        }
        document::Meta { property: "og:title", content: SiteConfig::NAME }
        document::Meta { property: "og:description", content: SiteConfig::OG_DESCRIPTION }
        document::Meta { property: "og:type", content: "website" }
        document::Meta { name: "format-detection", content: "telephone=no, date=no, email=no, address=no" }
        if let Some(href) = manifest_href {
            document::Link { rel: "manifest", href }
        }
    }
}
