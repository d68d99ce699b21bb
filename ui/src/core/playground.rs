//! Editor state for the playground page and the Expo Snack hand-off.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::site::SiteConfig;
use crate::catalog::{StarterTemplate, STARTER_TEMPLATES};

/// Characters escaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Link that opens `code` in Expo Snack.
pub fn snack_url(code: &str) -> String {
    format!("{}{}", SiteConfig::SNACK_BASE_URL, encode_uri_component(code))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundState {
    template: usize,
    code: String,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self {
            template: 0,
            code: STARTER_TEMPLATES[0].code.to_string(),
        }
    }
}

impl PlaygroundState {
    pub fn templates(&self) -> &'static [StarterTemplate] {
        &STARTER_TEMPLATES
    }

    pub fn template(&self) -> &'static StarterTemplate {
        &STARTER_TEMPLATES[self.template]
    }

    pub fn template_index(&self) -> usize {
        self.template
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Load a starter template, discarding any edits. Out-of-range indices
    /// are ignored.
    pub fn select_template(&mut self, index: usize) {
        if let Some(template) = STARTER_TEMPLATES.get(index) {
            self.template = index;
            self.code = template.code.to_string();
        }
    }

    /// Restore the selected template's code.
    pub fn reset(&mut self) {
        self.code = self.template().code.to_string();
    }

    pub fn edit(&mut self, code: String) {
        self.code = code;
    }

    pub fn is_modified(&self) -> bool {
        self.code != self.template().code
    }

    pub fn snack_url(&self) -> String {
        snack_url(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("a b"), "a%20b");
        assert_eq!(encode_uri_component("line\nbreak"), "line%0Abreak");
        assert_eq!(encode_uri_component("\"{x}\""), "%22%7Bx%7D%22");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a/b?c=d&e#f"), "a%2Fb%3Fc%3Dd%26e%23f");
        assert_eq!(encode_uri_component("👋"), "%F0%9F%91%8B");
    }

    #[test]
    fn snack_url_embeds_the_encoded_buffer() {
        assert_eq!(
            snack_url("<View />"),
            "https://snack.expo.dev/?code=%3CView%20%2F%3E"
        );
    }

    #[test]
    fn starts_on_the_first_template() {
        let state = PlaygroundState::default();
        assert_eq!(state.template().id, "hello-world");
        assert_eq!(state.code(), STARTER_TEMPLATES[0].code);
        assert!(!state.is_modified());
    }

    #[test]
    fn selecting_a_template_replaces_edits() {
        let mut state = PlaygroundState::default();
        state.edit("scratch".to_string());
        state.select_template(3);
        assert_eq!(state.template().id, "list-demo");
        assert_eq!(state.code(), STARTER_TEMPLATES[3].code);

        state.select_template(99);
        assert_eq!(state.template_index(), 3);
    }

    #[test]
    fn reset_restores_the_selected_template() {
        let mut state = PlaygroundState::default();
        state.select_template(1);
        state.edit("broken".to_string());
        assert!(state.is_modified());
        state.reset();
        assert_eq!(state.code(), STARTER_TEMPLATES[1].code);
    }

    #[test]
    fn snack_url_tracks_the_buffer() {
        let mut state = PlaygroundState::default();
        state.edit("hi there".to_string());
        assert!(state.snack_url().ends_with("?code=hi%20there"));
    }
}
