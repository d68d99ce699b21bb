//! Read-only display records. Everything here is `static`; views select and
//! filter but never mutate.

pub mod components;
pub mod content;
pub mod features;
pub mod lessons;
pub mod projects;
pub mod templates;

pub use components::{ComponentMapping, COMPONENT_MAPPINGS};
pub use content::{content_for, Capstone, CodeExample, LessonContent, Takeaway, LESSON_CONTENT};
pub use features::{FeatureHighlight, Stat, FEATURES, STATS};
pub use lessons::{find_lesson, Difficulty, LessonRecord, CURRICULUM, PLACEHOLDER_LESSON};
pub use projects::{ProjectCategory, ProjectRecord, PROJECTS};
pub use templates::{StarterTemplate, STARTER_TEMPLATES};
