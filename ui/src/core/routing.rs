//! Lesson lookup from route parameters, plus the in-content link targets.
//!
//! Platform crates own the `Route` enum; the shared views only need string
//! hrefs, which `Link { to: .. }` accepts directly.

use thiserror::Error;
use tracing::debug;

use crate::catalog::{find_lesson, LessonRecord, CURRICULUM, PLACEHOLDER_LESSON};

pub const HOME_HREF: &str = "/";
pub const PLAYGROUND_HREF: &str = "/playground";

pub fn lesson_href(id: u32) -> String {
    format!("/lessons/{id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("lesson id is empty")]
    Empty,

    #[error("lesson id `{0}` is not a number")]
    NotANumber(String),

    #[error("no lesson with id {0}")]
    Unknown(u32),
}

/// Parse the `:id` segment. Surrounding whitespace is ignored.
pub fn parse_lesson_id(raw: &str) -> Result<u32, RouteError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RouteError::Empty);
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| RouteError::NotANumber(trimmed.to_string()))
}

fn lookup(raw: &str) -> Result<&'static LessonRecord, RouteError> {
    let id = parse_lesson_id(raw)?;
    find_lesson(id).ok_or(RouteError::Unknown(id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedLesson {
    Found(&'static LessonRecord),
    Placeholder(&'static LessonRecord),
}

impl ResolvedLesson {
    pub fn record(self) -> &'static LessonRecord {
        match self {
            ResolvedLesson::Found(lesson) | ResolvedLesson::Placeholder(lesson) => lesson,
        }
    }

    pub fn is_placeholder(self) -> bool {
        matches!(self, ResolvedLesson::Placeholder(_))
    }
}

/// Resolve a route parameter to a lesson. Never fails: anything that is not
/// a known id yields the placeholder record.
pub fn resolve_lesson(raw: &str) -> ResolvedLesson {
    match lookup(raw) {
        Ok(lesson) => ResolvedLesson::Found(lesson),
        Err(err) => {
            debug!(param = raw, %err, "falling back to placeholder lesson");
            ResolvedLesson::Placeholder(&PLACEHOLDER_LESSON)
        }
    }
}

/// Lessons before and after `id` in curriculum order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbours {
    pub previous: Option<&'static LessonRecord>,
    pub next: Option<&'static LessonRecord>,
}

impl Neighbours {
    /// True on the final lesson, where the footer links home instead.
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

pub fn neighbours(id: u32) -> Neighbours {
    let Some(position) = CURRICULUM.iter().position(|lesson| lesson.id == id) else {
        return Neighbours {
            previous: None,
            next: None,
        };
    };
    Neighbours {
        previous: position.checked_sub(1).map(|i| &CURRICULUM[i]),
        next: CURRICULUM.get(position + 1),
    }
}
