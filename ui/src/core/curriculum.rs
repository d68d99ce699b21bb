//! Difficulty filtering and the progress summary for the curriculum grid.

use crate::catalog::{Difficulty, LessonRecord};

/// Shown in place of the grid when a filter matches nothing.
pub const EMPTY_FILTER_MESSAGE: &str = "No lessons found in this category 🔍";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// `All` first, then every difficulty in curriculum order.
    pub fn options() -> impl Iterator<Item = DifficultyFilter> {
        std::iter::once(DifficultyFilter::All)
            .chain(Difficulty::ALL.iter().copied().map(DifficultyFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyFilter::All => "All Lessons",
            DifficultyFilter::Only(difficulty) => difficulty.label(),
        }
    }

    /// Stable key for rendering filter buttons.
    pub fn key(self) -> &'static str {
        match self {
            DifficultyFilter::All => "all",
            DifficultyFilter::Only(difficulty) => difficulty.as_str(),
        }
    }

    pub fn matches(self, lesson: &LessonRecord) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(difficulty) => lesson.difficulty == difficulty,
        }
    }

    /// Matching lessons in catalog order.
    pub fn apply<'a>(self, catalog: &'a [LessonRecord]) -> Vec<&'a LessonRecord> {
        catalog.iter().filter(|lesson| self.matches(lesson)).collect()
    }
}

/// Static completion figures for the progress panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
}

impl Progress {
    /// Figures shown on the home page.
    pub const SHOWCASE: Progress = Progress {
        completed: 12,
        total: 13,
    };

    /// Whole percent, rounded down. An empty curriculum counts as 0%.
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        self.completed.min(self.total) * 100 / self.total
    }

    pub fn summary(self) -> String {
        format!("{} of {} lessons completed", self.completed, self.total)
    }
}

/// Topics shown on a card: the first three, plus how many were left out.
pub fn visible_topics(lesson: &LessonRecord) -> (&'static [&'static str], usize) {
    let shown = lesson.topics.len().min(3);
    (&lesson.topics[..shown], lesson.topics.len() - shown)
}
