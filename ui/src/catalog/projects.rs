//! Showcase repositories on the home page.

use crate::core::keyword::keyword_enum;

keyword_enum! {
    pub enum ProjectCategory ("project category") {
        Web => "web",
        Native => "native",
    }
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Web => "React",
            ProjectCategory::Native => "React Native",
        }
    }

    pub fn badge_class(self) -> String {
        format!("project-card__badge project-card__badge--{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub tech_tags: &'static [&'static str],
    pub link: &'static str,
    pub category: ProjectCategory,
    pub icon: &'static str,
}

pub static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        title: "Premium Portfolio",
        description: "Generative Systems Architect portfolio with 3D UI and interactive neural elements.",
        tech_tags: &["React", "Framer Motion", "Tailwind CSS"],
        link: "https://github.com/vickyvigneshcoc99-glitch/My-model-portfolio-",
        category: ProjectCategory::Web,
        icon: "💼",
    },
    ProjectRecord {
        title: "Shadow Shift",
        description: "Full-stack 2D platformer with unique light/shadow dimension-switching mechanics.",
        tech_tags: &["React", "Vite", "Express", "Particles"],
        link: "https://github.com/vickyvigneshcoc99-glitch/Shadow-Shift-Webapp",
        category: ProjectCategory::Web,
        icon: "🌓",
    },
    ProjectRecord {
        title: "BlinkCare",
        description: "AI-powered communication platform using MediaPipe face/hand tracking for assistive SOS.",
        tech_tags: &["React", "MediaPipe", "AI/ML"],
        link: "https://github.com/vickyvigneshcoc99-glitch/BlinkCare",
        category: ProjectCategory::Web,
        icon: "👁️",
    },
    ProjectRecord {
        title: "Floppy Hero",
        description: "High-octane mobile arcade game with real-time global leaderboards.",
        tech_tags: &["React Native", "Firebase", "Firestore"],
        link: "https://github.com/vickyvigneshcoc99-glitch/Floppy-hero-",
        category: ProjectCategory::Native,
        icon: "🦸",
    },
    ProjectRecord {
        title: "Rocket Blaze",
        description: "Survival game featuring hidden terminal gestures and secure owner authentication.",
        tech_tags: &["React Native", "Firestore", "Secure Auth"],
        link: "https://github.com/vickyvigneshcoc99-glitch/Rocket-Blaze-",
        category: ProjectCategory::Native,
        icon: "🚀",
    },
    ProjectRecord {
        title: "Stickman Runner",
        description: "Endless runner with double jump and progressive difficulty levels.",
        tech_tags: &["React Native", "Expo", "Game Engine"],
        link: "https://github.com/vickyvigneshcoc99-glitch/Stickman-Runner",
        category: ProjectCategory::Native,
        icon: "🏃",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_projects_per_category() {
        for category in ProjectCategory::ALL {
            let count = PROJECTS.iter().filter(|p| p.category == *category).count();
            assert_eq!(count, 3, "{category}");
        }
    }

    #[test]
    fn links_point_at_github() {
        assert!(PROJECTS
            .iter()
            .all(|p| p.link.starts_with("https://github.com/")));
    }

    #[test]
    fn category_labels() {
        assert_eq!(ProjectCategory::Web.label(), "React");
        assert_eq!(ProjectCategory::Native.label(), "React Native");
        assert_eq!(
            ProjectCategory::Native.badge_class(),
            "project-card__badge project-card__badge--native"
        );
    }
}
