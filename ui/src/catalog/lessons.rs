//! The curriculum: thirteen lessons in display order.

use crate::core::keyword::keyword_enum;

keyword_enum! {
    /// How far into the curriculum a lesson sits.
    pub enum Difficulty ("difficulty") {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

impl Difficulty {
    /// Badge text shown on lesson cards.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    /// CSS modifier for the badge gradient, e.g. `lesson-card__badge--beginner`.
    pub fn badge_class(self) -> String {
        format!("lesson-card__badge lesson-card__badge--{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRecord {
    /// 1-based, unique, and equal to the display position.
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub topics: &'static [&'static str],
    pub difficulty: Difficulty,
    pub icon: &'static str,
}

pub static CURRICULUM: [LessonRecord; 13] = [
    LessonRecord {
        id: 1,
        title: "From Div to View",
        description: "Learn the fundamental shift from HTML elements to React Native primitives",
        duration_minutes: 30,
        topics: &["View", "Text", "Image", "Basic Styling"],
        difficulty: Difficulty::Beginner,
        icon: "🎯",
    },
    LessonRecord {
        id: 2,
        title: "Flexbox: Column vs Row",
        description: "Master the default flexDirection difference and layout patterns",
        duration_minutes: 45,
        topics: &["Flexbox", "Layout", "Positioning", "Alignment"],
        difficulty: Difficulty::Beginner,
        icon: "📐",
    },
    LessonRecord {
        id: 3,
        title: "Touchable Components",
        description: "Handle user interactions with native touch components",
        duration_minutes: 40,
        topics: &["TouchableOpacity", "Pressable", "Gestures", "Events"],
        difficulty: Difficulty::Beginner,
        icon: "👆",
    },
    LessonRecord {
        id: 4,
        title: "Lists & ScrollViews",
        description: "Efficiently render scrollable content and long lists",
        duration_minutes: 50,
        topics: &["ScrollView", "FlatList", "SectionList", "Virtualization"],
        difficulty: Difficulty::Intermediate,
        icon: "📜",
    },
    LessonRecord {
        id: 5,
        title: "Styling & Theming",
        description: "Create beautiful UIs with StyleSheet and dynamic themes",
        duration_minutes: 60,
        topics: &["StyleSheet", "Dimensions", "Platform Styles", "Dark Mode"],
        difficulty: Difficulty::Intermediate,
        icon: "🎨",
    },
    LessonRecord {
        id: 6,
        title: "Navigation Patterns",
        description: "Navigate between screens with React Navigation",
        duration_minutes: 70,
        topics: &["Stack Navigator", "Tab Navigator", "Drawer", "Deep Linking"],
        difficulty: Difficulty::Intermediate,
        icon: "🧭",
    },
    LessonRecord {
        id: 7,
        title: "Forms & Input",
        description: "Build forms with TextInput and validation",
        duration_minutes: 45,
        topics: &["TextInput", "Keyboard", "Validation", "Form State"],
        difficulty: Difficulty::Intermediate,
        icon: "📝",
    },
    LessonRecord {
        id: 8,
        title: "Native APIs",
        description: "Access device features like camera, location, and sensors",
        duration_minutes: 60,
        topics: &["Camera", "Geolocation", "Permissions", "Haptics"],
        difficulty: Difficulty::Advanced,
        icon: "📱",
    },
    LessonRecord {
        id: 9,
        title: "Animations",
        description: "Create smooth 60fps animations with Animated API",
        duration_minutes: 80,
        topics: &["Animated", "LayoutAnimation", "Reanimated", "Gestures"],
        difficulty: Difficulty::Advanced,
        icon: "✨",
    },
    LessonRecord {
        id: 10,
        title: "Performance Optimization",
        description: "Optimize your app for production performance",
        duration_minutes: 50,
        topics: &["Profiling", "Memoization", "Image Optimization", "Bundle Size"],
        difficulty: Difficulty::Advanced,
        icon: "⚡",
    },
    LessonRecord {
        id: 11,
        title: "Platform-Specific Code",
        description: "Write custom code for iOS and Android",
        duration_minutes: 55,
        topics: &["Platform API", "Platform Files", "Native Modules", "Bridging"],
        difficulty: Difficulty::Advanced,
        icon: "🔧",
    },
    LessonRecord {
        id: 12,
        title: "Testing & Debugging",
        description: "Test and debug React Native applications",
        duration_minutes: 65,
        topics: &["Jest", "React Native Testing Library", "Debugging", "Flipper"],
        difficulty: Difficulty::Advanced,
        icon: "🧪",
    },
    LessonRecord {
        id: 13,
        title: "Mobile Security",
        description: "Secure your app with Keychain, TLS, and Bio-authentication",
        duration_minutes: 50,
        topics: &["Keychain", "SSL Pinning", "Biometrics", "Obfuscation"],
        difficulty: Difficulty::Advanced,
        icon: "🔒",
    },
];

/// Substituted for any lesson id that is not in [`CURRICULUM`].
pub static PLACEHOLDER_LESSON: LessonRecord = LessonRecord {
    id: 0,
    title: "Coming Soon",
    description: "This lesson is currently being prepared by our expert instructors.",
    duration_minutes: 0,
    topics: &["React Native", "Best Practices", "Architecture"],
    difficulty: Difficulty::Beginner,
    icon: "🛠️",
};

/// Look up a lesson by its numeric id.
pub fn find_lesson(id: u32) -> Option<&'static LessonRecord> {
    CURRICULUM.iter().find(|lesson| lesson.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        for (position, lesson) in CURRICULUM.iter().enumerate() {
            assert_eq!(lesson.id as usize, position + 1, "{}", lesson.title);
        }
    }

    #[test]
    fn every_lesson_lists_topics_and_a_duration() {
        for lesson in CURRICULUM.iter() {
            assert!(!lesson.topics.is_empty(), "lesson {} has no topics", lesson.id);
            assert!(lesson.duration_minutes > 0, "lesson {} has no duration", lesson.id);
        }
    }

    #[test]
    fn find_lesson_hits_and_misses() {
        assert_eq!(find_lesson(9).map(|l| l.title), Some("Animations"));
        assert!(find_lesson(0).is_none());
        assert!(find_lesson(14).is_none());
    }

    #[test]
    fn placeholder_is_not_part_of_the_curriculum() {
        assert!(CURRICULUM.iter().all(|l| l.id != PLACEHOLDER_LESSON.id));
        assert_eq!(PLACEHOLDER_LESSON.title, "Coming Soon");
    }

    #[test]
    fn difficulty_labels_and_keywords() {
        assert_eq!("advanced".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert_eq!(Difficulty::Intermediate.label(), "Intermediate");
        assert_eq!(
            Difficulty::Beginner.badge_class(),
            "lesson-card__badge lesson-card__badge--beginner"
        );
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
