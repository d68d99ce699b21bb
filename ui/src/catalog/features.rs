//! Home page highlight cards and hero counters.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureHighlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub static FEATURES: [FeatureHighlight; 6] = [
    FeatureHighlight {
        icon: "⚡",
        title: "Learn Once, Write Anywhere",
        description: "Use your React knowledge to build native iOS and Android apps with a single codebase",
    },
    FeatureHighlight {
        icon: "🎨",
        title: "Native Performance",
        description: "True native components and APIs for smooth, 60fps animations and interactions",
    },
    FeatureHighlight {
        icon: "🔥",
        title: "Hot Reloading",
        description: "See changes instantly without losing app state - faster than web development",
    },
    FeatureHighlight {
        icon: "📱",
        title: "Platform-Specific Code",
        description: "Write custom code for iOS and Android when needed, all in JavaScript",
    },
    FeatureHighlight {
        icon: "🌐",
        title: "Huge Ecosystem",
        description: "Access thousands of npm packages and native modules for any feature",
    },
    FeatureHighlight {
        icon: "💼",
        title: "Industry Standard",
        description: "Used by Facebook, Instagram, Airbnb, Tesla, and thousands of companies",
    },
];

pub static STATS: [Stat; 3] = [
    Stat {
        value: "12+",
        label: "Interactive Lessons",
    },
    Stat {
        value: "50+",
        label: "Code Examples",
    },
    Stat {
        value: "100%",
        label: "Hands-On",
    },
];
