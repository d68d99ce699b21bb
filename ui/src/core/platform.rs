//! Target platform presets for the layout widget.

use super::flexbox::FlexDirection;
use super::keyword::keyword_enum;

keyword_enum! {
    /// Which platform's layout defaults the preview starts from.
    #[derive(Default)]
    pub enum PlatformPreset ("platform") {
        #[default]
        Web => "web",
        Native => "native",
    }
}

impl PlatformPreset {
    /// Browsers lay flex children out in a row; React Native stacks them.
    pub fn default_direction(self) -> FlexDirection {
        match self {
            PlatformPreset::Web => FlexDirection::Row,
            PlatformPreset::Native => FlexDirection::Column,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlatformPreset::Web => "🌐 Web",
            PlatformPreset::Native => "📱 Native",
        }
    }

    /// Brand color of the preset toggle when active.
    pub fn accent(self) -> &'static str {
        match self {
            PlatformPreset::Web => "#61dafb",
            PlatformPreset::Native => "#764abc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_map_to_their_default_direction() {
        assert_eq!(PlatformPreset::Web.default_direction(), FlexDirection::Row);
        assert_eq!(
            PlatformPreset::Native.default_direction(),
            FlexDirection::Column
        );
    }

    #[test]
    fn default_preset_is_web() {
        assert_eq!(PlatformPreset::default(), PlatformPreset::Web);
    }

    #[test]
    fn keywords_round_trip_through_display() {
        for preset in PlatformPreset::ALL {
            assert_eq!(preset.to_string().parse::<PlatformPreset>(), Ok(*preset));
        }
    }
}
