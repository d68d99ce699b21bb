//! Flexbox preview derivation.
//!
//! Three closed choices (direction, justify, align) plus a platform preset are
//! turned into a style declaration and the sizes of three demo boxes. Nothing
//! here touches the DOM; the widget only renders what these functions return.

use std::fmt;

use super::keyword::keyword_enum;
use super::platform::PlatformPreset;

keyword_enum! {
    pub enum FlexDirection ("flexDirection") {
        Row => "row",
        Column => "column",
    }
}

keyword_enum! {
    pub enum JustifyContent ("justifyContent") {
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

keyword_enum! {
    pub enum AlignItems ("alignItems") {
        FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        Stretch => "stretch",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn label(self) -> &'static str {
        match self {
            Axis::Horizontal => "Horizontal →",
            Axis::Vertical => "Vertical ↓",
        }
    }
}

/// A CSS length as the preview uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Px(u32),
    Percent(u32),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(v) => write!(f, "{v}px"),
            Dimension::Percent(v) => write!(f, "{v}%"),
        }
    }
}

const BOX_MAIN: Dimension = Dimension::Px(60);
const BOX_MAIN_MAX: Dimension = Dimension::Px(80);
const BOX_CROSS_FIXED: Dimension = Dimension::Px(100);
const BOX_CROSS_FILL: Dimension = Dimension::Percent(100);
const BOX_COLORS: [&str; 3] = ["#61dafb", "#764abc", "#f76b1c"];

/// One of the three numbered boxes inside the live preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewBox {
    pub id: u8,
    pub color: &'static str,
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_height: Option<Dimension>,
}

impl PreviewBox {
    /// Inline style for the box element.
    pub fn style(&self) -> String {
        let mut css = format!(
            "background-color: {}; width: {}; height: {};",
            self.color, self.width, self.height
        );
        let limits = [
            ("min-width", self.min_width),
            ("max-width", self.max_width),
            ("min-height", self.min_height),
            ("max-height", self.max_height),
        ];
        for (property, value) in limits {
            if let Some(value) = value {
                css.push_str(&format!(" {property}: {value};"));
            }
        }
        css
    }
}

/// The chosen values, always rendered with `display: flex`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDeclaration {
    pub direction: FlexDirection,
    pub justify: JustifyContent,
    pub align: AlignItems,
}

impl StyleDeclaration {
    /// The object literal shown in the code panel.
    pub fn native_object(&self) -> String {
        format!(
            "{{\n  display: 'flex',\n  flexDirection: '{}',\n  justifyContent: '{}',\n  alignItems: '{}'\n}}",
            self.direction, self.justify, self.align
        )
    }

    /// Inline CSS for the preview container.
    pub fn web_css(&self) -> String {
        format!(
            "display: flex; flex-direction: {}; justify-content: {}; align-items: {};",
            self.direction, self.justify, self.align
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexboxPreview {
    preset: PlatformPreset,
    direction: FlexDirection,
    justify: JustifyContent,
    align: AlignItems,
}

impl Default for FlexboxPreview {
    fn default() -> Self {
        Self::for_preset(PlatformPreset::Web)
    }
}

impl FlexboxPreview {
    pub fn for_preset(preset: PlatformPreset) -> Self {
        Self {
            preset,
            direction: preset.default_direction(),
            justify: JustifyContent::FlexStart,
            align: AlignItems::Stretch,
        }
    }

    pub fn preset(&self) -> PlatformPreset {
        self.preset
    }

    pub fn direction(&self) -> FlexDirection {
        self.direction
    }

    pub fn justify(&self) -> JustifyContent {
        self.justify
    }

    pub fn align(&self) -> AlignItems {
        self.align
    }

    /// Switch presets. The direction is reset to the preset default even if
    /// it was set by hand; justify and align are kept.
    pub fn select_preset(&mut self, preset: PlatformPreset) {
        self.preset = preset;
        self.direction = preset.default_direction();
    }

    pub fn set_direction(&mut self, direction: FlexDirection) {
        self.direction = direction;
    }

    pub fn set_justify(&mut self, justify: JustifyContent) {
        self.justify = justify;
    }

    pub fn set_align(&mut self, align: AlignItems) {
        self.align = align;
    }

    pub fn declaration(&self) -> StyleDeclaration {
        StyleDeclaration {
            direction: self.direction,
            justify: self.justify,
            align: self.align,
        }
    }

    pub fn code_label(&self) -> &'static str {
        match self.preset {
            PlatformPreset::Web => "CSS",
            PlatformPreset::Native => "React Native StyleSheet",
        }
    }

    pub fn main_axis(&self) -> Axis {
        match self.direction {
            FlexDirection::Row => Axis::Horizontal,
            FlexDirection::Column => Axis::Vertical,
        }
    }

    pub fn cross_axis(&self) -> Axis {
        match self.direction {
            FlexDirection::Row => Axis::Vertical,
            FlexDirection::Column => Axis::Horizontal,
        }
    }

    pub fn boxes(&self) -> [PreviewBox; 3] {
        let cross = if self.align == AlignItems::Stretch {
            BOX_CROSS_FILL
        } else {
            BOX_CROSS_FIXED
        };
        let make = |index: usize| {
            let id = index as u8 + 1;
            let color = BOX_COLORS[index];
            match self.direction {
                FlexDirection::Row => PreviewBox {
                    id,
                    color,
                    width: BOX_MAIN,
                    height: cross,
                    min_width: Some(BOX_MAIN),
                    max_width: Some(BOX_MAIN_MAX),
                    min_height: None,
                    max_height: None,
                },
                FlexDirection::Column => PreviewBox {
                    id,
                    color,
                    width: cross,
                    height: BOX_MAIN,
                    min_width: None,
                    max_width: None,
                    min_height: Some(BOX_MAIN),
                    max_height: Some(BOX_MAIN_MAX),
                },
            }
        };
        [make(0), make(1), make(2)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_web_preset() {
        let preview = FlexboxPreview::default();
        assert_eq!(preview.preset(), PlatformPreset::Web);
        assert_eq!(preview.direction(), FlexDirection::Row);
        assert_eq!(preview.justify(), JustifyContent::FlexStart);
        assert_eq!(preview.align(), AlignItems::Stretch);
        assert_eq!(preview.code_label(), "CSS");
    }

    #[test]
    fn preset_toggle_overwrites_manual_direction() {
        let mut preview = FlexboxPreview::default();
        preview.set_direction(FlexDirection::Column);
        preview.set_justify(JustifyContent::Center);
        preview.select_preset(PlatformPreset::Web);
        assert_eq!(preview.direction(), FlexDirection::Row);
        assert_eq!(preview.justify(), JustifyContent::Center);

        preview.set_direction(FlexDirection::Row);
        preview.select_preset(PlatformPreset::Native);
        assert_eq!(preview.direction(), FlexDirection::Column);
        assert_eq!(preview.code_label(), "React Native StyleSheet");
    }

    #[test]
    fn stretch_fills_the_cross_axis_in_a_row() {
        let mut preview = FlexboxPreview::default();
        for b in preview.boxes() {
            assert_eq!(b.width, Dimension::Px(60));
            assert_eq!(b.height, Dimension::Percent(100));
            assert_eq!(b.max_width, Some(Dimension::Px(80)));
        }

        preview.set_align(AlignItems::Center);
        for b in preview.boxes() {
            assert_eq!(b.height, Dimension::Px(100));
        }
    }

    #[test]
    fn column_inverts_box_dimensions() {
        let mut preview = FlexboxPreview::for_preset(PlatformPreset::Native);
        let boxes = preview.boxes();
        assert_eq!(boxes[0].height, Dimension::Px(60));
        assert_eq!(boxes[0].width, Dimension::Percent(100));
        assert_eq!(boxes[0].min_height, Some(Dimension::Px(60)));
        assert_eq!(boxes[0].min_width, None);

        preview.set_align(AlignItems::FlexEnd);
        assert_eq!(preview.boxes()[2].width, Dimension::Px(100));
    }

    #[test]
    fn boxes_are_numbered_with_fixed_colors() {
        let boxes = FlexboxPreview::default().boxes();
        let ids: Vec<u8> = boxes.iter().map(|b| b.id).collect();
        let colors: Vec<&str> = boxes.iter().map(|b| b.color).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(colors, vec!["#61dafb", "#764abc", "#f76b1c"]);
    }

    #[test]
    fn declaration_carries_exactly_the_chosen_values() {
        let mut preview = FlexboxPreview::default();
        preview.set_justify(JustifyContent::FlexEnd);
        preview.set_align(AlignItems::FlexStart);
        preview.set_justify(JustifyContent::SpaceBetween);
        preview.set_align(AlignItems::Center);
        preview.set_direction(FlexDirection::Row);

        let decl = preview.declaration();
        assert_eq!(
            decl.native_object(),
            "{\n  display: 'flex',\n  flexDirection: 'row',\n  justifyContent: 'space-between',\n  alignItems: 'center'\n}"
        );
        assert_eq!(
            decl.web_css(),
            "display: flex; flex-direction: row; justify-content: space-between; align-items: center;"
        );
    }

    #[test]
    fn axes_follow_direction() {
        let mut preview = FlexboxPreview::default();
        assert_eq!(preview.main_axis().label(), "Horizontal →");
        assert_eq!(preview.cross_axis().label(), "Vertical ↓");
        preview.set_direction(FlexDirection::Column);
        assert_eq!(preview.main_axis(), Axis::Vertical);
        assert_eq!(preview.cross_axis(), Axis::Horizontal);
    }

    #[test]
    fn box_style_lists_limits_for_the_main_axis_only() {
        let style = FlexboxPreview::default().boxes()[0].style();
        assert_eq!(
            style,
            "background-color: #61dafb; width: 60px; height: 100%; min-width: 60px; max-width: 80px;"
        );
    }

    #[test]
    fn keywords_reject_unknown_values() {
        assert_eq!(
            "space-around".parse::<JustifyContent>(),
            Ok(JustifyContent::SpaceAround)
        );
        assert!("space-evenly".parse::<JustifyContent>().is_err());
        assert!("baseline".parse::<AlignItems>().is_err());
    }
}
