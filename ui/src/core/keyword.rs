//! Closed keyword enums shared by the style and curriculum pickers.
//!
//! Each enum maps one-to-one onto the keyword strings the UI prints, so a
//! value outside the set fails at parse time instead of reaching a view.

use thiserror::Error;

/// A keyword that does not belong to the enum it was parsed into.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {kind} keyword")]
pub struct KeywordError {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a `Copy` enum whose variants render as fixed keywords.
///
/// Generates `ALL` (declaration order), `as_str()`, `Display` and `FromStr`.
/// Variant attributes pass through, so `#[derive(Default)]` on the enum plus
/// `#[default]` on a variant works as usual.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $keyword ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::keyword::KeywordError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw.trim() {
                    $( $keyword => Ok($name::$variant), )+
                    other => Err($crate::core::keyword::KeywordError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

pub(crate) use keyword_enum;
