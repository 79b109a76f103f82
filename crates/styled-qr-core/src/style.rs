//! The four style axes the engine understands
//!
//! Each axis is a closed set of variants defined by the engine. The numeric
//! value of a variant is the engine's own discriminant, assigned in
//! declaration order starting at zero. New engine releases may add variants,
//! so every enum is `#[non_exhaustive]` and conversions from raw engine values
//! fail with [`VariantError`] instead of guessing.
//!
//! ```
//! use styled_qr_core::style::ModuleStyle;
//!
//! let style: ModuleStyle = "circles".parse()?;
//! assert_eq!(style, ModuleStyle::Circles);
//! assert_eq!(style.as_raw(), 1);
//! assert_eq!(ModuleStyle::try_from(0)?, ModuleStyle::Squares);
//! # Ok::<(), styled_qr_core::error::VariantError>(())
//! ```

use crate::error::VariantError;
use std::fmt;
use std::str::FromStr;

/// Declares one engine style axis with its raw-value and name conversions.
macro_rules! style_axis {
    (
        $(#[$meta:meta])*
        $name:ident, $axis:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $raw:literal => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[non_exhaustive]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Axis name used in logs and error messages
            pub const AXIS: &'static str = $axis;

            /// Every variant this build knows, in engine discriminant order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The engine's numeric discriminant for this variant
            pub const fn as_raw(self) -> u32 {
                match self {
                    $($name::$variant => $raw,)+
                }
            }

            /// Snake-case name, as accepted by `FromStr`
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = VariantError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                match value {
                    $($raw => Ok($name::$variant),)+
                    _ => Err(VariantError::UnknownValue { axis: $axis, value }),
                }
            }
        }

        impl FromStr for $name {
            type Err = VariantError;

            /// Accepts snake_case (`will_be_added_by_client`) or the variant
            /// name itself (`WillBeAddedByClient`), ignoring case.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().replace(['_', '-'], "").to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().replace('_', "") == wanted)
                    .ok_or_else(|| VariantError::UnknownName {
                        axis: $axis,
                        name: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

style_axis! {
    /// How data modules are drawn
    ModuleStyle, "module style" {
        Squares = 0 => "squares",
        Circles = 1 => "circles",
    }
}

style_axis! {
    /// How the three corner locator patterns are drawn
    LocatorStyle, "locator style" {
        Square = 0 => "square",
        Rounded = 1 => "rounded",
    }
}

style_axis! {
    /// Which built-in image the engine paints over the center of the symbol
    CenterImage, "center image" {
        NoCenterImage = 0 => "no_center_image",
        Dino = 1 => "dino",
        Passkey = 2 => "passkey",
        ProductLogo = 3 => "product_logo",
    }
}

style_axis! {
    /// Who is responsible for the padding border around the symbol
    QuietZone, "quiet zone" {
        /// The engine pads the symbol itself
        Included = 0 => "included",
        /// The engine omits padding; the caller adds it when presenting
        WillBeAddedByClient = 1 => "will_be_added_by_client",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values_follow_declaration_order() {
        for (i, v) in CenterImage::ALL.iter().enumerate() {
            assert_eq!(v.as_raw(), i as u32);
            assert_eq!(CenterImage::try_from(i as u32).unwrap(), *v);
        }
        assert_eq!(QuietZone::WillBeAddedByClient.as_raw(), 1);
        assert_eq!(LocatorStyle::Rounded.as_raw(), 1);
    }

    #[test]
    fn test_unknown_raw_value_is_reported() {
        let err = ModuleStyle::try_from(7).unwrap_err();
        assert_eq!(
            err,
            VariantError::UnknownValue {
                axis: "module style",
                value: 7
            }
        );
        assert_eq!(err.to_string(), "unknown module style discriminant 7");
    }

    #[test]
    fn test_parse_accepts_both_spellings() {
        assert_eq!(
            "will_be_added_by_client".parse::<QuietZone>().unwrap(),
            QuietZone::WillBeAddedByClient
        );
        assert_eq!(
            "WillBeAddedByClient".parse::<QuietZone>().unwrap(),
            QuietZone::WillBeAddedByClient
        );
        assert_eq!(
            " Product-Logo ".parse::<CenterImage>().unwrap(),
            CenterImage::ProductLogo
        );
        assert_eq!("SQUARES".parse::<ModuleStyle>().unwrap(), ModuleStyle::Squares);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let err = "hexagons".parse::<ModuleStyle>().unwrap_err();
        assert!(matches!(err, VariantError::UnknownName { axis: "module style", .. }));
        assert!("".parse::<LocatorStyle>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for v in LocatorStyle::ALL {
            assert_eq!(v.to_string().parse::<LocatorStyle>().unwrap(), *v);
        }
    }
}
