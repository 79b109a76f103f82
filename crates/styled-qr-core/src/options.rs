//! Style options: what the caller asks for and what the engine receives

use crate::style::{CenterImage, LocatorStyle, ModuleStyle, QuietZone};

/// Data modules are drawn as circles unless the caller says otherwise
pub const DEFAULT_MODULE_STYLE: ModuleStyle = ModuleStyle::Circles;
/// Locators are drawn rounded unless the caller says otherwise
pub const DEFAULT_LOCATOR_STYLE: LocatorStyle = LocatorStyle::Rounded;
/// The dino is painted in the center unless the caller says otherwise
pub const DEFAULT_CENTER_IMAGE: CenterImage = CenterImage::Dino;
/// Padding is left to the caller unless the caller says otherwise
pub const DEFAULT_QUIET_ZONE: QuietZone = QuietZone::WillBeAddedByClient;

/// A fully-resolved style: every axis has a value
///
/// This is what the engine receives. `Default` yields the documented
/// defaults (circles, rounded locators, dino, client-side quiet zone).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StyleOptions {
    pub module_style: ModuleStyle,
    pub locator_style: LocatorStyle,
    pub center_image: CenterImage,
    pub quiet_zone: QuietZone,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            module_style: DEFAULT_MODULE_STYLE,
            locator_style: DEFAULT_LOCATOR_STYLE,
            center_image: DEFAULT_CENTER_IMAGE,
            quiet_zone: DEFAULT_QUIET_ZONE,
        }
    }
}

/// Caller-supplied style; any axis may be left out
///
/// Missing axes are filled from the fixed defaults by [`resolve`](Self::resolve).
/// With the `serde` feature the field names follow the camelCase keys of the
/// JavaScript options object (`moduleStyle`, `locatorStyle`, ...).
///
/// ```
/// use styled_qr_core::options::GenerateOptions;
/// use styled_qr_core::style::{CenterImage, ModuleStyle};
///
/// let style = GenerateOptions::new().module_style(ModuleStyle::Squares).resolve();
/// assert_eq!(style.module_style, ModuleStyle::Squares);
/// assert_eq!(style.center_image, CenterImage::Dino);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "camelCase", default, deny_unknown_fields)
)]
pub struct GenerateOptions {
    pub module_style: Option<ModuleStyle>,
    pub locator_style: Option<LocatorStyle>,
    pub center_image: Option<CenterImage>,
    pub quiet_zone: Option<QuietZone>,
}

impl GenerateOptions {
    /// No axis specified; resolves to the defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module_style(mut self, style: ModuleStyle) -> Self {
        self.module_style = Some(style);
        self
    }

    pub fn locator_style(mut self, style: LocatorStyle) -> Self {
        self.locator_style = Some(style);
        self
    }

    pub fn center_image(mut self, image: CenterImage) -> Self {
        self.center_image = Some(image);
        self
    }

    pub fn quiet_zone(mut self, zone: QuietZone) -> Self {
        self.quiet_zone = Some(zone);
        self
    }

    /// Fill every missing axis from the fixed defaults
    pub fn resolve(&self) -> StyleOptions {
        StyleOptions {
            module_style: self.module_style.unwrap_or(DEFAULT_MODULE_STYLE),
            locator_style: self.locator_style.unwrap_or(DEFAULT_LOCATOR_STYLE),
            center_image: self.center_image.unwrap_or(DEFAULT_CENTER_IMAGE),
            quiet_zone: self.quiet_zone.unwrap_or(DEFAULT_QUIET_ZONE),
        }
    }
}

impl From<StyleOptions> for GenerateOptions {
    fn from(style: StyleOptions) -> Self {
        Self {
            module_style: Some(style.module_style),
            locator_style: Some(style.locator_style),
            center_image: Some(style.center_image),
            quiet_zone: Some(style.quiet_zone),
        }
    }
}
