//! Text color correction.
//!
//! Some templates render white text on cards that end up light. These rules
//! decide which elements get dark text instead.

/// Classes whose background is light enough that white text disappears.
pub const LIGHT_CONTAINERS: &str = ".bg-white, .bg-light, .card-body";

/// Classes with a colored background where white text is intended.
pub const COLORED_CONTAINERS: &str =
    ".bg-primary, .bg-success, .bg-danger, .bg-warning, .bg-info, .bg-dark, .bg-secondary";

/// Elements whose computed colors are checked.
pub const TEXT_ELEMENTS: &str = "p, div, span, li, h1, h2, h3, h4, h5, h6";

pub const WHITE_TEXT_CLASS: &str = "text-white";
pub const DARK_TEXT_CLASS: &str = "text-dark";

/// A computed CSS color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse the `rgb(r, g, b)` / `rgba(r, g, b, a)` form browsers use
    /// for computed styles.
    pub fn parse(css: &str) -> Option<Self> {
        let css = css.trim();
        let inner = css
            .strip_prefix("rgba(")
            .or_else(|| css.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let r = parts.next()?.parse().ok()?;
        let g = parts.next()?.parse().ok()?;
        let b = parts.next()?.parse().ok()?;
        let a = match parts.next() {
            Some(a) => a.parse().ok()?,
            None => 1.0,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self { r, g, b, a })
    }

    pub fn is_opaque_white(self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255 && self.a >= 1.0
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0.0
    }
}

/// Whether text with computed `color` on computed `background` needs the
/// dark text color: white text over white or a transparent background.
pub fn needs_dark_text(color: &str, background: &str) -> bool {
    let (Some(color), Some(background)) = (Rgba::parse(color), Rgba::parse(background)) else {
        return false;
    };
    color.is_opaque_white() && (background.is_opaque_white() || background.is_transparent())
}

/// Whether a `.text-white` element should switch to `.text-dark`, given
/// whether it sits in a light and in a colored container.
pub fn should_swap_white_text(in_light_container: bool, in_colored_container: bool) -> bool {
    in_light_container && !in_colored_container
}
