//! Aspect-ratio classification and pixel-budget sizing.

use crate::Size;

/// A named fixed width:height ratio family the UI snaps toward.
///
/// `Custom` means width and height vary independently within the bounds,
/// with no slider-driven coupling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectClass {
    Ratio16x9,
    Ratio9x16,
    Ratio4x3,
    Ratio3x4,
    Custom,
}

impl AspectClass {
    /// All classes in preset-button order.
    pub const ALL: [Self; 5] = [
        Self::Ratio16x9,
        Self::Ratio9x16,
        Self::Ratio4x3,
        Self::Ratio3x4,
        Self::Custom,
    ];

    /// The ratio as (w, h), or None for `Custom`.
    pub fn ratio(&self) -> Option<(u32, u32)> {
        match self {
            Self::Ratio16x9 => Some((16, 9)),
            Self::Ratio9x16 => Some((9, 16)),
            Self::Ratio4x3 => Some((4, 3)),
            Self::Ratio3x4 => Some((3, 4)),
            Self::Custom => None,
        }
    }

    /// Display name for the preset buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ratio16x9 => "16:9",
            Self::Ratio9x16 => "9:16",
            Self::Ratio4x3 => "4:3",
            Self::Ratio3x4 => "3:4",
            Self::Custom => "Custom",
        }
    }
}

/// Classify a size into an aspect class using a 1-pixel tolerance.
///
/// Each named ratio is tested in fixed priority order (16:9, 9:16, 4:3,
/// 3:4) and the first match wins, so near-ties are resolved by priority
/// rather than closeness. Both cross-dimensions are tried: a size matches
/// when either the width implied by the height or the height implied by
/// the width is within 1.0 px of the actual value.
pub fn classify(width: u32, height: u32) -> AspectClass {
    if width == 0 || height == 0 {
        return AspectClass::Custom;
    }
    let w = width as f32;
    let h = height as f32;
    for class in &AspectClass::ALL[..4] {
        let (rw, rh) = match class.ratio() {
            Some(r) => (r.0 as f32, r.1 as f32),
            None => continue,
        };
        let sw = h * rw / rh;
        let sh = w * rh / rw;
        if (sw - w).abs() <= 1.0 || (sh - h).abs() <= 1.0 {
            return *class;
        }
    }
    AspectClass::Custom
}

/// Compute the size conforming to `ratio_w:ratio_h` whose pixel count is
/// closest to `pixels`.
///
/// Used when a ratio preset is chosen so that switching ratios does not
/// silently change the output megapixel budget.
pub fn size_for_pixel_budget(pixels: u64, ratio_w: u32, ratio_h: u32) -> Size {
    let scale = (pixels as f64 / (ratio_w as f64 * ratio_h as f64)).sqrt();
    Size {
        width: (scale * ratio_w as f64).round() as u32,
        height: (scale * ratio_h as f64).round() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exact_ratios() {
        assert_eq!(classify(1920, 1080), AspectClass::Ratio16x9);
        assert_eq!(classify(1080, 1920), AspectClass::Ratio9x16);
        assert_eq!(classify(1600, 1200), AspectClass::Ratio4x3);
        assert_eq!(classify(1200, 1600), AspectClass::Ratio3x4);
    }

    #[test]
    fn test_classify_within_tolerance() {
        // One pixel off either dimension still matches.
        assert_eq!(classify(1921, 1080), AspectClass::Ratio16x9);
        assert_eq!(classify(1920, 1081), AspectClass::Ratio16x9);
    }

    #[test]
    fn test_classify_unmatched_is_custom() {
        assert_eq!(classify(1000, 999), AspectClass::Custom);
        assert_eq!(classify(500, 500), AspectClass::Custom);
    }

    #[test]
    fn test_classify_zero_is_custom() {
        assert_eq!(classify(0, 1080), AspectClass::Custom);
        assert_eq!(classify(1920, 0), AspectClass::Custom);
    }

    #[test]
    fn test_classify_priority_resolves_near_ties() {
        // (4, 3) is exactly 4:3, but at this scale the 16:9 check is also
        // within tolerance (4 * 9/16 = 2.25, |2.25 - 3| = 0.75), and 16:9
        // is tested first.
        assert_eq!(classify(4, 3), AspectClass::Ratio16x9);
    }

    #[test]
    fn test_pixel_budget_exact() {
        let si = size_for_pixel_budget(1920 * 1080, 16, 9);
        assert_eq!(si, Size::new(1920, 1080));
    }

    #[test]
    fn test_pixel_budget_preserved_across_ratio_switch() {
        let budget = 1920u64 * 1080;
        let si = size_for_pixel_budget(budget, 4, 3);
        assert_eq!(classify(si.width, si.height), AspectClass::Ratio4x3);
        let diff = si.pixel_count().abs_diff(budget);
        // Rounding both dimensions moves the product by at most ~w+h.
        assert!(diff < (si.width + si.height) as u64);
    }

    #[test]
    fn test_pixel_budget_portrait() {
        let si = size_for_pixel_budget(1920 * 1080, 9, 16);
        assert_eq!(si, Size::new(1080, 1920));
    }
}
