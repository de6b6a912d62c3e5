pub const MAX_HERO_BLUR_PX: f64 = 10.0;

/// Blur applied to the hero background once it starts leaving the viewport.
///
/// `hero_bottom` is the bottom edge of the hero relative to the top of the
/// viewport. The blur grows linearly from 0 while the bottom edge sits at
/// the viewport's bottom to the maximum when it reaches the top.
pub fn blur_radius(hero_bottom: f64, viewport_height: f64) -> f64 {
    if !viewport_height.is_finite() || viewport_height <= 0.0 || !hero_bottom.is_finite() {
        return 0.0;
    }
    let progress = (1.0 - hero_bottom / viewport_height).clamp(0.0, 1.0);
    progress * MAX_HERO_BLUR_PX
}

/// Rounds to 0.1px so the hero only re-renders on visible changes.
pub fn quantize_blur(radius: f64) -> f64 {
    (radius * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_blur_while_hero_fills_viewport() {
        assert_eq!(blur_radius(900.0, 900.0), 0.0);
        assert_eq!(blur_radius(1400.0, 900.0), 0.0);
    }

    #[test]
    fn blur_grows_linearly_and_caps() {
        assert_eq!(blur_radius(450.0, 900.0), 5.0);
        assert_eq!(blur_radius(0.0, 900.0), MAX_HERO_BLUR_PX);
        assert_eq!(blur_radius(-300.0, 900.0), MAX_HERO_BLUR_PX);
    }

    #[test]
    fn degenerate_viewport_gives_no_blur() {
        assert_eq!(blur_radius(100.0, 0.0), 0.0);
        assert_eq!(blur_radius(100.0, f64::NAN), 0.0);
        assert_eq!(blur_radius(f64::INFINITY, 800.0), 0.0);
    }

    #[test]
    fn quantize_rounds_to_tenths() {
        assert_eq!(quantize_blur(3.14159), 3.1);
        assert_eq!(quantize_blur(9.96), 10.0);
    }

    #[test]
    fn hero_partly_scrolled_away_starts_blurred() {
        assert_eq!(quantize_blur(blur_radius(300.0, 900.0)), 6.7);
    }
}
