use palette::{Hsv, IntoColor, Srgb};

/// Perceptual similarity between two RGB samples, higher = more similar.
///
/// Both colors are converted to HSV (channels normalized to 0.0–1.0, hue as
/// a fraction of a turn) and compared per component:
///
/// ```text
/// (1 - |Δh|) * (1 - |Δs| * 0.5) * (1 - |Δv| * 0.25)
/// ```
///
/// Hue dominates: its difference counts at full strength, while saturation
/// and value differences are dampened to half and quarter weight so a dark
/// and a light rendition of the same hue still match strongly.
///
/// The hue difference is deliberately linear, not circular. Hues straddling
/// the 0/1 wraparound (deep reds) score as far apart even though they are
/// visually adjacent. Stored results depend on this exact arithmetic, so any
/// change here must bump [`crate::VERSION`].
pub fn similarity(a: [u8; 3], b: [u8; 3]) -> f64 {
    let (a_h, a_s, a_v) = rgb_to_hsv(a);
    let (b_h, b_s, b_v) = rgb_to_hsv(b);
    let diff_h = 1.0 - (a_h - b_h).abs();
    let diff_s = 1.0 - (a_s - b_s).abs() * 0.5;
    let diff_v = 1.0 - (a_v - b_v).abs() * 0.25;
    diff_h * diff_s * diff_v
}

/// HSV with every component in [0, 1]; hue 0 for achromatic colors.
fn rgb_to_hsv([r, g, b]: [u8; 3]) -> (f64, f64, f64) {
    let hsv: Hsv<_, f64> = Srgb::new(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    )
    .into_color();
    (
        hsv.hue.into_positive_degrees() / 360.0,
        hsv.saturation,
        hsv.value,
    )
}
