use tracing::{debug, trace};

use crate::palette::Palette;
use crate::similarity::similarity;

/// Tuning parameters for a classification run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Edge length of the downsampled grid the classifier runs over.
    pub image_size: u32,
    /// Minimum coverage fraction a label needs to appear in the results.
    pub min_score: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            image_size: 32,
            min_score: 0.005,
        }
    }
}

/// One surviving label and the fraction of sampled pixels assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScore {
    pub label: String,
    pub score: f64,
}

/// Aggregate a downsampled pixel grid into ranked dominant-color labels.
///
/// Every pixel is assigned to the palette entry it is most similar to
/// (strictly greater score wins; on a tie the earliest palette entry keeps
/// the pixel, so results are deterministic for a fixed palette order). A
/// pixel scoring zero against every entry is assigned to none, which only
/// happens in pathological zero-similarity cases.
///
/// Counts become fractions of `image_size * image_size`; labels below
/// `min_score` are dropped, and the rest are sorted by descending fraction
/// with ties keeping palette order. Scores therefore lie in [0, 1] and sum
/// to at most 1. An empty pixel slice yields an empty result, not an error.
pub fn classify_pixels(pixels: &[[u8; 3]], palette: &Palette, options: &Options) -> Vec<ColorScore> {
    if pixels.is_empty() {
        return Vec::new();
    }

    let mut counts = vec![0u64; palette.len()];
    for &pixel in pixels {
        let mut best: Option<usize> = None;
        let mut best_score = 0.0;
        for (i, entry) in palette.entries().iter().enumerate() {
            let score = similarity(pixel, entry.rgb);
            if score > best_score {
                best = Some(i);
                best_score = score;
            }
        }
        if let Some(i) = best {
            counts[i] += 1;
        } else {
            trace!(?pixel, "pixel matched no palette entry");
        }
    }

    let total = f64::from(options.image_size) * f64::from(options.image_size);
    let mut results: Vec<ColorScore> = palette
        .entries()
        .iter()
        .zip(&counts)
        .filter(|&(_, &count)| count > 0)
        .map(|(entry, &count)| ColorScore {
            label: entry.name.clone(),
            score: count as f64 / total,
        })
        .filter(|result| result.score >= options.min_score)
        .collect();

    // Stable sort keeps palette order between equal fractions.
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).expect("scores are finite"));

    debug!(labels = results.len(), sampled = pixels.len(), "classified pixel grid");
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(image_size: u32, min_score: f64) -> Options {
        Options { image_size, min_score }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let results = classify_pixels(&[], &Palette::builtin(), &Options::default());
        assert!(results.is_empty());
    }

    #[test]
    fn uniform_reference_color_scores_one() {
        let palette = Palette::builtin();
        for entry in palette.entries() {
            let pixels = vec![entry.rgb; 32 * 32];
            let results = classify_pixels(&pixels, &palette, &Options::default());
            assert_eq!(results.len(), 1, "{} should be its own best match", entry.name);
            assert_eq!(results[0].label, entry.name);
            assert!((results[0].score - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn labels_below_the_threshold_are_dropped() {
        // 4 of 1024 pixels is 0.39% coverage, under the default 0.5% cutoff.
        let mut pixels = vec![[0, 0, 0]; 1020];
        pixels.extend_from_slice(&[[255, 255, 255]; 4]);
        let results = classify_pixels(&pixels, &Palette::builtin(), &Options::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].label, "Black");
        assert!((results[0].score - 1020.0 / 1024.0).abs() < 1e-12);
    }

    #[test]
    fn output_is_sorted_by_descending_score() {
        let mut pixels = vec![[0, 0, 0]; 600];
        pixels.extend_from_slice(&[[255, 255, 255]; 300]);
        pixels.extend_from_slice(&[[124, 124, 124]; 124]);
        let results = classify_pixels(&pixels, &Palette::builtin(), &Options::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].label, "Black");
        assert_eq!(results[1].label, "White");
        assert_eq!(results[2].label, "Gray");
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn equal_fractions_keep_palette_order() {
        let mut pixels = vec![[255, 255, 255]; 512];
        pixels.extend_from_slice(&[[0, 0, 0]; 512]);
        let results = classify_pixels(&pixels, &Palette::builtin(), &Options::default());
        assert_eq!(results.len(), 2);
        // White precedes Black in the palette, so it wins the tie even
        // though black pixels were counted first.
        assert_eq!(results[0].label, "White");
        assert_eq!(results[1].label, "Black");
    }

    #[test]
    fn scores_are_bounded_and_sum_below_one() {
        let pixels: Vec<[u8; 3]> = (0..1024u32)
            .map(|i| {
                let v = (i % 256) as u8;
                [v, v.wrapping_mul(3), v.wrapping_add(91)]
            })
            .collect();
        let results = classify_pixels(&pixels, &Palette::builtin(), &Options::default());
        let sum: f64 = results.iter().map(|r| r.score).sum();
        assert!(sum <= 1.0 + 1e-12);
        for result in &results {
            assert!(result.score >= 0.0 && result.score <= 1.0);
            assert!(result.score >= 0.005);
        }
    }

    #[test]
    fn empty_palette_assigns_nothing() {
        let palette = Palette::new(Vec::new()).unwrap();
        let pixels = vec![[10, 20, 30]; 16];
        assert!(classify_pixels(&pixels, &palette, &opts(4, 0.005)).is_empty());
    }

    #[test]
    fn fractions_use_the_grid_size_denominator() {
        let pixels = vec![[0, 0, 0]; 8];
        let results = classify_pixels(&pixels, &Palette::builtin(), &opts(4, 0.005));
        assert_eq!(results.len(), 1);
        assert!((results[0].score - 0.5).abs() < 1e-12);
    }
}
