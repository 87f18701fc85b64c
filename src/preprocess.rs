use image::{DynamicImage, imageops::FilterType};
use tracing::debug;

/// Edge length of the intermediate smoothing pass.
pub const SMOOTHING_SIZE: u32 = 1000;

/// Downsample an image to a square `image_size` grid of RGB samples ready
/// for per-pixel classification.
///
/// Two passes, on purpose:
/// 1. Resize to [`SMOOTHING_SIZE`]² with a cubic filter. This deliberately
///    blurs out sensor noise and compression artifacts so a single noisy
///    pixel cannot skew the result.
/// 2. Resize down to `image_size`² with nearest-neighbour sampling. The
///    noise is already gone, and a non-blending filter avoids inventing new
///    in-between colors at the boundaries between color regions.
///
/// Non-square inputs are squashed to the square target (aspect ratio is not
/// preserved; coverage fractions do not depend on it). Inputs smaller than
/// the intermediate size are upsampled by the same path. Alpha, if present,
/// is stripped.
///
/// Returns `image_size * image_size` pixels in row-major order, or an empty
/// vector when `image_size` is zero.
pub fn downsample(img: &DynamicImage, image_size: u32) -> Vec<[u8; 3]> {
    if image_size == 0 {
        return Vec::new();
    }

    let smoothed = img.resize_exact(SMOOTHING_SIZE, SMOOTHING_SIZE, FilterType::CatmullRom);
    let sampled = smoothed.resize_exact(image_size, image_size, FilterType::Nearest);
    debug!(
        width = img.width(),
        height = img.height(),
        image_size,
        "downsampled image for classification"
    );

    sampled.to_rgb8().pixels().map(|p| p.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn uniform(w: u32, h: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(w, h, image::Rgb(rgb)))
    }

    #[test]
    fn output_is_the_requested_grid() {
        let pixels = downsample(&uniform(640, 480, [10, 20, 30]), 32);
        assert_eq!(pixels.len(), 32 * 32);
    }

    #[test]
    fn uniform_images_stay_uniform() {
        let pixels = downsample(&uniform(100, 100, [120, 4, 20]), 32);
        assert!(pixels.iter().all(|&p| p == [120, 4, 20]));
    }

    #[test]
    fn small_images_are_upsampled() {
        // 3x5, far below the smoothing size; the same two passes apply.
        let pixels = downsample(&uniform(3, 5, [0, 171, 0]), 32);
        assert_eq!(pixels.len(), 32 * 32);
        assert!(pixels.iter().all(|&p| p == [0, 171, 0]));
    }

    #[test]
    fn alpha_is_stripped() {
        let rgba = image::RgbaImage::from_pixel(50, 50, image::Rgba([255, 207, 0, 128]));
        let pixels = downsample(&DynamicImage::ImageRgba8(rgba), 8);
        assert!(pixels.iter().all(|&p| p == [255, 207, 0]));
    }

    #[test]
    fn zero_size_grid_yields_no_pixels() {
        assert!(downsample(&uniform(10, 10, [0, 0, 0]), 0).is_empty());
    }
}
