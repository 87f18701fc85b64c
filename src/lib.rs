//! Palette-based dominant color classifier.
//!
//! Given a decoded image, works out which of a small set of named reference
//! colors dominate it and how much of the frame each one covers. The whole
//! pipeline is a pure function of (image, palette, options): downsample the
//! image to a noise-suppressed grid, assign every grid pixel to its most
//! similar palette entry under a perceptually weighted HSV metric, then rank
//! the surviving labels by coverage.
//!
//! Storage concerns (persisting tags, deduplicating prior runs, stamping
//! completion metadata) belong to the caller; this crate only produces the
//! ranked `(label, score)` sequence.
//!
//! ```no_run
//! use colortag::{classify_bytes, Options};
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! for result in classify_bytes(&bytes, &Options::default())? {
//!     println!("{}: {:.3}", result.label, result.score);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use image::DynamicImage;

pub mod classify;
pub mod error;
pub mod palette;
pub mod preprocess;
pub mod similarity;

pub use classify::{classify_pixels, ColorScore, Options};
pub use error::Error;
pub use palette::{Palette, PaletteEntry, APPROX_RAM_MB, MAX_NUM_WORKERS, VERSION};
pub use preprocess::downsample;
pub use similarity::similarity;

/// Classify an already decoded image against a palette.
///
/// Pure and synchronous; the palette is read-only, so independent callers
/// may classify concurrently without coordination.
pub fn classify_image(
    img: &DynamicImage,
    palette: &Palette,
    options: &Options,
) -> Vec<ColorScore> {
    let pixels = downsample(img, options.image_size);
    classify_pixels(&pixels, palette, options)
}

/// Decode encoded image bytes and classify them against the built-in
/// palette. Decoding failures surface as [`Error::Decode`]; nothing is
/// retried.
pub fn classify_bytes(input: &[u8], options: &Options) -> Result<Vec<ColorScore>, Error> {
    let img = image::load_from_memory(input)?;
    Ok(classify_image(&img, &Palette::builtin(), options))
}
