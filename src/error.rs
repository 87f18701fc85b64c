use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The input bytes could not be decoded as an image.
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Two palette entries share a label. Raised at palette construction,
    /// never during classification.
    #[error("duplicate palette label: {0}")]
    DuplicateLabel(String),
}
