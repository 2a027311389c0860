use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("source could not be decoded as a raster image")]
    Decode(#[source] image::ImageError),

    #[error("resize failed: {0}")]
    Resize(String),

    #[error("re-encode failed")]
    Encode(#[source] image::ImageError),
}
