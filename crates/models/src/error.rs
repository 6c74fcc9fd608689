#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid Discriminator: {0:?}")]
    InvalidDiscriminator(String),

    #[error("Invalid Image Format: {0:?}")]
    InvalidImageFormat(String),
}
