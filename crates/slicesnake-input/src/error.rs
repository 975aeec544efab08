/// Errors raised while persisting a [`KeyMap`](crate::KeyMap).
#[derive(Debug, thiserror::Error)]
pub enum KeyMapError {
    #[error("key map i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse key map: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("failed to serialize key map: {0}")]
    Serialize(#[from] ron::Error),
}
