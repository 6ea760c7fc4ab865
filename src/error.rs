use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("RequestError")]
    Request(#[from] reqwest::Error),
    #[error("StatusError: {book} {chapter} returned {status}")]
    Status {
        book: String,
        chapter: u32,
        status: u16,
    },
    #[error("DecodeError: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("LockError: {0}")]
    Lock(String),
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(error: std::sync::PoisonError<T>) -> Self {
        StoreError::Lock(error.to_string())
    }
}
