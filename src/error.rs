use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to fetch balances. Please try again.")]
    FetchFailed,
}

pub trait IntoFetchError<T> {
    fn into_fetch_error(self) -> Result<T, FetchError>;
}

impl<T> IntoFetchError<T> for anyhow::Result<T> {
    #[inline]
    fn into_fetch_error(self) -> Result<T, FetchError> {
        self.map_err(|reason| {
            tracing::error!(?reason, "{}", FetchError::FetchFailed);
            FetchError::FetchFailed
        })
    }
}
