use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandError {
    #[error("Invalid seed '{0}', expect an integer or a string")]
    InvalidSeed(String),

    #[error("Invalid range [{0}, {1}], low must not exceed high")]
    InvalidRange(i64, i64),
}

pub type RandResult<T> = Result<T, RandError>;

#[test]
fn display_range_err() {
    assert_eq!(
        RandError::InvalidRange(7, 3).to_string(),
        "Invalid range [7, 3], low must not exceed high"
    );
}
