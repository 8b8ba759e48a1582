use thiserror::Error;

/// Rule violations raised by `server::validation`.
///
/// Every variant is client-caused and belongs to the `InvalidInput` kind. The
/// display text is the message returned to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("id cannot be less than 1")]
    InvalidId,

    #[error("username must contain at least 3 characters")]
    ShortUsername,

    #[error("username must not contain more than 50 characters")]
    LongUsername,

    #[error("full_name must not contain more than 100 characters")]
    LongFullName,

    #[error("email must not contain more than 100 characters")]
    LongEmail,

    #[error("email address not specified")]
    NoEmail,

    #[error("email address is invalid")]
    InvalidEmail,
}
