use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("not authenticated — run `stk auth login`")]
    NotAuthenticated,

    #[error("session expired — run `stk auth login` again")]
    TokenExpired,

    #[error("token decode error: {0}")]
    TokenDecode(String),

    #[error("token store error: {0}")]
    TokenStoreError(String),

    #[error(transparent)]
    Api(#[from] stock_client::ApiError),
}
