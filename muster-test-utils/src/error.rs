use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error("password hash error: {0}")]
    PasswordHash(String),
}

impl From<argon2::password_hash::Error> for TestError {
    fn from(error: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(error.to_string())
    }
}
