use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory SQLite database or to execute
    /// schema statements during setup.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
