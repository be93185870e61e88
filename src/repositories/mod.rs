pub mod registration_repository;

pub use registration_repository::{
    RegistrationRepository, RepositoryError, RepositoryResult, SqliteRegistrationRepository,
};
