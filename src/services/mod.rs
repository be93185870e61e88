pub mod email_hasher;
pub mod registration_service;

pub use email_hasher::{SaltedHash, SaltedHasher, Sha256SaltedHasher};
pub use registration_service::{
    RegistrationOutcome, RegistrationService, RegistrationServiceError,
};
