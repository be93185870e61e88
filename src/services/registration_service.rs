use crate::models::registration::{NewRegistration, Registration};
use crate::models::registration_form::{RegistrationSubmission, RegistrationView};
use crate::repositories::registration_repository::{RegistrationRepository, RepositoryError};
use crate::services::email_hasher::SaltedHasher;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum RegistrationServiceError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone)]
pub enum RegistrationOutcome {
    Registered(Registration),
    Duplicate,
}

pub struct RegistrationService {
    repository: Arc<dyn RegistrationRepository>,
    hasher: Arc<dyn SaltedHasher>,
    // Serializes the scan and the insert so two requests for the same email
    // cannot both pass the duplicate check in this process.
    registration_gate: Mutex<()>,
}

impl RegistrationService {
    pub fn new(repository: Arc<dyn RegistrationRepository>, hasher: Arc<dyn SaltedHasher>) -> Self {
        Self {
            repository,
            hasher,
            registration_gate: Mutex::new(()),
        }
    }

    /// Runs a validated submission through the duplicate check and returns the
    /// view to render, with exactly one of the two message flags set.
    pub async fn handle_registration(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<RegistrationView, RegistrationServiceError> {
        let view = RegistrationView::from_submission(&submission);

        match self.register(&submission).await? {
            RegistrationOutcome::Registered(_) => Ok(view.succeeded()),
            RegistrationOutcome::Duplicate => Ok(view.rejected()),
        }
    }

    pub async fn register(
        &self,
        submission: &RegistrationSubmission,
    ) -> Result<RegistrationOutcome, RegistrationServiceError> {
        let _guard = self.registration_gate.lock().await;

        if self.email_exists(&submission.email).await? {
            tracing::info!(
                "Registration of {} {} ({}) failed.",
                submission.first_name,
                submission.last_name,
                submission.email
            );
            return Ok(RegistrationOutcome::Duplicate);
        }

        let salted = self.hasher.hash(&submission.email);
        let new_registration = NewRegistration {
            first_name: submission.first_name.clone(),
            last_name: submission.last_name.clone(),
            created_utc: Utc::now(),
            email_hash: salted.hash,
            email_hash_salt: salted.salt,
        };

        let registration = self.repository.create(&new_registration).await?;

        tracing::info!(
            "Registration of {} {} ({}) stored in database with ID {}.",
            submission.first_name,
            submission.last_name,
            submission.email,
            registration.id
        );

        Ok(RegistrationOutcome::Registered(registration))
    }

    /// Linear scan: every record has its own salt, so the email has to be
    /// rehashed against each one.
    pub async fn email_exists(&self, email: &str) -> Result<bool, RegistrationServiceError> {
        let registrations = self.repository.list_all().await?;

        Ok(registrations.iter().any(|registration| {
            registration.has_email_hash()
                && self
                    .hasher
                    .hash_with_salt(email, &registration.email_hash_salt)
                    == registration.email_hash
        }))
    }

    pub async fn list_registrations(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Registration>, RegistrationServiceError> {
        Ok(self.repository.list(limit, offset).await?)
    }

    pub async fn count_registrations(&self) -> Result<i64, RegistrationServiceError> {
        Ok(self.repository.count().await?)
    }
}
