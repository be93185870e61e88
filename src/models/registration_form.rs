use serde::Deserialize;

/// Raw form input as posted by the browser. Every field may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default, rename = "FirstName", alias = "first_name")]
    pub first_name: Option<String>,
    #[serde(default, rename = "LastName", alias = "last_name")]
    pub last_name: Option<String>,
    #[serde(default, rename = "Email", alias = "EMail", alias = "email")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::FirstName => "First name",
            FormField::LastName => "Last name",
            FormField::Email => "Email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    fn required(field: FormField) -> Self {
        Self {
            field,
            message: format!("{} is required", field.label()),
        }
    }
}

/// A submission that passed required-field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl RegistrationForm {
    /// Checks that all three fields are present and not blank. Accepted values
    /// are passed through untouched; the email is hashed exactly as submitted.
    pub fn validate(&self) -> Result<RegistrationSubmission, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = required(&self.first_name, FormField::FirstName, &mut errors);
        let last_name = required(&self.last_name, FormField::LastName, &mut errors);
        let email = required(&self.email, FormField::Email, &mut errors);

        match (first_name, last_name, email) {
            (Some(first_name), Some(last_name), Some(email)) => Ok(RegistrationSubmission {
                first_name,
                last_name,
                email,
            }),
            _ => Err(errors),
        }
    }
}

fn required(
    value: &Option<String>,
    field: FormField,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v.clone()),
        _ => {
            errors.push(FieldError::required(field));
            None
        }
    }
}

/// What the form page renders: the submitted values plus the two outcome flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationView {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub show_success_message: bool,
    pub show_error_message: bool,
}

impl RegistrationView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Echoes whatever was posted, with both flags cleared.
    pub fn from_form(form: &RegistrationForm) -> Self {
        Self {
            first_name: form.first_name.clone().unwrap_or_default(),
            last_name: form.last_name.clone().unwrap_or_default(),
            email: form.email.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn from_submission(submission: &RegistrationSubmission) -> Self {
        Self {
            first_name: submission.first_name.clone(),
            last_name: submission.last_name.clone(),
            email: submission.email.clone(),
            ..Self::default()
        }
    }

    pub fn succeeded(mut self) -> Self {
        self.show_success_message = true;
        self.show_error_message = false;
        self
    }

    pub fn rejected(mut self) -> Self {
        self.show_success_message = false;
        self.show_error_message = true;
        self
    }
}
