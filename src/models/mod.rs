pub mod registration;
pub mod registration_form;

pub use registration::{NewRegistration, Registration};
pub use registration_form::{
    FieldError, FormField, RegistrationForm, RegistrationSubmission, RegistrationView,
};
