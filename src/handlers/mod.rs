pub mod registration_handlers;

pub use registration_handlers::{
    health_handler, show_registration_form, submit_registration_form,
};
