use crate::error::Result;
use crate::models::registration_form::{FieldError, RegistrationForm, RegistrationView};
use crate::AppState;
use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    first_name: String,
    last_name: String,
    email: String,
    show_success_message: bool,
    show_error_message: bool,
    errors: Vec<String>,
}

impl IndexTemplate {
    fn new(view: RegistrationView, errors: Vec<FieldError>) -> Self {
        Self {
            first_name: view.first_name,
            last_name: view.last_name,
            email: view.email,
            show_success_message: view.show_success_message,
            show_error_message: view.show_error_message,
            errors: errors.into_iter().map(|e| e.message).collect(),
        }
    }
}

fn render(view: RegistrationView, errors: Vec<FieldError>) -> Result<Html<String>> {
    Ok(Html(IndexTemplate::new(view, errors).render()?))
}

pub async fn show_registration_form() -> Result<Html<String>> {
    render(RegistrationView::new(), Vec::new())
}

pub async fn submit_registration_form(
    State(app_state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Result<Html<String>> {
    let submission = match form.validate() {
        Ok(submission) => submission,
        Err(errors) => {
            tracing::debug!("Registration form rejected: {} missing field(s)", errors.len());
            return render(RegistrationView::from_form(&form), errors);
        }
    };

    let view = app_state
        .registration_service
        .handle_registration(submission)
        .await?;

    render(view, Vec::new())
}

/// Reports `OK` only while the database answers.
pub async fn health_handler(State(app_state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(&app_state.pool).await {
        Ok(_) => "OK".into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
        }
    }
}
