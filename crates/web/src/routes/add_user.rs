//! Add-user form route handlers.
//!
//! The form validates on the server; every violated field is re-rendered
//! with its message while keeping submitted values, and valid submissions
//! redirect back to the page so a reload cannot double-submit.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};

use crewlist_core::{FieldErrors, Role, UserFormInput};

use crate::error::Result;
use crate::filters;
use crate::models::LocalUser;
use crate::state::AppState;

/// A locally-added user row prepared for display.
#[derive(Clone)]
pub struct LocalRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub role: &'static str,
}

impl From<LocalUser> for LocalRow {
    fn from(user: LocalUser) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email.into_inner(),
            age: user.age,
            role: user.role.as_str(),
        }
    }
}

/// Add-user page template: form plus the table of local users.
#[derive(Template, WebTemplate)]
#[template(path = "add_user.html")]
pub struct AddUserTemplate {
    pub form: UserFormInput,
    pub errors: FieldErrors,
    pub roles: &'static [Role],
    pub users: Vec<LocalRow>,
    pub notice: Option<String>,
}

impl AddUserTemplate {
    fn new(state: &AppState, form: UserFormInput, errors: FieldErrors) -> Self {
        Self {
            form,
            errors,
            roles: &Role::ALL,
            users: state.store().all().into_iter().map(LocalRow::from).collect(),
            notice: state.store().take_notice().map(|n| n.to_string()),
        }
    }
}

/// Display the add-user form and the current local list.
pub async fn page(State(state): State<AppState>) -> AddUserTemplate {
    AddUserTemplate::new(&state, UserFormInput::default(), FieldErrors::default())
}

/// Handle an add-user submission.
///
/// Invalid input re-renders the form with per-field errors; valid input
/// creates the record and redirects. A failed slot write is not an error
/// response: the record exists in memory and the discrepancy surfaces as
/// a notice on the next page render.
pub async fn create(
    State(state): State<AppState>,
    Form(input): Form<UserFormInput>,
) -> Result<Response> {
    match input.validate() {
        Ok(data) => {
            let (user, saved) = state.store().create(data).await;
            if saved.is_ok() {
                tracing::info!(id = %user.id, "local user created");
            }
            Ok(Redirect::to("/add-user").into_response())
        }
        Err(errors) => Ok(AddUserTemplate::new(&state, input, errors).into_response()),
    }
}

/// Remove a locally-added user. Unknown ids are a silent no-op.
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> Result<Redirect> {
    if state.store().remove(&id).await.is_ok() {
        tracing::info!(%id, "local user removed");
    }
    Ok(Redirect::to("/add-user"))
}
