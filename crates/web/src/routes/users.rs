//! Profile page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::error::Result;
use crate::filters;
use crate::resolver::{self, ResolvedUser};
use crate::state::AppState;

/// Profile display data.
pub struct ProfileView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub local: bool,
    pub age: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
}

impl From<ResolvedUser> for ProfileView {
    fn from(resolved: ResolvedUser) -> Self {
        match resolved {
            ResolvedUser::Local(user) => Self {
                id: user.id.to_string(),
                name: user.name,
                email: user.email.into_inner(),
                local: true,
                age: Some(user.age.to_string()),
                role: Some(user.role.to_string()),
                phone: None,
                website: None,
                company: None,
                address: None,
            },
            ResolvedUser::Remote(user) => Self {
                id: user.id.to_string(),
                name: user.name,
                email: user.email,
                local: false,
                age: None,
                role: None,
                phone: user.phone,
                website: user.website,
                company: user.company.map(|c| c.name),
                address: user.address.map(|a| {
                    format!("{}, {}, {} {}", a.street, a.suite, a.city, a.zipcode)
                }),
            },
        }
    }
}

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub profile: ProfileView,
}

/// Display a single user's profile.
///
/// The identifier resolves against the local store first, then the remote
/// directory API.
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<ProfileTemplate> {
    let resolved = resolver::resolve(state.store(), state.remote(), &id).await?;
    Ok(ProfileTemplate {
        profile: resolved.into(),
    })
}
