//! Directory page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::directory::{self, DirectoryEntry, Source};
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// A directory row prepared for display.
#[derive(Clone)]
pub struct DirectoryRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: String,
    pub zipcode: String,
    pub local: bool,
}

impl From<DirectoryEntry> for DirectoryRow {
    fn from(entry: DirectoryEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            email: entry.email,
            city: entry.city.unwrap_or_else(|| "—".to_owned()),
            zipcode: entry.zipcode.unwrap_or_else(|| "—".to_owned()),
            local: entry.source == Source::Local,
        }
    }
}

/// Directory page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub rows: Vec<DirectoryRow>,
    pub query: String,
    pub notice: Option<String>,
}

/// Display the unified directory with optional name search.
pub async fn home(
    State(state): State<AppState>,
    Query(search): Query<SearchQuery>,
) -> Result<HomeTemplate> {
    let remote = state.remote().list_users().await?;
    let local = state.store().all();
    let query = search.q.unwrap_or_default();

    let rows = directory::filter_by_name(directory::unified(&remote, &local), &query)
        .into_iter()
        .map(DirectoryRow::from)
        .collect();

    Ok(HomeTemplate {
        rows,
        query,
        notice: state.store().take_notice().map(|n| n.to_string()),
    })
}
