//! Handlers for the instrument and genre icon table.

use axum::extract::Query;
use axum::response::IntoResponse;
use axum::Json;
use jamboree_core::icons::{find_icon, icons_of_kind, resolve_icon, to_canonical_ids, IconKind};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::data;

/// Upper bound on names per canonicalize request.
const MAX_NAMES: usize = 64;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub kind: Option<IconKind>,
}

/// GET /api/v1/icons?kind=instrument|genre
///
/// Without `kind`, instruments are listed before genres.
pub async fn list_icons(Query(query): Query<ListQuery>) -> impl IntoResponse {
    let kinds = match query.kind {
        Some(kind) => vec![kind],
        None => vec![IconKind::Instrument, IconKind::Genre],
    };
    let icons: Vec<_> = kinds.into_iter().flat_map(icons_of_kind).collect();
    data(icons)
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub name: String,
    pub kind: IconKind,
}

#[derive(Debug, Serialize)]
pub struct ResolvedIcon {
    pub name: String,
    pub kind: IconKind,
    /// The glyph, or the name unchanged when nothing matched.
    pub display: String,
    /// Canonical id of the matched entry.
    pub id: Option<&'static str>,
}

/// GET /api/v1/icons/resolve?name=&kind=
pub async fn resolve(Query(query): Query<ResolveQuery>) -> impl IntoResponse {
    let display = resolve_icon(&query.name, query.kind);
    let id = find_icon(&query.name, query.kind).map(|icon| icon.id);
    data(ResolvedIcon {
        name: query.name,
        kind: query.kind,
        display,
        id,
    })
}

#[derive(Debug, Deserialize)]
pub struct CanonicalizeRequest {
    pub kind: IconKind,
    pub names: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CanonicalIds {
    pub ids: Vec<String>,
}

/// POST /api/v1/icons/canonicalize
pub async fn canonicalize(Json(input): Json<CanonicalizeRequest>) -> AppResult<impl IntoResponse> {
    if input.names.len() > MAX_NAMES {
        return Err(AppError::BadRequest(format!(
            "At most {MAX_NAMES} names can be canonicalized at once"
        )));
    }
    let ids = to_canonical_ids(&input.names, input.kind);
    Ok(data(CanonicalIds { ids }))
}
