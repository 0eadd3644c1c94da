use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use ferrous_blacklist_domain::LookupVerdict;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use tracing::instrument;

#[instrument(skip_all, fields(path = %uri.path()), name = "api_lookup")]
pub async fn lookup(State(state): State<AppState>, uri: Uri) -> Response {
    let verdict = match decode_path(uri.path()) {
        Some(path) => state.lookup.execute(&path),
        None => LookupVerdict::BadRequest,
    };
    verdict_response(verdict)
}

/// Percent-decodes a request path.
///
/// Returns `None` when an escape is not `%` followed by two hex digits, or
/// when the decoded bytes are not UTF-8.
pub fn decode_path(raw: &str) -> Option<Cow<'_, str>> {
    let well_formed = raw.split('%').skip(1).all(|escape| {
        escape
            .as_bytes()
            .get(..2)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    });
    if !well_formed {
        return None;
    }

    percent_decode_str(raw).decode_utf8().ok()
}

pub fn verdict_response(verdict: LookupVerdict) -> Response {
    let status = match verdict {
        LookupVerdict::Allowed => StatusCode::OK,
        LookupVerdict::BadRequest | LookupVerdict::Blacklisted => StatusCode::BAD_REQUEST,
    };
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        verdict.body(),
    )
        .into_response()
}
