use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// SQLite database file and its sidecars.
const DATABASE_SUFFIXES: &[&str] = &[".db", ".db-wal", ".db-shm", ".db-journal"];

/// Keep the database and dotfiles (`.env`, `.git`) out of the static site,
/// which by default is served from the working directory.
pub async fn hide_private_files(req: Request, next: Next) -> Response {
    if is_private_path(req.uri().path()) {
        warn!("Refused private path {}", req.uri().path());
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(req).await
}

pub fn is_private_path(path: &str) -> bool {
    // ServeDir percent-decodes, so an encoded leading dot counts too
    let path = path.to_ascii_lowercase().replace("%2e", ".");

    path.split('/').any(|segment| {
        (segment.starts_with('.') && segment != "." && segment != "..")
            || DATABASE_SUFFIXES.iter().any(|suffix| segment.ends_with(suffix))
    })
}
