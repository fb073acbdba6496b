//! All API endpoint setup

use axum::Router;
use axum::routing::MethodRouter;
use axum::routing::get;

pub use request::Form;
pub use request::PathParameters;
pub use request::parse_note_id;
pub use response::Error;
pub use response::Success;

use crate::root::unknown_endpoint;

mod notes;
mod request;
mod response;

/// Get the Axum router for all API routes
///
/// Every path also answers with a trailing slash. Known paths with an
/// unsupported method end up at the unknown endpoint fallback as well
pub fn router() -> Router {
    Router::new()
        .route("/notes", notes_routes())
        .route("/notes/", notes_routes())
        .route("/notes/{note}", note_routes())
        .route("/notes/{note}/", note_routes())
}

fn notes_routes() -> MethodRouter {
    get(notes::list)
        .post(notes::create)
        .fallback(unknown_endpoint)
}

fn note_routes() -> MethodRouter {
    get(notes::single)
        .delete(notes::delete)
        .fallback(unknown_endpoint)
}
