//! Server-side rendered pages.

use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};

use platzi_core::initial_state;

use crate::middleware::error::AppResult;
use crate::middleware::session::Session;
use crate::state::AppState;

/// GET /* - render the page for the request path.
///
/// Upstream failures degrade to the anonymous page inside
/// [`initial_state`]; a rendering failure is a 500.
pub async fn render_app(
    req: HttpRequest,
    state: web::Data<AppState>,
    session: Session,
) -> AppResult<HttpResponse> {
    let Session { token, user } = session;
    let preloaded = initial_state(state.api.as_ref(), token.as_deref(), user).await;

    let document = state.renderer.render(req.path(), &preloaded)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(document))
}
