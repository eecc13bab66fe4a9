//! The HTML document wrapping rendered markup and hydration state.

use platzi_core::domain::PreloadedState;
use tera::{Context, Tera};

use super::{AssetPaths, RenderError};

/// JSON for `window.__PRELOADED_STATE__`.
///
/// Every `<` is written as `\u003c` so no string inside the state can
/// close the surrounding `<script>` element.
pub fn serialize_state(state: &PreloadedState) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(state)?.replace('<', "\\u003c"))
}

/// Embed markup, state and asset references in the document skeleton.
/// The markup is trusted as produced by the renderer and is not escaped.
pub fn compose(
    tera: &Tera,
    html: &str,
    state: &PreloadedState,
    assets: &AssetPaths,
) -> Result<String, RenderError> {
    let mut ctx = Context::new();
    ctx.insert("html", html);
    ctx.insert("preloaded_state", &serialize_state(state)?);
    ctx.insert("assets", assets);
    Ok(tera.render("document.html", &ctx)?)
}
