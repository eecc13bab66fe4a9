//! Server-side rendering: page markup from Tera templates, wrapped in the
//! hydration document.

mod document;
mod manifest;
mod routes;

pub use manifest::{AssetPaths, Manifest};
pub use routes::Page;

use platzi_core::domain::PreloadedState;
use tera::{Context, Tera};

/// Templates are compiled into the binary.
const TEMPLATES: [(&str, &str); 10] = [
    ("document.html", include_str!("../../templates/document.html")),
    ("layout.html", include_str!("../../templates/layout.html")),
    ("macros.html", include_str!("../../templates/macros.html")),
    ("partials/header.html", include_str!("../../templates/partials/header.html")),
    ("partials/footer.html", include_str!("../../templates/partials/footer.html")),
    ("pages/home.html", include_str!("../../templates/pages/home.html")),
    ("pages/login.html", include_str!("../../templates/pages/login.html")),
    ("pages/register.html", include_str!("../../templates/pages/register.html")),
    ("pages/player.html", include_str!("../../templates/pages/player.html")),
    ("pages/not_found.html", include_str!("../../templates/pages/not_found.html")),
];

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Template rendering failed: {0}")]
    Template(#[from] tera::Error),

    #[error("State serialization failed: {0}")]
    State(#[from] serde_json::Error),
}

/// Renders request paths to complete HTML documents.
///
/// Built once at startup; every request renders from its own state.
pub struct Renderer {
    tera: Tera,
    assets: AssetPaths,
}

impl Renderer {
    pub fn new(assets: AssetPaths) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self { tera, assets })
    }

    /// Same templates with some replaced, to exercise failure paths.
    #[cfg(test)]
    pub fn with_overrides(
        assets: AssetPaths,
        overrides: Vec<(&str, &str)>,
    ) -> Result<Self, RenderError> {
        let mut renderer = Self::new(assets)?;
        renderer.tera.add_raw_templates(overrides)?;
        Ok(renderer)
    }

    pub fn assets(&self) -> &AssetPaths {
        &self.assets
    }

    /// Render the page for `path` and wrap it with the serialized state.
    pub fn render(&self, path: &str, state: &PreloadedState) -> Result<String, RenderError> {
        let page = Page::resolve(path, state.is_logged());
        let markup = self.render_page(&page, state)?;
        document::compose(&self.tera, &markup, state, &self.assets)
    }

    /// Markup of a single page, without the surrounding document.
    pub fn render_page(&self, page: &Page, state: &PreloadedState) -> Result<String, RenderError> {
        let mut ctx = Context::new();
        ctx.insert("state", state);

        let template = match page {
            Page::Player(id) => match state.find_movie(id) {
                Some(movie) => {
                    ctx.insert("movie", movie);
                    page.template()
                }
                None => Page::NotFound.template(),
            },
            _ => page.template(),
        };

        Ok(self.tera.render(template, &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platzi_core::domain::{Movie, SessionUser};
    use serde_json::json;

    fn movie(value: serde_json::Value) -> Movie {
        serde_json::from_value(value).unwrap()
    }

    fn renderer() -> Renderer {
        Renderer::new(AssetPaths::default()).unwrap()
    }

    fn signed_in_state() -> PreloadedState {
        PreloadedState {
            user: SessionUser {
                id: Some("u1".to_string()),
                email: Some("a@b.com".to_string()),
                name: Some("Ada".to_string()),
            },
            my_list: vec![movie(json!({ "id": "7", "title": "Mine", "cover": "http://img/7.jpg" }))],
            trends: vec![movie(json!({
                "id": "1",
                "title": "Notorious",
                "contentRating": "PG",
                "source": "http://video/1.mp4"
            }))],
            originals: vec![movie(json!({ "id": "2", "title": "Rope", "contentRating": "G" }))],
            ..PreloadedState::empty()
        }
    }

    #[test]
    fn test_all_templates_compile() {
        let renderer = renderer();
        for name in TEMPLATES.map(|(name, _)| name) {
            assert!(renderer.tera.get_template_names().any(|n| n == name), "{name} missing");
        }
    }

    #[test]
    fn test_home_lists_every_row() {
        let html = renderer().render_page(&Page::Home, &signed_in_state()).unwrap();
        assert!(html.contains("Mine"));
        assert!(html.contains("Notorious"));
        assert!(html.contains("Rope"));
        assert!(html.contains("Ada"));
    }

    #[test]
    fn test_home_tolerates_sparse_movies() {
        let state = PreloadedState {
            trends: vec![movie(json!({ "id": "1", "contentRating": "PG" }))],
            ..signed_in_state()
        };
        assert!(renderer().render_page(&Page::Home, &state).is_ok());
    }

    #[test]
    fn test_player_renders_known_movie() {
        let html = renderer()
            .render_page(&Page::Player("1".to_string()), &signed_in_state())
            .unwrap();
        assert!(html.contains("http:&#x2F;&#x2F;video&#x2F;1.mp4"));
    }

    #[test]
    fn test_player_for_unknown_movie_is_not_found() {
        let renderer = renderer();
        let state = signed_in_state();
        let player = renderer
            .render_page(&Page::Player("404".to_string()), &state)
            .unwrap();
        let not_found = renderer.render_page(&Page::NotFound, &state).unwrap();
        assert_eq!(player, not_found);
    }

    #[test]
    fn test_anonymous_root_renders_login() {
        let renderer = renderer();
        let state = PreloadedState::empty();
        let login = renderer.render_page(&Page::Login, &state).unwrap();
        let document = renderer.render("/", &state).unwrap();
        assert!(document.contains(&login));
    }

    #[test]
    fn test_movie_fields_are_escaped() {
        let state = PreloadedState {
            trends: vec![movie(json!({
                "id": "1",
                "title": "<img src=x onerror=alert(1)>",
                "contentRating": "PG"
            }))],
            ..signed_in_state()
        };
        let html = renderer().render_page(&Page::Home, &state).unwrap();
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x"));
    }
}
