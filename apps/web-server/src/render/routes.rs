//! Page routing for server-side rendering.

/// A renderable page, resolved from the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
    Register,
    Player(String),
    NotFound,
}

impl Page {
    /// Pick the page for `path`. Pages behind sign-in fall back to Login
    /// for anonymous visitors.
    pub fn resolve(path: &str, is_logged: bool) -> Self {
        let trimmed = path.trim_end_matches('/');
        let page = match trimmed {
            "" => Page::Home,
            "/login" => Page::Login,
            "/register" => Page::Register,
            _ => match trimmed.strip_prefix("/player/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Page::Player(id.to_string()),
                _ => Page::NotFound,
            },
        };

        match page {
            Page::Home | Page::Player(_) if !is_logged => Page::Login,
            page => page,
        }
    }

    pub fn template(&self) -> &'static str {
        match self {
            Page::Home => "pages/home.html",
            Page::Login => "pages/login.html",
            Page::Register => "pages/register.html",
            Page::Player(_) => "pages/player.html",
            Page::NotFound => "pages/not_found.html",
        }
    }
}
