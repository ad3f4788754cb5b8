#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Articles,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Articles => "/articles",
        }
    }

    /// Unknown paths fall back to the login screen.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
        match path.trim_end_matches('/') {
            "/articles" | "articles" => Route::Articles,
            _ => Route::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/articles"), Route::Articles);
        assert_eq!(Route::from_path("/articles/"), Route::Articles);
        assert_eq!(Route::from_path("/articles?x=1"), Route::Articles);
    }

    #[test]
    fn unknown_path_is_login() {
        assert_eq!(Route::from_path("/settings"), Route::Login);
        assert_eq!(Route::from_path("/articles/12"), Route::Login);
    }

    #[test]
    fn path_round_trips() {
        for route in [Route::Login, Route::Articles] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }
}
