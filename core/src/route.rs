use crate::catalog::EntryId;

pub const CASE_STUDY_PREFIX: &str = "/case-studies/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    CaseStudy(EntryId),
    NotFound,
}

impl Route {
    /// Maps a URL path (no query or hash) to a route. A single trailing slash
    /// is ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Route::Home;
        }
        let path = path.strip_suffix('/').unwrap_or(path);
        let Some(slug) = path.strip_prefix(CASE_STUDY_PREFIX) else {
            return Route::NotFound;
        };
        if slug.contains('/') {
            return Route::NotFound;
        }
        EntryId::parse(slug)
            .map(Route::CaseStudy)
            .unwrap_or(Route::NotFound)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "/".to_string(),
            Route::CaseStudy(id) => format!("{CASE_STUDY_PREFIX}{}", id.slug()),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Home => "Yazhen · Product Design".to_string(),
            Route::CaseStudy(id) => format!("{} · Yazhen", id.entry().title),
            Route::NotFound => "Not found · Yazhen".to_string(),
        }
    }
}
