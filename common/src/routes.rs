use crate::config::ADMIN_API_PATH;
use crate::model::record_type::RecordType;

/// Which root component a page path mounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Admin,
    Cards(RecordType),
    NotFound,
}

impl Page {
    /// `/admin[/...]` is the console, `/{type}[/]` a card section. The
    /// server-rendered tale pages (`/{type}/Tales/...`) are not mounted here.
    pub fn from_path(path: &str) -> Page {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [first, ..] if *first == ADMIN_API_PATH.trim_start_matches('/') => Page::Admin,
            [section] => Page::Cards(RecordType::new(*section)),
            _ => Page::NotFound,
        }
    }
}
