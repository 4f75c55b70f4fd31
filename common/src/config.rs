//! Fixed configuration shared by the admin console and the card browser.
//!
//! The site has no runtime configuration: every knob is a compile-time
//! constant here.

/// Base path of the admin HTTP API and of the admin page itself.
pub const ADMIN_API_PATH: &str = "/admin";

/// Records shown per page in the admin list.
pub const PAGE_SIZE: usize = 10;

/// Quiet period after the last keystroke before the search filter runs.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// How long a toast notification stays on screen.
pub const TOAST_MS: u32 = 3000;

/// Record types offered when `/admin/tables` cannot be loaded.
pub const PLACEHOLDER_RECORD_TYPES: [&str; 4] = ["delusions", "thoughts", "interests", "passions"];

/// Header and sub-header of a public card section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTitle {
    pub header: &'static str,
    pub subheader: &'static str,
}

const SECTION_TITLES: [(&str, SectionTitle); 4] = [
    (
        "thoughts",
        SectionTitle {
            header: "Thoughts",
            subheader: "Try and keep up with the random thoughts that invade my head and lead to the randomness that ensues.",
        },
    ),
    (
        "passions",
        SectionTitle {
            header: "Passions",
            subheader: "Things I'm passionate about and enjoy doing.",
        },
    ),
    (
        "delusions",
        SectionTitle {
            header: "Delusions",
            subheader: "Wild ideas and concepts that may or may not be realistic.",
        },
    ),
    (
        "interests",
        SectionTitle {
            header: "Interests",
            subheader: "Topics and subjects that catch my attention.",
        },
    ),
];

/// Looks up the configured title of a card section, if the type has one.
pub fn section_title(record_type: &str) -> Option<SectionTitle> {
    SECTION_TITLES
        .iter()
        .find(|(name, _)| *name == record_type)
        .map(|(_, title)| *title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_sections_have_titles() {
        for name in PLACEHOLDER_RECORD_TYPES {
            assert!(section_title(name).is_some(), "{name} has no title");
        }
        assert_eq!(section_title("passions").map(|t| t.header), Some("Passions"));
    }

    #[test]
    fn unknown_section_has_no_title() {
        assert_eq!(section_title("recipes"), None);
    }
}
