//! Project record data structure.

/// A single display-ready project entry in the vault.
///
/// Records are parsed once at startup and never mutated; the ordered
/// list they appear in defines both display order and carousel wrap order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    /// Display label for the record (e.g., "01", not necessarily numeric)
    pub index: String,
    /// Project title
    pub title: String,
    /// One-line tagline shown under the title
    pub tagline: String,
    /// Longer description body
    pub blurb: String,
    /// Difficulty chip (e.g., "LOW", "HIGH")
    pub difficulty: String,
    /// Tech chip (e.g., "C++", "Python")
    pub tech: String,
    /// Relative navigation target, if the project can be opened
    pub link: Option<String>,
    /// Command text echoed into the log before navigating
    pub cmd: Option<String>,
}

impl ProjectRecord {
    /// Creates a record with empty optional fields.
    #[must_use]
    pub fn new(index: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            title: title.into(),
            tagline: String::new(),
            blurb: String::new(),
            difficulty: String::new(),
            tech: String::new(),
            link: None,
            cmd: None,
        }
    }

    /// The footer path shown for this record: `"./" + link`, or empty
    /// when the record has no navigation target.
    #[must_use]
    pub fn footer_path(&self) -> String {
        match &self.link {
            Some(link) if !link.is_empty() => format!("./{link}"),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_path_with_link() {
        let mut record = ProjectRecord::new("01", "2048");
        record.link = Some("projects/2048".to_string());
        assert_eq!(record.footer_path(), "./projects/2048");
    }

    #[test]
    fn test_footer_path_without_link() {
        let record = ProjectRecord::new("01", "2048");
        assert_eq!(record.footer_path(), "");
    }

    #[test]
    fn test_footer_path_empty_link() {
        let mut record = ProjectRecord::new("01", "2048");
        record.link = Some(String::new());
        assert_eq!(record.footer_path(), "");
    }
}
