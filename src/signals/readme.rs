/// README text prepared for case-insensitive keyword tests
#[derive(Debug, Clone)]
pub struct Readme {
    lowered: String,
    char_count: usize,
}

impl Readme {
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            lowered: text.to_lowercase(),
            char_count: text.chars().count(),
        }
    }

    /// Length of the original text in characters
    #[must_use]
    pub const fn len(&self) -> usize {
        self.char_count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    /// Whether the README contains `keyword`, which must be lowercase
    #[must_use]
    pub fn mentions(&self, keyword: &str) -> bool {
        self.lowered.contains(keyword)
    }

    #[must_use]
    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.mentions(k))
    }
}
