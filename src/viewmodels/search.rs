use super::games::GameItemViewModel;

/// Live title search over the loaded library.
#[derive(Clone, Debug, Default)]
pub struct SearchViewModel {
    query: String,
    results: Vec<GameItemViewModel>,
}

impl SearchViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[GameItemViewModel] {
        &self.results
    }

    pub fn set_query(&mut self, query: &str, library: &[GameItemViewModel]) {
        self.query = query.to_string();
        self.refresh(library);
    }

    pub fn push_str(&mut self, text: &str, library: &[GameItemViewModel]) {
        self.query.push_str(text);
        self.refresh(library);
    }

    /// Remove the last character. Returns false if the query was empty.
    pub fn pop_char(&mut self, library: &[GameItemViewModel]) -> bool {
        let popped = self.query.pop().is_some();
        if popped {
            self.refresh(library);
        }
        popped
    }

    fn refresh(&mut self, library: &[GameItemViewModel]) {
        let needle = self.query.trim().to_lowercase();
        self.results = if needle.is_empty() {
            Vec::new()
        } else {
            library
                .iter()
                .filter(|g| {
                    g.display_title.to_lowercase().contains(&needle)
                        || g.full_title.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect()
        };
    }
}
