use url::form_urlencoded;

/// Query parameters of the course search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// The course title to search for.
    title: Option<String>,
    /// The selected category.
    category_id: Option<String>,
}

impl SearchQuery {
    /// Creates a new instance with the title.
    #[inline]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: non_empty(title.into()),
            category_id: None,
        }
    }

    /// Parses the query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut search = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "title" => search.title = non_empty(value.into_owned()),
                "categoryId" => search.category_id = non_empty(value.into_owned()),
                _ => {}
            }
        }
        search
    }

    /// Returns a copy with the title replaced.
    #[inline]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(title.into());
        self
    }

    /// Returns a copy with the category replaced.
    #[inline]
    pub fn with_category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = non_empty(category_id.into());
        self
    }

    /// Returns the title.
    #[inline]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the category id.
    #[inline]
    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    /// Formats the query as a URL on the path. Empty values are skipped.
    pub fn to_url(&self, path: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(category_id) = self.category_id() {
            serializer.append_pair("categoryId", category_id);
        }
        if let Some(title) = self.title() {
            serializer.append_pair("title", title);
        }
        let query = serializer.finish();
        if query.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{query}")
        }
    }
}

/// Returns `None` for a blank string.
fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
