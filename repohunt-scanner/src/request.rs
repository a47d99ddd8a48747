use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// Search category sent as the `type` query parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SearchType {
    Repositories,
    Issues,
    Wikis,
    /// Any other discriminator, forwarded to the site unchanged
    Other(String),
}

impl SearchType {
    /// Only repository results have a detail page with language stats
    pub fn supports_enrichment(&self) -> bool {
        matches!(self, SearchType::Repositories)
    }

    pub fn as_str(&self) -> &str {
        match self {
            SearchType::Repositories => "Repositories",
            SearchType::Issues => "Issues",
            SearchType::Wikis => "Wikis",
            SearchType::Other(raw) => raw,
        }
    }
}

impl From<String> for SearchType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Repositories" => SearchType::Repositories,
            "Issues" => SearchType::Issues,
            "Wikis" => SearchType::Wikis,
            _ => SearchType::Other(raw),
        }
    }
}

impl From<&str> for SearchType {
    fn from(raw: &str) -> Self {
        SearchType::from(raw.to_string())
    }
}

impl From<SearchType> for String {
    fn from(search_type: SearchType) -> Self {
        search_type.as_str().to_string()
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keywords plus optional category for a single search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    keywords: Vec<String>,
    search_type: Option<SearchType>,
}

impl SearchRequest {
    pub fn new(keywords: Vec<String>, search_type: Option<SearchType>) -> Result<Self> {
        if keywords.is_empty() {
            return Err(ScanError::EmptyKeywords);
        }
        Ok(Self {
            keywords,
            search_type,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn search_type(&self) -> Option<&SearchType> {
        self.search_type.as_ref()
    }
}

/// Build the search URL for `request` under `base`.
///
/// Keywords are joined with a literal `+` and nothing is percent-encoded:
/// `https://github.com/search?q=openstack+nova+css&type=Repositories`
pub fn encode_request(base: &str, request: &SearchRequest) -> String {
    let mut url = format!(
        "{}/search?q={}",
        base.trim_end_matches('/'),
        request.keywords.join("+")
    );

    if let Some(search_type) = &request.search_type {
        url.push_str("&type=");
        url.push_str(search_type.as_str());
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_encode_repositories() {
        let request = SearchRequest::new(
            keywords(&["openstack", "nova", "css"]),
            Some(SearchType::Repositories),
        )
        .unwrap();

        assert_eq!(
            encode_request(DEFAULT_BASE_URL, &request),
            "https://github.com/search?q=openstack+nova+css&type=Repositories"
        );
    }

    #[test]
    fn test_encode_issues() {
        let request = SearchRequest::new(
            keywords(&["python", "django-rest-framework", "jwt"]),
            Some(SearchType::Issues),
        )
        .unwrap();

        assert_eq!(
            encode_request(DEFAULT_BASE_URL, &request),
            "https://github.com/search?q=python+django-rest-framework+jwt&type=Issues"
        );
    }

    #[test]
    fn test_encode_without_type() {
        let request = SearchRequest::new(keywords(&["openstack", "nova", "css"]), None).unwrap();

        assert_eq!(
            encode_request(DEFAULT_BASE_URL, &request),
            "https://github.com/search?q=openstack+nova+css"
        );
    }

    #[test]
    fn test_encode_keeps_keyword_order() {
        let forward = SearchRequest::new(keywords(&["a", "b"]), None).unwrap();
        let reversed = SearchRequest::new(keywords(&["b", "a"]), None).unwrap();

        assert_ne!(
            encode_request(DEFAULT_BASE_URL, &forward),
            encode_request(DEFAULT_BASE_URL, &reversed)
        );
    }

    #[test]
    fn test_encode_does_not_escape() {
        let request =
            SearchRequest::new(keywords(&["c++", "a&b"]), Some("Code".into())).unwrap();

        assert_eq!(
            encode_request("http://localhost:8080/", &request),
            "http://localhost:8080/search?q=c+++a&b&type=Code"
        );
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let result = SearchRequest::new(Vec::new(), None);
        assert!(matches!(result, Err(ScanError::EmptyKeywords)));
    }

    #[test]
    fn test_search_type_from_string() {
        assert_eq!(SearchType::from("Repositories"), SearchType::Repositories);
        assert_eq!(SearchType::from("Wikis"), SearchType::Wikis);
        assert_eq!(
            SearchType::from("repositories"),
            SearchType::Other("repositories".to_string())
        );
    }

    #[test]
    fn test_only_repositories_support_enrichment() {
        assert!(SearchType::Repositories.supports_enrichment());
        assert!(!SearchType::Issues.supports_enrichment());
        assert!(!SearchType::Wikis.supports_enrichment());
        assert!(!SearchType::from("Users").supports_enrichment());
    }

    #[test]
    fn test_search_type_serde() {
        let parsed: SearchType = serde_json::from_str("\"Commits\"").unwrap();
        assert_eq!(parsed, SearchType::Other("Commits".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Commits\"");
    }
}
