use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One scraped search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<Extra>,
}

impl ResultRecord {
    pub fn new(url: String) -> Self {
        Self { url, extra: None }
    }

    pub fn is_enriched(&self) -> bool {
        self.extra.is_some()
    }
}

/// Details gathered from a result's own page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub owner: String,
    pub language_stats: LanguageStats,
}

/// Label to percentage mapping that keeps page order.
///
/// Serialized as a JSON object whose keys appear in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageStats {
    entries: Vec<(String, f64)>,
}

impl LanguageStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a label. A repeated label keeps its first position.
    pub fn insert(&mut self, label: String, percent: f64) {
        match self.entries.iter_mut().find(|entry| entry.0 == label) {
            Some(entry) => entry.1 = percent,
            None => self.entries.push((label, percent)),
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.0 == label)
            .map(|entry| entry.1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(label, percent)| (label.as_str(), *percent))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for LanguageStats {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut stats = LanguageStats::new();
        for (label, percent) in iter {
            stats.insert(label.into(), percent);
        }
        stats
    }
}

impl Serialize for LanguageStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, percent) in &self.entries {
            map.serialize_entry(label, percent)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LanguageStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatsVisitor;

        impl<'de> Visitor<'de> for StatsVisitor {
            type Value = LanguageStats;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of language labels to percentages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut stats = LanguageStats::new();
                while let Some((label, percent)) = access.next_entry::<String, f64>()? {
                    stats.insert(label, percent);
                }
                Ok(stats)
            }
        }

        deserializer.deserialize_map(StatsVisitor)
    }
}
