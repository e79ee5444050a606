use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// A checker's answer for one word.
///
/// On disk a verdict is `{ "is_correct": bool, "suggestions": [..] }` keyed by
/// its word, so `word` is not part of the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(default, skip_serializing)]
    pub word: String,
    pub is_correct: bool,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl Verdict {
    pub fn correct(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            is_correct: true,
            suggestions: Vec::new(),
        }
    }

    pub fn incorrect(word: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            word: word.into(),
            is_correct: false,
            suggestions,
        }
    }

    /// The `(false, [])` verdict used for every soft failure.
    pub fn negative(word: impl Into<String>) -> Self {
        Self::incorrect(word, Vec::new())
    }

    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }
}

/// Word -> verdict mapping with unique keys.
///
/// Keeps first-insertion order for reporting; re-inserting a word replaces
/// its verdict in place (last write wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerdictMap {
    entries: Vec<Verdict>,
    index: HashMap<String, usize>,
}

impl VerdictMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a verdict under its own word, returning the verdict it replaced.
    pub fn insert(&mut self, verdict: Verdict) -> Option<Verdict> {
        match self.index.get(&verdict.word) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], verdict)),
            None => {
                self.index.insert(verdict.word.clone(), self.entries.len());
                self.entries.push(verdict);
                None
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&Verdict> {
        self.index.get(word).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Verdict> {
        self.entries.iter()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|v| v.word.as_str())
    }

    pub fn stats(&self) -> VerdictStats {
        let correct = self.entries.iter().filter(|v| v.is_correct).count();
        VerdictStats {
            total: self.entries.len(),
            correct,
            incorrect: self.entries.len() - correct,
            with_suggestions: self.entries.iter().filter(|v| v.has_suggestions()).count(),
        }
    }
}

impl FromIterator<Verdict> for VerdictMap {
    fn from_iter<I: IntoIterator<Item = Verdict>>(iter: I) -> Self {
        let mut map = Self::new();
        for verdict in iter {
            map.insert(verdict);
        }
        map
    }
}

impl<'a> IntoIterator for &'a VerdictMap {
    type Item = &'a Verdict;
    type IntoIter = std::slice::Iter<'a, Verdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for VerdictMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for verdict in &self.entries {
            map.serialize_entry(&verdict.word, verdict)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VerdictMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VerdictMapVisitor;

        impl<'de> Visitor<'de> for VerdictMapVisitor {
            type Value = VerdictMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping words to {is_correct, suggestions}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<VerdictMap, A::Error> {
                let mut out = VerdictMap::new();
                while let Some((word, mut verdict)) = access.next_entry::<String, Verdict>()? {
                    verdict.word = word;
                    out.insert(verdict);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(VerdictMapVisitor)
    }
}

/// Descriptive counts over a set of verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictStats {
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub with_suggestions: usize,
}

impl VerdictStats {
    pub fn correct_percentage(&self) -> f64 {
        percentage(self.correct, self.total)
    }

    pub fn incorrect_percentage(&self) -> f64 {
        percentage(self.incorrect, self.total)
    }
}

pub(crate) fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = VerdictMap::new();
        map.insert(Verdict::correct("cjase"));
        map.insert(Verdict::negative("gjal"));
        let old = map.insert(Verdict::incorrect("cjase", vec!["cjasis".into()]));

        assert_eq!(old, Some(Verdict::correct("cjase")));
        assert_eq!(map.len(), 2);
        assert_eq!(map.words().collect::<Vec<_>>(), vec!["cjase", "gjal"]);
        assert!(!map.get("cjase").unwrap().is_correct);
    }

    #[test]
    fn test_json_shape_and_order() {
        let map: VerdictMap = vec![
            Verdict::negative("zeta"),
            Verdict::incorrect("gjerât", vec!["gjerâs".into()]),
            Verdict::correct("alfa"),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"zeta":{"is_correct":false,"suggestions":[]},"gjerât":{"is_correct":false,"suggestions":["gjerâs"]},"alfa":{"is_correct":true,"suggestions":[]}}"#
        );

        let back: VerdictMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
        assert_eq!(back.get("gjerât").unwrap().word, "gjerât");
    }

    #[test]
    fn test_missing_suggestions_default_to_empty() {
        let map: VerdictMap = serde_json::from_str(r#"{"cjar": {"is_correct": true}}"#).unwrap();
        assert_eq!(map.get("cjar"), Some(&Verdict::correct("cjar")));
    }

    #[test]
    fn test_stats() {
        let map: VerdictMap = vec![
            Verdict::correct("a"),
            Verdict::negative("b"),
            Verdict::incorrect("c", vec!["d".into()]),
        ]
        .into_iter()
        .collect();
        let stats = map.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.correct, 1);
        assert_eq!(stats.incorrect, 2);
        assert_eq!(stats.with_suggestions, 1);
        assert_eq!(VerdictStats::default().correct_percentage(), 0.0);
    }
}
