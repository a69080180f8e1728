//! Lexical semantic database.
//!
//! A lexicon maps surface words to senses; each sense exposes its synonym
//! set (lemmas), its more-specific senses (hyponyms) and a similarity
//! score between two senses. The built-in implementation is an in-memory
//! sense table loaded from a JSON file, with Wu-Palmer similarity
//! computed from hypernym depths.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use censor_core::{Error, Result};

/// One sense: a synonym set plus its position in the specialization
/// hierarchy. Sense ids are opaque strings (e.g. `cat.n.01`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sense {
    pub id: String,
    #[serde(default)]
    pub lemmas: Vec<String>,
    #[serde(default)]
    pub hypernyms: Vec<String>,
    #[serde(default)]
    pub hyponyms: Vec<String>,
}

/// Interface the concept expander consumes. Implementations must be
/// read-only after construction; one lexicon is shared by every document
/// in a run.
pub trait Lexicon {
    /// Sense ids whose synonym set contains `word` (case-folded).
    fn senses(&self, word: &str) -> Vec<String>;

    /// Synonyms of a sense. Unknown ids yield an empty set.
    fn lemmas(&self, sense: &str) -> Vec<String>;

    /// More-specific senses of a sense.
    fn hyponyms(&self, sense: &str) -> Vec<String>;

    /// Semantic similarity between two senses, in `[0, 1]`.
    fn similarity(&self, a: &str, b: &str) -> f64;
}

/// In-memory lexicon. The default (empty) lexicon makes concept
/// expansion degrade to literal stem matching.
#[derive(Debug, Clone, Default)]
pub struct MemoryLexicon {
    senses: HashMap<String, Sense>,
    by_lemma: HashMap<String, Vec<String>>,
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_senses(senses: Vec<Sense>) -> Self {
        let mut table = HashMap::with_capacity(senses.len());
        let mut by_lemma: HashMap<String, Vec<String>> = HashMap::new();
        for sense in senses {
            for lemma in &sense.lemmas {
                by_lemma
                    .entry(lemma.to_lowercase())
                    .or_default()
                    .push(sense.id.clone());
            }
            table.insert(sense.id.clone(), sense);
        }
        Self {
            senses: table,
            by_lemma,
        }
    }

    /// Load a sense table from a JSON file (an array of senses). Failure
    /// here is fatal for the run: the caller asked for semantic expansion
    /// and no database is available.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::DetectorUnavailable(format!("cannot read lexicon {}: {}", path.display(), e))
        })?;
        let senses: Vec<Sense> = serde_json::from_str(&content).map_err(|e| {
            Error::DetectorUnavailable(format!("cannot parse lexicon {}: {}", path.display(), e))
        })?;
        Ok(Self::from_senses(senses))
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Depth of a sense: longest hypernym path to a root, roots at 1.
    fn depth(&self, id: &str) -> usize {
        let mut seen = HashSet::new();
        self.depth_inner(id, &mut seen)
    }

    fn depth_inner(&self, id: &str, seen: &mut HashSet<String>) -> usize {
        if !seen.insert(id.to_string()) {
            // hypernym cycle in the data; treat as a root
            return 1;
        }
        let depth = match self.senses.get(id) {
            Some(sense) => {
                sense
                    .hypernyms
                    .iter()
                    .map(|h| self.depth_inner(h, seen))
                    .max()
                    .unwrap_or(0)
                    + 1
            }
            None => 1,
        };
        seen.remove(id);
        depth
    }

    /// All hypernym ancestors of a sense, including the sense itself.
    fn ancestors(&self, id: &str) -> HashSet<String> {
        let mut out = HashSet::new();
        let mut queue = vec![id.to_string()];
        while let Some(current) = queue.pop() {
            if !out.insert(current.clone()) {
                continue;
            }
            if let Some(sense) = self.senses.get(&current) {
                queue.extend(sense.hypernyms.iter().cloned());
            }
        }
        out
    }
}

impl Lexicon for MemoryLexicon {
    fn senses(&self, word: &str) -> Vec<String> {
        self.by_lemma
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    fn lemmas(&self, sense: &str) -> Vec<String> {
        self.senses
            .get(sense)
            .map(|s| s.lemmas.clone())
            .unwrap_or_default()
    }

    fn hyponyms(&self, sense: &str) -> Vec<String> {
        self.senses
            .get(sense)
            .map(|s| s.hyponyms.clone())
            .unwrap_or_default()
    }

    /// Wu-Palmer: `2 * depth(lcs) / (depth(a) + depth(b))` where lcs is
    /// the deepest common ancestor.
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        if !self.senses.contains_key(a) || !self.senses.contains_key(b) {
            return 0.0;
        }
        let ancestors_a = self.ancestors(a);
        let ancestors_b = self.ancestors(b);
        let lcs_depth = ancestors_a
            .intersection(&ancestors_b)
            .map(|c| self.depth(c))
            .max();
        match lcs_depth {
            Some(lcs) => (2 * lcs) as f64 / (self.depth(a) + self.depth(b)) as f64,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sense(id: &str, lemmas: &[&str], hypernyms: &[&str], hyponyms: &[&str]) -> Sense {
        Sense {
            id: id.to_string(),
            lemmas: lemmas.iter().map(|s| s.to_string()).collect(),
            hypernyms: hypernyms.iter().map(|s| s.to_string()).collect(),
            hyponyms: hyponyms.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn cat_lexicon() -> MemoryLexicon {
        MemoryLexicon::from_senses(vec![
            sense("animal.n.01", &["animal"], &[], &["feline.n.01"]),
            sense(
                "feline.n.01",
                &["feline"],
                &["animal.n.01"],
                &["cat.n.01"],
            ),
            sense(
                "cat.n.01",
                &["cat", "true_cat"],
                &["feline.n.01"],
                &["domestic_cat.n.01", "wildcat.n.03"],
            ),
            sense(
                "domestic_cat.n.01",
                &["domestic_cat", "house_cat"],
                &["cat.n.01"],
                &[],
            ),
            sense("wildcat.n.03", &["wildcat"], &["cat.n.01"], &[]),
        ])
    }

    #[test]
    fn test_word_to_senses() {
        let lexicon = cat_lexicon();
        assert_eq!(lexicon.senses("cat"), vec!["cat.n.01".to_string()]);
        assert_eq!(lexicon.senses("CAT"), vec!["cat.n.01".to_string()]);
        assert!(lexicon.senses("rocket").is_empty());
    }

    #[test]
    fn test_similarity_identity() {
        let lexicon = cat_lexicon();
        assert_eq!(lexicon.similarity("cat.n.01", "cat.n.01"), 1.0);
    }

    #[test]
    fn test_similarity_parent_child() {
        let lexicon = cat_lexicon();
        // depth(cat) = 3, depth(domestic_cat) = 4, lcs = cat (3)
        let sim = lexicon.similarity("cat.n.01", "domestic_cat.n.01");
        assert!((sim - 6.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_siblings() {
        let lexicon = cat_lexicon();
        // lcs of the two cat children is cat itself (depth 3), both at 4
        let sim = lexicon.similarity("domestic_cat.n.01", "wildcat.n.03");
        assert!((sim - 6.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_similarity_unknown_sense() {
        let lexicon = cat_lexicon();
        assert_eq!(lexicon.similarity("cat.n.01", "nope.n.01"), 0.0);
    }

    #[test]
    fn test_load_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(
            &path,
            r#"[{"id": "cat.n.01", "lemmas": ["cat", "feline"]}]"#,
        )
        .unwrap();

        let lexicon = MemoryLexicon::load(&path).unwrap();
        assert_eq!(lexicon.senses("feline"), vec!["cat.n.01".to_string()]);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        std::fs::write(&path, "not json").unwrap();

        let err = MemoryLexicon::load(&path).unwrap_err();
        assert!(matches!(err, Error::DetectorUnavailable(_)));
    }

    #[test]
    fn test_empty_lexicon() {
        let lexicon = MemoryLexicon::new();
        assert!(lexicon.is_empty());
        assert!(lexicon.senses("anything").is_empty());
        assert_eq!(lexicon.similarity("a", "b"), 0.0);
    }
}
