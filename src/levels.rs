//! Fixed, ordered topology levels and the line filter derived from them.

use itertools::Itertools;
use regex::Regex;

/// Ordered set of topology level names. Rank 0 is the root level.
///
/// The order is static for the lifetime of a schema instance and defines both
/// the grouping of flat pair records and the root-to-leaf order of id-paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSchema {
    levels: Vec<String>,
}

impl LevelSchema {
    pub fn new<S: AsRef<str>>(levels: &[S]) -> Self {
        Self {
            levels: levels.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// The canonical /proc/cpuinfo schema: package -> core -> logical processor.
    pub fn cpu() -> Self {
        Self::new(&["physical id", "core id", "processor"])
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Rank of a level name within the hierarchy, 0 = root level.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.levels.iter().position(|level| level == name)
    }

    /// Anchored alternation matching lines that start with any level name.
    pub fn filter(&self) -> Regex {
        let pattern = format!(
            "^({})",
            self.levels.iter().map(|level| regex::escape(level)).join("|")
        );
        // Escaped literals joined by "|" always compile.
        Regex::new(&pattern).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_cpu_schema_when_ranking_then_follows_hierarchy_order() {
        let schema = LevelSchema::cpu();

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.rank("physical id"), Some(0));
        assert_eq!(schema.rank("core id"), Some(1));
        assert_eq!(schema.rank("processor"), Some(2));
        assert_eq!(schema.rank("model name"), None);
    }

    #[test]
    fn given_cpu_schema_when_filtering_then_matches_level_prefixes_only() {
        let filter = LevelSchema::cpu().filter();

        assert!(filter.is_match("processor\t: 0"));
        assert!(filter.is_match("core id\t\t: 1"));
        assert!(filter.is_match("physical id\t: 0"));
        assert!(!filter.is_match("model name\t: Example CPU"));
        assert!(!filter.is_match("\tprocessor: 0"));
    }
}
