use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use surf_core::string_error::ErrorStringExt;

use crate::RankRecord;

/// Number of suggestions returned by [`NameDataBase::matches`].
const MATCH_LIMIT: usize = 10;

/// The complete database, keyed by lowercased name.
#[derive(Debug, Default, Clone)]
pub struct NameDataBase {
    records: HashMap<String, RankRecord>,
}

/// A name matching a query, with the character indices that matched
/// (used to highlight them in the suggestion list).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatch {
    pub record: RankRecord,
    pub matched_indices: HashSet<usize>,
}

impl NameDataBase {
    /// Read and parse the whole database file. The first malformed
    /// line aborts the load, reporting its line number.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        log::debug!("reading database file {:?}", path);
        let raw = std::fs::read_to_string(path)
            .err_to_string(&format!("could not read database file {path:?}"))?;
        Self::from_string(&raw)
    }

    pub fn from_string(raw: &str) -> Result<Self, String> {
        let mut records = HashMap::new();
        for (line_no, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let record =
                RankRecord::from_line(line).err_to_string(&format!("line {}", line_no + 1))?;
            records.insert(record.name().to_owned(), record);
        }
        Ok(Self { records })
    }

    /// Case-blind exact lookup.
    pub fn find(&self, name: &str) -> Option<&RankRecord> {
        self.records.get(&name.to_lowercase())
    }

    /// Return the best matches for `query`, together with the matching
    /// character indices. A name matches if it contains every
    /// whitespace-separated word of the query.
    pub fn matches(&self, query: &str) -> Vec<NameMatch> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let contains_query = |record: &&RankRecord| {
            query
                .split_whitespace()
                .all(|word| record.name().contains(word))
        };
        let match_indices = |record: &RankRecord| {
            let mut indices = HashSet::new();
            for word in query.split_whitespace() {
                let start = record.name().find(word)?;
                indices.extend(start..start + word.len());
            }
            Some(NameMatch {
                record: record.clone(),
                matched_indices: indices,
            })
        };

        // Sort for a stable suggestion order; the map iterates randomly.
        let mut matched: Vec<&RankRecord> = self.records.values().filter(contains_query).collect();
        matched.sort_by(|a, b| a.name().cmp(b.name()));
        matched
            .into_iter()
            .take(MATCH_LIMIT)
            .filter_map(match_indices)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "\
Sam 58 69 99 131 168 236 278 380 467 408 466
Samantha 0 0 0 0 0 0 272 107 26 5 7
Emma 13 41 76 143 251 373 410 451 397 180 56

Aaron 193 208 218 274 279 232 132 36 32 31 41
";

    #[test]
    fn builds_database_from_raw_lines() {
        let db = NameDataBase::from_string(DATA).unwrap();
        assert_eq!(db.len(), 4);
    }

    #[test]
    fn lookup_is_case_blind() {
        let db = NameDataBase::from_string(DATA).unwrap();
        let record = db.find("EMMA").expect("emma should be present");
        assert_eq!(record.name(), "emma");
        assert_eq!(record.rank(0), 13);
        assert!(db.find("zilpha").is_none());
    }

    #[test]
    fn malformed_lines_report_their_line_number() {
        let err = NameDataBase::from_string("Sam 58 69\n").unwrap_err();
        assert!(err.contains("line 1"), "unexpected error: {err}");
    }

    #[test]
    fn matches_are_sorted_and_carry_indices() {
        let db = NameDataBase::from_string(DATA).unwrap();
        let matches = db.matches("sam");
        let names: Vec<_> = matches.iter().map(|m| m.record.name()).collect();
        assert_eq!(names, vec!["sam", "samantha"]);
        assert_eq!(matches[0].matched_indices, (0..3).collect::<HashSet<_>>());
        // Case folding applies to the query as well.
        assert_eq!(db.matches("SAM").len(), 2);
    }

    #[test]
    fn blank_queries_match_nothing() {
        let db = NameDataBase::from_string(DATA).unwrap();
        assert!(db.matches("").is_empty());
        assert!(db.matches("   ").is_empty());
    }
}
