mod logic;
mod ui;

use ranks_db::RankRecord;

/// The chart state: the list of currently displayed entries, in
/// insertion order. Drawing happens in `ui.rs`, the geometry lives in
/// `logic.rs`.
pub struct Graph {
    entries: Vec<RankRecord>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry to the display list. A name that is already shown
    /// is not added twice.
    pub fn add_entry(&mut self, entry: RankRecord) {
        if self
            .entries
            .iter()
            .any(|shown| shown.name() == entry.name())
        {
            log::debug!("'{}' is already displayed", entry.name());
            return;
        }
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn displayed_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> RankRecord {
        RankRecord::from_line(line).unwrap()
    }

    #[test]
    fn entries_are_deduplicated_by_name() {
        let mut graph = Graph::new();
        graph.add_entry(record("Sam 58 69 99 131 168 236 278 380 467 408 466"));
        graph.add_entry(record("SAM 58 69 99 131 168 236 278 380 467 408 466"));
        graph.add_entry(record("Emma 13 41 76 143 251 373 410 451 397 180 56"));
        let names: Vec<_> = graph.displayed_names().collect();
        assert_eq!(names, vec!["sam", "emma"]);
    }

    #[test]
    fn clear_empties_the_display_list() {
        let mut graph = Graph::new();
        graph.add_entry(record("Sam 58 69 99 131 168 236 278 380 467 408 466"));
        graph.clear();
        assert_eq!(graph.displayed_names().count(), 0);
    }
}
