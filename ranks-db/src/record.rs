use std::fmt;

use surf_core::string_error::ErrorStringExt;

use crate::{MAX_RANK, NUM_DECADES};

/// A single database entry: a name and its popularity rank for each
/// decade. Rank 0 means the name did not make the chart that decade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankRecord {
    name: String,
    ranks: [u16; NUM_DECADES],
}

impl RankRecord {
    /// Parse a record from a database line. The name is folded to
    /// lowercase, matching the case-blind lookup of the database.
    pub fn from_line(line: &str) -> Result<Self, String> {
        let mut tokens = line.split_whitespace();
        let name = match tokens.next() {
            Some(token) => token.to_lowercase(),
            None => return Err("line holds no name".into()),
        };

        let mut ranks = [0u16; NUM_DECADES];
        for (i, slot) in ranks.iter_mut().enumerate() {
            let token = tokens
                .next()
                .ok_or_else(|| format!("'{name}': expected {NUM_DECADES} ranks, found {i}"))?;
            let rank: u16 = token
                .parse()
                .err_to_string(&format!("'{name}': rank {} is not a number", i + 1))?;
            if rank > MAX_RANK {
                return Err(format!("'{name}': rank {rank} exceeds {MAX_RANK}"));
            }
            *slot = rank;
        }
        if let Some(extra) = tokens.next() {
            return Err(format!(
                "'{name}': surplus token '{extra}' after {NUM_DECADES} ranks"
            ));
        }

        Ok(Self { name, ranks })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rank in decade `index` (0 = 1900). Out-of-range indices read as
    /// unranked.
    pub fn rank(&self, index: usize) -> u16 {
        self.ranks.get(index).copied().unwrap_or(0)
    }

    pub fn ranks(&self) -> &[u16; NUM_DECADES] {
        &self.ranks
    }
}

impl fmt::Display for RankRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        for rank in self.ranks.iter() {
            write!(f, " {rank}")?;
        }
        write!(f, " ]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "Sam 58 69 99 131 168 236 278 380 467 408 466";

    #[test]
    fn parses_a_database_line() {
        let record = RankRecord::from_line(LINE).unwrap();
        assert_eq!(record.name(), "sam");
        assert_eq!(record.rank(0), 58);
        assert_eq!(record.rank(10), 466);
    }

    #[test]
    fn name_is_folded_to_lowercase() {
        let record = RankRecord::from_line("DeShawn 0 0 0 0 0 0 0 0 0 333 415").unwrap();
        assert_eq!(record.name(), "deshawn");
    }

    #[test]
    fn out_of_range_decades_read_as_unranked() {
        let record = RankRecord::from_line(LINE).unwrap();
        assert_eq!(record.rank(11), 0);
    }

    #[test]
    fn rejects_missing_ranks() {
        assert!(RankRecord::from_line("Sam 58 69").is_err());
        assert!(RankRecord::from_line("").is_err());
    }

    #[test]
    fn rejects_surplus_tokens() {
        let line = format!("{LINE} 7");
        assert!(RankRecord::from_line(&line).is_err());
    }

    #[test]
    fn rejects_junk_ranks() {
        assert!(RankRecord::from_line("Sam 58 69 99 131 168 236 278 380 467 408 x").is_err());
        // 1001 is off the chart.
        assert!(RankRecord::from_line("Sam 1001 69 99 131 168 236 278 380 467 408 466").is_err());
    }

    #[test]
    fn display_matches_the_database_format() {
        let record = RankRecord::from_line("Kim 0 0 0 0 0 415 319 256 255 374 378").unwrap();
        assert_eq!(
            record.to_string(),
            "kim [ 0 0 0 0 0 415 319 256 255 374 378 ]"
        );
    }
}
