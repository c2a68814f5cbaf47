use crate::models::Table;
use serde::Serialize;

/// Counters collected during one conversion run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub entries_read: u64,
    pub words: u64,
    pub definitions: u64,
    pub relations: u64,
    pub duplicate_relations: u64,
    pub word_statements: u64,
    pub definition_statements: u64,
    pub relation_statements: u64,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rows(&mut self, table: Table, count: usize) {
        let count = count as u64;
        match table {
            Table::Word => self.words = count,
            Table::Definition => self.definitions = count,
            Table::Relation => self.relations = count,
        }
    }

    pub fn add_statements(&mut self, table: Table, count: usize) {
        let count = count as u64;
        match table {
            Table::Word => self.word_statements += count,
            Table::Definition => self.definition_statements += count,
            Table::Relation => self.relation_statements += count,
        }
    }

    pub fn statements(&self, table: Table) -> u64 {
        match table {
            Table::Word => self.word_statements,
            Table::Definition => self.definition_statements,
            Table::Relation => self.relation_statements,
        }
    }

    pub fn total_statements(&self) -> u64 {
        Table::ALL.iter().map(|t| self.statements(*t)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_zero() {
        let stats = ConversionStats::new();
        assert_eq!((stats.words, stats.definitions, stats.relations), (0, 0, 0));
        for table in Table::ALL {
            assert_eq!(stats.statements(table), 0);
        }
        assert_eq!(stats.total_statements(), 0);
    }

    #[test]
    fn statements_accumulate_per_table() {
        let mut stats = ConversionStats::new();
        stats.add_statements(Table::Word, 2);
        stats.add_statements(Table::Word, 1);
        stats.add_statements(Table::Relation, 4);
        assert_eq!(stats.statements(Table::Word), 3);
        assert_eq!(stats.statements(Table::Definition), 0);
        assert_eq!(stats.statements(Table::Relation), 4);
        assert_eq!(stats.total_statements(), 7);
    }

    #[test]
    fn set_rows_overwrites() {
        let mut stats = ConversionStats::new();
        stats.set_rows(Table::Definition, 10);
        stats.set_rows(Table::Definition, 12);
        assert_eq!(stats.definitions, 12);
    }

    #[test]
    fn serializes_to_json() {
        let mut stats = ConversionStats::new();
        stats.set_rows(Table::Word, 5);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["words"], 5);
        assert_eq!(json["duplicate_relations"], 0);
    }
}
