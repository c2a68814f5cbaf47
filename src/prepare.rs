use crate::definitions::DefinitionIndex;
use crate::escape::{escape, Dialect};
use crate::models::{Entry, PreparedRow, SqlValue, Table};
use crate::relations::{build_relations, RelationPolicy};
use anyhow::Result;
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct PrepareOptions {
    pub dialect: Dialect,
    pub relation_policy: RelationPolicy,
}

/// Escaped rows for all three tables of one conversion run.
#[derive(Debug, Default)]
pub struct PreparedTables {
    pub words: Vec<PreparedRow>,
    pub definitions: Vec<PreparedRow>,
    pub relations: Vec<PreparedRow>,
    pub duplicate_relations: usize,
}

impl PreparedTables {
    pub fn rows(&self, table: Table) -> &[PreparedRow] {
        match table {
            Table::Word => &self.words,
            Table::Definition => &self.definitions,
            Table::Relation => &self.relations,
        }
    }
}

pub fn prepare_tables(entries: &[Entry], options: &PrepareOptions) -> Result<PreparedTables> {
    let text = |s: &str| SqlValue::Text(escape(s, options.dialect).into_owned());

    let words = entries
        .iter()
        .map(|e| PreparedRow {
            table: Table::Word,
            values: vec![
                text(&e.letter),
                text(&e.word),
                text(&e.root),
                text(&e.literal),
                SqlValue::Int(e.id),
            ],
        })
        .collect();

    let index = DefinitionIndex::build(entries)?;
    let definitions = index
        .iter()
        .map(|(id, def)| PreparedRow {
            table: Table::Definition,
            values: vec![SqlValue::Int(id), text(def)],
        })
        .collect();

    let relations = build_relations(entries, &index, options.relation_policy)?;
    let duplicate_relations = relations.duplicates;
    let relations: Vec<PreparedRow> = relations
        .triples
        .into_iter()
        .map(|t| PreparedRow {
            table: Table::Relation,
            values: vec![
                SqlValue::Int(t.word_id),
                SqlValue::Int(t.definition_id),
                text(&t.relation_type),
            ],
        })
        .collect();

    let tables = PreparedTables {
        words,
        definitions,
        relations,
        duplicate_relations,
    };

    info!(
        words = tables.words.len(),
        definitions = tables.definitions.len(),
        relations = tables.relations.len(),
        "Tables prepared"
    );

    Ok(tables)
}
