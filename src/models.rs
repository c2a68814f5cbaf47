use serde::Deserialize;

/// One headword record of the parsed corpus.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub letter: String,
    pub word: String,
    pub root: String,
    pub literal: String,
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(rename = "type", default)]
    pub relation_type: Option<String>,
}

impl Definition {
    pub fn new(definition: impl Into<String>, relation_type: Option<&str>) -> Self {
        Self {
            definition: definition.into(),
            relation_type: relation_type.map(str::to_string),
        }
    }

    /// The tag, or `None` when absent or empty.
    pub fn tag(&self) -> Option<&str> {
        self.relation_type.as_deref().filter(|t| !t.is_empty())
    }
}

/// Join row between a word and one of its definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationTriple {
    pub word_id: u32,
    pub definition_id: u32,
    pub relation_type: String,
}

/// Destination tables, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Word,
    Definition,
    Relation,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Word, Table::Definition, Table::Relation];

    pub fn name(self) -> &'static str {
        match self {
            Table::Word => "word",
            Table::Definition => "definition",
            Table::Relation => "relation",
        }
    }

    /// Column list of the INSERT head. Must match the destination schema.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Word => &["letter", "word", "root", "literal", "id"],
            Table::Definition => &["id", "definition"],
            Table::Relation => &["id_word", "id_definition", "rtype"],
        }
    }
}

/// A single SQL literal, already escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(u32),
    Text(String),
}

/// Values of one row, in the column order of its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRow {
    pub table: Table,
    pub values: Vec<SqlValue>,
}
