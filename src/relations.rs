use crate::config::RELATION_TYPE_PLACEHOLDER;
use crate::definitions::DefinitionIndex;
use crate::models::{Entry, RelationTriple};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use tracing::warn;

/// What to do with repeated `(word, definition, type)` triples.
///
/// The destination declares a unique key over the three columns, so a
/// repeated triple makes the whole INSERT statement fail on load. Triples are
/// compared byte for byte; tags that differ only in case or trailing spaces
/// are kept apart here even though the default `utf8` collation would treat
/// them as the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationPolicy {
    /// Keep the first occurrence, drop the rest.
    #[default]
    Dedup,
    /// Emit every occurrence.
    Keep,
}

#[derive(Debug, Default)]
pub struct Relations {
    pub triples: Vec<RelationTriple>,
    /// Triples dropped under [`RelationPolicy::Dedup`]
    pub duplicates: usize,
}

/// One triple per (entry, definition occurrence), in entry order then
/// definition order. Untagged definitions get the placeholder type.
pub fn build_relations(
    entries: &[Entry],
    index: &DefinitionIndex<'_>,
    policy: RelationPolicy,
) -> Result<Relations> {
    let mut relations = Relations::default();
    let mut seen = FxHashSet::default();

    for entry in entries {
        for def in &entry.definitions {
            let definition_id = index.id_of(&def.definition).with_context(|| {
                format!(
                    "Definition {:?} of entry {} is missing from the definition index",
                    def.definition, entry.id
                )
            })?;
            let triple = RelationTriple {
                word_id: entry.id,
                definition_id,
                relation_type: def.tag().unwrap_or(RELATION_TYPE_PLACEHOLDER).to_string(),
            };

            if policy == RelationPolicy::Dedup && !seen.insert(triple.clone()) {
                relations.duplicates += 1;
                continue;
            }
            relations.triples.push(triple);
        }
    }

    if relations.duplicates > 0 {
        warn!(
            dropped = relations.duplicates,
            "Dropped duplicate word-definition relations"
        );
    }

    Ok(relations)
}
