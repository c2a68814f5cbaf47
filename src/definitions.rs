use crate::models::Entry;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Dense id space over distinct definition texts.
///
/// Ids start at 1 and follow first-seen order across the whole corpus, so the
/// same corpus always yields the same ids. Texts are compared byte for byte:
/// no trimming and no case folding. The index borrows its texts from the
/// entries it was built over.
#[derive(Debug, Default)]
pub struct DefinitionIndex<'a> {
    ids: FxHashMap<&'a str, u32>,
    texts: Vec<&'a str>,
}

impl<'a> DefinitionIndex<'a> {
    pub fn build(entries: &'a [Entry]) -> Result<Self> {
        let mut index = Self::default();
        let mut occurrences = 0usize;
        for entry in entries {
            for def in &entry.definitions {
                index.intern(&def.definition)?;
                occurrences += 1;
            }
        }
        debug!(
            distinct = index.len(),
            occurrences, "Definition index built"
        );
        Ok(index)
    }

    fn intern(&mut self, text: &'a str) -> Result<u32> {
        if let Some(&id) = self.ids.get(text) {
            return Ok(id);
        }
        let id = next_id(self.texts.len())?;
        self.ids.insert(text, id);
        self.texts.push(text);
        Ok(id)
    }

    pub fn id_of(&self, text: &str) -> Option<u32> {
        self.ids.get(text).copied()
    }

    /// Distinct texts with their ids, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &'a str)> + '_ {
        // every position was checked by `next_id` when interned
        self.texts
            .iter()
            .enumerate()
            .map(|(i, t)| (i as u32 + 1, *t))
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Id for the text interned after `assigned` others.
fn next_id(assigned: usize) -> Result<u32> {
    u32::try_from(assigned)
        .ok()
        .and_then(|n| n.checked_add(1))
        .with_context(|| format!("More than {} distinct definitions", u32::MAX))
}
