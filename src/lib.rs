//! datuk-sql: dictionary corpus to bulk SQL conversion
//!
//! This crate turns a parsed dictionary corpus (headwords with their letter, root,
//! literal form and tagged definitions) into a relational script of batched
//! `INSERT` statements for three tables:
//!
//! 1. **word** -- One row per corpus entry: `(letter, word, root, literal, id)`
//! 2. **definition** -- One row per distinct definition text, with a dense id
//!    assigned in first-seen order starting at 1
//! 3. **relation** -- One `(id_word, id_definition, rtype)` row per definition
//!    occurrence, `-` when the definition carries no relation type
//!
//! # Pipeline
//!
//! - **Read** -- JSON Lines corpus, optionally `.bz2` compressed ([`corpus`])
//! - **Prepare** -- Definition dedup, relation triples, literal escaping ([`prepare`])
//! - **Batch** -- Fixed-size chunks, final chunk holds the remainder ([`batch`])
//! - **Emit** -- One statement per chunk, tables written in order ([`emit`])
//!
//! The whole corpus is held in memory for the run; nothing is shared between runs.
//!
//! # Key Modules
//!
//! - [`definitions`] -- First-seen definition id assignment
//! - [`relations`] -- Word/definition triples and duplicate handling
//! - [`escape`] -- Single-quote escaping per SQL dialect
//! - [`schema`] -- DDL preamble for the destination tables
//! - [`convert`] -- End-to-end driver with atomic output
//! - [`stats`] -- Counters reported after a run
//! - [`config`] -- Constants for batching and I/O
//!
//! # Example Usage
//!
//! ```bash
//! # Convert with the default batch size of 1000 rows per statement
//! datuk-sql convert -i corpus/datuk.jsonl -o corpus/datuk.sql
//!
//! # Standard SQL quoting, smaller statements
//! datuk-sql convert -i corpus/datuk.jsonl.bz2 -o datuk.sql --dialect ansi --batch-size 250
//! ```

pub mod batch;
pub mod config;
pub mod convert;
pub mod corpus;
pub mod definitions;
pub mod emit;
pub mod escape;
pub mod models;
pub mod prepare;
pub mod relations;
pub mod schema;
pub mod stats;
