use crate::batch::statement_count;
use crate::config::WRITE_BUFFER_SIZE;
use crate::corpus;
use crate::emit::SqlEmitter;
use crate::escape::Dialect;
use crate::models::{Entry, Table};
use crate::prepare::{prepare_tables, PrepareOptions, PreparedTables};
use crate::relations::RelationPolicy;
use crate::schema::SCHEMA;
use crate::stats::ConversionStats;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub struct ConvertOptions {
    pub input: String,
    pub output: String,
    pub batch_size: NonZeroUsize,
    pub dialect: Dialect,
    pub relation_policy: RelationPolicy,
    pub write_schema: bool,
    pub limit: Option<usize>,
    pub dry_run: bool,
}

impl ConvertOptions {
    fn prepare_options(&self) -> PrepareOptions {
        PrepareOptions {
            dialect: self.dialect,
            relation_policy: self.relation_policy,
        }
    }
}

/// Reads the corpus, prepares all rows and writes the SQL file.
///
/// Output goes to `<output>.tmp` first and is renamed into place once fully
/// flushed. If writing or the rename fails, the temp file is removed and
/// whatever was at `<output>` before is left untouched.
pub fn run_conversion(options: &ConvertOptions) -> Result<ConversionStats> {
    let entries = corpus::read_entries(&options.input, options.limit)?;
    let tables = prepare_tables(&entries, &options.prepare_options())?;

    let mut stats = ConversionStats::new();
    stats.entries_read = entries.len() as u64;
    stats.duplicate_relations = tables.duplicate_relations as u64;

    if options.dry_run {
        info!("Dry run, not writing {}", options.output);
        for table in Table::ALL {
            let rows = tables.rows(table).len();
            stats.set_rows(table, rows);
            stats.add_statements(table, statement_count(rows, options.batch_size));
        }
        return Ok(stats);
    }

    let path = Path::new(&options.output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let tmp_path = tmp_path_for(path);
    let file = File::create(&tmp_path)
        .with_context(|| format!("Failed to create output file: {:?}", tmp_path))?;
    let writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);

    let written = make_progress_bar(total_statements(&tables, options.batch_size))
        .and_then(|pb| {
            write_sql(
                writer,
                &tables,
                options.batch_size,
                options.write_schema,
                &mut stats,
                Some(pb),
            )
        })
        .and_then(|_| {
            fs::rename(&tmp_path, path)
                .with_context(|| format!("Failed to rename temp output file to: {:?}", path))
        });
    if let Err(e) = written {
        if let Err(rm) = fs::remove_file(&tmp_path) {
            warn!(error = %rm, path = ?tmp_path, "Failed to remove temp output file");
        }
        return Err(e);
    }

    info!(
        words = stats.words,
        definitions = stats.definitions,
        relations = stats.relations,
        statements = stats.total_statements(),
        path = ?path,
        "SQL written"
    );

    Ok(stats)
}

/// Prepares `entries` and writes the full SQL script to `writer`.
pub fn convert_entries<W: Write>(
    entries: &[Entry],
    writer: W,
    batch_size: NonZeroUsize,
    prepare: &PrepareOptions,
    write_schema: bool,
) -> Result<(W, ConversionStats)> {
    let tables = prepare_tables(entries, prepare)?;
    let mut stats = ConversionStats::new();
    stats.entries_read = entries.len() as u64;
    stats.duplicate_relations = tables.duplicate_relations as u64;
    let writer = write_sql(writer, &tables, batch_size, write_schema, &mut stats, None)?;
    Ok((writer, stats))
}

fn write_sql<W: Write>(
    writer: W,
    tables: &PreparedTables,
    batch_size: NonZeroUsize,
    write_schema: bool,
    stats: &mut ConversionStats,
    progress: Option<ProgressBar>,
) -> Result<W> {
    let mut emitter = SqlEmitter::new(writer, batch_size);
    if let Some(pb) = progress {
        emitter = emitter.with_progress(pb);
    }
    if write_schema {
        emitter.write_header(SCHEMA)?;
    }
    emitter.emit_all(tables, stats)?;
    emitter.finish()
}

pub fn write_stats_json(stats: &ConversionStats, path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create stats file: {}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, stats)
        .with_context(|| format!("Failed to write stats to: {}", path))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush stats file: {}", path))
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn total_statements(tables: &PreparedTables, batch_size: NonZeroUsize) -> u64 {
    Table::ALL
        .iter()
        .map(|t| statement_count(tables.rows(*t).len(), batch_size) as u64)
        .sum()
}

fn make_progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("    {spinner:.cyan} Writing [{bar:30.cyan/blue}] {pos}/{len} statements")
            .context("Invalid progress bar template")?
            .progress_chars("=> "),
    );
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Definition;

    fn entries() -> Vec<Entry> {
        vec![
            Entry {
                id: 1,
                letter: "a".into(),
                word: "a".into(),
                root: "a".into(),
                literal: "a".into(),
                definitions: vec![Definition::new("d1", Some("syn"))],
            },
            Entry {
                id: 2,
                letter: "b".into(),
                word: "b".into(),
                root: "b".into(),
                literal: "b".into(),
                definitions: vec![
                    Definition::new("d1", Some("syn")),
                    Definition::new("d2", None),
                ],
            },
        ]
    }

    #[test]
    fn convert_entries_without_schema() {
        let (out, stats) = convert_entries(
            &entries(),
            Vec::new(),
            NonZeroUsize::new(1000).unwrap(),
            &PrepareOptions::default(),
            false,
        )
        .unwrap();
        let sql = String::from_utf8(out).unwrap();

        assert_eq!(
            sql,
            "INSERT INTO word (letter, word, root, literal, id) VALUES\n\
             ('a', 'a', 'a', 'a', 1),\n\
             ('b', 'b', 'b', 'b', 2);\n\n\
             INSERT INTO definition (id, definition) VALUES\n\
             (1, 'd1'),\n\
             (2, 'd2');\n\n\
             INSERT INTO relation (id_word, id_definition, rtype) VALUES\n\
             (1, 1, 'syn'),\n\
             (2, 1, 'syn'),\n\
             (2, 2, '-');\n\n"
        );
        assert_eq!(stats.total_statements(), 3);
        assert_eq!(stats.entries_read, 2);
    }

    #[test]
    fn convert_entries_with_schema() {
        let (out, _) = convert_entries(
            &entries(),
            Vec::new(),
            NonZeroUsize::new(1000).unwrap(),
            &PrepareOptions::default(),
            true,
        )
        .unwrap();
        let sql = String::from_utf8(out).unwrap();
        assert!(sql.starts_with(SCHEMA));
    }

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path_for(Path::new("/out/datuk.sql")),
            PathBuf::from("/out/datuk.sql.tmp")
        );
    }

    #[test]
    fn total_statements_sums_tables() {
        let tables = prepare_tables(&entries(), &PrepareOptions::default()).unwrap();
        assert_eq!(total_statements(&tables, NonZeroUsize::new(2).unwrap()), 1 + 1 + 2);
    }
}
