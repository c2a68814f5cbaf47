use crate::batch::{chunk_rows, render_insert};
use crate::models::{PreparedRow, Table};
use crate::prepare::PreparedTables;
use crate::stats::ConversionStats;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::io::Write;
use std::num::NonZeroUsize;
use tracing::debug;

/// Writes batched INSERT statements to any sink, one table at a time.
pub struct SqlEmitter<W: Write> {
    writer: W,
    batch_size: NonZeroUsize,
    progress: Option<ProgressBar>,
}

impl<W: Write> SqlEmitter<W> {
    pub fn new(writer: W, batch_size: NonZeroUsize) -> Self {
        Self {
            writer,
            batch_size,
            progress: None,
        }
    }

    /// Ticks `pb` once per statement written.
    pub fn with_progress(mut self, pb: ProgressBar) -> Self {
        self.progress = Some(pb);
        self
    }

    pub fn write_header(&mut self, header: &str) -> Result<()> {
        self.writer
            .write_all(header.as_bytes())
            .context("Failed to write schema header")
    }

    /// Emits every chunk of `rows` as its own statement. Returns the number
    /// of statements written, which is zero for an empty table.
    pub fn emit_table(&mut self, table: Table, rows: &[PreparedRow]) -> Result<usize> {
        let mut written = 0;
        for chunk in chunk_rows(rows, self.batch_size) {
            let sql = render_insert(table, chunk);
            self.writer.write_all(sql.as_bytes()).with_context(|| {
                format!("Failed to write {} statement {}", table.name(), written + 1)
            })?;
            written += 1;
            if let Some(ref pb) = self.progress {
                pb.inc(1);
            }
        }
        debug!(
            table = table.name(),
            rows = rows.len(),
            statements = written,
            "Table emitted"
        );
        Ok(written)
    }

    /// Emits word, definition and relation rows in that order.
    pub fn emit_all(
        &mut self,
        tables: &PreparedTables,
        stats: &mut ConversionStats,
    ) -> Result<()> {
        for table in Table::ALL {
            let rows = tables.rows(table);
            let statements = self.emit_table(table, rows)?;
            stats.set_rows(table, rows.len());
            stats.add_statements(table, statements);
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush().context("Failed to flush SQL output")?;
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
        Ok(self.writer)
    }
}
