use crate::models::{PreparedRow, SqlValue, Table};
use std::num::NonZeroUsize;
use std::slice::Chunks;

/// Splits `rows` into contiguous groups of at most `batch_size`, in order.
/// The last group holds the remainder; an empty input yields no group.
pub fn chunk_rows<T>(rows: &[T], batch_size: NonZeroUsize) -> Chunks<'_, T> {
    rows.chunks(batch_size.get())
}

/// Number of statements [`chunk_rows`] produces for `row_count` rows.
pub fn statement_count(row_count: usize, batch_size: NonZeroUsize) -> usize {
    row_count.div_ceil(batch_size.get())
}

/// Renders one multi-row INSERT, terminated by `;` and a blank line.
pub fn render_insert(table: Table, rows: &[PreparedRow]) -> String {
    debug_assert!(rows.iter().all(|r| r.table == table));

    let mut sql = String::with_capacity(64 + rows.len() * 48);
    sql.push_str("INSERT INTO ");
    sql.push_str(table.name());
    sql.push_str(" (");
    sql.push_str(&table.columns().join(", "));
    sql.push_str(") VALUES\n");

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            sql.push_str(",\n");
        }
        render_row(&mut sql, row);
    }
    sql.push_str(";\n\n");
    sql
}

fn render_row(out: &mut String, row: &PreparedRow) {
    let mut itoa_buf = itoa::Buffer::new();
    out.push('(');
    for (i, value) in row.values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match value {
            SqlValue::Int(n) => out.push_str(itoa_buf.format(*n)),
            SqlValue::Text(s) => {
                out.push('\'');
                out.push_str(s);
                out.push('\'');
            }
        }
    }
    out.push(')');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn word_row(id: u32) -> PreparedRow {
        PreparedRow {
            table: Table::Word,
            values: vec![
                SqlValue::Text("a".into()),
                SqlValue::Text(format!("w{id}")),
                SqlValue::Text("r".into()),
                SqlValue::Text("l".into()),
                SqlValue::Int(id),
            ],
        }
    }

    #[test]
    fn five_rows_in_batches_of_two() {
        let rows: Vec<u32> = (1..=5).collect();
        let chunks: Vec<&[u32]> = chunk_rows(&rows, size(2)).collect();
        assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
        assert_eq!(statement_count(5, size(2)), 3);
    }

    #[test]
    fn exact_multiple_has_no_trailing_chunk() {
        let rows: Vec<u32> = (0..6).collect();
        let lens: Vec<usize> = chunk_rows(&rows, size(3)).map(|c| c.len()).collect();
        assert_eq!(lens, vec![3, 3]);
        assert_eq!(statement_count(6, size(3)), 2);
    }

    #[test]
    fn empty_input_has_no_chunks() {
        let rows: Vec<u32> = Vec::new();
        assert_eq!(chunk_rows(&rows, size(1000)).count(), 0);
        assert_eq!(statement_count(0, size(1000)), 0);
    }

    #[test]
    fn chunk_counts_match_ceiling_division() {
        for total in 0..40usize {
            for b in 1..9usize {
                let rows: Vec<usize> = (0..total).collect();
                let chunks: Vec<&[usize]> = chunk_rows(&rows, size(b)).collect();
                assert_eq!(chunks.len(), statement_count(total, size(b)));
                assert!(chunks.iter().all(|c| !c.is_empty() && c.len() <= b));
                let flat: Vec<usize> = chunks.concat();
                assert_eq!(flat, rows);
            }
        }
    }

    #[test]
    fn renders_word_insert() {
        let sql = render_insert(Table::Word, &[word_row(1), word_row(2)]);
        assert_eq!(
            sql,
            "INSERT INTO word (letter, word, root, literal, id) VALUES\n\
             ('a', 'w1', 'r', 'l', 1),\n\
             ('a', 'w2', 'r', 'l', 2);\n\n"
        );
    }

    #[test]
    fn renders_relation_insert() {
        let row = PreparedRow {
            table: Table::Relation,
            values: vec![
                SqlValue::Int(2),
                SqlValue::Int(1),
                SqlValue::Text("-".into()),
            ],
        };
        let sql = render_insert(Table::Relation, &[row]);
        assert_eq!(
            sql,
            "INSERT INTO relation (id_word, id_definition, rtype) VALUES\n(2, 1, '-');\n\n"
        );
    }

    #[test]
    fn escaped_text_is_kept_verbatim() {
        let row = PreparedRow {
            table: Table::Definition,
            values: vec![SqlValue::Int(7), SqlValue::Text(r"O\'Brien\'s".into())],
        };
        let sql = render_insert(Table::Definition, &[row]);
        assert!(sql.contains(r"(7, 'O\'Brien\'s')"));
    }
}
