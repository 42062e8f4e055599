//! Flat text persistence for a [`MatrixStore`].
//!
//! ```text
//! 2
//! a 2 2
//! 1 2
//! 3 4
//! b 1 3
//! 5 6 7
//! ```
//!
//! The first line is the number of matrices. Each matrix starts with a
//! `<name> <rows> <cols>` header followed by `rows` lines of `cols`
//! whitespace-separated integers. Blank lines are ignored.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};

use crate::math::Matrix;
use crate::store::MatrixStore;

pub fn write_store<W: Write>(store: &MatrixStore, mut writer: W) -> Result<()> {
    writeln!(writer, "{}", store.len())?;
    for entry in store.iter() {
        let (rows, cols) = entry.matrix.shape();
        writeln!(writer, "{} {} {}", entry.name, rows, cols)?;
        for row in entry.matrix.rows() {
            let line = row
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(writer, "{}", line)?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Non-blank lines of the input, numbered from 1.
struct Tokens<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        for line in self.lines.by_ref() {
            self.line_no += 1;
            let line = line.with_context(|| format!("Failed to read line {}", self.line_no))?;
            if !line.trim().is_empty() {
                return Ok(Some((self.line_no, line)));
            }
        }
        Ok(None)
    }

    fn expect_line(&mut self, what: &str) -> Result<(usize, String)> {
        self.next_line()?
            .ok_or_else(|| anyhow!("Unexpected end of input: expected {}", what))
    }
}

fn parse_dimension(token: &str, line_no: usize) -> Result<usize> {
    token
        .parse::<usize>()
        .with_context(|| format!("Invalid dimension '{}' at line {}", token, line_no))
}

pub fn read_store<R: BufRead>(reader: R, capacity: usize) -> Result<MatrixStore> {
    let mut tokens = Tokens::new(reader);
    let mut store = MatrixStore::with_capacity(capacity);

    let Some((line_no, count_line)) = tokens.next_line()? else {
        return Ok(store);
    };
    let count = count_line
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid matrix count at line {}", line_no))?;

    for index in 0..count {
        let (line_no, header) = tokens.expect_line(&format!("header of matrix {}", index + 1))?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        let [name, rows, cols] = fields[..] else {
            bail!(
                "Expected '<name> <rows> <cols>' at line {}, found '{}'",
                line_no,
                header.trim()
            );
        };
        let rows = parse_dimension(rows, line_no)?;
        let cols = parse_dimension(cols, line_no)?;

        // Grow the buffer only as rows actually arrive; the header is untrusted.
        let mut values = Vec::new();
        if cols > 0 {
            for i in 0..rows {
                let (line_no, line) =
                    tokens.expect_line(&format!("row {} of matrix '{}'", i + 1, name))?;
                let row: Vec<&str> = line.split_whitespace().collect();
                if row.len() != cols {
                    bail!(
                        "Matrix '{}' row {} at line {} has {} values, expected {}",
                        name,
                        i + 1,
                        line_no,
                        row.len(),
                        cols
                    );
                }
                for token in row {
                    let value = token.parse::<i32>().with_context(|| {
                        format!("Invalid integer '{}' at line {}", token, line_no)
                    })?;
                    values.push(value);
                }
            }
        }
        let matrix = Matrix::from_shape_vec((rows, cols), values)
            .with_context(|| format!("Failed to create matrix '{}'", name))?;

        if store.contains(name) {
            log::warn!("Duplicate matrix name '{}' at line {}; keeping the later one", name, line_no);
        }
        store
            .insert(name, matrix)
            .with_context(|| format!("Failed to store matrix '{}'", name))?;
    }

    if let Some((line_no, line)) = tokens.next_line()? {
        bail!(
            "Unexpected content after {} matrices at line {}: '{}'",
            count,
            line_no,
            line.trim()
        );
    }

    Ok(store)
}

pub fn save_store_file<P: AsRef<Path>>(path: P, store: &MatrixStore) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create store file: {}", path.display()))?;
    write_store(store, BufWriter::new(file))
        .with_context(|| format!("Failed to write store file: {}", path.display()))?;
    log::info!("Saved {} matrices to {}", store.len(), path.display());
    Ok(())
}

/// Load a store file. A missing file is an empty store.
pub fn load_store_file<P: AsRef<Path>>(path: P, capacity: usize) -> Result<MatrixStore> {
    let path = path.as_ref();
    if !path.exists() {
        log::info!("Store file {} does not exist yet; starting empty", path.display());
        return Ok(MatrixStore::with_capacity(capacity));
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open store file: {}", path.display()))?;
    let store = read_store(BufReader::new(file), capacity)
        .with_context(|| format!("Failed to parse store file: {}", path.display()))?;
    log::debug!("Loaded {} matrices from {}", store.len(), path.display());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<MatrixStore> {
        read_store(text.as_bytes(), 10)
    }

    #[test]
    fn reads_documented_layout() {
        let store = parse("2\na 2 2\n1 2\n3 4\nb 1 3\n5 6 7\n").unwrap();
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(
            store.get("b").unwrap(),
            &Matrix::from_rows(&[vec![5, 6, 7]]).unwrap()
        );
    }

    #[test]
    fn writes_documented_layout() {
        let mut store = MatrixStore::default();
        store
            .insert("m", Matrix::from_rows(&[vec![1, -2], vec![3, 4]]).unwrap())
            .unwrap();
        let mut out = Vec::new();
        write_store(&store, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\nm 2 2\n1 -2\n3 4\n");
    }

    #[test]
    fn empty_input_is_empty_store() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("0\n").unwrap().is_empty());
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let store = parse("\n 1 \n\nm   1  2\n  8\t9  \n\n").unwrap();
        assert_eq!(store.get("m").unwrap().as_slice(), &[8, 9]);
    }

    #[test]
    fn truncated_input_is_an_error() {
        let err = parse("1\nm 2 2\n1 2\n").unwrap_err();
        assert!(format!("{:#}", err).contains("row 2 of matrix 'm'"));
    }

    #[test]
    fn wrong_row_width_reports_line() {
        let err = parse("1\nm 2 2\n1 2\n3\n").unwrap_err();
        assert!(err.to_string().contains("line 4"), "{}", err);
    }

    #[test]
    fn bad_tokens_are_errors() {
        assert!(parse("x\n").is_err());
        assert!(parse("1\nm two 2\n").is_err());
        assert!(parse("1\nm 1 1\nseven\n").is_err());
        assert!(parse("1\nm 1\n").is_err());
    }

    #[test]
    fn oversized_header_fails_on_missing_rows() {
        let err = parse("1\nm 100000 100000\n").unwrap_err();
        assert!(format!("{:#}", err).contains("Unexpected end of input"), "{:#}", err);

        let err = parse("1\nm 100000 100000\n1 2 3\n").unwrap_err();
        assert!(err.to_string().contains("expected 100000"), "{}", err);
    }

    #[test]
    fn rows_without_columns_need_no_data_lines() {
        let store = parse("1\nm 3 0\n").unwrap();
        assert_eq!(store.get("m").unwrap().shape(), (3, 0));
    }

    #[test]
    fn trailing_content_is_an_error() {
        let err = parse("1\nm 1 1\n5\nextra 1 1\n").unwrap_err();
        assert!(err.to_string().contains("Unexpected content"));
    }

    #[test]
    fn count_beyond_capacity_is_an_error() {
        let err = read_store("2\na 1 1\n1\nb 1 1\n2\n".as_bytes(), 1).unwrap_err();
        assert!(format!("{:#}", err).contains("full"));
    }
}
