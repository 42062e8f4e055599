//! Ways of getting a matrix from the user: an inline literal, a delimited
//! file, or an interactive prompt.
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;

use detmat::io::read_matrix_delimited;
use detmat::math::Matrix;

use crate::util::validate_input_file;

/// Parse `"1 2; 3 4"`: rows split on `;`, entries on whitespace or commas.
pub fn parse_matrix_literal(literal: &str) -> Result<Matrix> {
    let mut rows = Vec::new();
    // A single trailing `;` is allowed.
    let literal = literal.trim();
    let literal = literal.strip_suffix(';').unwrap_or(literal);
    for (row_idx, row) in literal.split(';').enumerate() {
        let values = parse_row(row).with_context(|| format!("Invalid row {}", row_idx + 1))?;
        rows.push(values);
    }
    if rows.iter().all(|r| r.is_empty()) {
        bail!("Matrix literal is empty");
    }
    Matrix::from_rows(&rows).context("Rows of the matrix literal differ in length")
}

fn parse_row(row: &str) -> Result<Vec<i32>> {
    row.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .with_context(|| format!("Invalid integer '{}'", token))
        })
        .collect()
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Unexpected end of input while waiting for: {}", prompt.trim_end());
    }
    Ok(line.trim().to_string())
}

fn prompt_dimension<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<usize> {
    let text = prompt_line(input, output, prompt)?;
    match text.parse::<i64>() {
        Ok(value) if value > 0 => usize::try_from(value).context("Invalid dimension value"),
        _ => Err(anyhow!("Invalid dimension value: '{}'", text)),
    }
}

/// Ask for the row count, the column count, then each row's entries.
pub fn read_matrix_interactive<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Matrix> {
    let rows = prompt_dimension(input, output, "Rows: ")?;
    let cols = prompt_dimension(input, output, "Columns: ")?;

    let mut matrix = Matrix::create(rows, cols)?;
    for i in 0..rows {
        let prompt = format!("Row {} ({} values): ", i + 1, cols);
        let line = prompt_line(input, output, &prompt)?;
        let values = parse_row(&line).with_context(|| format!("Invalid row {}", i + 1))?;
        if values.len() != cols {
            bail!("Row {} has {} values, expected {}", i + 1, values.len(), cols);
        }
        for (j, value) in values.into_iter().enumerate() {
            matrix.set(i, j, value)?;
        }
    }
    Ok(matrix)
}

/// Resolve `--file`, `--values`, or fall back to prompting on stdin.
pub fn matrix_from_arguments(matches: &ArgMatches) -> Result<Matrix> {
    if let Some(path) = matches.get_one::<PathBuf>("file") {
        log::info!("[detmat] Reading matrix from {:?}", path);
        validate_input_file(path)?;
        return read_matrix_delimited(path);
    }
    if let Some(literal) = matches.get_one::<String>("values") {
        return parse_matrix_literal(literal);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr();
    read_matrix_interactive(&mut input, &mut output)
}
