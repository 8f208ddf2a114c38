//! Matrix and vector text.
//!
//! Rows are separated by newlines or `;`, entries by whitespace. Each entry
//! is an integer or a fraction `p/q`. Errors carry the 1-based line and
//! column of the offending token.

use cayley::eigen::{EngineError, Stage, StageContext};
use cayley::linalg::DenseMatrix;
use cayley::rings::Q;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Token<'a> {
    text: &'a str,
    line: usize,
    column: usize,
}

fn parse_error(line: usize, column: usize, message: impl Into<String>) -> EngineError {
    EngineError::Parse {
        line,
        column,
        message: message.into(),
    }
}

/// Splits text into non-empty rows of tokens.
fn tokenize(text: &str) -> Vec<Vec<Token<'_>>> {
    let mut rows = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        let mut start: Option<(usize, usize)> = None;

        for (column, (offset, ch)) in line.char_indices().enumerate() {
            if ch.is_whitespace() || ch == ';' {
                if let Some((begin, col)) = start.take() {
                    row.push(Token {
                        text: &line[begin..offset],
                        line: line_idx + 1,
                        column: col + 1,
                    });
                }
                if ch == ';' {
                    rows.push(std::mem::take(&mut row));
                }
            } else if start.is_none() {
                start = Some((offset, column));
            }
        }
        if let Some((begin, col)) = start {
            row.push(Token {
                text: &line[begin..],
                line: line_idx + 1,
                column: col + 1,
            });
        }
        rows.push(row);
    }

    rows.retain(|r| !r.is_empty());
    rows
}

fn parse_token(token: &Token<'_>) -> Result<Q, EngineError> {
    token
        .text
        .parse::<Q>()
        .map_err(|e| parse_error(token.line, token.column, e.to_string()))
}

/// Parses a rectangular matrix.
///
/// # Errors
///
/// `Parse` for empty input, ragged rows, malformed entries and zero
/// denominators. No partial matrix is ever returned.
pub fn parse_matrix(text: &str) -> Result<DenseMatrix<Q>, EngineError> {
    let rows = tokenize(text);
    let Some(first) = rows.first() else {
        return Err(parse_error(1, 1, "no matrix entries"));
    };
    let width = first.len();

    let mut values = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if row.len() != width {
            let head = row[0];
            return Err(parse_error(
                head.line,
                head.column,
                format!("row {} has {} entries, expected {width}", index + 1, row.len()),
            ));
        }
        values.push(row.iter().map(parse_token).collect::<Result<Vec<_>, _>>()?);
    }

    DenseMatrix::try_from_rows(values).at(Stage::Parse)
}

/// Parses a single whitespace-separated list of numbers.
///
/// # Errors
///
/// `Parse` for empty input or malformed entries.
pub fn parse_vector(text: &str) -> Result<Vec<Q>, EngineError> {
    let tokens: Vec<Token<'_>> = tokenize(text).into_iter().flatten().collect();
    if tokens.is_empty() {
        return Err(parse_error(1, 1, "no vector entries"));
    }
    tokens.iter().map(parse_token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    #[test]
    fn test_newlines_and_semicolons() {
        let a = parse_matrix("1 3\n2 -4").unwrap();
        let b = parse_matrix("1 3; 2 -4").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.row(1), &[q(2), q(-4)]);
    }

    #[test]
    fn test_fractions_and_blank_lines() {
        let a = parse_matrix("\n  1/2   -3/4 \n\n 0 5\n").unwrap();
        assert_eq!(a.row(0), &[Q::new(1, 2), Q::new(-3, 4)]);
        assert_eq!(a.num_rows(), 2);
    }

    #[test]
    fn test_ragged_row_position() {
        let err = parse_matrix("1 2\n3 4 5").unwrap_err();
        assert_eq!(
            err,
            EngineError::Parse {
                line: 2,
                column: 1,
                message: "row 2 has 3 entries, expected 2".to_string()
            }
        );
    }

    #[test]
    fn test_ragged_row_after_semicolon() {
        let err = parse_matrix("1 2;  3").unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 1, column: 7, .. }));
    }

    #[test]
    fn test_bad_token_position() {
        let err = parse_matrix("1 2\n3 x").unwrap_err();
        assert!(matches!(err, EngineError::Parse { line: 2, column: 3, .. }));
    }

    #[test]
    fn test_zero_denominator() {
        let EngineError::Parse { message, .. } = parse_matrix("1/0").unwrap_err() else {
            panic!("expected a parse error");
        };
        assert!(message.contains("zero denominator"));
    }

    #[test]
    fn test_empty() {
        assert!(matches!(parse_matrix("  \n ; \n"), Err(EngineError::Parse { line: 1, column: 1, .. })));
        assert!(parse_vector("").is_err());
    }

    #[test]
    fn test_vector() {
        assert_eq!(parse_vector("1 0 -2/3").unwrap(), vec![q(1), q(0), Q::new(-2, 3)]);
    }
}
