//! Seed file parsing.
//!
//! A seed is whitespace/line-separated integers: the first pair is
//! `rows cols`, every following pair marks one cell Occupied at
//! construction time.

use crate::config::BoardConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A parsed seed: board dimensions plus the initially occupied cells.
///
/// Cells are kept exactly as written; coordinates outside the board are
/// rejected with `OutOfBounds` when the seed is applied to a grid, never
/// silently dropped here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub board: BoardConfig,
    pub cells: Vec<(usize, usize)>,
}

impl Seed {
    /// Parse a seed from text.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace();

        let rows = next_coord(&mut tokens, "row count")?;
        let cols = next_coord(&mut tokens, "column count")?;
        let board = BoardConfig::new(rows, cols);
        board.validate()?;

        let mut cells = Vec::new();
        while let Some(token) = tokens.next() {
            let row = parse_coord(token)?;
            let col = match tokens.next() {
                Some(token) => parse_coord(token)?,
                None => {
                    return Err(Error::MalformedSeed(format!(
                        "row {row} is missing its column"
                    )))
                }
            };
            cells.push((row, col));
        }

        Ok(Self { board, cells })
    }

    /// Parse a seed from a reader, e.g. an open seed file.
    pub fn from_reader(mut reader: impl BufRead) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }
}

fn next_coord<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<usize> {
    match tokens.next() {
        Some(token) => parse_coord(token),
        None => Err(Error::MalformedSeed(format!("missing {what}"))),
    }
}

fn parse_coord(token: &str) -> Result<usize> {
    token.parse::<usize>().map_err(|_| {
        Error::MalformedSeed(format!("expected a non-negative integer, got {token:?}"))
    })
}
