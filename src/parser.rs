use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::config::Format;
use crate::level::{codes, Level, LevelErr};

#[derive(Debug, PartialEq)]
pub enum ParserErr {
    Pos(usize, usize),
    Level(LevelErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::Level(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<LevelErr> for ParserErr {
    fn from(err: LevelErr) -> Self {
        ParserErr::Level(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

pub fn parse(level: &str) -> Result<Level, ParserErr> {
    parse_format(level, detect_format(level))
}

pub fn parse_format(level: &str, format: Format) -> Result<Level, ParserErr> {
    let grid = match format {
        Format::Codes => parse_codes(level)?,
        Format::Xsb => parse_xsb(level)?,
    };
    Ok(Level::from_codes(&grid)?)
}

/// Code grids only ever contain digits and separators.
pub fn detect_format(level: &str) -> Format {
    let is_codes = level
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == ',' || c == '[' || c == ']');
    if is_codes && level.chars().any(|c| c.is_ascii_digit()) {
        Format::Codes
    } else {
        Format::Xsb
    }
}

/// Parses rows of cell codes.
///
/// Codes can be separated by commas and/or whitespace (rows can be wrapped in brackets),
/// or written as a single run of digits per row.
/// Row lengths are not checked here, `Level::from_codes` does that.
pub fn parse_codes(level: &str) -> Result<Vec<Vec<u8>>, ParserErr> {
    let mut grid = Vec::new();

    for line in level.lines() {
        let line = line.trim_matches(|c: char| c.is_whitespace() || c == '[' || c == ']' || c == ',');
        if line.is_empty() {
            continue;
        }
        let r = grid.len();

        let tokens: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let row = if tokens.len() == 1 {
            // no separators
            tokens[0]
                .chars()
                .enumerate()
                .map(|(c, ch)| parse_code(ch.to_digit(10), r, c))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            tokens
                .iter()
                .enumerate()
                .map(|(c, token)| parse_code(token.parse().ok(), r, c))
                .collect::<Result<Vec<_>, _>>()?
        };
        grid.push(row);
    }

    Ok(grid)
}

fn parse_code(code: Option<u32>, r: usize, c: usize) -> Result<u8, ParserErr> {
    match code {
        Some(code) if code <= u32::from(codes::PLAYER_ON_GOAL) => Ok(code as u8),
        _ => Err(ParserErr::Pos(r, c)),
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
/// into cell codes.
///
/// Short rows are padded with void.
pub fn parse_xsb(level: &str) -> Result<Vec<Vec<u8>>, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut grid = Vec::new();
    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let code = match cur_char {
                '#' => codes::WALL,
                ' ' | '-' | '_' => codes::FLOOR,
                '.' => codes::GOAL,
                '$' | 'b' => codes::BOX,
                '*' | 'B' => codes::BOX_ON_GOAL,
                '@' | 'p' => codes::PLAYER,
                '+' | 'P' => codes::PLAYER_ON_GOAL,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            row.push(code);
        }
        grid.push(row);
    }

    let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut grid {
        row.resize(cols, codes::VOID);
    }

    Ok(grid)
}
