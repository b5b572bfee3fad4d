//! # Command Definitions
//!
//! Parsing of direction words and scripted move lists.

use crate::{DelveError, DelveResult, Direction};

/// Parses a single direction.
///
/// Accepts the full name, its first letter or the menu number
/// (1 = North .. 4 = West), case-insensitively.
///
/// # Examples
///
/// ```
/// use delve::{parse_direction, Direction};
///
/// assert_eq!(parse_direction("n").unwrap(), Direction::North);
/// assert_eq!(parse_direction("West").unwrap(), Direction::West);
/// assert_eq!(parse_direction("3").unwrap(), Direction::South);
/// assert!(parse_direction("up").is_err());
/// ```
pub fn parse_direction(text: &str) -> DelveResult<Direction> {
    let word = text.trim().to_ascii_lowercase();
    if let Ok(ordinal) = word.parse::<usize>() {
        return Direction::from_ordinal(ordinal).ok_or_else(|| {
            DelveError::InvalidInput(format!("direction number {} is not in 1..=4", ordinal))
        });
    }

    Direction::ALL
        .into_iter()
        .find(|direction| {
            let name = direction.name().to_ascii_lowercase();
            word == name || word == name[..1]
        })
        .ok_or_else(|| DelveError::InvalidInput(format!("unknown direction '{}'", text.trim())))
}

/// Parses a comma or whitespace separated list of directions.
pub fn parse_moves(text: &str) -> DelveResult<Vec<Direction>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(parse_direction)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction_forms() {
        let cases = [
            ("n", Direction::North),
            ("NORTH", Direction::North),
            ("e", Direction::East),
            (" East ", Direction::East),
            ("s", Direction::South),
            ("2", Direction::East),
            ("4", Direction::West),
            ("w", Direction::West),
        ];
        for (text, expected) in cases {
            assert_eq!(parse_direction(text).unwrap(), expected, "{:?}", text);
        }
    }

    #[test]
    fn test_parse_direction_rejects_unknown() {
        for text in ["", "0", "5", "nw", "northeast", "x"] {
            assert!(
                matches!(parse_direction(text), Err(DelveError::InvalidInput(_))),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn test_parse_moves_list() {
        let moves = parse_moves("W,E, e  3,1").unwrap();
        assert_eq!(
            moves,
            vec![
                Direction::West,
                Direction::East,
                Direction::East,
                Direction::South,
                Direction::North
            ]
        );
        assert!(parse_moves("").unwrap().is_empty());
        assert!(parse_moves("n,q").is_err());
    }
}
