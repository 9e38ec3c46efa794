//! Click input for the text front end.

use crate::domain::Square;
use crate::error::{ChessError, Result};

/// Parse one click: algebraic (`e2`) or `row col` (`6 4`).
pub fn parse_click(text: &str) -> Result<Square> {
    let text = text.trim();
    let parts: Vec<&str> = text.split_whitespace().collect();
    match parts.as_slice() {
        [algebraic] => algebraic.parse(),
        [row, col] => {
            let invalid = || ChessError::InvalidSquare(text.to_string());
            let row: i32 = row.parse().map_err(|_| invalid())?;
            let col: i32 = col.parse().map_err(|_| invalid())?;
            Square::try_new(row, col).ok_or(ChessError::SquareOutOfRange { row, col })
        }
        _ => Err(ChessError::InvalidSquare(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algebraic() {
        assert_eq!(parse_click("e2").unwrap(), Square::new(6, 4));
        assert_eq!(parse_click("  H8 ").unwrap(), Square::new(0, 7));
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!(parse_click("6 4").unwrap(), Square::new(6, 4));
        assert_eq!(parse_click("0\t7").unwrap(), Square::new(0, 7));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_click("8 0"),
            Err(ChessError::SquareOutOfRange { row: 8, col: 0 })
        ));
        assert!(matches!(parse_click("x y"), Err(ChessError::InvalidSquare(_))));
        assert!(matches!(parse_click(""), Err(ChessError::InvalidSquare(_))));
        assert!(matches!(parse_click("1 2 3"), Err(ChessError::InvalidSquare(_))));
    }
}
