use std::fmt::{self, Display, Formatter};

/// Core value enumeration used by the interpreter.  A cell is what lives on the data stack and in
/// the data slots of a word's parameter field.
///
/// Cells carry no type tag visible to the language itself.  A number doubles as an arithmetic
/// value, a boolean (0 is false, -1 is true), and a dictionary index used as an address.  Each
/// word's contract decides which reading applies to the cells it pops.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    /// The single scalar number kind.  Integers and floats are used interchangeably.
    Number(f64),

    /// A string literal, as produced by `s"`.
    Text(String),
}

impl Cell {
    /// The canonical true value pushed by the comparison words.
    pub fn truth(flag: bool) -> Cell {
        Cell::Number(if flag { -1.0 } else { 0.0 })
    }

    /// The numeric reading of the cell, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            Cell::Text(_) => None,
        }
    }

    /// The dictionary index reading of the cell.  Negative and fractional numbers have no index
    /// reading.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Cell::Number(value) if *value >= 0.0 && value.fract() == 0.0 => Some(*value as usize),
            _ => None,
        }
    }

    /// The truthiness of the cell when popped by a conditional.  Any non-zero number and any
    /// non-empty string counts as true.
    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::Number(value) => *value != 0.0,
            Cell::Text(text) => !text.is_empty(),
        }
    }

    /// Render the cell in the given numeric base.  Base 10 falls back to the plain Display
    /// rendering.  In any other base only the integer part of a number is shown, which matches
    /// how the runtime has always displayed non-decimal values.
    pub fn to_text_in_base(&self, base: u32) -> String {
        match self {
            Cell::Number(value) if base != 10 => format_radix(value.trunc() as i64, base),
            _ => format!("{}", self),
        }
    }
}

/// Numbers that hold an integral value print without a fractional part, so stack dumps and the
/// ok prompt read the way a Forth user expects.
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Cell::Number(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{}", value)
                }
            }

            Cell::Text(text) => write!(f, "{}", text),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Cell {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Cell {
        Cell::Number(value as f64)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Cell {
        Cell::Number(value as f64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Cell {
        Cell::Text(value.to_string())
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Cell {
        Cell::truth(value)
    }
}

/// Format a signed integer in an arbitrary radix between 2 and 36, lower case digits.
fn format_radix(mut value: i64, base: u32) -> String {
    let digits = "0123456789abcdefghijklmnopqrstuvwxyz".as_bytes();
    let negative = value < 0;

    if value == 0 {
        return "0".to_string();
    }

    if negative {
        value = -value;
    }

    let mut text = Vec::new();

    while value > 0 {
        text.push(digits[(value % base as i64) as usize]);
        value /= base as i64;
    }

    if negative {
        text.push(b'-');
    }

    text.reverse();
    String::from_utf8(text).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(format!("{}", Cell::Number(7.0)), "7");
        assert_eq!(format!("{}", Cell::Number(-3.0)), "-3");
        assert_eq!(format!("{}", Cell::Number(2.5)), "2.5");
    }

    #[test]
    fn radix_rendering() {
        assert_eq!(Cell::Number(255.0).to_text_in_base(16), "ff");
        assert_eq!(Cell::Number(-255.0).to_text_in_base(16), "-ff");
        assert_eq!(Cell::Number(5.0).to_text_in_base(2), "101");
        assert_eq!(Cell::Number(0.0).to_text_in_base(16), "0");
    }

    #[test]
    fn truthiness_follows_the_zero_convention() {
        assert!(Cell::Number(-1.0).is_truthy());
        assert!(!Cell::Number(0.0).is_truthy());
        assert!(Cell::Text("x".to_string()).is_truthy());
        assert!(!Cell::Text(String::new()).is_truthy());
    }
}
