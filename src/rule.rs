use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

use crate::neighborhood::Neighborhood;

/// Rule 30, chaotic.
pub const RULE_30: Rule = Rule::new(30);

/// Rule 90, the Sierpinski triangle. Each cell becomes the XOR of its two diagonal parents.
pub const RULE_90: Rule = Rule::new(90);

/// Rule 110, Turing complete.
pub const RULE_110: Rule = Rule::new(110);

/// Rule 184, traffic flow.
pub const RULE_184: Rule = Rule::new(184);

/// # Representation
/// An elementary rule is stored as its decoded transition table. Entry `i` is the next state of a
/// cell whose [`Neighborhood`] has index `i`, and holds bit `7 - i` of the rule number:
/// ```notrust
/// rule 90:   0   1   0   1   1   0   1   0      (0b0101_1010)
///          111 110 101 100 011 010 001 000      (left, center, right)
/// index:     0   1   2   3   4   5   6   7
/// ```
///
/// See: https://mathworld.wolfram.com/ElementaryCellularAutomaton.html
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    table: [bool; 8],
}

impl Default for Rule {
    fn default() -> Self {
        RULE_90
    }
}

impl Rule {
    /// Decode a Wolfram rule number. Each call produces its own table.
    pub const fn new(n: u8) -> Self {
        let mut table = [false; 8];

        let mut i = 0;
        while i < 8 {
            table[i] = (n >> (7 - i)) & 1 == 1;
            i += 1;
        }

        Self { table }
    }

    /// Like [`Rule::new`], but takes any integer and reduces it modulo 256 first.
    pub fn wrapping(n: i64) -> Self {
        let masked = n.rem_euclid(0x100) as u8;

        if i64::from(masked) != n {
            warn!(n, masked, "Rule number outside 0-255, masking to 8 bits");
        }

        Self::new(masked)
    }

    /// Re-encode the table as a Wolfram rule number.
    pub fn number(&self) -> u8 {
        self.table
            .iter()
            .fold(0, |n, &bit| (n << 1) | u8::from(bit))
    }

    pub fn table(&self) -> [bool; 8] {
        self.table
    }

    /// Next state of the center cell of `nbhd`.
    pub fn apply(&self, nbhd: Neighborhood) -> bool {
        self.table[nbhd.index() as usize]
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule {}", self.number())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Expected a rule number, found end of input")]
    Empty,

    #[error("Invalid digit '{got}' in rule number")]
    InvalidDigit { got: char },

    #[error("Rule number \"{number}\" is out of range, expected 0-255")]
    OutOfRange { number: String },
}

/// Parse rules that look like `90`, `rule 90`, `Rule90` or `W90`.
impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let digits = if let Some(rest) = strip_prefix_ignore_case(s, "rule") {
            rest
        } else if let Some(rest) = strip_prefix_ignore_case(s, "w") {
            rest
        } else {
            s
        };
        let digits = digits.trim_start();

        if digits.is_empty() {
            return Err(RuleError::Empty);
        }

        let mut n: u32 = 0;

        for c in digits.chars() {
            let d = c.to_digit(10).ok_or(RuleError::InvalidDigit { got: c })?;

            n = n * 10 + d;

            if n > u32::from(u8::MAX) {
                return Err(RuleError::OutOfRange {
                    number: digits.to_string(),
                });
            }
        }

        Ok(Self::new(n as u8))
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;

    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::Rule;
    use super::RuleError;
    use crate::neighborhood::Neighborhood;

    #[test]
    fn rule_90_table() {
        let rule = Rule::new(90);

        assert_eq!(
            rule.table(),
            [false, true, false, true, true, false, true, false]
        );

        // (on, on, on) and (off, off, off) both die under rule 90
        assert!(!rule.table()[0]);
        assert!(!rule.table()[7]);
    }

    #[test]
    fn rule_90_is_xor_of_outer_cells() {
        let rule = Rule::new(90);

        for left in [false, true] {
            for center in [false, true] {
                for right in [false, true] {
                    let nbhd = Neighborhood::new(left, center, right);
                    assert_eq!(rule.apply(nbhd), left ^ right);
                }
            }
        }
    }

    #[test]
    fn independent_tables() {
        let a = Rule::new(90);
        let b = Rule::new(30);

        assert_ne!(a, b);
        assert_eq!(a.number(), 90);
        assert_eq!(b.number(), 30);
    }

    #[test]
    fn wrapping_masks_to_8_bits() {
        assert_eq!(Rule::wrapping(90), Rule::new(90));
        assert_eq!(Rule::wrapping(346), Rule::new(90));
        assert_eq!(Rule::wrapping(-1), Rule::new(255));
        assert_eq!(Rule::wrapping(256), Rule::new(0));
    }

    #[test]
    fn parse_rule() {
        assert_eq!("90".parse(), Ok(Rule::new(90)));
        assert_eq!(" rule 90 ".parse(), Ok(Rule::new(90)));
        assert_eq!("Rule110".parse(), Ok(Rule::new(110)));
        assert_eq!("W30".parse(), Ok(Rule::new(30)));
        assert_eq!("w 0".parse(), Ok(Rule::new(0)));
        assert_eq!("255".parse(), Ok(Rule::new(255)));
    }

    #[test]
    fn parse_rule_errors() {
        assert_eq!("".parse::<Rule>(), Err(RuleError::Empty));
        assert_eq!("rule".parse::<Rule>(), Err(RuleError::Empty));
        assert_eq!("9x".parse::<Rule>(), Err(RuleError::InvalidDigit { got: 'x' }));
        assert_eq!("-1".parse::<Rule>(), Err(RuleError::InvalidDigit { got: '-' }));
        assert_eq!(
            "256".parse::<Rule>(),
            Err(RuleError::OutOfRange {
                number: "256".to_string()
            })
        );
        assert_eq!(
            "99999999999".parse::<Rule>(),
            Err(RuleError::OutOfRange {
                number: "99999999999".to_string()
            })
        );
        assert_eq!("é90".parse::<Rule>(), Err(RuleError::InvalidDigit { got: 'é' }));
    }

    #[test]
    fn display() {
        assert_eq!(Rule::new(184).to_string(), "rule 184");
    }

    proptest! {
        #[test]
        fn table_holds_bits_msb_first(n in any::<u8>()) {
            let table = Rule::new(n).table();

            for (i, &bit) in table.iter().enumerate() {
                prop_assert_eq!(bit, (n >> (7 - i)) & 1 == 1);
            }
        }

        #[test]
        fn number_recovers_rule(n in any::<u8>()) {
            prop_assert_eq!(Rule::new(n).number(), n);
            prop_assert_eq!(n.to_string().parse::<Rule>(), Ok(Rule::new(n)));
        }

        #[test]
        fn wrapping_is_modulo_256(n in any::<u8>(), k in -1000i64..1000) {
            prop_assert_eq!(Rule::wrapping(i64::from(n) + 256 * k), Rule::new(n));
        }
    }
}
