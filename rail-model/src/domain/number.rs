//! Train number type.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid train number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid train number: {reason}")]
pub struct InvalidTrainNumber {
    reason: &'static str,
}

/// A validated train number.
///
/// Train numbers are three ASCII letters or digits, an optional hyphen,
/// then two more letters or digits (e.g. "AB1-23" or "ab123"). Letters may
/// be in either case. Spelling is kept as given, so "ABC12" and "abc12"
/// are different numbers.
///
/// # Examples
///
/// ```
/// use rail_model::domain::TrainNumber;
///
/// let number = TrainNumber::parse("RX7-01").unwrap();
/// assert_eq!(number.as_str(), "RX7-01");
///
/// assert!(TrainNumber::parse("RX701").is_ok());
/// assert!(TrainNumber::parse("RX-701").is_err());
/// assert!(TrainNumber::parse("RX70").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainNumber(String);

impl TrainNumber {
    /// Parse a train number from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTrainNumber> {
        let bytes = s.as_bytes();

        let (head, tail) = match bytes.len() {
            5 => (&bytes[..3], &bytes[3..]),
            6 => {
                if bytes[3] != b'-' {
                    return Err(InvalidTrainNumber {
                        reason: "fourth character of a 6-character number must be '-'",
                    });
                }
                (&bytes[..3], &bytes[4..])
            }
            _ => {
                return Err(InvalidTrainNumber {
                    reason: "must be XXXXX or XXX-XX",
                });
            }
        };

        if !head.iter().chain(tail).all(u8::is_ascii_alphanumeric) {
            return Err(InvalidTrainNumber {
                reason: "must contain only ASCII letters and digits besides the hyphen",
            });
        }

        Ok(TrainNumber(s.to_string()))
    }

    /// Returns the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TrainNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.0)
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_numbers() {
        assert!(TrainNumber::parse("ABC12").is_ok());
        assert!(TrainNumber::parse("ABC-12").is_ok());
        assert!(TrainNumber::parse("abc-12").is_ok());
        assert!(TrainNumber::parse("12345").is_ok());
        assert!(TrainNumber::parse("1a2-B3").is_ok());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(TrainNumber::parse("").is_err());
        assert!(TrainNumber::parse("AB12").is_err());
        assert!(TrainNumber::parse("ABC123").is_err());
        assert!(TrainNumber::parse("ABC-123").is_err());
    }

    #[test]
    fn reject_misplaced_hyphen() {
        assert!(TrainNumber::parse("AB-123").is_err());
        assert!(TrainNumber::parse("ABCD-1").is_err());
        assert!(TrainNumber::parse("-ABC12").is_err());
        assert!(TrainNumber::parse("ABC--2").is_err());
    }

    #[test]
    fn reject_non_alphanumeric() {
        assert!(TrainNumber::parse("AB C12").is_err());
        assert!(TrainNumber::parse("AB_12").is_err());
        assert!(TrainNumber::parse("ÄB12").is_err());
        assert!(TrainNumber::parse("ABC-1!").is_err());
    }

    #[test]
    fn spelling_is_preserved() {
        let upper = TrainNumber::parse("ABC12").unwrap();
        let lower = TrainNumber::parse("abc12").unwrap();
        assert_eq!(lower.as_str(), "abc12");
        assert_ne!(upper, lower);
    }

    #[test]
    fn error_display() {
        let err = TrainNumber::parse("AB").unwrap_err();
        assert_eq!(err.to_string(), "invalid train number: must be XXXXX or XXX-XX");
    }

    #[test]
    fn display_and_debug() {
        let number = TrainNumber::parse("PX1-07").unwrap();
        assert_eq!(format!("{}", number), "PX1-07");
        assert_eq!(format!("{:?}", number), "TrainNumber(PX1-07)");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any number in the documented format parses and keeps its spelling
        #[test]
        fn valid_always_parses(s in "[A-Za-z0-9]{3}-?[A-Za-z0-9]{2}") {
            let number = TrainNumber::parse(&s).unwrap();
            prop_assert_eq!(number.as_str(), s.as_str());
        }

        /// Wrong-length alphanumeric strings are rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Za-z0-9]{0,4}|[A-Za-z0-9]{6,10}") {
            prop_assert!(TrainNumber::parse(&s).is_err());
        }

        /// A symbol anywhere but the hyphen slot is rejected
        #[test]
        fn symbol_rejected(prefix in "[A-Z0-9]{2}", sym in "[ _.#/+]", suffix in "[A-Z0-9]{2}") {
            let s = format!("{prefix}{sym}{suffix}");
            prop_assert!(TrainNumber::parse(&s).is_err());
        }
    }
}
