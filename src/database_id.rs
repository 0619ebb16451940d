//! Database ID type definition and parsing of IDs taken from requests.

use crate::Error;

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// Parse a raw ID, e.g. from a URL path segment, into a [DatabaseId].
///
/// # Errors
///
/// Returns [Error::InvalidArgument] if `raw_id` is not an integer.
pub fn parse_database_id(raw_id: &str) -> Result<DatabaseId, Error> {
    raw_id
        .trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(raw_id.to_owned()))
}

#[cfg(test)]
mod parse_database_id_tests {
    use crate::Error;

    use super::parse_database_id;

    #[test]
    fn parses_integer() {
        assert_eq!(parse_database_id("42"), Ok(42));
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(parse_database_id(" 7 "), Ok(7));
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert_eq!(
            parse_database_id("abc"),
            Err(Error::InvalidArgument("abc".to_owned()))
        );
    }

    #[test]
    fn rejects_decimal_id() {
        assert_eq!(
            parse_database_id("1.5"),
            Err(Error::InvalidArgument("1.5".to_owned()))
        );
    }
}
