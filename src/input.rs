use std::io::BufRead;

use tracing::trace;

use crate::errors::{Error, Result};

/// Reads the first whitespace-delimited token from `reader` and parses it as `n`.
///
/// Blank lines are skipped. Anything after the first token is left unread.
/// Bytes that are not UTF-8 end up in the token and are reported as
/// [Error::InvalidInput].
pub fn read_integer<R: BufRead>(reader: R) -> Result<i64> {
    for line in reader.split(b'\n') {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        if let Some(token) = line.split_whitespace().next() {
            trace!(token, "read input token");
            return parse_integer(token);
        }
    }
    Err(Error::MissingInput)
}

pub fn parse_integer(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::InvalidInput {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_first_token() {
        assert_eq!(read_integer(Cursor::new("6\n")).unwrap(), 6);
        assert_eq!(read_integer(Cursor::new("  42 17\n99")).unwrap(), 42);
        assert_eq!(read_integer(Cursor::new("\n\n  \t-3")).unwrap(), -3);
        assert_eq!(read_integer(Cursor::new("+8")).unwrap(), 8);
    }

    #[test]
    fn empty_input_is_missing() {
        assert!(matches!(
            read_integer(Cursor::new("")),
            Err(Error::MissingInput)
        ));
        assert!(matches!(
            read_integer(Cursor::new(" \n\t\n")),
            Err(Error::MissingInput)
        ));
    }

    #[test]
    fn malformed_token_is_reported() {
        match read_integer(Cursor::new("six 6")) {
            Err(Error::InvalidInput { token }) => assert_eq!(token, "six"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parse_integer("99999999999999999999").is_err());
        assert!(parse_integer("4.0").is_err());
    }

    #[test]
    fn non_utf8_input_is_invalid() {
        match read_integer(Cursor::new(vec![0xff, b'\n'])) {
            Err(Error::InvalidInput { token }) => assert_eq!(token, "\u{fffd}"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(read_integer(Cursor::new(b"\r\n7\r\n".to_vec())).unwrap(), 7);
    }
}
