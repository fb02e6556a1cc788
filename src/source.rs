use std::fs;
use std::io;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str;

use crate::error::{BenchError, InvalidInput, Result};

/// Reads one array per line: whitespace-separated signed decimal integers.
///
/// Yields the 1-based line position alongside each array. Blank lines come
/// through as empty arrays; a line that isn't UTF-8 is an invalid array, not
/// a read failure.
pub struct ArraySource<R> {
    lines: io::Split<R>,
    position: usize,
}

impl<R: BufRead> ArraySource<R> {
    pub fn new(reader: R) -> Self {
        Self { lines: reader.split(b'\n'), position: 0 }
    }
}

impl ArraySource<BufReader<fs::File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = fs::File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for ArraySource<R> {
    type Item = Result<(usize, Vec<i32>)>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.position += 1;
        let position = self.position;
        let bytes = match line {
            Ok(bytes) => bytes,
            Err(e) => return Some(Err(e.into())),
        };

        Some(decode_line(position, &bytes)
            .and_then(|line| parse_line(position, line))
            .map(|arr| (position, arr)))
    }
}

fn decode_line(position: usize, bytes: &[u8]) -> Result<&str> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    str::from_utf8(bytes).map_err(|e| BenchError::InvalidInput {
        position,
        reason: InvalidInput::Encoding { offset: e.valid_up_to() },
    })
}

pub fn parse_line(position: usize, line: &str) -> Result<Vec<i32>> {
    line.split_whitespace()
        .map(|token| token.parse::<i32>().map_err(|_| BenchError::InvalidInput {
            position,
            reason: InvalidInput::Token { token: token.to_owned() },
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(text: &str) -> Vec<Result<(usize, Vec<i32>)>> {
        ArraySource::new(Cursor::new(text)).collect()
    }

    #[test]
    fn one_array_per_line() {
        let arrays: Vec<_> = read_all("3 1 2\n-5 10\n").into_iter().map(|x| x.unwrap()).collect();
        assert_eq!(arrays, vec![(1, vec![3, 1, 2]), (2, vec![-5, 10])]);
    }

    #[test]
    fn mixed_whitespace_and_crlf() {
        let arrays: Vec<_> = read_all("  7\t8   9 \r\n").into_iter().map(|x| x.unwrap()).collect();
        assert_eq!(arrays, vec![(1, vec![7, 8, 9])]);
    }

    #[test]
    fn blank_line_is_empty_array() {
        let arrays: Vec<_> = read_all("1\n\n2\n").into_iter().map(|x| x.unwrap()).collect();
        assert_eq!(arrays, vec![(1, vec![1]), (2, vec![]), (3, vec![2])]);
    }

    #[test]
    fn bad_token_reports_position() {
        let res = read_all("1 2\n3 four 5\n6\n");
        assert_eq!(res.len(), 3);
        match &res[1] {
            Err(BenchError::InvalidInput { position, reason }) => {
                assert_eq!(*position, 2);
                assert_eq!(*reason, InvalidInput::Token { token: "four".to_owned() });
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(res[2].as_ref().unwrap(), &(3, vec![6]));
    }

    #[test]
    fn non_utf8_line_is_invalid_not_fatal() {
        let res: Vec<_> = ArraySource::new(Cursor::new(&b"3 1 2\n\xff\xfe 4\n7 6\n"[..])).collect();
        assert_eq!(res.len(), 3);
        assert_eq!(res[0].as_ref().unwrap(), &(1, vec![3, 1, 2]));
        match &res[1] {
            Err(BenchError::InvalidInput { position, reason }) => {
                assert_eq!(*position, 2);
                assert_eq!(*reason, InvalidInput::Encoding { offset: 0 });
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(res[2].as_ref().unwrap(), &(3, vec![7, 6]));
    }

    #[test]
    fn last_line_without_newline() {
        let arrays: Vec<_> = read_all("1 2\n3").into_iter().map(|x| x.unwrap()).collect();
        assert_eq!(arrays, vec![(1, vec![1, 2]), (2, vec![3])]);
    }

    #[test]
    fn out_of_range_is_bad_token() {
        assert!(parse_line(1, "99999999999").is_err());
    }

    #[test]
    fn missing_file() {
        assert!(ArraySource::open("/nonexistent/arrays.txt").is_err());
    }
}
