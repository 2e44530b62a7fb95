//! Offline log reader for the line-oriented format produced by an external
//! RDS spy tool: one group per line, four 16-bit hex words, each with an
//! optional `:<bler>` suffix (`0`..`3`, or `U` for uncorrectable). A bare
//! word with no suffix is treated as error-free.
//!
//! This is a thin text parser; it performs no protocol interpretation and
//! hands the resulting `Group`s straight to `Decoder::decode`.

use std::fs;
use std::path::Path;

use crate::block::{Bler, Block};
use crate::error::RdsError;
use crate::group::Group;

fn parse_bler(token: &str) -> Option<Bler> {
    match token {
        "0" => Some(Bler::None),
        "1" => Some(Bler::OneOrTwo),
        "2" | "3" => Some(Bler::ThreeToFive),
        "U" | "u" => Some(Bler::SixPlus),
        _ => None,
    }
}

fn parse_word(word: &str, line_no: usize) -> Result<Block, RdsError> {
    let (hex_part, bler) = match word.split_once(':') {
        Some((hex_part, suffix)) => {
            let bler = parse_bler(suffix)
                .ok_or_else(|| RdsError::InvalidHexWord(word.to_string(), line_no))?;
            (hex_part, bler)
        }
        None => (word, Bler::None),
    };
    let value = u16::from_str_radix(hex_part, 16)
        .map_err(|_| RdsError::InvalidHexWord(word.to_string(), line_no))?;
    Ok(Block::new(value, bler))
}

fn parse_line(line: &str, line_no: usize) -> Result<Group, RdsError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() != 4 {
        return Err(RdsError::MalformedLogLine { line_no, line: line.to_string() });
    }
    let a = parse_word(words[0], line_no)?;
    let b = parse_word(words[1], line_no)?;
    let c = parse_word(words[2], line_no)?;
    let d = parse_word(words[3], line_no)?;
    Ok(Group::new(a, b, c, d))
}

/// Reads every group from `path`, skipping blank lines. Returns
/// `LogFileUnreadable` if the file cannot be opened, `LogFileEmpty` if it
/// contains no groups, or a parse error for the first malformed line.
pub fn read_log(path: &Path) -> Result<Vec<Group>, RdsError> {
    let contents = fs::read_to_string(path).map_err(|source| RdsError::LogFileUnreadable {
        path: path.display().to_string(),
        source,
    })?;

    let mut groups = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        groups.push(parse_line(line, idx + 1)?);
    }

    if groups.is_empty() {
        return Err(RdsError::LogFileEmpty(path.display().to_string()));
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_bare_hex_words_as_error_free() {
        let group = parse_line("1234 5678 ABCD EF01", 1).unwrap();
        assert_eq!(group.a.value, 0x1234);
        assert_eq!(group.a.errors, Bler::None);
        assert_eq!(group.d.value, 0xEF01);
    }

    #[test]
    fn parses_bler_suffixes() {
        let group = parse_line("1234:0 5678:1 ABCD:3 EF01:U", 1).unwrap();
        assert_eq!(group.a.errors, Bler::None);
        assert_eq!(group.b.errors, Bler::OneOrTwo);
        assert_eq!(group.c.errors, Bler::ThreeToFive);
        assert_eq!(group.d.errors, Bler::SixPlus);
    }

    #[test]
    fn rejects_line_with_wrong_word_count() {
        let err = parse_line("1234 5678 ABCD", 3).unwrap_err();
        assert!(matches!(err, RdsError::MalformedLogLine { line_no: 3, .. }));
    }

    #[test]
    fn rejects_invalid_hex() {
        let err = parse_line("ZZZZ 5678 ABCD EF01", 2).unwrap_err();
        assert!(matches!(err, RdsError::InvalidHexWord(_, 2)));
    }

    #[test]
    fn read_log_skips_blank_and_comment_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header comment").unwrap();
        writeln!(file, "1234 5678 ABCD EF01").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "0000 0000 0000 0000").unwrap();
        let groups = read_log(file.path()).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn read_log_reports_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = read_log(file.path()).unwrap_err();
        assert!(matches!(err, RdsError::LogFileEmpty(_)));
    }

    #[test]
    fn read_log_reports_unreadable_path() {
        let err = read_log(Path::new("/nonexistent/path/to/log.txt")).unwrap_err();
        assert!(matches!(err, RdsError::LogFileUnreadable { .. }));
    }
}
