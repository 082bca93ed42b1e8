//! # Single-Pass SQL Scanner
//!
//! Walks a SQL text once, writing two outputs into the halves of a
//! caller-provided scratch buffer:
//!
//! - the **sanitized** text: literals replaced by `?`, comments removed,
//!   everything else byte-for-byte identical to the input;
//! - the **summary**: captured keywords (canonical uppercase) and target
//!   identifiers (original case), space-separated and bounded.
//!
//! ## Scan Order
//!
//! At each position the scanner tries, in order: comment, string literal,
//! hex literal, numeric literal, whitespace, token. The first consumer wins
//! and the loop restarts. Every pass consumes at least one byte, so the
//! scan terminates on any input.
//!
//! ## Buffer Discipline
//!
//! The sanitized half never outgrows the input: each consumed byte produces
//! at most one output byte (literals shrink to one `?`, comments to
//! nothing). Summary writes are clamped to `min(SUMMARY_MAX_LEN, |input|)`,
//! so both halves of a `2·|input|` scratch buffer are always sufficient.
//!
//! ## Failure Semantics
//!
//! None. Unterminated strings and block comments swallow the rest of the
//! input; unrecognized bytes are copied through. The scanner neither errors
//! nor panics.

use super::keywords::{self, Keyword};
use crate::config::SUMMARY_MAX_LEN;

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

#[inline]
fn is_ascii_letter(b: u8) -> bool {
    (b | 0x20).is_ascii_lowercase()
}

#[inline]
fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}

/// One scan over one statement. Create with the input and the two scratch
/// halves, then call [`run`](Scanner::run).
pub struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    sanitized: &'a mut [u8],
    san_pos: usize,
    summary: &'a mut [u8],
    sum_pos: usize,
    sum_cap: usize,
    /// Most recently matched keyword; restricts candidate matching and
    /// feeds the summary-capture predicates.
    prev_keyword: Keyword,
    /// One-shot flag: the next identifier token goes into the summary.
    capture_next_token: bool,
}

impl<'a> Scanner<'a> {
    /// `sanitized` must be at least `input.len()` bytes; `summary` bounds
    /// itself to `min(SUMMARY_MAX_LEN, summary.len())`.
    pub fn new(input: &'a [u8], sanitized: &'a mut [u8], summary: &'a mut [u8]) -> Self {
        let sum_cap = SUMMARY_MAX_LEN.min(summary.len());
        Self {
            bytes: input,
            pos: 0,
            sanitized,
            san_pos: 0,
            summary,
            sum_pos: 0,
            sum_cap,
            prev_keyword: Keyword::Unknown,
            capture_next_token: false,
        }
    }

    /// Scan to end of input. Returns the written lengths of the sanitized
    /// and summary halves, with the summary's trailing separator trimmed.
    pub fn run(mut self) -> (usize, usize) {
        while self.pos < self.bytes.len() {
            if self.skip_comment() {
                continue;
            }
            if self.sanitize_string_literal() {
                continue;
            }
            if self.sanitize_hex_literal() {
                continue;
            }
            if self.sanitize_numeric_literal() {
                continue;
            }
            if self.parse_whitespace() {
                continue;
            }
            self.parse_next_token();
        }
        if self.sum_pos > 0 && self.summary[self.sum_pos - 1] == b' ' {
            self.sum_pos -= 1;
        }
        (self.san_pos, self.sum_pos)
    }

    fn skip_comment(&mut self) -> bool {
        let bytes = self.bytes;
        let len = bytes.len();
        let c = bytes[self.pos];

        if c == b'/' && bytes.get(self.pos + 1) == Some(&b'*') {
            let mut i = self.pos + 2;
            loop {
                if i >= len {
                    // Unterminated: the rest of the input is the comment.
                    self.pos = len;
                    return true;
                }
                if bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
                    self.pos = i + 2;
                    return true;
                }
                i += 1;
            }
        }

        if c == b'-' && bytes.get(self.pos + 1) == Some(&b'-') {
            let mut i = self.pos + 2;
            // Stop before the terminator so the whitespace pass keeps the
            // line break in the sanitized output.
            while i < len && bytes[i] != b'\n' && bytes[i] != b'\r' {
                i += 1;
            }
            self.pos = i;
            return true;
        }

        false
    }

    fn sanitize_string_literal(&mut self) -> bool {
        let bytes = self.bytes;
        let len = bytes.len();
        if bytes[self.pos] != b'\'' {
            return false;
        }
        let mut i = self.pos + 1;
        loop {
            if i >= len {
                // Unterminated: swallow the tail.
                break;
            }
            if bytes[i] == b'\'' {
                if bytes.get(i + 1) == Some(&b'\'') {
                    // '' escapes a quote and does not close the literal.
                    i += 2;
                } else {
                    i += 1;
                    break;
                }
            } else {
                i += 1;
            }
        }
        self.pos = i;
        self.push_sanitized(b'?');
        true
    }

    fn sanitize_hex_literal(&mut self) -> bool {
        let bytes = self.bytes;
        if bytes[self.pos] != b'0' {
            return false;
        }
        match bytes.get(self.pos + 1) {
            Some(&b'x') | Some(&b'X') => {}
            _ => return false,
        }
        let mut i = self.pos + 2;
        while i < bytes.len() && bytes[i].is_ascii_hexdigit() {
            i += 1;
        }
        self.pos = i;
        self.push_sanitized(b'?');
        true
    }

    fn sanitize_numeric_literal(&mut self) -> bool {
        let bytes = self.bytes;
        let len = bytes.len();
        let start = self.pos;
        let c = bytes[start];

        if !(c.is_ascii_digit() || c == b'+' || c == b'-' || c == b'.') {
            return false;
        }

        // Digit-only runs enclosed in parens pass through unchanged so type
        // modifiers like VARCHAR(50) survive sanitization.
        if c.is_ascii_digit() && start > 0 && bytes[start - 1] == b'(' {
            let mut i = start;
            while i < len && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i < len && bytes[i] == b')' {
                self.copy_to_sanitized(start, i + 1);
                self.pos = i + 1;
                return true;
            }
        }

        let mut i = start;
        // A sign only opens a literal immediately before a digit or point.
        if bytes[i] == b'+' || bytes[i] == b'-' {
            match bytes.get(i + 1) {
                Some(n) if n.is_ascii_digit() || *n == b'.' => i += 1,
                _ => return false,
            }
        }
        let mut seen_dot = false;
        // A leading point only opens a literal immediately before a digit.
        if bytes[i] == b'.' {
            match bytes.get(i + 1) {
                Some(n) if n.is_ascii_digit() => {
                    seen_dot = true;
                    i += 1;
                }
                _ => return false,
            }
        }
        if !bytes[i].is_ascii_digit() {
            return false;
        }
        let mut seen_exponent = false;
        while i < len {
            let n = bytes[i];
            if n.is_ascii_digit() {
                i += 1;
            } else if n == b'.' && !seen_dot {
                seen_dot = true;
                i += 1;
            } else if (n == b'e' || n == b'E') && !seen_exponent {
                seen_exponent = true;
                i += 1;
                if i < len && (bytes[i] == b'+' || bytes[i] == b'-') {
                    i += 1;
                }
            } else {
                break;
            }
        }
        self.pos = i;
        self.push_sanitized(b'?');
        true
    }

    fn parse_whitespace(&mut self) -> bool {
        if !is_whitespace(self.bytes[self.pos]) {
            return false;
        }
        let start = self.pos;
        let mut i = start;
        while i < self.bytes.len() && is_whitespace(self.bytes[i]) {
            i += 1;
        }
        self.copy_to_sanitized(start, i);
        self.pos = i;
        true
    }

    fn parse_next_token(&mut self) {
        let c = self.bytes[self.pos];

        // A token under capture is an identifier by fiat; skip matching.
        if is_ascii_letter(c) && !self.capture_next_token && self.try_keyword() {
            return;
        }

        if is_ascii_letter(c) || c == b'_' {
            self.parse_identifier();
            return;
        }

        self.push_sanitized(c);
        if c == b',' && self.prev_keyword == Keyword::From {
            // Comma-separated table lists re-arm identifier capture.
            self.capture_next_token = true;
        }
        self.pos += 1;
    }

    fn try_keyword(&mut self) -> bool {
        let bytes = self.bytes;
        let start = self.pos;
        let mut end = start;
        while end < bytes.len() && is_ident_byte(bytes[end]) {
            end += 1;
        }
        // A keyword must be followed by whitespace or end of input.
        if let Some(&after) = bytes.get(end) {
            if !is_whitespace(after) {
                return false;
            }
        }
        let Some(keyword) = keywords::lookup(&bytes[start..end]) else {
            return false;
        };
        let candidates: &[Keyword] = if start > 0 && bytes[start - 1] == b'(' {
            // Immediately inside a paren only a sub-query head can open.
            keywords::SUBQUERY
        } else {
            let follow_on = self.prev_keyword.info().follow_on;
            if follow_on.is_empty() {
                keywords::TOP_LEVEL
            } else {
                follow_on
            }
        };
        if !candidates.contains(&keyword) {
            return false;
        }

        self.copy_to_sanitized(start, end);
        if self.sum_pos < self.sum_cap && keyword.captured_in_summary(self.prev_keyword) {
            self.capture_summary(keyword.info().text.as_bytes());
        }
        self.prev_keyword = keyword;
        self.capture_next_token = keyword.info().followed_by_identifier;
        self.pos = end;
        true
    }

    fn parse_identifier(&mut self) {
        let bytes = self.bytes;
        let start = self.pos;
        let mut end = start;
        while end < bytes.len() && is_ident_byte(bytes[end]) {
            end += 1;
        }
        self.copy_to_sanitized(start, end);
        if self.capture_next_token && self.sum_pos < self.sum_cap {
            self.capture_summary(&bytes[start..end]);
        }
        self.capture_next_token = false;
        self.pos = end;
    }

    fn capture_summary(&mut self, token: &[u8]) {
        self.write_summary(token);
        self.write_summary(b" ");
    }

    fn write_summary(&mut self, bytes: &[u8]) {
        let available = self.sum_cap - self.sum_pos;
        let n = bytes.len().min(available);
        self.summary[self.sum_pos..self.sum_pos + n].copy_from_slice(&bytes[..n]);
        self.sum_pos += n;
    }

    fn push_sanitized(&mut self, b: u8) {
        self.sanitized[self.san_pos] = b;
        self.san_pos += 1;
    }

    fn copy_to_sanitized(&mut self, from: usize, to: usize) {
        let n = to - from;
        self.sanitized[self.san_pos..self.san_pos + n].copy_from_slice(&self.bytes[from..to]);
        self.san_pos += n;
    }
}
