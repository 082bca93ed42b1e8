//! # SQL Keyword Table
//!
//! Static metadata for the closed set of keywords the scanner recognizes.
//! Each keyword carries its canonical text, whether the next token is a
//! target identifier, the set of keywords that may legitimately follow it
//! (the follow-on set), and the set of previous keywords after which it
//! contributes to the summary.
//!
//! ## Keyword Lookup
//!
//! Lookup uses a compile-time perfect hash map (phf crate) keyed by the
//! canonical uppercase text. Candidate words are folded to uppercase into a
//! fixed stack buffer before the probe; words longer than the longest
//! keyword skip the probe entirely, so the hot path never allocates.
//!
//! ## Follow-On Sets
//!
//! The follow-on relationships form a small DAG used to restrict matching
//! once a statement head has been seen:
//!
//! ```text
//! SELECT ──> DISTINCT ──> FROM ──> JOIN
//!    └──────────────────────┘
//! INSERT ──> INTO
//! DELETE ──> FROM
//! CREATE/ALTER/DROP ──> TABLE | INDEX | VIEW | ... | UNIQUE | CLUSTERED
//! UNIQUE ──> INDEX | CLUSTERED | NONCLUSTERED
//! CLUSTERED/NONCLUSTERED ──> INDEX ──> ON
//! ```
//!
//! The sets are `&'static [Keyword]` slices into this module, so the
//! cross-references never form heap cycles.

use crate::config::MAX_KEYWORD_LEN;
use phf::phf_map;

/// Logical category of a recognized keyword.
///
/// `Unknown` is the scanner's initial state, not a matchable keyword. The
/// discriminant indexes [`KEYWORD_INFO`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Keyword {
    Select,
    Insert,
    Update,
    Delete,
    Create,
    Alter,
    Drop,
    Distinct,
    From,
    Into,
    Join,
    On,
    Table,
    Index,
    View,
    Procedure,
    Trigger,
    Database,
    Schema,
    Function,
    User,
    Role,
    Sequence,
    Unique,
    Clustered,
    NonClustered,
    Unknown,
}

/// Metadata record for one keyword.
pub struct KeywordInfo {
    /// Canonical uppercase text; written to the summary on capture.
    pub text: &'static str,
    /// Whether the token after this keyword names a target identifier to
    /// capture in the summary.
    pub followed_by_identifier: bool,
    /// Keywords that may legitimately follow this one. Empty means the
    /// scanner falls back to the top-level verbs.
    pub follow_on: &'static [Keyword],
    /// Previous keywords after which this one is captured in the summary.
    /// Empty means the keyword never enters the summary directly.
    pub captured_after: &'static [Keyword],
}

/// Statement-head verbs tried when no follow-on set restricts matching.
pub static TOP_LEVEL: &[Keyword] = &[
    Keyword::Select,
    Keyword::Insert,
    Keyword::Update,
    Keyword::Delete,
    Keyword::Create,
    Keyword::Alter,
    Keyword::Drop,
];

/// Sole candidate immediately after an opening paren (sub-query heads).
pub static SUBQUERY: &[Keyword] = &[Keyword::Select];

/// Objects that may follow CREATE, ALTER and DROP.
static DDL_OBJECTS: &[Keyword] = &[
    Keyword::Table,
    Keyword::Index,
    Keyword::View,
    Keyword::Procedure,
    Keyword::Trigger,
    Keyword::Database,
    Keyword::Schema,
    Keyword::Function,
    Keyword::User,
    Keyword::Role,
    Keyword::Sequence,
    Keyword::Unique,
    Keyword::Clustered,
    Keyword::NonClustered,
];

/// Links of a DDL chain after which its object nouns are captured, e.g.
/// every step of `CREATE UNIQUE CLUSTERED INDEX`.
static DDL_CHAIN: &[Keyword] = &[
    Keyword::Create,
    Keyword::Drop,
    Keyword::Alter,
    Keyword::Unique,
    Keyword::Clustered,
    Keyword::NonClustered,
];

static STATEMENT_HEAD: &[Keyword] = &[Keyword::Unknown];

/// Metadata records, indexed by `Keyword` discriminant.
///
/// Entries must stay in `Keyword` declaration order; `table_alignment`
/// below verifies the mapping.
static KEYWORD_INFO: [KeywordInfo; 27] = [
    KeywordInfo {
        text: "SELECT",
        followed_by_identifier: false,
        follow_on: &[Keyword::Distinct, Keyword::From],
        captured_after: &[Keyword::Unknown, Keyword::Select],
    },
    KeywordInfo {
        text: "INSERT",
        followed_by_identifier: false,
        follow_on: &[Keyword::Into],
        captured_after: STATEMENT_HEAD,
    },
    KeywordInfo {
        text: "UPDATE",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: STATEMENT_HEAD,
    },
    KeywordInfo {
        text: "DELETE",
        followed_by_identifier: false,
        follow_on: &[Keyword::From],
        captured_after: STATEMENT_HEAD,
    },
    KeywordInfo {
        text: "CREATE",
        followed_by_identifier: false,
        follow_on: DDL_OBJECTS,
        captured_after: STATEMENT_HEAD,
    },
    KeywordInfo {
        text: "ALTER",
        followed_by_identifier: false,
        follow_on: DDL_OBJECTS,
        captured_after: STATEMENT_HEAD,
    },
    KeywordInfo {
        text: "DROP",
        followed_by_identifier: false,
        follow_on: DDL_OBJECTS,
        captured_after: STATEMENT_HEAD,
    },
    KeywordInfo {
        text: "DISTINCT",
        followed_by_identifier: false,
        follow_on: &[Keyword::From],
        captured_after: &[Keyword::Select],
    },
    KeywordInfo {
        text: "FROM",
        followed_by_identifier: true,
        follow_on: &[Keyword::Join],
        captured_after: &[],
    },
    KeywordInfo {
        text: "INTO",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: &[],
    },
    KeywordInfo {
        text: "JOIN",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: &[],
    },
    KeywordInfo {
        text: "ON",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: &[],
    },
    KeywordInfo {
        text: "TABLE",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "INDEX",
        followed_by_identifier: true,
        follow_on: &[Keyword::On],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "VIEW",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "PROCEDURE",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "TRIGGER",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "DATABASE",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "SCHEMA",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "FUNCTION",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "USER",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "ROLE",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "SEQUENCE",
        followed_by_identifier: true,
        follow_on: &[],
        captured_after: DDL_CHAIN,
    },
    KeywordInfo {
        text: "UNIQUE",
        followed_by_identifier: false,
        follow_on: &[Keyword::Index, Keyword::Clustered, Keyword::NonClustered],
        captured_after: &[Keyword::Create, Keyword::Drop, Keyword::Alter],
    },
    KeywordInfo {
        text: "CLUSTERED",
        followed_by_identifier: false,
        follow_on: &[Keyword::Index],
        captured_after: &[Keyword::Create, Keyword::Drop, Keyword::Alter, Keyword::Unique],
    },
    KeywordInfo {
        text: "NONCLUSTERED",
        followed_by_identifier: false,
        follow_on: &[Keyword::Index],
        captured_after: &[Keyword::Create, Keyword::Drop, Keyword::Alter, Keyword::Unique],
    },
    KeywordInfo {
        text: "",
        followed_by_identifier: false,
        follow_on: &[],
        captured_after: &[],
    },
];

static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "SELECT" => Keyword::Select,
    "INSERT" => Keyword::Insert,
    "UPDATE" => Keyword::Update,
    "DELETE" => Keyword::Delete,
    "CREATE" => Keyword::Create,
    "ALTER" => Keyword::Alter,
    "DROP" => Keyword::Drop,
    "DISTINCT" => Keyword::Distinct,
    "FROM" => Keyword::From,
    "INTO" => Keyword::Into,
    "JOIN" => Keyword::Join,
    "ON" => Keyword::On,
    "TABLE" => Keyword::Table,
    "INDEX" => Keyword::Index,
    "VIEW" => Keyword::View,
    "PROCEDURE" => Keyword::Procedure,
    "TRIGGER" => Keyword::Trigger,
    "DATABASE" => Keyword::Database,
    "SCHEMA" => Keyword::Schema,
    "FUNCTION" => Keyword::Function,
    "USER" => Keyword::User,
    "ROLE" => Keyword::Role,
    "SEQUENCE" => Keyword::Sequence,
    "UNIQUE" => Keyword::Unique,
    "CLUSTERED" => Keyword::Clustered,
    "NONCLUSTERED" => Keyword::NonClustered,
};

const _: () = assert!(
    "NONCLUSTERED".len() == MAX_KEYWORD_LEN,
    "MAX_KEYWORD_LEN must equal the longest keyword"
);

impl Keyword {
    /// Metadata record for this keyword.
    pub fn info(self) -> &'static KeywordInfo {
        &KEYWORD_INFO[self as usize]
    }

    /// Whether this keyword enters the summary given the previously matched
    /// keyword.
    pub fn captured_in_summary(self, prev: Keyword) -> bool {
        self.info().captured_after.contains(&prev)
    }
}

/// Case-insensitive keyword lookup for a scanned word.
///
/// The word is folded to uppercase into a stack buffer; words longer than
/// [`MAX_KEYWORD_LEN`] cannot be keywords and skip the probe.
pub fn lookup(word: &[u8]) -> Option<Keyword> {
    if word.is_empty() || word.len() > MAX_KEYWORD_LEN {
        return None;
    }
    let mut upper = [0u8; MAX_KEYWORD_LEN];
    for (dst, &src) in upper.iter_mut().zip(word) {
        *dst = src.to_ascii_uppercase();
    }
    let key = std::str::from_utf8(&upper[..word.len()]).ok()?;
    KEYWORDS.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_alignment() {
        for (text, kw) in KEYWORDS.entries() {
            assert_eq!(kw.info().text, *text, "KEYWORD_INFO out of order");
        }
        assert_eq!(Keyword::Unknown.info().text, "");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup(b"select"), Some(Keyword::Select));
        assert_eq!(lookup(b"SELECT"), Some(Keyword::Select));
        assert_eq!(lookup(b"SeLeCt"), Some(Keyword::Select));
        assert_eq!(lookup(b"nonclustered"), Some(Keyword::NonClustered));
    }

    #[test]
    fn lookup_rejects_non_keywords() {
        assert_eq!(lookup(b""), None);
        assert_eq!(lookup(b"Orders"), None);
        assert_eq!(lookup(b"SELECTED"), None);
        assert_eq!(lookup(b"a_very_long_identifier_name"), None);
        assert_eq!(lookup(b"FROM.x"), None);
    }

    #[test]
    fn follow_on_chains() {
        assert_eq!(Keyword::Select.info().follow_on, &[Keyword::Distinct, Keyword::From]);
        assert_eq!(Keyword::Insert.info().follow_on, &[Keyword::Into]);
        assert_eq!(Keyword::Delete.info().follow_on, &[Keyword::From]);
        assert_eq!(Keyword::Index.info().follow_on, &[Keyword::On]);
        assert!(Keyword::Create.info().follow_on.contains(&Keyword::Unique));
        assert!(Keyword::Unique.info().follow_on.contains(&Keyword::Clustered));
        assert!(Keyword::Update.info().follow_on.is_empty());
    }

    #[test]
    fn capture_predicates() {
        assert!(Keyword::Select.captured_in_summary(Keyword::Unknown));
        assert!(Keyword::Select.captured_in_summary(Keyword::Select));
        assert!(!Keyword::Select.captured_in_summary(Keyword::From));
        assert!(Keyword::Distinct.captured_in_summary(Keyword::Select));
        assert!(Keyword::Index.captured_in_summary(Keyword::Clustered));
        assert!(Keyword::Clustered.captured_in_summary(Keyword::Unique));
        assert!(!Keyword::From.captured_in_summary(Keyword::Select));
        assert!(!Keyword::On.captured_in_summary(Keyword::Index));
    }

    #[test]
    fn identifier_expecting_keywords() {
        for kw in [
            Keyword::From,
            Keyword::Into,
            Keyword::Join,
            Keyword::On,
            Keyword::Table,
            Keyword::Index,
            Keyword::View,
            Keyword::Update,
        ] {
            assert!(kw.info().followed_by_identifier, "{kw:?}");
        }
        for kw in [Keyword::Select, Keyword::Insert, Keyword::Delete, Keyword::Unique] {
            assert!(!kw.info().followed_by_identifier, "{kw:?}");
        }
    }
}
