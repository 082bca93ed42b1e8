//! # SQL Scanning Module
//!
//! A single-pass, byte-level scanner that sanitizes SQL text and summarizes
//! its shape in the same sweep. There is no parser and no AST: the scanner
//! walks the input once, masking literals, dropping comments and driving a
//! small keyword state machine that decides what belongs in the summary.
//!
//! ## Module Structure
//!
//! - `keywords`: keyword categories, phf lookup and static metadata
//! - `scan`: the scanner itself (comments, literals, whitespace, tokens)
//!
//! ## Design Philosophy
//!
//! 1. **Total**: any byte sequence scans to completion; malformed input is
//!    copied through, never rejected.
//! 2. **Allocation-free scanning**: output grows inside a caller-provided
//!    scratch buffer; keyword lookup folds case into a stack buffer.
//! 3. **ASCII keyword matching**: only ASCII letters participate in keyword
//!    recognition; all other bytes pass through verbatim.

pub mod keywords;
pub mod scan;

pub use keywords::Keyword;
pub use scan::Scanner;
