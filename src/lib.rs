//! # sqlscrub - Single-Pass SQL Sanitizer and Summarizer
//!
//! sqlscrub rewrites a possibly user-supplied SQL text in one scan, producing
//! two outputs for telemetry pipelines that must never record literal values:
//!
//! - **Sanitized SQL**: the input with every string, hexadecimal and numeric
//!   literal replaced by a single `?` and every comment removed, all other
//!   characters and whitespace preserved verbatim.
//! - **Query summary**: a short, bounded description of the statement's shape
//!   (operation keywords plus target identifiers), suitable for span names
//!   and low-cardinality attributes.
//!
//! ## Quick Start
//!
//! ```
//! use sqlscrub::sanitize;
//!
//! let info = sanitize(Some("SELECT * FROM Orders WHERE Id = 42"));
//! assert_eq!(info.sanitized_sql, "SELECT * FROM Orders WHERE Id = ?");
//! assert_eq!(info.summary, "SELECT Orders");
//! ```
//!
//! ## Architecture
//!
//! The crate is a single driver loop over four cooperating pieces:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │        Public API (sanitize, cache)          │   processor
//! ├──────────────────────────────────────────────┤
//! │  Keyword/identifier tokenizer + summary      │   scanner::scan
//! │  Literal scanners (string / hex / numeric)   │   scanner::scan
//! │  Comment skipper                             │   scanner::scan
//! ├──────────────────────────────────────────────┤
//! │  Static keyword table (phf + metadata)       │   scanner::keywords
//! ├──────────────────────────────────────────────┤
//! │  Pooled scratch buffers (2·|sql| per scan)   │   memory
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Each scan rents one scratch buffer of `2 × |sql|` bytes: the lower half
//! accumulates the sanitized SQL, the upper half the summary. Producing the
//! final strings costs exactly one copy per half.
//!
//! ## Design Goals
//!
//! 1. **Total**: every input yields a result; malformed SQL is at worst
//!    copied through with literals masked. No errors, no panics.
//! 2. **Hot-path friendly**: no heap allocation during the scan beyond the
//!    pooled scratch buffer and the two output strings.
//! 3. **Case-insensitive**: keywords match in any casing; the sanitized
//!    output preserves the caller's casing, the summary is canonical.
//! 4. **Bounded**: the summary never exceeds 255 characters.
//!
//! ## Caching
//!
//! Applications often issue the same statement text repeatedly. A
//! process-wide result cache can short-circuit repeat scans; it is disabled
//! by default and enabled via [`set_cache_capacity`]. Insertion is
//! best-effort with no eviction, sized for a bounded working set of distinct
//! statement texts.
//!
//! ## Module Overview
//!
//! - [`processor`]: public entry point, result cache
//! - [`scanner`]: the single-pass scanner and keyword table
//! - [`memory`]: sharded scratch-buffer pool
//! - [`config`]: centralized constants

pub mod config;
pub mod memory;
pub mod processor;
pub mod scanner;

pub use processor::{
    cache_capacity, cache_len, clear_cache, sanitize, set_cache_capacity, SqlStatementInfo,
};
