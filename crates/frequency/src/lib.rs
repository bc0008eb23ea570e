//! Lexis frequency layer.
//!
//! Counts tokens and ranks them. The table keeps terms in the order they
//! were first seen, and ranking is a stable sort on count, so two runs over
//! the same tokens always produce the same top list, ties included.
//!
//! ```rust
//! use frequency::FrequencyTable;
//!
//! let table = FrequencyTable::from_tokens(["sapere", "meraviglia", "del", "sapere"]);
//! let top = table.top_n(2);
//! assert_eq!(top[0].term, "sapere");
//! assert_eq!(top[0].count, 2);
//! assert_eq!(top[1].term, "meraviglia");
//! ```

mod rank;
mod table;

pub use crate::table::{FrequencyTable, TermCount};
