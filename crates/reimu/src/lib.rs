//! # reimu
//!
//! A static, read-optimized string-to-int32 lexicon over a double-array
//! trie with tail compression.
//!
//! Build once from an immutable dictionary of byte-string keys, look up in
//! O(|key|), and serialize to a single `REIMU_Lex.v1` binary file. Keys
//! are opaque byte sequences; they must be non-empty and free of NUL
//! bytes. The built [`Lexicon`] is immutable and safe to share across
//! threads without locking.
//!
//! ## Example
//!
//! ```rust
//! let lexicon = reimu::build([("cat", 10), ("car", 20)]).unwrap();
//! assert_eq!(lexicon.get(b"cat"), Some(10));
//! assert_eq!(lexicon.get(b"cab"), None);
//!
//! // Traversal can be resumed byte by byte from any prefix.
//! let mut cursor = reimu::Cursor::new();
//! assert_eq!(lexicon.traverse(b"ca", &mut cursor), None);
//! assert_eq!(lexicon.traverse(b"r", &mut cursor), Some(20));
//! ```

pub mod error;
pub mod json;
pub mod lexicon;

mod block;
mod builder;
mod io;
mod slot;
mod trie;

pub use builder::{PROGRESS_STEP, build, build_with_progress};
pub use error::{Error, Result};
pub use json::from_json;
pub use lexicon::{Cursor, Lexicon};
