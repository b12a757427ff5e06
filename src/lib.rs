//! # jsonsift
//!
//! A library for classifying arbitrary text as structured data (JSON) or
//! plain text, normalizing it into a canonical pretty-printed form, and
//! exposing the parsed structure as a navigable tree.
//!
//! ## What it does
//!
//! Paste anything at [`classify`] and it sorts the input into one of two
//! buckets:
//!
//! - **Structured**: the text parsed as JSON, either directly or after
//!   recovering a JSON document that was escaped inside a string literal
//!   (the shape log pipelines and debugger copy-paste produce). The result
//!   carries the parsed [`Value`] and its canonical two-space
//!   pretty-printed form.
//! - **Plain text**: everything else. Common backslash escapes are decoded
//!   so `\n` in pasted logs becomes a real line break.
//!
//! Either way the result carries descriptive statistics (words, characters,
//! lines, containers) and the non-blank lines for per-line operations.
//!
//! ## Key Features
//!
//! - **Total classification**: every input produces a result; malformed
//!   JSON degrades to plain text instead of erroring
//! - **Order fidelity**: object keys keep their document order through
//!   parse, normalize, and tree building (backed by `indexmap`)
//! - **Tree model**: [`build_tree`] produces a renderer-ready tree with
//!   labels, depths, and last-sibling markers
//! - **Serde Compatible**: [`Value`] and the result types implement
//!   `Serialize` so downstream renderers can re-encode them
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! jsonsift = "0.1"
//! ```
//!
//! ### Classifying text
//!
//! ```rust
//! use jsonsift::{classify, CopySource};
//!
//! let result = classify(r#"{"name":"Alice","roles":["admin","ops"]}"#);
//!
//! assert!(result.is_structured);
//! assert_eq!(result.container_count, 2);
//! assert_eq!(
//!     result.copy_text(CopySource::Minified).unwrap(),
//!     r#"{"name":"Alice","roles":["admin","ops"]}"#
//! );
//! println!("{}", result.canonical_text);
//! ```
//!
//! ### Building the tree model
//!
//! ```rust
//! use jsonsift::{build_tree, classify, NodeKind};
//!
//! let result = classify(r#"{"items":[1,2,3]}"#);
//! let root = build_tree(result.value.as_ref().unwrap());
//!
//! assert_eq!(root.label, "root");
//! assert_eq!(root.children[0].label, "items");
//! assert_eq!(root.children[0].kind, NodeKind::Array);
//! assert_eq!(root.children[0].children.len(), 3);
//! ```
//!
//! ### Recovering escaped documents
//!
//! ```rust
//! use jsonsift::classify;
//!
//! // JSON that was itself serialized into a string literal.
//! let result = classify(r#""{\"level\":\"info\",\"ok\":true}""#);
//! assert!(result.is_structured);
//! ```
//!
//! ## Direct parser access
//!
//! The parser and serializer behind the pipeline are public for callers
//! that want error details instead of the plain-text fallback:
//!
//! ```rust
//! use jsonsift::{from_str, to_string_pretty};
//!
//! let value = from_str(r#"{"a":1}"#)?;
//! assert_eq!(to_string_pretty(&value), "{\n  \"a\": 1\n}");
//! # Ok::<(), jsonsift::Error>(())
//! ```

pub mod classify;
pub mod de;
pub mod error;
pub mod feedback;
pub mod macros;
pub mod map;
pub mod ser;
pub mod tree;
pub mod value;

pub use classify::{classify, ClassificationResult, CopySource};
pub use de::{from_str, MAX_DEPTH};
pub use error::{Error, Result};
pub use feedback::{CopyFeedback, FEEDBACK_TTL};
pub use map::Map;
pub use ser::{to_string, to_string_pretty, INDENT_WIDTH};
pub use tree::{build_tree, NodeKind, ScalarValue, TreeNode, ROOT_LABEL};
pub use value::{Number, Value};
