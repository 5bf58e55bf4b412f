//! Check implementations.
//!
//! Each check is a pure function that takes only the inputs it needs and
//! returns findings; nothing here touches the filesystem or prints.
//!
//! ## Module Structure
//!
//! - `potential`: blocks missing the required `potential` sub-block
//! - `localization`: blocks missing `<name>`/`<name>_desc` localization keys
//! - `braces`: file-scoped `{`/`}` count mismatch
//! - `deprecated`: retired-token occurrences
//! - `bom`: localization source missing its UTF-8 byte-order mark

pub mod bom;
pub mod braces;
pub mod deprecated;
pub mod localization;
pub mod potential;
