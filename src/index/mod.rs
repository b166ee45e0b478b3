//! Repository package indices.
//!
//! Every repository carries an index file at its root (`.repoman-index` by
//! default) listing its packages, one [`IndexRecord`] per line. The index is
//! regenerated wholesale by [`IndexBuilder::write_index`] and read back with
//! [`read_index`]; nothing updates it incrementally.
//!
//! ```text
//! source editors/vim Vi IMproved, a programmer's text editor
//! source net/curl Command line tool for transferring data with URLs
//! source net/curl/docs
//! ```

mod builder;
mod record;


pub use builder::IndexBuilder;
pub use record::{IndexRecord, PackageKind, parse_index, read_index};
