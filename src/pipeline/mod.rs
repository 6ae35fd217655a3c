// src/pipeline/mod.rs

//! Digest pipeline: tagging, assembly, pagination, author matching.
//!
//! - `tagger`: match keyword groups against titles and abstracts
//! - `assemble`: build the digest header and ordered entries
//! - `paginate`: split a digest into bounded-length messages
//! - `authors`: match author names against author lists
//! - `run`: orchestration entry points

pub mod assemble;
pub mod authors;
pub mod paginate;
pub mod run;
pub mod tagger;

pub use assemble::{Digest, DigestEntry, assemble};
pub use authors::{assemble_author_digest, find_by_authors};
pub use paginate::{MAX_MESSAGE_LEN, paginate};
pub use run::{run_all, run_authors, run_digest};
pub use tagger::{TagAssignment, normalize, tag_papers};
