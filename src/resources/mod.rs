//! Filesystem resources applied by a copy run.
pub mod copy;
pub(crate) mod helpers;

pub use copy::{FileCopy, copy_file};
