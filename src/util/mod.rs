//! Contains utilities for post-processing and file output

mod file_io;
mod post;

pub use crate::util::file_io::*;
pub use crate::util::post::*;
