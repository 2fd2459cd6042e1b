//! # Vocabulary Store
//!
//! File-level load/save of vocab artifacts, and resolution of relative
//! vocab locators against a data directory.

pub mod path_resolver;
mod vocab_store;

#[doc(inline)]
pub use path_resolver::{PathResolver, VOCABIN_DATA_DIR, VOCABIN_PATH_CONFIG};
#[doc(inline)]
pub use vocab_store::*;
