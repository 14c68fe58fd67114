pub mod hash;
pub mod numbers;
pub mod paths;

pub(crate) use hash::{extract_hash, hex_upper};
pub(crate) use numbers::fmt_number;
pub(crate) use paths::module_file_path;
