//! File formats for matrices: the flat store text format and headerless
//! delimited (TSV/CSV) single-matrix files.
pub mod delimited;
pub mod text;

pub use delimited::read_matrix_delimited;
pub use text::{load_store_file, read_store, save_store_file, write_store};
