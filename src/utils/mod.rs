pub mod file;
pub mod logging;
pub mod naming;

pub use file::{ensure_directory_exists, safe_move_file, write_file_replacing};
pub use naming::{clean_name, output_file_name};
