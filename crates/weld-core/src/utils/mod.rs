pub mod fs;

pub use fs::{append_to_file, create_dir_all, has_extension, list_files, write_file};
