pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{DATA_DIR_ENV, get_data_dir};
pub use paths::{file_extension, read_data_file, relative_to_parent};
pub use terminal::sanitize_for_terminal;
