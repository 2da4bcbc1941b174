pub mod paths;
pub mod terminal;

pub use paths::{MAX_FILE_SIZE_BYTES, format_path_with_tilde, validate_file_size};
pub use terminal::sanitize_for_display;
