pub mod chunk;
pub mod drive;
pub mod folder;
pub mod format;
pub mod ids;

pub use chunk::chunker;
pub use drive::{extract_drive_file_id, extract_drive_folder_id};
pub use folder::make_folder_name_safe;
pub use format::{pretty_bytes, pretty_seconds_words, pretty_time};
pub use ids::{is_ps4_title_id, is_psn_name, is_str_int};
