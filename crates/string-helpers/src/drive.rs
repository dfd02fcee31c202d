//! Google Drive share links.
//!
//! Both extractors return an empty string for links they do not recognize,
//! so callers can treat `""` as "not a Drive link".

const DRIVE_ROOT: &str = "https://drive.google.com/drive";
const FILE_LINK_PREFIX: &str = "https://drive.google.com/file/d/";
const UC_LINK_PREFIX: &str = "https://drive.google.com/uc?id=";

/// `https://drive.google.com/drive/folders/<id>?usp=sharing` -> `<id>`
pub fn extract_drive_folder_id(link: &str) -> String {
    if !link.starts_with(DRIVE_ROOT) {
        return String::new();
    }
    let tail = link.rsplit("folders/").next().unwrap_or(link);
    tail.split('?').next().unwrap_or(tail).to_string()
}

/// `https://drive.google.com/file/d/<id>/view?usp=sharing` -> `<id>`
/// `https://drive.google.com/uc?id=<id>&export=download` -> `<id>`
pub fn extract_drive_file_id(link: &str) -> String {
    if let Some(rest) = link.strip_prefix(FILE_LINK_PREFIX) {
        let before_query = rest.split('?').next().unwrap_or(rest);
        return before_query
            .split('/')
            .next()
            .unwrap_or(before_query)
            .to_string();
    }
    if let Some(rest) = link.strip_prefix(UC_LINK_PREFIX) {
        return rest.split('&').next().unwrap_or(rest).to_string();
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_link_without_folders_segment_keeps_tail() {
        assert_eq!(
            extract_drive_folder_id("https://drive.google.com/drive/u/0/my-drive"),
            "https://drive.google.com/drive/u/0/my-drive"
        );
    }

    #[test]
    fn uc_link_stops_at_first_parameter() {
        assert_eq!(
            extract_drive_file_id("https://drive.google.com/uc?id=XYZ&export=download"),
            "XYZ"
        );
    }
}
