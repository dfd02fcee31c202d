use crate::ids::is_ps4_title_id;

/// Prefix tagging a folder name that carries a title id. It only survives
/// sanitizing when what follows it is a title id.
pub const TITLE_ID_FOLDER_MARKER: &str = "_PS4TID_";
pub const FALLBACK_FOLDER_NAME: &str = "no_name";
const MAX_FOLDER_NAME_CHARS: usize = 254;

pub fn make_folder_name_safe(name: &str) -> String {
    let underscored = name.replace([' ', '/', '\\'], "_");

    let (body, keep_marker) = match underscored.strip_prefix(TITLE_ID_FOLDER_MARKER) {
        Some(rest) => (rest, is_ps4_title_id(&rest.replace('_', ""))),
        None => (underscored.as_str(), false),
    };

    let cleaned = body
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
        .collect::<String>();

    let tagged = if keep_marker {
        format!("{TITLE_ID_FOLDER_MARKER}{cleaned}")
    } else {
        cleaned
    };

    let safe = tagged.chars().take(MAX_FOLDER_NAME_CHARS).collect::<String>();
    if safe.is_empty() {
        FALLBACK_FOLDER_NAME.to_string()
    } else {
        safe
    }
}
