//! Render CDN URLs.

const CLASS_ICON_BASE_URL: &str = "https://render.worldofwarcraft.com/us/icons/56";

/// Icon URL for a class name. The file is `classicon_` followed by the lowercased name with
/// spaces removed, so `Death Knight` maps to `classicon_deathknight.jpg`.
pub fn class_icon_url(class_name: &str) -> String {
    let key: String = class_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    format!("{}/classicon_{}.jpg", CLASS_ICON_BASE_URL, key)
}
