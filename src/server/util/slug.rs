//! URL slugs for guild and realm names as the Blizzard API expects them.

/// Converts a display name into an API slug.
///
/// Lowercases, drops every character outside `[a-z0-9 -]` and collapses runs of spaces and
/// hyphens into a single hyphen. Surrounding whitespace is trimmed first. Applying it to its
/// own output is a no-op.
///
/// # Arguments
/// - `name` - Display name, e.g. `"Nose Beers But No Gear"`
///
/// # Returns
/// - `String` - Slug, e.g. `"nose-beers-but-no-gear"`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.trim().to_lowercase().chars() {
        match c {
            'a'..='z' | '0'..='9' => {
                slug.push(c);
                in_separator = false;
            }
            ' ' | '-' => {
                if !in_separator {
                    slug.push('-');
                    in_separator = true;
                }
            }
            _ => {}
        }
    }

    slug
}

/// Converts a realm name into an API slug. Apostrophes separate words, so `Zul'jin`
/// becomes `zul-jin`.
pub fn realm_slug(realm: &str) -> String {
    slugify(&realm.replace(['\'', '\u{2019}'], " "))
}
