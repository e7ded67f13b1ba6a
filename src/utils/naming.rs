use crate::models::Flavor;

/// Clean a name for use in filenames
pub fn clean_name(name: &str) -> String {
    // Replace invalid filename characters with underscores
    let invalid_chars = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
    let mut cleaned = name.to_string();

    for c in invalid_chars {
        cleaned = cleaned.replace(c, "_");
    }

    // Remove leading/trailing spaces and dots
    cleaned.trim().trim_matches('.').to_string()
}

/// File name of the subset generated for `tag`, e.g. `SourceHanSans-Subset-SC.woff2`
pub fn output_file_name(prefix: &str, tag: &str, flavor: Flavor) -> String {
    format!(
        "{}-{}.{}",
        clean_name(prefix),
        clean_name(tag),
        flavor.extension()
    )
}
