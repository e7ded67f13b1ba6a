use std::fs;
use std::path::Path;

use log::debug;

/// Counters gathered while walking the scan roots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Allow-listed files decoded and searched
    pub files_read: usize,
    /// Allow-listed files that could not be read as UTF-8 text
    pub files_skipped: usize,
    /// Roots that do not exist or are not directories
    pub missing_roots: usize,
}

/// Check a file name against the extension allow-list.
///
/// Matches on the name suffix, so a bare dotfile such as `.json` counts too.
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            extensions.iter().any(|ext| {
                name.strip_suffix(ext.as_str())
                    .is_some_and(|stem| stem.ends_with('.'))
            })
        })
}

/// Call `visit` with the text of every allow-listed file under `root`.
///
/// Missing roots, unreadable directories and files that are not valid UTF-8
/// are skipped.
pub fn visit_text_files<F>(
    root: &Path,
    extensions: &[String],
    stats: &mut ScanStats,
    mut visit: F,
) where
    F: FnMut(&Path, &str),
{
    if !root.is_dir() {
        debug!("Scan root {} does not exist, skipping", root.display());
        stats.missing_roots += 1;
        return;
    }
    walk(root, extensions, stats, &mut visit);
}

fn walk<F>(dir: &Path, extensions: &[String], stats: &mut ScanStats, visit: &mut F)
where
    F: FnMut(&Path, &str),
{
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {}", dir.display(), e);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            walk(&path, extensions, stats, visit);
            continue;
        }
        if !has_allowed_extension(&path, extensions) {
            continue;
        }

        // Symlinked files are followed, symlinked directories are not
        match fs::read_to_string(&path) {
            Ok(text) => {
                stats.files_read += 1;
                visit(&path, &text);
            }
            Err(e) => {
                debug!("Skipping {}: {}", path.display(), e);
                stats.files_skipped += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exts(list: &[&str]) -> Vec<String> {
        list.iter().map(|ext| ext.to_string()).collect()
    }

    #[test]
    fn extension_match_is_exact() {
        let allowed = exts(&["ts", "json"]);
        assert!(has_allowed_extension(Path::new("a/b.ts"), &allowed));
        assert!(has_allowed_extension(Path::new("types.d.ts"), &allowed));
        assert!(!has_allowed_extension(Path::new("b.TS"), &allowed));
        assert!(!has_allowed_extension(Path::new("b.tsx"), &allowed));
        assert!(!has_allowed_extension(Path::new("Makefile"), &allowed));
        assert!(!has_allowed_extension(Path::new("ts"), &allowed));
        assert!(!has_allowed_extension(Path::new("notts"), &allowed));
    }

    #[test]
    fn bare_dotfile_with_allowed_suffix_is_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".json"), "漢").unwrap();

        let mut stats = ScanStats::default();
        let mut seen = Vec::new();
        visit_text_files(dir.path(), &exts(&["json"]), &mut stats, |_, text| {
            seen.push(text.to_string())
        });

        assert_eq!(seen, ["漢"]);
        assert_eq!(stats.files_read, 1);
    }

    #[test]
    fn walks_nested_directories_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("pages").join("wiki");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a.ts"), "one").unwrap();
        fs::write(nested.join("b.json"), "two").unwrap();
        fs::write(nested.join("c.md"), "ignored").unwrap();
        fs::write(nested.join("d.ts"), b"\xFF\xFE\x00").unwrap();

        let mut stats = ScanStats::default();
        let mut seen = Vec::new();
        visit_text_files(dir.path(), &exts(&["ts", "json"]), &mut stats, |_, text| {
            seen.push(text.to_string())
        });
        seen.sort();

        assert_eq!(seen, ["one", "two"]);
        assert_eq!(
            stats,
            ScanStats {
                files_read: 2,
                files_skipped: 1,
                missing_roots: 0
            }
        );
    }

    #[test]
    fn missing_root_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut stats = ScanStats::default();
        let mut calls = 0;
        visit_text_files(&dir.path().join("absent"), &exts(&["ts"]), &mut stats, |_, _| {
            calls += 1
        });
        assert_eq!(calls, 0);
        assert_eq!(stats.missing_roots, 1);
    }
}
