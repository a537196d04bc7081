use std::cmp::Ordering;

use crate::models::file_entry::FileEntry;

/// Orders a listing for display: directories before files, then a
/// case-insensitive name comparison within each group. The sort is
/// stable, so entries whose folded names collide keep their collection
/// order.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| {
        match b.effective_dir.cmp(&a.effective_dir) {
            Ordering::Equal => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            group_order => group_order,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file_entry::FileKind;

    fn entry(name: &str, effective_dir: bool) -> FileEntry {
        FileEntry {
            name: name.to_string(),
            kind: if effective_dir {
                FileKind::Dir
            } else {
                FileKind::File
            },
            effective_dir,
            size: 0,
            hidden: name.starts_with('.'),
            extension: String::new(),
        }
    }

    fn names(entries: &[FileEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn directories_sort_before_files() {
        let mut entries = vec![
            entry("zz.txt", false),
            entry("aa", true),
            entry("bb.txt", false),
            entry("yy", true),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["aa", "yy", "bb.txt", "zz.txt"]);
    }

    #[test]
    fn names_compare_case_insensitively() {
        let mut entries = vec![
            entry("Beta.txt", false),
            entry("alpha.txt", false),
            entry("GAMMA.txt", false),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["alpha.txt", "Beta.txt", "GAMMA.txt"]);
    }

    #[test]
    fn symlink_to_directory_groups_with_directories() {
        let mut entries = vec![entry("afile", false), entry("zlink", true)];
        entries[1].kind = FileKind::Link;
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["zlink", "afile"]);
    }

    #[test]
    fn folded_name_collisions_keep_collection_order() {
        let mut entries = vec![entry("readme", false), entry("README", false)];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["readme", "README"]);
    }
}
