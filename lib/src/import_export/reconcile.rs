use crate::models::bookmark::Bookmark;
use std::collections::HashSet;

/// What an import from the sidebar can offer, given the current list.
///
/// The two empty cases are kept apart on purpose: the user has to do
/// something different when the source is empty than when everything has
/// already been imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportPlan {
    /// The source yielded no bookmarks at all
    SourceEmpty,
    /// Every imported URL is already in the list
    AlreadySynced,
    /// New bookmarks available for selection, in source order
    Candidates(Vec<Bookmark>),
}

/// Imported bookmarks whose URL is not already present in `current`.
///
/// URLs are compared by exact string equality. Duplicates within
/// `imported` itself are kept.
pub fn candidates(current: &[Bookmark], imported: &[Bookmark]) -> Vec<Bookmark> {
    let known: HashSet<&str> = current.iter().map(|b| b.url.as_str()).collect();
    imported
        .iter()
        .filter(|b| !known.contains(b.url.as_str()))
        .cloned()
        .collect()
}

/// `current` followed by `selected`, without further deduplication
pub fn merge(current: &[Bookmark], selected: &[Bookmark]) -> Vec<Bookmark> {
    let mut merged = Vec::with_capacity(current.len() + selected.len());
    merged.extend_from_slice(current);
    merged.extend_from_slice(selected);
    merged
}

pub fn plan_import(current: &[Bookmark], imported: &[Bookmark]) -> ImportPlan {
    if imported.is_empty() {
        return ImportPlan::SourceEmpty;
    }

    let fresh = candidates(current, imported);
    if fresh.is_empty() {
        ImportPlan::AlreadySynced
    } else {
        ImportPlan::Candidates(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn bm(name: &str, url: &str) -> Bookmark {
        Bookmark::new(name, url)
    }

    #[test]
    fn test_candidates_excludes_known_urls() {
        let current = vec![bm("A", "https://a.com")];
        let imported = vec![bm("A2", "https://a.com"), bm("B", "https://b.com")];

        assert_eq!(
            candidates(&current, &imported),
            vec![bm("B", "https://b.com")]
        );
    }

    #[test]
    fn test_candidates_preserves_imported_order() {
        let current = vec![bm("B", "https://b.com")];
        let imported = vec![
            bm("D", "https://d.com"),
            bm("B", "https://b.com"),
            bm("A", "https://a.com"),
            bm("C", "https://c.com"),
        ];
        let names: Vec<String> = candidates(&current, &imported)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, ["D", "A", "C"]);
    }

    #[rstest]
    #[case("https://a.com/")]
    #[case("http://a.com")]
    #[case("https://A.com")]
    fn test_candidates_compares_exact_strings(#[case] variant: &str) {
        let current = vec![bm("A", "https://a.com")];
        let imported = vec![bm("A", variant)];
        assert_eq!(candidates(&current, &imported).len(), 1);
    }

    #[test]
    fn test_candidates_ignores_folder_and_name() {
        let current = vec![bm("Docs", "https://docs.rs").with_folder("Rust")];
        let imported = vec![bm("Other", "https://docs.rs").with_folder("Work")];
        assert!(candidates(&current, &imported).is_empty());
    }

    #[test]
    fn test_candidates_keeps_duplicates_within_import() {
        let imported = vec![bm("X", "https://x.com"), bm("X again", "https://x.com")];
        assert_eq!(candidates(&[], &imported).len(), 2);
    }

    #[test]
    fn test_merge_is_concatenation() {
        let current = vec![bm("A", "https://a.com")];
        let selected = vec![bm("B", "https://b.com"), bm("B", "https://b.com")];

        assert_eq!(
            merge(&current, &selected),
            vec![
                bm("A", "https://a.com"),
                bm("B", "https://b.com"),
                bm("B", "https://b.com"),
            ]
        );
    }

    #[test]
    fn test_merge_with_nothing_selected() {
        let current = vec![bm("A", "https://a.com"), bm("B", "https://b.com")];
        assert_eq!(merge(&current, &[]), current);
    }

    #[test]
    fn test_plan_source_empty() {
        let current = vec![bm("A", "https://a.com")];
        assert_eq!(plan_import(&current, &[]), ImportPlan::SourceEmpty);
        assert_eq!(plan_import(&[], &[]), ImportPlan::SourceEmpty);
    }

    #[test]
    fn test_plan_already_synced() {
        let current = vec![bm("A", "https://a.com")];
        let imported = vec![bm("A from Arc", "https://a.com")];
        assert_eq!(plan_import(&current, &imported), ImportPlan::AlreadySynced);
    }

    #[test]
    fn test_plan_candidates() {
        let imported = vec![bm("A", "https://a.com")];
        assert_eq!(
            plan_import(&[], &imported),
            ImportPlan::Candidates(imported.clone())
        );
    }
}
