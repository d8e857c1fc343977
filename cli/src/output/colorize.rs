use arcmarks::Bookmark;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

/// Colored list entry, prefixed with its 1-based index
pub struct ColorizeBookmark<'a>(pub usize, pub &'a Bookmark);

impl<'a> Colorize for ColorizeBookmark<'a> {
    fn to_colored(&self) -> String {
        let ColorizeBookmark(index, bookmark) = self;
        let mut s = String::new();
        let id = index.to_string();
        s.push_str(&format!(
            "{}. {}\n",
            id.bright_blue(),
            bookmark.name.bold().green(),
        ));
        // padding for alignment
        let padding = id.len() + 3;
        s.push_str(&format!(
            "{:>padding$} {}\n",
            ">".red(),
            bookmark.url.yellow()
        ));

        if let Some(folder) = &bookmark.folder {
            s.push_str(&format!("{:>padding$} {}\n", "#".red(), folder.blue()));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_colorize_bookmark_with_folder() {
        let bookmark = Bookmark::new("Example", "https://example.com").with_folder("Work");

        let colorized = ColorizeBookmark(1, &bookmark).to_colored();

        assert!(colorized.contains("Work"));
        assert!(colorized.contains("#"));
    }

    #[test]
    fn test_colorize_bookmark_without_folder() {
        let bookmark = Bookmark::new("Example", "https://example.com");

        let colorized = ColorizeBookmark(1, &bookmark).to_colored();

        let lines: Vec<&str> = colorized.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(!lines.iter().any(|line| line.contains('#')));
    }

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(999)]
    fn test_colorize_contains_fields(#[case] index: usize) {
        let bookmark = Bookmark::new("Test", "https://example.com").with_folder("Dev");

        let colorized = ColorizeBookmark(index, &bookmark).to_colored();

        assert!(colorized.contains(&index.to_string()));
        assert!(colorized.contains("Test"));
        assert!(colorized.contains("https://example.com"));
        assert!(colorized.contains("Dev"));
    }
}
