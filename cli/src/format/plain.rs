use crate::format::traits::BookmarkFormat;
use arcmarks::Bookmark;

/// Uncolored list entry, prefixed with its 1-based index
pub struct PlainBookmark<'a>(pub usize, pub &'a Bookmark);

impl<'a> BookmarkFormat for PlainBookmark<'a> {
    fn to_string(&self) -> String {
        let PlainBookmark(index, bookmark) = self;
        let padding = index.to_string().len() + 3;
        let mut s = format!("{}. {}\n", index, bookmark.name);
        s.push_str(&format!("{:>padding$} {}\n", ">", bookmark.url));
        if let Some(folder) = &bookmark.folder {
            s.push_str(&format!("{:>padding$} {}\n", "#", folder));
        }
        s
    }
}
