use crate::document::Document;

pub const DEFAULT_WINDOW_TITLE: &str = "PuzzleScript Editor";
pub const MODIFIED_MARKER: &str = " *";

pub fn render_title(base: &str, document: &Document) -> String {
    if document.is_dirty() {
        format!("{base}{MODIFIED_MARKER}")
    } else {
        base.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_tracks_dirty_state() {
        let mut doc = Document::new();
        assert_eq!(render_title(DEFAULT_WINDOW_TITLE, &doc), "PuzzleScript Editor");

        doc.set_text("x");
        assert_eq!(
            render_title(DEFAULT_WINDOW_TITLE, &doc),
            "PuzzleScript Editor *"
        );

        doc.set_text("");
        assert_eq!(render_title("Custom", &doc), "Custom");
    }
}
