use std::collections::HashMap;

/// Per-post expansion state for comment panels. Client-only; cleared on
/// every list reload so each reload starts fully collapsed.
///
/// A post the user never toggled keeps the initial "Add Comment" label even
/// when comments already exist; once toggled, the label tracks visibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentVisibility {
    states: HashMap<i64, bool>,
}

impl CommentVisibility {
    pub fn is_expanded(&self, id: i64) -> bool {
        self.states.get(&id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: i64) {
        let expanded = self.states.entry(id).or_insert(false);
        *expanded = !*expanded;
    }

    pub fn label(&self, id: i64) -> &'static str {
        match self.states.get(&id) {
            None => "Add Comment",
            Some(true) => "Hide Comments",
            Some(false) => "Show Comments",
        }
    }

    pub fn collapse_all(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed_with_initial_label() {
        let vis = CommentVisibility::default();
        assert!(!vis.is_expanded(7));
        assert_eq!(vis.label(7), "Add Comment");
    }

    #[test]
    fn label_follows_toggle_history() {
        let mut vis = CommentVisibility::default();
        vis.toggle(7);
        assert!(vis.is_expanded(7));
        assert_eq!(vis.label(7), "Hide Comments");
        vis.toggle(7);
        assert!(!vis.is_expanded(7));
        assert_eq!(vis.label(7), "Show Comments");
    }

    #[test]
    fn double_toggle_restores_visibility() {
        let mut vis = CommentVisibility::default();
        vis.toggle(1);
        let expanded = vis.is_expanded(1);
        let label = vis.label(1);
        vis.toggle(1);
        vis.toggle(1);
        assert_eq!(vis.is_expanded(1), expanded);
        assert_eq!(vis.label(1), label);
    }

    #[test]
    fn posts_toggle_independently() {
        let mut vis = CommentVisibility::default();
        vis.toggle(1);
        assert!(vis.is_expanded(1));
        assert!(!vis.is_expanded(2));
        assert_eq!(vis.label(2), "Add Comment");
    }

    #[test]
    fn collapse_all_resets_labels_too() {
        let mut vis = CommentVisibility::default();
        vis.toggle(1);
        vis.toggle(2);
        vis.toggle(2);
        vis.collapse_all();
        assert!(!vis.is_expanded(1));
        assert_eq!(vis.label(1), "Add Comment");
        assert_eq!(vis.label(2), "Add Comment");
    }
}
