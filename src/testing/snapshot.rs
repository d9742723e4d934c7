//! Layout dump helpers.
//!
//! Converts an arranged widget tree into plain text suitable for snapshot
//! testing and assertions. One line per widget, indented two spaces per depth:
//!
//! ```text
//! grid 0,0 200x100
//!   label 0,0 40x16
//!   button 0,16 200x84
//! ```

use std::fmt::Write;

use crate::widget::{WidgetId, WidgetTree};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Dump the arranged bounds of `root` and its subtree.
///
/// Invisible widgets are tagged `hidden` and their subtrees are skipped.
/// A styled widget shows its variant name in brackets after the type name. Returns an empty string when `root` is not in the tree.
pub fn layout_to_string(tree: &WidgetTree, root: WidgetId) -> String {
    let mut out = String::new();
    if tree.contains(root) {
        write_node(tree, root, 0, &mut out);
    }
    out.truncate(out.trim_end().len());
    out
}

fn write_node(tree: &WidgetTree, id: WidgetId, depth: usize, out: &mut String) {
    let Some(widget) = tree.get(id) else {
        return;
    };
    let bounds = widget.bounds();

    out.push_str(&"  ".repeat(depth));
    out.push_str(widget.type_name());
    if let Some(name) = widget.style_name() {
        write!(out, "[{name}]").ok();
    }
    if !widget.is_visible() {
        out.push_str(" hidden\n");
        return;
    }
    writeln!(out, " {},{} {}x{}", bounds.x, bounds.y, bounds.width, bounds.height).ok();

    for &child in tree.children(id) {
        write_node(tree, child, depth + 1, out);
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::layout::Proportion;
    use crate::widget::Widget;
    use crate::widgets::{Grid, Label, Panel};

    #[test]
    fn dumps_nested_bounds() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Widget::new(
            Grid::new().with_rows([Proportion::Fixed(10), Proportion::FILL]),
        ));
        let top = tree.insert(Widget::new(Label::new("")).with_width(30).with_height(10));
        let bottom = tree.insert(Widget::new(Panel::new()).with_cell(1, 0));
        tree.attach(root, top).unwrap();
        tree.attach(root, bottom).unwrap();

        tree.update_layout(root, Size::new(50, 40)).unwrap();

        assert_eq!(
            layout_to_string(&tree, root),
            "grid 0,0 50x40\n  label 0,0 30x10\n  panel 0,10 50x30"
        );
    }

    #[test]
    fn hidden_widgets_are_tagged() {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Widget::new(Panel::new()));
        let child = tree.insert(Widget::new(Label::new("x")).with_visible(false));
        tree.attach(root, child).unwrap();
        tree.update_layout(root, Size::new(10, 10)).unwrap();

        assert_eq!(layout_to_string(&tree, root), "panel 0,0 10x10\n  label hidden");
    }

    #[test]
    fn style_variant_is_bracketed() {
        let mut tree = WidgetTree::new();
        let mut widget = Widget::new(Panel::new());
        widget.set_style_name("dark");
        let root = tree.insert(widget);
        tree.update_layout(root, Size::new(8, 6)).unwrap();

        assert_eq!(layout_to_string(&tree, root), "panel[dark] 0,0 8x6");
    }

    #[test]
    fn missing_root_is_empty() {
        let mut tree = WidgetTree::new();
        let id = tree.insert(Widget::new(Panel::new()));
        tree.remove(id).unwrap();
        assert!(layout_to_string(&tree, id).is_empty());
    }
}
