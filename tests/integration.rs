//! Integration tests for trellis-ui.
//!
//! These tests exercise the public API from outside the crate, verifying that
//! the stylesheet, widget tree, grid layout and list box work together.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use trellis_ui::desktop::{Desktop, DesktopConfig};
use trellis_ui::geometry::{Region, Size};
use trellis_ui::layout::grid::distribute;
use trellis_ui::layout::{Proportion, TrackExtent};
use trellis_ui::style::{Color, StyleNotFoundError, Stylesheet};
use trellis_ui::testing::{drawable_lookup, font_lookup, layout_to_string};
use trellis_ui::widget::{GridCell, Widget, WidgetEvent, WidgetId, WidgetTree};
use trellis_ui::widgets::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn load(json: &str) -> Stylesheet {
    init_tracing();
    Stylesheet::from_json(json, font_lookup, drawable_lookup).unwrap()
}

// ---------------------------------------------------------------------------
// Stylesheet resolution
// ---------------------------------------------------------------------------

#[test]
fn test_button_default_variant_is_red() {
    let sheet = load(r##"{"button": {"default": {"font": "sans", "textColor": "#FF0000"}}}"##);

    let widget = Widget::styled(Button::new("OK"), &sheet, None).unwrap();
    let button = widget.kind().as_button().unwrap();
    assert_eq!(button.text_color(), Color::RED);
    assert_eq!(widget.style_name(), Some("default"));
    assert_eq!(widget.kind().measure_leaf(), Some(Size::new(16, 16)));
}

#[test]
fn test_lookup_without_variant_is_the_default() {
    let sheet = load(
        r#"{
            "label": {
                "default": { "font": "sans", "textColor": "white" },
                "error": { "font": "small", "textColor": "red" }
            }
        }"#,
    );

    let default = sheet.default_style("label").unwrap();
    assert!(Rc::ptr_eq(&sheet.style("label", None).unwrap(), &default));
    assert!(Rc::ptr_eq(&sheet.style("label", Some("missing")).unwrap(), &default));
    assert_eq!(sheet.style("label", Some("error")).unwrap().name(), "error");
    assert_eq!(sheet.variant_names("label"), vec!["default", "error"]);
}

#[test]
fn test_missing_type_and_missing_default() {
    let sheet = load(r#"{"label": {"error": {"textColor": "red"}}}"#);

    assert_eq!(
        sheet.style("slider", None).unwrap_err(),
        StyleNotFoundError::UnknownType {
            widget_type: "slider".into()
        }
    );
    assert_eq!(
        sheet.style("label", Some("warning")).unwrap_err(),
        StyleNotFoundError::NoDefault {
            widget_type: "label".into(),
            variant: "warning".into(),
        }
    );
    assert!(sheet.style("label", Some("error")).is_ok());
}

#[test]
fn test_unknown_properties_are_skipped() {
    let sheet = load(r#"{"label": {"default": {"wobble": 3, "textColor": "red"}}}"#);

    let style = sheet.default_style("label").unwrap();
    assert!(style.properties().get("wobble").is_none());
    assert_eq!(style.properties().color("textColor"), Some(Color::RED));
}

#[test]
fn test_palette_colors_resolve() {
    let sheet = load(
        r##"{
            "colors": { "accent": "#1E90FF" },
            "label": { "default": { "textColor": "accent" } }
        }"##,
    );

    let accent = sheet.palette_color("accent").unwrap();
    assert_eq!(accent, Color::rgb(0x1E, 0x90, 0xFF));
    let widget = Widget::styled(Label::new("x"), &sheet, None).unwrap();
    assert_eq!(widget.kind().as_label().unwrap().text_color(), accent);
}

#[test]
fn test_unresolved_font_fails_the_whole_load() {
    init_tracing();
    let result = Stylesheet::from_json(
        r#"{"label": {"default": {"font": "comic"}}, "button": {"default": {}}}"#,
        font_lookup,
        drawable_lookup,
    );
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Grid layout
// ---------------------------------------------------------------------------

fn grid_with(rows: Vec<Proportion>, columns: Vec<Proportion>) -> (WidgetTree, WidgetId) {
    let mut tree = WidgetTree::new();
    let root = tree.insert(Widget::new(Grid::new().with_rows(rows).with_columns(columns)));
    (tree, root)
}

fn add(tree: &mut WidgetTree, parent: WidgetId, widget: Widget) -> WidgetId {
    let id = tree.insert(widget);
    tree.attach(parent, id).unwrap();
    id
}

#[test]
fn test_auto_row_then_fill_row_splits_20_80() {
    init_tracing();
    let (mut tree, root) = grid_with(vec![Proportion::Auto, Proportion::FILL], vec![Proportion::FILL]);
    let top = add(&mut tree, root, Widget::new(Panel::new()).with_height(20));
    let rest = add(&mut tree, root, Widget::new(Panel::new()).with_cell(1, 0));

    assert!(tree.update_layout(root, Size::new(60, 100)).unwrap());

    assert_eq!(
        tree.grid(root).unwrap().row_extents(),
        &[
            TrackExtent { offset: 0, size: 20 },
            TrackExtent { offset: 20, size: 80 },
        ]
    );
    assert_eq!(tree.bounds(top), Some(Region::new(0, 0, 60, 20)));
    assert_eq!(tree.bounds(rest), Some(Region::new(0, 20, 60, 80)));
}

#[test]
fn test_insert_then_remove_row_restores_cells() {
    let (mut tree, root) = grid_with(vec![Proportion::Auto; 3], vec![Proportion::Auto; 2]);
    let children: Vec<WidgetId> = [(0, 0), (1, 1), (2, 0), (1, 0)]
        .into_iter()
        .map(|(row, column)| add(&mut tree, root, Widget::new(Panel::new()).with_cell(row, column)))
        .collect();
    let cells = |tree: &WidgetTree| -> Vec<GridCell> {
        children.iter().map(|&c| tree.get(c).unwrap().cell()).collect()
    };
    let original = cells(&tree);

    for index in 0..=3 {
        tree.insert_row(root, index, Proportion::Fixed(7)).unwrap();
        let shifted = cells(&tree);
        for (before, after) in original.iter().zip(&shifted) {
            let expected = if before.row >= index { before.row + 1 } else { before.row };
            assert_eq!(after.row, expected);
            assert_eq!(after.column, before.column);
        }
        assert_eq!(tree.remove_row(root, index).unwrap(), Proportion::Fixed(7));
        assert_eq!(cells(&tree), original);
    }
}

#[test]
fn test_relayout_is_idempotent() {
    let (mut tree, root) = grid_with(
        vec![Proportion::Fixed(12), Proportion::Auto, Proportion::Fill(2.0), Proportion::FILL],
        vec![Proportion::Auto, Proportion::FILL],
    );
    let font = font_lookup("sans").unwrap();
    let ids: Vec<WidgetId> = (0..4)
        .map(|row| {
            let label = Label::new("x".repeat(row + 1)).with_font(font.clone());
            add(&mut tree, root, Widget::new(label).with_cell(row, row % 2))
        })
        .collect();

    let size = Size::new(173, 211);
    tree.update_layout(root, size).unwrap();
    let first: Vec<Option<Region>> = ids.iter().map(|&id| tree.bounds(id)).collect();

    assert!(!tree.update_layout(root, size).unwrap());
    tree.invalidate_measure(root);
    assert!(tree.update_layout(root, size).unwrap());
    let second: Vec<Option<Region>> = ids.iter().map(|&id| tree.bounds(id)).collect();
    assert_eq!(first, second);
}

#[test]
fn test_fill_tracks_take_exactly_the_remainder() {
    let cases: &[(&[Proportion], &[i32], i32)] = &[
        (&[Proportion::Fixed(10), Proportion::Auto, Proportion::FILL], &[10, 25, 0], 100),
        (&[Proportion::Fill(1.0), Proportion::Fill(1.0), Proportion::Fill(1.0)], &[0, 0, 0], 100),
        (&[Proportion::Fill(0.3), Proportion::Auto, Proportion::Fill(0.7)], &[5, 17, 9], 58),
        (&[Proportion::Fixed(80), Proportion::Auto, Proportion::FILL], &[80, 40, 3], 100),
    ];

    for &(proportions, content, available) in cases {
        let sizes = distribute(proportions, content, available, 0);
        let fixed_and_auto: i32 = proportions
            .iter()
            .zip(content)
            .filter(|(p, _)| !p.is_fill())
            .map(|(_, &c)| c)
            .sum();
        let fill_sum: i32 = proportions
            .iter()
            .zip(&sizes)
            .filter(|(p, _)| p.is_fill())
            .map(|(_, &s)| s)
            .sum();
        assert_eq!(fill_sum, (available - fixed_and_auto).max(0), "{proportions:?} in {available}");
    }
}

#[test]
fn test_cell_outside_tracks_aborts_layout() {
    let (mut tree, root) = grid_with(vec![Proportion::Auto], vec![Proportion::Auto]);
    add(&mut tree, root, Widget::new(Panel::new()).with_cell(0, 4));

    let err = tree.update_layout(root, Size::new(10, 10)).unwrap_err();
    assert!(err.to_string().contains("cell (0, 4)"));
}

// ---------------------------------------------------------------------------
// List box
// ---------------------------------------------------------------------------

fn selection_events(tree: &mut WidgetTree) -> Vec<Option<usize>> {
    tree.drain_events()
        .into_iter()
        .filter_map(|event| match event {
            WidgetEvent::SelectionChanged { selected, .. } => Some(selected),
            _ => None,
        })
        .collect()
}

#[test]
fn test_selection_notifies_only_on_change() {
    let mut tree = WidgetTree::new();
    let list = tree.insert(Widget::new(ListBox::new()));
    {
        let mut items = tree.list_box(list).unwrap();
        for text in ["a", "b", "c"] {
            items.push(ListItem::new(text)).unwrap();
        }
    }
    tree.drain_events();

    assert!(tree.list_box(list).unwrap().select(Some(1)).unwrap());
    assert!(!tree.list_box(list).unwrap().select(Some(1)).unwrap());
    assert_eq!(selection_events(&mut tree), vec![Some(1)]);

    assert!(tree.list_box(list).unwrap().select(Some(2)).unwrap());
    assert_eq!(selection_events(&mut tree), vec![Some(2)]);

    let pressed: Vec<bool> = tree
        .children(list)
        .iter()
        .map(|&c| tree.get(c).unwrap().kind().as_button().unwrap().is_pressed())
        .collect();
    assert_eq!(pressed, vec![false, false, true]);
    let data = tree.get(list).unwrap().kind().as_list_box().unwrap();
    assert_eq!(data.selected_item().map(|item| item.text.as_str()), Some("c"));
}

#[test]
fn test_removing_selected_item_fires_once() {
    let mut tree = WidgetTree::new();
    let list = tree.insert(Widget::new(ListBox::new()));
    let mut items = tree.list_box(list).unwrap();
    items.replace_items(vec![ListItem::new("a"), ListItem::new("b")]).unwrap();
    items.select(Some(0)).unwrap();
    let removed = items.remove(0).unwrap();
    assert_eq!(removed.text, "a");
    assert_eq!(items.selected_index(), None);
    assert_eq!(selection_events(&mut tree), vec![Some(0), None]);
}

// ---------------------------------------------------------------------------
// Desktop
// ---------------------------------------------------------------------------

const DESKTOP_STYLES: &str = r##"{
    "colors": { "accent": "#1E90FF" },
    "grid": { "default": {} },
    "label": { "default": { "font": "sans", "textColor": "white" } },
    "listBox": {
        "default": {
            "listItemStyle": { "font": "sans", "textColor": "accent" },
            "separatorStyle": { "thickness": 2 }
        }
    }
}"##;

fn fruit_desktop() -> (Desktop, WidgetId) {
    init_tracing();
    let config = DesktopConfig::new().with_size(200, 100).with_stylesheet(DESKTOP_STYLES);
    let mut desktop = Desktop::new(config, font_lookup, drawable_lookup).unwrap();

    let root = desktop
        .create(Grid::new().with_rows([Proportion::Auto, Proportion::FILL]), None)
        .unwrap();
    let title = desktop.create(Label::new("Fruit"), None).unwrap();
    let list = desktop.create(ListBox::new(), None).unwrap();
    desktop.tree_mut().update(list, |w| w.cell_mut().row = 1).unwrap();

    let tree = desktop.tree_mut();
    tree.attach(root, title).unwrap();
    tree.attach(root, list).unwrap();
    tree.list_box(list)
        .unwrap()
        .replace_items(vec![ListItem::new("apple"), ListItem::separator(), ListItem::new("kiwi")])
        .unwrap();
    desktop.set_root(root).unwrap();
    desktop.drain_events();
    (desktop, list)
}

#[test]
fn test_desktop_lays_out_styled_list() {
    let (mut desktop, list) = fruit_desktop();
    assert!(desktop.layout().unwrap());

    let root = desktop.root().unwrap();
    insta::assert_snapshot!(layout_to_string(desktop.tree(), root), @r"
    grid[default] 0,0 200x100
      label[default] 0,0 40x16
      listBox[default] 0,16 40x34
        button 0,16 40x16
        separator 0,32 40x2
        button 0,34 40x16
    ");

    let first = desktop.tree().children(list)[0];
    let button = desktop.tree().get(first).unwrap().kind().as_button().unwrap();
    assert_eq!(Some(button.text_color()), desktop.stylesheet().palette_color("accent"));
}

#[test]
fn test_desktop_click_selects_item_under_pointer() {
    let (mut desktop, list) = fruit_desktop();
    desktop.layout().unwrap();

    let tree = desktop.tree_mut();
    assert!(tree.list_box(list).unwrap().click_at(10, 40).unwrap());
    assert!(!tree.list_box(list).unwrap().click_at(10, 33).unwrap());
    assert!(!tree.list_box(list).unwrap().click_at(150, 40).unwrap());
    assert_eq!(tree.list_box(list).unwrap().selected_index(), Some(2));

    assert_eq!(
        desktop.drain_events(),
        vec![WidgetEvent::SelectionChanged {
            list,
            selected: Some(2)
        }]
    );
}

#[test]
fn test_desktop_relayout_after_item_change() {
    let (mut desktop, list) = fruit_desktop();
    desktop.layout().unwrap();
    assert!(!desktop.layout().unwrap());

    desktop
        .tree_mut()
        .list_box(list)
        .unwrap()
        .push(ListItem::new("blueberry"))
        .unwrap();
    assert!(desktop.layout().unwrap());
    assert_eq!(desktop.tree().bounds(list), Some(Region::new(0, 16, 72, 50)));

    desktop.resize(100, 60);
    assert!(desktop.layout().unwrap());
    assert_eq!(desktop.tree().bounds(desktop.root().unwrap()), Some(Region::new(0, 0, 100, 60)));
}
