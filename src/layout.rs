//! Window geometry and hit-testing
//!
//! Pure functions shared by the renderer and the input handling so both agree
//! on where the menu bar, text area, toolbar and dialog widgets are. All
//! values are physical pixels derived from the font metrics.

use crate::model::ui::{MenuId, MenuItem};

/// Horizontal padding around menu titles and dropdown labels
pub const MENU_PADDING_X: f32 = 10.0;
/// Vertical padding inside the menu bar
pub const MENU_PADDING_Y: usize = 5;
/// Padding between the text area border and the text
pub const TEXT_PADDING: f32 = 6.0;
/// Margin around toolbar and dialog widgets
pub const WIDGET_MARGIN: f32 = 8.0;
/// Minimum button width, matching the classic 80px buttons
pub const MIN_BUTTON_WIDTH: f32 = 80.0;
/// Dialog inputs are at least this many characters wide
pub const DIALOG_INPUT_CHARS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Font metrics every layout computation depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub line_height: usize,
    pub char_width: f32,
}

impl Metrics {
    pub fn new(line_height: usize, char_width: f32) -> Self {
        Self {
            line_height,
            char_width,
        }
    }

    /// Width of `text` in a monospace font
    #[inline]
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    /// Height of buttons and input fields
    #[inline]
    pub fn control_height(&self) -> f32 {
        (self.line_height + 2 * MENU_PADDING_Y) as f32
    }

    fn button_width(&self, label: &str) -> f32 {
        (self.text_width(label) + 2.0 * MENU_PADDING_X).max(MIN_BUTTON_WIDTH)
    }
}

// ============================================================================
// Main window
// ============================================================================

pub fn menu_bar_height(metrics: Metrics) -> f32 {
    (metrics.line_height + 2 * MENU_PADDING_Y) as f32
}

pub fn toolbar_height(metrics: Metrics) -> f32 {
    metrics.control_height() + 2.0 * WIDGET_MARGIN
}

/// Menu bar title rectangles, left to right
pub fn menu_title_rects(metrics: Metrics) -> Vec<(MenuId, Rect)> {
    let height = menu_bar_height(metrics);
    let mut x = 0.0;
    MenuId::ALL
        .iter()
        .map(|&menu| {
            let width = metrics.text_width(menu.title()) + 2.0 * MENU_PADDING_X;
            let rect = Rect::new(x, 0.0, width, height);
            x += width;
            (menu, rect)
        })
        .collect()
}

/// Dropdown panel below an open menu title
pub fn dropdown_rect(metrics: Metrics, menu: MenuId) -> Rect {
    let title = menu_title_rects(metrics)
        .into_iter()
        .find_map(|(id, rect)| (id == menu).then_some(rect))
        .unwrap_or_default();

    let widest = menu
        .items()
        .iter()
        .map(|item| metrics.text_width(item.label()) + metrics.text_width(item.shortcut()))
        .fold(0.0_f32, f32::max);
    let width = widest + 5.0 * MENU_PADDING_X;
    let height = menu.items().len() as f32 * dropdown_item_height(metrics);

    Rect::new(title.x, title.bottom(), width, height)
}

#[inline]
pub fn dropdown_item_height(metrics: Metrics) -> f32 {
    (metrics.line_height + 2 * MENU_PADDING_Y) as f32
}

/// Item rectangles of an open dropdown, top to bottom
pub fn dropdown_item_rects(metrics: Metrics, menu: MenuId) -> Vec<(MenuItem, Rect)> {
    let panel = dropdown_rect(metrics, menu);
    let item_height = dropdown_item_height(metrics);
    menu.items()
        .iter()
        .enumerate()
        .map(|(i, &item)| {
            let y = panel.y + i as f32 * item_height;
            (item, Rect::new(panel.x, y, panel.width, item_height))
        })
        .collect()
}

/// The editable text region between the menu bar and the toolbar
pub fn text_area_rect(metrics: Metrics, window_size: (u32, u32)) -> Rect {
    let (width, height) = (window_size.0 as f32, window_size.1 as f32);
    let top = menu_bar_height(metrics);
    let bottom = toolbar_height(metrics);
    Rect::new(0.0, top, width, (height - top - bottom).max(0.0))
}

pub fn toolbar_rect(metrics: Metrics, window_size: (u32, u32)) -> Rect {
    let (width, height) = (window_size.0 as f32, window_size.1 as f32);
    let toolbar = toolbar_height(metrics);
    Rect::new(0.0, (height - toolbar).max(0.0), width, toolbar)
}

/// The toolbar's "Find" button that opens the find/replace dialog
pub fn find_button_rect(metrics: Metrics, window_size: (u32, u32)) -> Rect {
    let toolbar = toolbar_rect(metrics, window_size);
    Rect::new(
        WIDGET_MARGIN,
        toolbar.y + WIDGET_MARGIN,
        metrics.button_width("Find"),
        metrics.control_height(),
    )
}

/// Visible `(lines, columns)` of the text area
pub fn visible_text_size(metrics: Metrics, window_size: (u32, u32)) -> (usize, usize) {
    let area = text_area_rect(metrics, window_size);
    let lines = ((area.height - TEXT_PADDING) / metrics.line_height as f32).floor();
    let columns = ((area.width - 2.0 * TEXT_PADDING) / metrics.char_width).floor();
    (lines.max(0.0) as usize, columns.max(0.0) as usize)
}

/// Something clickable in the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainHit {
    MenuTitle(MenuId),
    MenuItem(MenuItem),
    /// Inside an open dropdown but not on an item
    Dropdown,
    FindButton,
    /// Text area, at `(visible row, visual column)` relative to the viewport
    TextArea { row: usize, column: usize },
    Toolbar,
    None,
}

/// Hit-test the main window; an open dropdown takes priority over everything
pub fn hit_test_main(
    metrics: Metrics,
    window_size: (u32, u32),
    open_menu: Option<MenuId>,
    x: f32,
    y: f32,
) -> MainHit {
    if let Some(menu) = open_menu {
        if let Some((item, _)) = dropdown_item_rects(metrics, menu)
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y))
        {
            return MainHit::MenuItem(item);
        }
        if dropdown_rect(metrics, menu).contains(x, y) {
            return MainHit::Dropdown;
        }
    }

    if y < menu_bar_height(metrics) {
        return menu_title_rects(metrics)
            .into_iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map_or(MainHit::None, |(menu, _)| MainHit::MenuTitle(menu));
    }

    if find_button_rect(metrics, window_size).contains(x, y) {
        return MainHit::FindButton;
    }

    let area = text_area_rect(metrics, window_size);
    if area.contains(x, y) {
        let row = ((y - area.y - TEXT_PADDING).max(0.0) / metrics.line_height as f32) as usize;
        let column = ((x - area.x - TEXT_PADDING).max(0.0) / metrics.char_width).round() as usize;
        return MainHit::TextArea { row, column };
    }

    if toolbar_rect(metrics, window_size).contains(x, y) {
        return MainHit::Toolbar;
    }

    MainHit::None
}

// ============================================================================
// Find/replace dialog window
// ============================================================================

pub const FIND_LABEL: &str = "Find:";
pub const REPLACE_LABEL: &str = "Replace with:";

/// Buttons along the bottom of the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogButton {
    Find,
    Replace,
    Close,
}

impl DialogButton {
    pub const ALL: [DialogButton; 3] = [DialogButton::Find, DialogButton::Replace, DialogButton::Close];

    pub fn label(self) -> &'static str {
        match self {
            DialogButton::Find => "Find",
            DialogButton::Replace => "Replace",
            DialogButton::Close => "Close",
        }
    }
}

/// Positions of every widget in the dialog window
#[derive(Debug, Clone, PartialEq)]
pub struct DialogLayout {
    pub find_label: Rect,
    pub find_input: Rect,
    pub replace_label: Rect,
    pub replace_input: Rect,
    pub buttons: [(DialogButton, Rect); 3],
    /// Inner size of the dialog window
    pub size: (u32, u32),
}

/// Stacked layout: label, input, label, input, then a row of buttons
pub fn dialog_layout(metrics: Metrics) -> DialogLayout {
    let control = metrics.control_height();
    let label_height = metrics.line_height as f32;
    let buttons_width: f32 = DialogButton::ALL
        .iter()
        .map(|b| metrics.button_width(b.label()))
        .sum::<f32>()
        + WIDGET_MARGIN * 2.0;
    let input_width = (DIALOG_INPUT_CHARS as f32 * metrics.char_width).max(buttons_width);

    let x = WIDGET_MARGIN;
    let mut y = WIDGET_MARGIN;
    let find_label = Rect::new(x, y, input_width, label_height);
    y += label_height + WIDGET_MARGIN / 2.0;
    let find_input = Rect::new(x, y, input_width, control);
    y += control + WIDGET_MARGIN;
    let replace_label = Rect::new(x, y, input_width, label_height);
    y += label_height + WIDGET_MARGIN / 2.0;
    let replace_input = Rect::new(x, y, input_width, control);
    y += control + WIDGET_MARGIN * 1.5;

    let mut bx = x;
    let buttons = DialogButton::ALL.map(|button| {
        let width = metrics.button_width(button.label());
        let rect = Rect::new(bx, y, width, control);
        bx += width + WIDGET_MARGIN;
        (button, rect)
    });
    y += control + WIDGET_MARGIN;

    DialogLayout {
        find_label,
        find_input,
        replace_label,
        replace_input,
        buttons,
        size: (
            (input_width + 2.0 * WIDGET_MARGIN).ceil() as u32,
            y.ceil() as u32,
        ),
    }
}

/// Something clickable in the dialog window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogHit {
    SearchInput { column: usize },
    ReplaceInput { column: usize },
    Button(DialogButton),
    None,
}

pub fn hit_test_dialog(metrics: Metrics, x: f32, y: f32) -> DialogHit {
    let layout = dialog_layout(metrics);
    let column_in = |rect: Rect| {
        ((x - rect.x - TEXT_PADDING).max(0.0) / metrics.char_width).round() as usize
    };

    if layout.find_input.contains(x, y) {
        return DialogHit::SearchInput {
            column: column_in(layout.find_input),
        };
    }
    if layout.replace_input.contains(x, y) {
        return DialogHit::ReplaceInput {
            column: column_in(layout.replace_input),
        };
    }
    layout
        .buttons
        .iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map_or(DialogHit::None, |&(button, _)| DialogHit::Button(button))
}

/// Characters that fit inside an input field
pub fn input_visible_chars(metrics: Metrics, input: Rect) -> usize {
    ((input.width - 2.0 * TEXT_PADDING) / metrics.char_width)
        .floor()
        .max(1.0) as usize
}

/// First visible character of an input so its caret stays in view
pub fn input_scroll_offset(metrics: Metrics, input: Rect, cursor_chars: usize) -> usize {
    cursor_chars.saturating_sub(input_visible_chars(metrics, input))
}
