//! View module - software rendering for the main window and the find dialog
//!
//! Each window owns a [`Renderer`]: a softbuffer surface plus a persistent
//! back buffer. Both renderers share one parsed font.

pub mod button;
pub mod font;
pub mod frame;

pub use button::{render_button, ButtonState};
pub use frame::{Frame, TextPainter};

use anyhow::{anyhow, Result};
use fontdue::{Font, LineMetrics, Metrics};
use softbuffer::Surface;
use std::collections::HashMap;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::window::Window;

use jot::layout::{self, DialogButton, Rect, MENU_PADDING_X, MENU_PADDING_Y, TEXT_PADDING};
use jot::model::{AppModel, DialogField};
use jot::util::text::display_line;

pub type GlyphCacheKey = (char, u32);

pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Width of the text caret in pixels
const CARET_WIDTH: usize = 2;

/// Pointer state of the main window's toolbar button
#[derive(Debug, Clone, Copy, Default)]
pub struct MainChrome {
    pub find_button: ButtonState,
}

/// Pointer state of the dialog's buttons
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogChrome {
    pub hovered: Option<DialogButton>,
    pub pressed: Option<DialogButton>,
}

impl DialogChrome {
    fn state_of(&self, button: DialogButton) -> ButtonState {
        if self.pressed == Some(button) {
            ButtonState::Pressed
        } else if self.hovered == Some(button) {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        }
    }
}

pub struct Renderer {
    font: Rc<Font>,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Persistent back buffer.
    /// Softbuffer doesn't guarantee buffer contents are preserved between frames,
    /// so we maintain our own buffer and copy to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
}

impl Renderer {
    /// Create a renderer for `window`, scaling `base_font_size` by its DPI
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        font: Rc<Font>,
        base_font_size: f32,
    ) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width.max(1), size.height.max(1))
        };

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create surface: {}", e))?;
        surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let font_size = base_font_size * window.scale_factor() as f32;
        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow!("Font missing horizontal line metrics"))?;

        let (metrics, _) = font.rasterize('M', font_size);
        let char_width = metrics.advance_width;

        Ok(Self {
            font,
            surface,
            back_buffer: vec![0u32; (width as usize) * (height as usize)],
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width,
        })
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    /// Track a new window size; zero sizes (minimized) are ignored
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 || (width, height) == (self.width, self.height) {
            return Ok(());
        }
        self.width = width;
        self.height = height;
        self.back_buffer
            .resize((width as usize) * (height as usize), 0);
        self.surface
            .resize(non_zero(width), non_zero(height))
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))
    }

    /// Split the renderer into a drawing frame and a text painter
    fn canvas(&mut self) -> (Frame<'_>, TextPainter<'_>) {
        let line_height = self.line_height();
        let frame = Frame::new(
            &mut self.back_buffer,
            self.width as usize,
            self.height as usize,
        );
        let painter = TextPainter::new(
            &self.font,
            &mut self.glyph_cache,
            self.font_size,
            self.line_metrics.ascent,
            self.char_width,
            line_height,
        );
        (frame, painter)
    }

    /// Copy the back buffer to the surface and present it
    fn present(&mut self) -> Result<()> {
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to get surface buffer: {}", e))?;
        let len = buffer.len().min(self.back_buffer.len());
        buffer[..len].copy_from_slice(&self.back_buffer[..len]);
        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present buffer: {}", e))
    }

    // =========================================================================
    // Main window
    // =========================================================================

    pub fn render_main(&mut self, model: &AppModel, chrome: MainChrome) -> Result<()> {
        let window_size = (self.width, self.height);
        {
            let (mut frame, mut painter) = self.canvas();
            frame.clear(model.theme.editor.background.to_argb_u32());

            render_text_area(&mut frame, &mut painter, model, window_size);
            render_toolbar(&mut frame, &mut painter, model, window_size, chrome);
            render_menu_bar(&mut frame, &mut painter, model);
            render_dropdown(&mut frame, &mut painter, model);
        }
        self.present()
    }

    // =========================================================================
    // Find/replace dialog
    // =========================================================================

    pub fn render_dialog(&mut self, model: &AppModel, chrome: DialogChrome) -> Result<()> {
        let Some(dialog) = model.find_dialog.as_ref() else {
            return Ok(());
        };
        {
            let (mut frame, mut painter) = self.canvas();
            let theme = &model.theme;
            let metrics = model.metrics();
            let geometry = layout::dialog_layout(metrics);
            let fg = theme.dialog.foreground.to_argb_u32();

            frame.clear(theme.dialog.background.to_argb_u32());

            painter.draw(
                &mut frame,
                geometry.find_label.x as usize,
                geometry.find_label.y as usize,
                layout::FIND_LABEL,
                fg,
            );
            painter.draw(
                &mut frame,
                geometry.replace_label.x as usize,
                geometry.replace_label.y as usize,
                layout::REPLACE_LABEL,
                fg,
            );

            for (field, rect) in [
                (DialogField::Search, geometry.find_input),
                (DialogField::Replace, geometry.replace_input),
            ] {
                let input = dialog.input(field);
                let focused = dialog.focus == field;
                render_input(
                    &mut frame,
                    &mut painter,
                    model,
                    rect,
                    input.text(),
                    input.cursor_char_index(),
                    focused,
                );
            }

            for (button, rect) in geometry.buttons {
                render_button(
                    &mut frame,
                    &mut painter,
                    theme,
                    rect,
                    button.label(),
                    chrome.state_of(button),
                );
            }
        }
        self.present()
    }
}

fn non_zero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

fn render_text_area(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    window_size: (u32, u32),
) {
    let metrics = model.metrics();
    let area = layout::text_area_rect(metrics, window_size);
    let document = &model.document;
    let editor = &model.editor;
    let viewport = &editor.viewport;
    let line_height = painter.line_height();
    let char_width = painter.char_width();

    frame.set_clip(area);

    let text_x = (area.x + TEXT_PADDING).round() as usize;
    let text_y = (area.y + TEXT_PADDING).round() as usize;
    let (cursor_line, cursor_col) = editor.cursor_line_visual_col(document);

    // One extra row so a partially visible last line is still drawn
    let rows = viewport.visible_lines + 1;
    let end_line = (viewport.top_line + rows).min(document.line_count());

    if cursor_line >= viewport.top_line && cursor_line < end_line {
        let y = text_y + (cursor_line - viewport.top_line) * line_height;
        frame.fill_rect_px(
            area.x as usize,
            y,
            area.width as usize,
            line_height,
            model.theme.editor.current_line_background.to_argb_u32(),
        );
    }

    let fg = model.theme.editor.foreground.to_argb_u32();
    for doc_line in viewport.top_line..end_line {
        let Some(bytes) = document.line(doc_line) else {
            break;
        };
        let text = display_line(bytes);
        let visible: String = text
            .chars()
            .skip(viewport.left_column)
            .take(viewport.visible_columns + 1)
            .collect();
        if visible.is_empty() {
            continue;
        }
        let y = text_y + (doc_line - viewport.top_line) * line_height;
        painter.draw(frame, text_x, y, &visible, fg);
    }

    if model.ui.cursor_visible
        && cursor_line >= viewport.top_line
        && cursor_line < end_line
        && cursor_col >= viewport.left_column
    {
        let x = text_x + ((cursor_col - viewport.left_column) as f32 * char_width).round() as usize;
        let y = text_y + (cursor_line - viewport.top_line) * line_height;
        frame.fill_rect_px(
            x,
            y,
            CARET_WIDTH,
            line_height,
            model.theme.editor.cursor_color.to_argb_u32(),
        );
    }

    frame.clear_clip();
}

fn render_menu_bar(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
    let theme = &model.theme.menu_bar;
    let metrics = model.metrics();
    let height = layout::menu_bar_height(metrics);
    let width = frame.width();

    frame.fill_rect_px(0, 0, width, height as usize, theme.background.to_argb_u32());
    frame.fill_rect_px(
        0,
        (height as usize).saturating_sub(1),
        width,
        1,
        theme.border.to_argb_u32(),
    );

    for (menu, rect) in layout::menu_title_rects(metrics) {
        if model.ui.open_menu == Some(menu) {
            frame.fill_rect(rect, theme.hover_background.to_argb_u32());
        }
        painter.draw(
            frame,
            (rect.x + MENU_PADDING_X).round() as usize,
            MENU_PADDING_Y,
            menu.title(),
            theme.foreground.to_argb_u32(),
        );
    }
}

fn render_dropdown(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
    let Some(menu) = model.ui.open_menu else {
        return;
    };
    let theme = &model.theme.menu_bar;
    let metrics = model.metrics();

    frame.draw_bordered_rect(
        layout::dropdown_rect(metrics, menu),
        theme.dropdown_background.to_argb_u32(),
        theme.border.to_argb_u32(),
    );

    for (item, rect) in layout::dropdown_item_rects(metrics, menu) {
        if model.ui.hovered_item == Some(item) {
            let inner = Rect::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0);
            frame.fill_rect(inner, theme.hover_background.to_argb_u32());
        }
        let y = (rect.y as usize) + MENU_PADDING_Y;
        painter.draw(
            frame,
            (rect.x + MENU_PADDING_X).round() as usize,
            y,
            item.label(),
            theme.foreground.to_argb_u32(),
        );

        let shortcut = item.shortcut();
        let shortcut_x = rect.right() - MENU_PADDING_X - metrics.text_width(shortcut);
        painter.draw(
            frame,
            shortcut_x.max(rect.x).round() as usize,
            y,
            shortcut,
            theme.shortcut_foreground.to_argb_u32(),
        );
    }
}

/// Bottom toolbar: the Find button followed by the status message
fn render_toolbar(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    window_size: (u32, u32),
    chrome: MainChrome,
) {
    let theme = &model.theme.status_bar;
    let metrics = model.metrics();
    let toolbar = layout::toolbar_rect(metrics, window_size);

    frame.fill_rect(toolbar, theme.background.to_argb_u32());
    frame.fill_rect_px(
        0,
        toolbar.y as usize,
        frame.width(),
        1,
        theme.border.to_argb_u32(),
    );

    let button = layout::find_button_rect(metrics, window_size);
    render_button(
        frame,
        painter,
        &model.theme,
        button,
        "Find",
        chrome.find_button,
    );

    if !model.ui.status_message.is_empty() {
        let x = (button.right() + layout::WIDGET_MARGIN).round() as usize;
        let y = button.y as usize
            + (button.height as usize).saturating_sub(painter.line_height()) / 2;
        frame.set_clip(toolbar);
        painter.draw(
            frame,
            x,
            y,
            &model.ui.status_message,
            theme.foreground.to_argb_u32(),
        );
        frame.clear_clip();
    }
}

fn render_input(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    rect: Rect,
    text: &str,
    cursor_chars: usize,
    focused: bool,
) {
    let theme = &model.theme.input;
    let metrics = model.metrics();
    let border = if focused {
        theme.focus_border
    } else {
        theme.border
    };
    frame.draw_bordered_rect(rect, theme.background.to_argb_u32(), border.to_argb_u32());

    let scroll = layout::input_scroll_offset(metrics, rect, cursor_chars);
    let visible: String = text
        .chars()
        .skip(scroll)
        .take(layout::input_visible_chars(metrics, rect) + 1)
        .collect();

    let text_x = (rect.x + TEXT_PADDING).round() as usize;
    let text_y = rect.y as usize + (rect.height as usize).saturating_sub(painter.line_height()) / 2;

    frame.set_clip(Rect::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0));
    painter.draw(frame, text_x, text_y, &visible, theme.foreground.to_argb_u32());

    if focused && model.ui.cursor_visible {
        let x = text_x + ((cursor_chars - scroll) as f32 * painter.char_width()).round() as usize;
        frame.fill_rect_px(
            x,
            text_y,
            CARET_WIDTH,
            painter.line_height(),
            theme.cursor_color.to_argb_u32(),
        );
    }
    frame.clear_clip();
}
