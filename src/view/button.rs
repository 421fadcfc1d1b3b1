//! Button rendering primitives
//!
//! Pure functions: callers determine visual state from the model and pass it
//! in. No widget tree or stored state.

use jot::layout::Rect;
use jot::theme::Theme;

use super::frame::{Frame, TextPainter};

/// Visual state of a button, determined by the caller from UI interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    Hovered,
    Pressed,
}

/// Render a button with centered text label
pub fn render_button(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    rect: Rect,
    label: &str,
    state: ButtonState,
) {
    let btn = &theme.button;

    let bg = match state {
        ButtonState::Normal => btn.background,
        ButtonState::Hovered => btn.background_hover,
        ButtonState::Pressed => btn.background_pressed,
    };
    frame.draw_bordered_rect(rect, bg.to_argb_u32(), btn.border.to_argb_u32());

    if state == ButtonState::Hovered {
        // Focus ring 1px inside the border
        let inner = Rect::new(rect.x + 1.0, rect.y + 1.0, rect.width - 2.0, rect.height - 2.0);
        if inner.width > 0.0 && inner.height > 0.0 {
            let ring = btn.focus_ring.to_argb_u32();
            frame.draw_bordered_rect(inner, bg.to_argb_u32(), ring);
        }
    }

    let text_w = (label.chars().count() as f32 * painter.char_width()).round() as usize;
    let w = rect.width.round() as usize;
    let h = rect.height.round() as usize;
    let text_x = rect.x.round() as usize + w.saturating_sub(text_w) / 2;
    let text_y = rect.y.round() as usize + h.saturating_sub(painter.line_height()) / 2;
    painter.draw(frame, text_x, text_y, label, btn.foreground.to_argb_u32());
}
