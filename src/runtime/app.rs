use std::rc::Rc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use fontdue::Font;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowAttributes, WindowId};

use jot::cli::StartupConfig;
use jot::commands::{Cmd, MessageLevel};
use jot::file_io;
use jot::layout;
use jot::messages::{AppMsg, DialogMsg, Msg, UiMsg};
use jot::model::AppModel;
use jot::update::{update, CURSOR_BLINK_INTERVAL, FIND_TITLE};

use super::input::{handle_dialog_key, handle_main_key};
use super::mouse::{self, PressState, SCROLL_LINES};
use crate::view::font::load_font;
use crate::view::{ButtonState, DialogChrome, MainChrome, Renderer};

/// A window with its softbuffer renderer
struct SurfaceWindow {
    window: Rc<Window>,
    renderer: Renderer,
    // Kept alive for the lifetime of the surface
    _context: Context<Rc<Window>>,
}

impl SurfaceWindow {
    fn id(&self) -> WindowId {
        self.window.id()
    }
}

pub struct App {
    model: AppModel,
    font: Option<Rc<Font>>,
    main: Option<SurfaceWindow>,
    /// Find/replace window, created on first use and then only shown or hidden
    dialog: Option<SurfaceWindow>,
    title: String,
    last_tick: Instant,
    modifiers: ModifiersState,
    main_mouse: Option<(f64, f64)>,
    dialog_mouse: Option<(f64, f64)>,
    press: PressState,
    fatal: Option<anyhow::Error>,
}

impl App {
    pub fn new(startup: StartupConfig) -> Self {
        // Sized once the main window exists
        let model = AppModel::new(0, 0, &startup);
        let title = model.window_title();

        Self {
            model,
            font: None,
            main: None,
            dialog: None,
            title,
            last_tick: Instant::now(),
            modifiers: ModifiersState::empty(),
            main_mouse: None,
            dialog_mouse: None,
            press: PressState::default(),
            fatal: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn finish(self) -> Result<()> {
        match self.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn create_surface_window(
        &self,
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
    ) -> Result<SurfaceWindow> {
        let font = self
            .font
            .clone()
            .ok_or_else(|| anyhow!("Font not loaded"))?;
        let window = Rc::new(event_loop.create_window(attributes)?);
        let context = Context::new(Rc::clone(&window))
            .map_err(|e| anyhow!("Failed to create graphics context: {}", e))?;
        let renderer = Renderer::new(
            Rc::clone(&window),
            &context,
            font,
            self.model.config.font_size,
        )?;
        Ok(SurfaceWindow {
            window,
            renderer,
            _context: context,
        })
    }

    fn init_main_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let font = load_font(self.model.config.font_path.as_deref())?;
        self.font = Some(Rc::new(font));

        let attributes = Window::default_attributes()
            .with_title(self.model.window_title())
            .with_inner_size(LogicalSize::new(
                self.model.config.window_width,
                self.model.config.window_height,
            ));
        let main = self.create_surface_window(event_loop, attributes)?;

        self.model
            .set_metrics(main.renderer.line_height(), main.renderer.char_width());
        let size = main.window.inner_size();
        update(&mut self.model, Msg::resize(size.width, size.height));

        self.main = Some(main);
        Ok(())
    }

    fn show_find_dialog(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        if self.dialog.is_none() {
            let (width, height) = layout::dialog_layout(self.model.metrics()).size;
            let attributes = Window::default_attributes()
                .with_title(FIND_TITLE)
                .with_inner_size(PhysicalSize::new(width, height))
                .with_resizable(false)
                .with_visible(false);
            self.dialog = Some(self.create_surface_window(event_loop, attributes)?);
            tracing::debug!("Created find/replace window");
        }

        if let Some(dialog) = &self.dialog {
            dialog.window.set_visible(true);
            dialog.window.focus_window();
            dialog.window.request_redraw();
        }
        Ok(())
    }

    fn hide_find_dialog(&mut self) {
        if let Some(dialog) = &self.dialog {
            dialog.window.set_visible(false);
        }
        self.dialog_mouse = None;
        self.press.dialog_button = None;
        if let Some(main) = &self.main {
            main.window.focus_window();
        }
    }

    /// Run `msg` through update and carry out whatever it asks for
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        let cmd = update(&mut self.model, msg);
        self.after_update(event_loop, cmd);
    }

    fn after_update(&mut self, event_loop: &ActiveEventLoop, cmd: Option<Cmd>) {
        if let Some(cmd) = cmd {
            let redraw = cmd.needs_redraw();
            self.process_cmd(event_loop, cmd);
            if redraw {
                self.request_redraw();
            }
        }
        self.sync_title();
    }

    fn sync_title(&mut self) {
        let title = self.model.window_title();
        if title != self.title {
            if let Some(main) = &self.main {
                main.window.set_title(&title);
            }
            self.title = title;
        }
    }

    fn request_redraw(&self) {
        if let Some(main) = &self.main {
            main.window.request_redraw();
        }
        if let Some(dialog) = &self.dialog {
            if self.model.find_dialog.as_ref().is_some_and(|d| d.visible) {
                dialog.window.request_redraw();
            }
        }
    }

    /// Execute a command on the UI thread, feeding results back as messages
    fn process_cmd(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(event_loop, cmd);
                }
            }

            // =====================================================================
            // File Dialogs (using rfd)
            // =====================================================================
            Cmd::ShowOpenFileDialog { start_dir } => {
                let mut dlg = rfd::FileDialog::new().set_title("Open");
                if let Some(dir) = start_dir {
                    dlg = dlg.set_directory(dir);
                }
                let path = dlg.pick_file();
                self.dispatch(event_loop, Msg::App(AppMsg::OpenFileDialogResult { path }));
            }

            Cmd::ShowSaveFileDialog { suggested_path } => {
                let mut dlg = rfd::FileDialog::new()
                    .set_title("Save")
                    .add_filter("Text files", &["txt"])
                    .add_filter("All files", &["*"]);
                if let Some(ref path) = suggested_path {
                    if let Some(dir) = path.parent() {
                        dlg = dlg.set_directory(dir);
                    }
                    if let Some(name) = path.file_name() {
                        dlg = dlg.set_file_name(name.to_string_lossy());
                    }
                }
                let path = dlg.save_file();
                self.dispatch(event_loop, Msg::App(AppMsg::SaveFileDialogResult { path }));
            }

            // =====================================================================
            // File I/O
            // =====================================================================
            Cmd::LoadFile { path } => {
                let result = file_io::open(&path);
                self.dispatch(event_loop, Msg::App(AppMsg::FileLoaded { path, result }));
            }

            Cmd::SaveFile {
                path,
                content,
                atomic,
            } => {
                let result = if atomic {
                    file_io::save_atomic(&path, &content)
                } else {
                    file_io::save(&path, &content)
                };
                self.dispatch(event_loop, Msg::App(AppMsg::SaveCompleted { path, result }));
            }

            Cmd::ShowMessage { level, title, text } => {
                let level = match level {
                    MessageLevel::Info => rfd::MessageLevel::Info,
                    MessageLevel::Error => rfd::MessageLevel::Error,
                };
                rfd::MessageDialog::new()
                    .set_level(level)
                    .set_title(title)
                    .set_description(text)
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            }

            // =====================================================================
            // Find/replace window
            // =====================================================================
            Cmd::ShowFindDialog => {
                if let Err(e) = self.show_find_dialog(event_loop) {
                    tracing::error!("Failed to open find dialog: {:#}", e);
                    // Keep the model in step with what is on screen
                    if let Some(dialog) = self.model.find_dialog.as_mut() {
                        dialog.visible = false;
                    }
                    self.dispatch(
                        event_loop,
                        Msg::Ui(UiMsg::SetStatus(format!("Could not open find dialog: {}", e))),
                    );
                }
            }

            Cmd::HideFindDialog => self.hide_find_dialog(),

            Cmd::Quit => event_loop.exit(),
        }
    }

    fn main_chrome(&self) -> MainChrome {
        let find_button = if self.press.find_button {
            ButtonState::Pressed
        } else if self
            .main_mouse
            .is_some_and(|(x, y)| mouse::over_find_button(&self.model, x, y))
        {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        };
        MainChrome { find_button }
    }

    fn dialog_chrome(&self) -> DialogChrome {
        DialogChrome {
            hovered: self
                .dialog_mouse
                .and_then(|(x, y)| mouse::dialog_button_at(&self.model, x, y)),
            pressed: self.press.dialog_button,
        }
    }

    fn handle_main_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        let cmd = match event {
            WindowEvent::CloseRequested => update(&mut self.model, Msg::App(AppMsg::Quit)),
            WindowEvent::Resized(size) => {
                if let Some(main) = &mut self.main {
                    if let Err(e) = main.renderer.resize(size.width, size.height) {
                        tracing::error!("{:#}", e);
                    }
                }
                update(&mut self.model, Msg::resize(size.width, size.height))
            }
            WindowEvent::RedrawRequested => {
                let chrome = self.main_chrome();
                if let Some(main) = &mut self.main {
                    if let Err(e) = main.renderer.render_main(&self.model, chrome) {
                        tracing::error!("Render failed: {:#}", e);
                    }
                }
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                handle_main_key(&mut self.model, event.logical_key, self.modifiers)
            }
            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x, position.y);
                let was_over = self.main_chrome().find_button;
                self.main_mouse = Some((x, y));
                let cmd = mouse::main_hover(&mut self.model, x, y);
                if cmd.is_none() && self.main_chrome().find_button != was_over {
                    Some(Cmd::Redraw)
                } else {
                    cmd
                }
            }
            WindowEvent::CursorLeft { .. } => {
                self.main_mouse = None;
                Some(Cmd::Redraw)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.main_mouse.unwrap_or_default();
                match state {
                    ElementState::Pressed => {
                        mouse::main_press(&mut self.model, &mut self.press, x, y)
                    }
                    ElementState::Released => {
                        mouse::main_release(&mut self.model, &mut self.press, x, y)
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (
                        (-x * SCROLL_LINES as f32).round() as i32,
                        (-y * SCROLL_LINES as f32).round() as i32,
                    ),
                    MouseScrollDelta::PixelDelta(pos) => {
                        let metrics = self.model.metrics();
                        (
                            (-pos.x / metrics.char_width as f64).round() as i32,
                            (-pos.y / metrics.line_height as f64).round() as i32,
                        )
                    }
                };
                mouse::main_scroll(&mut self.model, dx, dy)
            }
            _ => None,
        };
        self.after_update(event_loop, cmd);
    }

    fn handle_dialog_event(&mut self, event_loop: &ActiveEventLoop, event: WindowEvent) {
        let cmd = match event {
            // Closing the window only hides it; the dialog keeps its text
            WindowEvent::CloseRequested => update(&mut self.model, Msg::Dialog(DialogMsg::Close)),
            WindowEvent::Resized(size) => {
                if let Some(dialog) = &mut self.dialog {
                    if let Err(e) = dialog.renderer.resize(size.width, size.height) {
                        tracing::error!("{:#}", e);
                    }
                }
                Some(Cmd::Redraw)
            }
            WindowEvent::RedrawRequested => {
                let chrome = self.dialog_chrome();
                if let Some(dialog) = &mut self.dialog {
                    if let Err(e) = dialog.renderer.render_dialog(&self.model, chrome) {
                        tracing::error!("Render failed: {:#}", e);
                    }
                }
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                handle_dialog_key(&mut self.model, event.logical_key, self.modifiers)
            }
            WindowEvent::CursorMoved { position, .. } => {
                let before = self.dialog_chrome().hovered;
                self.dialog_mouse = Some((position.x, position.y));
                (self.dialog_chrome().hovered != before).then_some(Cmd::Redraw)
            }
            WindowEvent::CursorLeft { .. } => {
                self.dialog_mouse = None;
                Some(Cmd::Redraw)
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.dialog_mouse.unwrap_or_default();
                match state {
                    ElementState::Pressed => {
                        mouse::dialog_press(&mut self.model, &mut self.press, x, y)
                    }
                    ElementState::Released => {
                        mouse::dialog_release(&mut self.model, &mut self.press, x, y)
                    }
                }
            }
            _ => None,
        };
        self.after_update(event_loop, cmd);
    }

    fn tick(&mut self) -> Option<Cmd> {
        update(&mut self.model, Msg::Ui(UiMsg::BlinkCursor))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.main.is_some() {
            return;
        }
        if let Err(e) = self.init_main_window(event_loop) {
            tracing::error!("Failed to start: {:#}", e);
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::ModifiersChanged(mods) = &event {
            self.modifiers = mods.state();
            return;
        }

        if self.main.as_ref().is_some_and(|w| w.id() == window_id) {
            self.handle_main_event(event_loop, event);
        } else if self.dialog.as_ref().is_some_and(|w| w.id() == window_id) {
            self.handle_dialog_event(event_loop, event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now.duration_since(self.last_tick) >= CURSOR_BLINK_INTERVAL {
            self.last_tick = now;
            if self.tick().is_some() {
                self.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            self.last_tick + CURSOR_BLINK_INTERVAL,
        ));
    }
}
