use std::{path::PathBuf, time::Duration};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use editor_core::{EditorShell, OpenOutcome, SaveOutcome};
use gist_client::GistId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{apply_event, SessionState};
use crate::ui::dialogs::{GistPrompt, GistPromptOutcome, NativePrompter};
use crate::ui::preferences::{
    EditorPreferences, MAX_FONT_SIZE, MIN_FONT_SIZE, PREFERENCES_STORAGE_KEY,
};

const OPEN_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SAVE_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const LOAD_GIST_SHORTCUT: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::G);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub window_title: String,
    pub open_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Open,
    Save,
    LoadGist,
    Quit,
}

pub struct EditorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    session: SessionState,
    gist_prompt: GistPrompt,
    preferences: EditorPreferences,
    applied_preferences: Option<EditorPreferences>,
    applied_title: Option<String>,
    close_confirmed: bool,
}

impl EditorApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        preferences: Option<EditorPreferences>,
        startup: StartupConfig,
    ) -> Self {
        let mut session = SessionState::new(EditorShell::new(startup.window_title));
        if let Some(path) = startup.open_path {
            match session.shell.open_path(&path) {
                Ok(()) => session.file_opened(&path),
                Err(err) => session.report_error(UiError::from_editor_error(
                    UiErrorContext::OpenFile,
                    &err,
                )),
            }
        }

        Self {
            cmd_tx,
            ui_rx,
            session,
            gist_prompt: GistPrompt::default(),
            preferences: preferences.unwrap_or_default(),
            applied_preferences: None,
            applied_title: None,
            close_confirmed: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_event(&mut self.session, event);
        }
    }

    fn apply_preferences_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_preferences == Some(self.preferences) {
            return;
        }
        ctx.set_visuals(self.preferences.visuals());
        self.applied_preferences = Some(self.preferences);
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.session.shell.title();
        if self.applied_title.as_deref() != Some(title.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.applied_title = Some(title);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> Option<MenuAction> {
        if self.gist_prompt.is_open() {
            return None;
        }
        ctx.input_mut(|i| {
            if i.consume_shortcut(&OPEN_SHORTCUT) {
                Some(MenuAction::Open)
            } else if i.consume_shortcut(&SAVE_SHORTCUT) {
                Some(MenuAction::Save)
            } else if i.consume_shortcut(&LOAD_GIST_SHORTCUT) {
                Some(MenuAction::LoadGist)
            } else {
                None
            }
        })
    }

    fn run_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::Open => self.open_file(),
            MenuAction::Save => self.save_file(),
            MenuAction::LoadGist => self.start_load_gist(),
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn open_file(&mut self) {
        if self.session.is_fetching() {
            return;
        }
        match self.session.shell.open(&mut NativePrompter) {
            Ok(OpenOutcome::Opened(path)) => self.session.file_opened(&path),
            Ok(OpenOutcome::Declined | OpenOutcome::Cancelled) => {}
            Err(err) => {
                tracing::error!("open failed: {err}");
                self.session
                    .report_error(UiError::from_editor_error(UiErrorContext::OpenFile, &err));
            }
        }
    }

    fn save_file(&mut self) {
        match self.session.shell.save(&mut NativePrompter) {
            Ok(SaveOutcome::Saved(path)) => {
                self.session.status = format!("Saved {}", path.display());
            }
            Ok(SaveOutcome::Cancelled) => {}
            Err(err) => {
                tracing::error!("save failed: {err}");
                self.session
                    .report_error(UiError::from_editor_error(UiErrorContext::SaveFile, &err));
            }
        }
    }

    fn start_load_gist(&mut self) {
        if self.session.is_fetching() {
            return;
        }
        if self.session.shell.begin_load_remote(&mut NativePrompter) {
            self.gist_prompt.open();
        }
    }

    fn submit_gist_id(&mut self, input: &str) {
        let gist_id = match GistId::parse(input) {
            Ok(Some(gist_id)) => gist_id,
            Ok(None) => return,
            Err(err) => {
                self.session.report_error(UiError::from_gist_error(&err));
                return;
            }
        };

        let label = gist_id.to_string();
        if dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchGist { gist_id },
            &mut self.session.status,
        ) {
            self.session.status = format!("Loading gist {label}...");
            self.session.fetch_in_flight = Some(label);
        }
    }

    fn guard_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.close_confirmed {
            return;
        }
        if self.session.shell.can_exit(&mut NativePrompter) {
            self.close_confirmed = true;
        } else {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }

    fn show_menu_bar(&mut self, ctx: &egui::Context) -> Option<MenuAction> {
        let mut action = None;
        let fetching = self.session.is_fetching();

        egui::TopBottomPanel::top("app_top_menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .add_enabled(
                            !fetching,
                            egui::Button::new("Open")
                                .shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT)),
                        )
                        .clicked()
                    {
                        action = Some(MenuAction::Open);
                        ui.close();
                    }
                    if ui
                        .add(
                            egui::Button::new("Save")
                                .shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT)),
                        )
                        .clicked()
                    {
                        action = Some(MenuAction::Save);
                        ui.close();
                    }
                    if ui
                        .add_enabled(
                            !fetching,
                            egui::Button::new("Load Gist")
                                .shortcut_text(ctx.format_shortcut(&LOAD_GIST_SHORTCUT)),
                        )
                        .clicked()
                    {
                        action = Some(MenuAction::LoadGist);
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        action = Some(MenuAction::Quit);
                        ui.close();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.preferences.dark_mode, "Dark mode");
                    ui.add(
                        egui::Slider::new(
                            &mut self.preferences.font_size,
                            MIN_FONT_SIZE..=MAX_FONT_SIZE,
                        )
                        .text("Font size")
                        .step_by(1.0),
                    );
                    if ui.button("Reset view settings").clicked() {
                        self.preferences = EditorPreferences::default();
                    }
                });
            });
        });

        action
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        let document = self.session.shell.document();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.session.is_fetching() {
                    ui.spinner();
                }
                ui.label(&self.session.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let state = if document.is_dirty() { "modified" } else { "saved" };
                    ui.weak(format!("{} | {state}", document.source().label()));
                });
            });
        });
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        let editable = !self.session.is_fetching() && !self.gist_prompt.is_open();
        let font = self.preferences.editor_font();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let edit = egui::TextEdit::multiline(
                        self.session.shell.document_mut().buffer_mut(),
                    )
                    .code_editor()
                    .font(font)
                    .interactive(editable)
                    .desired_width(f32::INFINITY);
                    let response = ui.add_sized(ui.available_size(), edit);
                    if response.changed() {
                        self.session.shell.on_text_change();
                    }
                });
        });
    }

    fn show_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(err) = self.session.pending_error.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new(err.title())
            .id(egui::Id::new("error_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.set_max_width(420.0);
                ui.label(err.message());
                if let Some(hint) = err.hint() {
                    ui.small(hint);
                }
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.session.pending_error = None;
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_preferences_if_needed(ctx);

        let mut action = self.handle_shortcuts(ctx);
        if let Some(menu_action) = self.show_menu_bar(ctx) {
            action = Some(menu_action);
        }
        self.show_status_bar(ctx);
        self.show_editor(ctx);

        match self.gist_prompt.show(ctx) {
            GistPromptOutcome::Submitted(input) => self.submit_gist_id(&input),
            GistPromptOutcome::Cancelled | GistPromptOutcome::Pending => {}
        }
        self.show_error_dialog(ctx);

        if let Some(action) = action {
            self.run_action(ctx, action);
        }

        self.guard_close_request(ctx);
        self.sync_window_title(ctx);

        if self.session.is_fetching() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(serialized) = serde_json::to_string(&self.preferences) {
            storage.set_string(PREFERENCES_STORAGE_KEY, serialized);
        }
    }
}
