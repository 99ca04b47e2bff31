//! Native and in-window dialogs.

use std::path::{Path, PathBuf};

use eframe::egui;
use editor_core::{Prompter, SaveSuggestion};

/// [`Prompter`] backed by the platform's native dialogs.
pub struct NativePrompter;

fn text_file_dialog() -> rfd::FileDialog {
    rfd::FileDialog::new()
        .add_filter("Text files", &["txt"])
        .add_filter("All files", &["*"])
}

impl Prompter for NativePrompter {
    fn confirm_discard_changes(&mut self) -> bool {
        let answer = rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Warning)
            .set_title("Unsaved Changes")
            .set_description("You have unsaved changes. Are you sure you want to continue?")
            .set_buttons(rfd::MessageButtons::YesNo)
            .show();
        matches!(answer, rfd::MessageDialogResult::Yes)
    }

    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = text_file_dialog().set_title("Open");
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }

    fn pick_save_path(&mut self, suggestion: &SaveSuggestion) -> Option<PathBuf> {
        let mut dialog = text_file_dialog()
            .set_title("Save")
            .set_file_name(suggestion.file_name.clone());
        if let Some(dir) = &suggestion.directory {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GistPromptOutcome {
    Pending,
    Submitted(String),
    Cancelled,
}

/// Modal text prompt asking for a Gist ID.
#[derive(Debug, Default)]
pub struct GistPrompt {
    open: bool,
    input: String,
    focus_pending: bool,
}

impl GistPrompt {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
        self.input.clear();
        self.focus_pending = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> GistPromptOutcome {
        if !self.open {
            return GistPromptOutcome::Pending;
        }

        let mut outcome = GistPromptOutcome::Pending;
        egui::Window::new("Load Gist")
            .id(egui::Id::new("load_gist_prompt"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Enter GitHub Gist ID:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.input)
                        .hint_text("e.g. 6b1a4f2c9e or a gist URL")
                        .desired_width(320.0),
                );
                if self.focus_pending {
                    response.request_focus();
                    self.focus_pending = false;
                }
                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || enter_pressed {
                        outcome = GistPromptOutcome::Submitted(self.input.clone());
                    }
                    if ui.button("Cancel").clicked() {
                        outcome = GistPromptOutcome::Cancelled;
                    }
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = GistPromptOutcome::Cancelled;
        }
        if outcome != GistPromptOutcome::Pending {
            self.open = false;
        }
        outcome
    }
}
