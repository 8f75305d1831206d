use std::path::PathBuf;

use eframe::egui;
use tracing::warn;

use crate::{decode, encode};

/// The converter window: pick an NBS file, press Convert, copy the macro
/// out of the read-only output field. The conversion itself is a pure
/// in-memory function and finishes well within a frame, so it runs right
/// on the UI thread.
pub struct ConverterApp {
    input_path: String,
    output: String,
    status: Option<String>,
    error_message: Option<String>,
    comments: bool,
}

impl ConverterApp {
    pub fn new() -> Self {
        Self {
            input_path: String::new(),
            output: String::new(),
            status: None,
            error_message: None,
            comments: false,
        }
    }

    fn convert(&mut self) {
        self.status = None;
        self.error_message = None;
        self.output.clear();

        let bytes = match std::fs::read(PathBuf::from(&self.input_path)) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(path = %self.input_path, error = %e, "failed to read input file");
                self.error_message = Some(e.to_string());
                return;
            }
        };

        match decode(&bytes) {
            Ok(song) => {
                self.output = encode(&song, self.comments);
                self.status = Some("Converted successfully.".to_string());
            }
            Err(e) => {
                warn!(path = %self.input_path, error = %e, "failed to parse NBS file");
                self.error_message = Some(format!("Parsing error: {}", e));
            }
        }
    }
}

impl Default for ConverterApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for ConverterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("nbs2doakmp");
            ui.separator();

            ui.label("Input NBS file");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.input_path)
                        .desired_width(ui.available_width() - 80.0),
                );
                if ui.button("Browse…").clicked() {
                    if let Some(path) = rfd::FileDialog::new()
                        .set_title("Open NBS Song")
                        .add_filter("Note Block Song", &["nbs"])
                        .pick_file()
                    {
                        self.input_path = path.display().to_string();
                    }
                }
            });

            ui.checkbox(&mut self.comments, "Output with comments.");

            if ui.button("Convert").clicked() {
                self.convert();
            }

            if let Some(ref error) = self.error_message {
                ui.colored_label(egui::Color32::RED, error);
            } else if let Some(ref status) = self.status {
                ui.label(status);
            }

            ui.separator();
            ui.label("Output");
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(&mut self.output.as_str()),
                );
            });
        });
    }
}
