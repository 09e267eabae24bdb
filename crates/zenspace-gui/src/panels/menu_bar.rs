use zenspace_core::encoding::EncodedImage;

use crate::app::ZenspaceApp;
use crate::messages::{WorkerCommand, WorkerResult};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

pub fn show(ctx: &egui::Context, app: &mut ZenspaceApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Photo...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_photo(app);
                }

                let has_photo = app.painter.as_ref().is_some_and(|p| p.is_ready());
                if ui.add_enabled(has_photo, egui::Button::new("Open Results...")).clicked() {
                    ui.close();
                    open_results(app);
                }

                ui.separator();

                let export_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E);
                if ui
                    .add_enabled(
                        has_photo,
                        egui::Button::new("Export Masked Image...").shortcut_text(ctx.format_shortcut(&export_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    export_masked(app);
                }

                let has_results = !app.results.is_empty();
                if ui.add_enabled(has_results, egui::Button::new("Save Selected Result...")).clicked() {
                    ui.close();
                    save_selected(app);
                }
                if ui.add_enabled(has_results, egui::Button::new("Save All Results...")).clicked() {
                    ui.close();
                    save_all(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_photo(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E))) {
            export_masked(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub fn open_photo(app: &mut ZenspaceApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = result_tx.send(WorkerResult::PhotoPicked { path });
        }
    });
}

/// Pick one or more generated variations to compare against the photo.
pub fn open_results(app: &mut ZenspaceApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_files()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadResults { paths });
        }
    });
}

/// Flatten the painted surface now, then ask where to write it.
pub fn export_masked(app: &mut ZenspaceApp) {
    let Some(painter) = app.painter.as_ref() else {
        return;
    };
    let image = match painter.export_encoded() {
        Ok(Some(image)) => image,
        Ok(None) => {
            app.ui_state.add_log("Photo is still loading".into());
            return;
        }
        Err(e) => {
            app.ui_state.add_log(format!("ERROR: {e}"));
            return;
        }
    };

    let extension = image.mime_type.image_format().extensions_str()[0];
    let file_name = format!("zenspace-masked.{extension}");
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", &[extension])
            .set_file_name(file_name)
            .save_file()
        {
            let _ = cmd_tx.send(WorkerCommand::SaveExport { path, image });
        }
    });
}

pub fn save_selected(app: &ZenspaceApp) {
    save_images(app, app.results.selected_images());
}

pub fn save_all(app: &ZenspaceApp) {
    save_images(app, app.results.all_images());
}

fn save_images(app: &ZenspaceApp, images: Vec<EncodedImage>) {
    if images.is_empty() {
        return;
    }
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            let _ = cmd_tx.send(WorkerCommand::SaveResults { dir, images });
        }
    });
}
