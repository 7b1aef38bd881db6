mod components;
pub mod config;
mod events;
pub mod storage;

use std::{sync::mpsc::Sender, thread::JoinHandle};

use surf_core::worker::WorkerRequest;

use crate::WorkerAppState;
use config::Config;
use events::{EventQueue, OpenDatabaseRequested, SessionIoRequested};
use storage::{load_json, save_json};

pub use components::{ControlBar, Graph};

pub type DynRequestSender = Sender<Box<dyn WorkerRequest<WorkerAppState>>>;

pub struct EguiApp {
    config: Config,
    worker_thread_handle: Option<JoinHandle<()>>,
    control_bar: ControlBar,
    graph: Graph,
    request_tx: DynRequestSender,
    shortcuts_modal_open: bool,
    ui_selection: UISelection,
    event_queue: EventQueue<Self>,
    request_redraw: Option<()>,
}

#[derive(Debug, PartialEq, Eq)]
enum UISelection {
    Chart,
    Preferences,
}

impl EguiApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: Config,
        request_tx: DynRequestSender,
        worker_thread_handle: JoinHandle<()>,
    ) -> Self {
        let mut control_bar = ControlBar::new(request_tx.clone());
        // Dispatch the initial database load right away, so the UI
        // shows a live entry count once parsing finished.
        control_bar.set_database_path(&config.database_path);

        Self {
            config,
            worker_thread_handle: Some(worker_thread_handle),
            control_bar,
            graph: Graph::new(),
            request_tx,
            shortcuts_modal_open: false,
            ui_selection: UISelection::Chart,
            event_queue: EventQueue::<Self>::new(),
            request_redraw: None,
        }
    }

    fn reset_state(&mut self) {
        self.graph.clear();
        self.event_queue.discard_events();
    }

    fn update_state(&mut self) {
        self.run_events();
        if self.control_bar.try_update() {
            self.request_redraw();
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }

        self.update_state();

        // Keep polling while lookups, loads or dialogs are in flight.
        if !self.event_queue.is_empty() || !self.control_bar.is_idle() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }

        let mut should_quit = false;

        // Handle keyboard input.
        ctx.input(|i| {
            // Help window.
            if i.key_pressed(egui::Key::F1) {
                self.shortcuts_modal_open = !self.shortcuts_modal_open;
            }
            // Quick load app session.
            if i.key_pressed(egui::Key::F5) {
                if let Err(error) = load_json(self, None) {
                    log::error!("{}", error)
                };
            }
            // Quick save app session.
            if i.key_pressed(egui::Key::F6) {
                if let Err(error) = save_json(self, None) {
                    log::error!("{}", error)
                };
            }
            // Close app.
            if i.key_pressed(egui::Key::F10) {
                // Quitting cannot be requested from within here, the UI
                // stops, but not the worker thread.
                should_quit = true;
            }
            // Open preferences.
            if i.key_pressed(egui::Key::F12) {
                self.ui_selection = UISelection::Preferences;
            }
            if i.key_pressed(egui::Key::S) && i.modifiers.ctrl {
                log::debug!("open dialog to select session save path");
                let handle = std::thread::spawn(|| rfd::FileDialog::new().save_file());
                let event = SessionIoRequested::new(true, Some(handle));
                self.event_queue.queue_event(Box::new(event));
            }
            if i.key_pressed(egui::Key::L) && i.modifiers.ctrl {
                log::debug!("open dialog to select session load path");
                let handle = std::thread::spawn(|| rfd::FileDialog::new().pick_file());
                let event = SessionIoRequested::new(false, Some(handle));
                self.event_queue.queue_event(Box::new(event));
            }
            if i.key_pressed(egui::Key::O) && i.modifiers.ctrl {
                log::debug!("open dialog to select database file");
                let handle = std::thread::spawn(|| rfd::FileDialog::new().pick_file());
                let event = OpenDatabaseRequested::new(Some(handle));
                self.event_queue.queue_event(Box::new(event));
            }
        });

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.render_shortcut_modal(ctx);
            self.menu(ui, ctx);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.central_panel(ui, ctx);
        });

        if should_quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(handle) = self.worker_thread_handle.take() {
            surf_core::worker::request_stop(&self.request_tx, handle);
        }
    }
}

impl EguiApp {
    fn central_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        match self.ui_selection {
            UISelection::Chart => {
                self.control_bar.render(&mut self.event_queue, ui, ctx);
                self.graph.render(&self.config, ui);
            }
            UISelection::Preferences => {
                let reload_database = self.config.render(ctx, ui);
                if reload_database {
                    self.control_bar
                        .set_database_path(&self.config.database_path);
                    self.graph.clear();
                }
            }
        }
    }

    fn menu(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Database…").clicked() {
                    log::debug!("open dialog to select database file");
                    let handle = std::thread::spawn(|| rfd::FileDialog::new().pick_file());
                    let event = OpenDatabaseRequested::new(Some(handle));
                    self.event_queue.queue_event(Box::new(event));
                }
                if ui.button("Save Session").clicked() {
                    log::debug!("open dialog to select session save path");
                    let handle = std::thread::spawn(|| rfd::FileDialog::new().save_file());
                    let event = SessionIoRequested::new(true, Some(handle));
                    self.event_queue.queue_event(Box::new(event));
                }
                if ui.button("Load Session").clicked() {
                    log::debug!("open dialog to select session load path");
                    let handle = std::thread::spawn(|| rfd::FileDialog::new().pick_file());
                    let event = SessionIoRequested::new(false, Some(handle));
                    self.event_queue.queue_event(Box::new(event));
                }
                if ui.button("Quick Save").clicked() {
                    if let Err(error) = save_json(self, None) {
                        log::error!("{}", error)
                    };
                }
                if ui.button("Quick Load").clicked() {
                    // Loading on the main thread is fine, the database
                    // itself is re-read on the worker anyway.
                    if let Err(error) = load_json(self, None) {
                        log::error!("{}", error)
                    };
                }
                if ui.button("Preferences").clicked() {
                    self.ui_selection = UISelection::Preferences
                };
                if ui.button("Reset Session").clicked() {
                    self.reset_state();
                };
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            // Selection of ui view.
            ui.menu_button("View", |ui| {
                ui.selectable_value(&mut self.ui_selection, UISelection::Chart, "Chart");
                ui.selectable_value(
                    &mut self.ui_selection,
                    UISelection::Preferences,
                    "Preferences",
                );
            });

            ui.toggle_value(&mut self.shortcuts_modal_open, "Help (F1)");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                egui::widgets::global_theme_preference_buttons(ui);
            });
        });
    }

    fn render_shortcut_modal(&mut self, ctx: &egui::Context) {
        if self.shortcuts_modal_open
            && egui::Modal::new("shortcut_modal".into())
                .show(ctx, |ui| {
                    ui.heading("Keyboard Shortcuts");
                    ui.separator();
                    ui.label("Enter = Graph the typed name");
                    ui.separator();
                    ui.label("CTRL + O = Open Database File");
                    ui.separator();
                    ui.label("CTRL + S = Open Session Save Dialog");
                    ui.separator();
                    ui.label("CTRL + L = Open Session Load Dialog");
                    ui.separator();
                    ui.label("F1 = Show Keyboard Shortcuts");
                    ui.separator();
                    ui.label("F5 = Load Session");
                    ui.separator();
                    ui.label("F6 = Save Session");
                    ui.separator();
                    ui.label("F10 = Quit App");
                    ui.separator();
                    ui.label("F12 = Open Preferences");
                    ui.separator();
                })
                .should_close()
        {
            self.shortcuts_modal_open = false;
        };
    }
}
