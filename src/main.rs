//! Curve-Sketch.
//!
//! Interaktiver Vektor-Kurven-Editor: Klicks legen Punkte an, aus denen pro
//! Frame eine quadratische Spline (oder Polylinie) neu abgeleitet wird;
//! nach dem Abschluss formen Drag-Handles die Kurve live um.

use curve_sketch::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve-Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Curve-Sketch"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Curve-Sketch",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    /// Ein Frame = ein Tick: erst alle Events verarbeiten, dann die Szene
    /// vollständig neu ableiten und in einem Durchlauf zeichnen.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        self.process_events(events);
        self.maybe_request_repaint(ctx);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_canvas_events(
                    ui,
                    &response,
                    self.state.is_drafting(),
                ));

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(ui.painter(), rect.min, &scene);

                if self.state.registry.is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Klick beginnt eine Kurve. Esc/Enter schließt sie ab.",
                        egui::FontId::proportional(20.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context) {
        if self.state.is_drafting()
            || self.state.active_drag.is_some()
            || ctx.input(|i| i.pointer.is_moving())
        {
            ctx.request_repaint();
        }
    }
}
