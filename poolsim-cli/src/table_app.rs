//! Interactive pool table front end.
//!
//! Renders the body list read-only each frame and feeds drag-release
//! strikes back into the simulation. The optional configuration file is
//! watched for live edits; a broken edit keeps the last good table running.

use eframe::egui;
use notify::{Event, RecommendedWatcher, Watcher};
use poolsim_core::config::palette;
use poolsim_core::{CollisionSound, HitSpot, SimConfig, Simulation, Telemetry};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

/// Seconds of speed history shown in the graph
const GRAPH_WINDOW_SECONDS: f32 = 10.0;
/// Speed at the top of the graph axis
const GRAPH_MAX_SPEED: f32 = 30.0;
/// Drags shorter than this don't draw a cue line
const CUE_DRAW_THRESHOLD: f32 = 10.0;

pub fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = crate::load_config(config_path.as_ref())?;
    let sim = Simulation::new(config)?;

    let width = sim.config().table.width;
    let height = sim.config().table.height;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width + 140.0, height + 180.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Pool Simulation",
        options,
        Box::new(move |cc| Ok(Box::new(TableApp::new(sim, config_path, cc)))),
    )?;
    Ok(())
}

/// Routes contact volumes to the log; the table has no audio output
struct LogSound;

impl CollisionSound for LogSound {
    fn play(&mut self, volume: f32) {
        log::debug!("contact, volume {:.2}", volume);
    }
}

pub struct TableApp {
    sim: Simulation,
    telemetry: Telemetry,
    sound: LogSound,
    config_path: Option<PathBuf>,
    last_load_error: Option<String>,
    dragging: bool,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: mpsc::Receiver<notify::Result<Event>>,
    needs_reload: bool,
}

impl TableApp {
    pub fn new(
        sim: Simulation,
        config_path: Option<PathBuf>,
        _cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut watcher = None;
        if let Some(path) = &config_path {
            if let Ok(mut w) = notify::recommended_watcher(move |res| {
                // Silently ignore send failures during shutdown
                let _ = tx.send(res);
            }) {
                if w.watch(path, notify::RecursiveMode::NonRecursive).is_ok() {
                    watcher = Some(w);
                }
            }
        }

        let telemetry = Telemetry::new(
            sim.bodies().len(),
            GRAPH_WINDOW_SECONDS,
            sim.config().physics.frame_rate,
        );
        Self {
            sim,
            telemetry,
            sound: LogSound,
            config_path,
            last_load_error: None,
            dragging: false,
            file_watcher: watcher,
            file_receiver: rx,
            needs_reload: false,
        }
    }

    fn reload_config(&mut self) {
        let Some(path) = self.config_path.clone() else {
            return;
        };
        let rebuilt = crate::load_config(Some(&path))
            .and_then(|config: SimConfig| Ok(Simulation::new(config)?));
        match rebuilt {
            Ok(sim) => {
                self.telemetry = Telemetry::new(
                    sim.bodies().len(),
                    GRAPH_WINDOW_SECONDS,
                    sim.config().physics.frame_rate,
                );
                self.sim = sim;
                self.last_load_error = None;
                self.dragging = false;
            }
            Err(e) => {
                // Keep the last good table running
                self.last_load_error = Some(e.to_string());
            }
        }
    }

    fn check_file_changes(&mut self) {
        while let Ok(event) = self.file_receiver.try_recv() {
            match event {
                Ok(Event {
                    kind: notify::EventKind::Modify(_),
                    paths,
                    ..
                }) => {
                    if self
                        .config_path
                        .as_ref()
                        .map_or(false, |path| paths.contains(path))
                    {
                        self.needs_reload = true;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    log::warn!("file watcher error: {}", e);
                }
            }
        }

        if self.needs_reload {
            self.reload_config();
            self.needs_reload = false;
        }
    }

    fn draw_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("⏮ Restart").clicked() {
                self.sim.reset();
                self.telemetry.clear();
            }
            ui.separator();

            let cue = self.sim.cue_ball();
            ui.label(format!(
                "Cue pos: ({:.0}, {:.0})  vel: ({:.2}, {:.2})",
                cue.position.x, cue.position.y, cue.velocity.x, cue.velocity.y
            ));
            ui.separator();
            ui.label(format!("t = {:.1} s", self.sim.elapsed()));

            if self.sim.game_over() {
                ui.separator();
                let message = if self.sim.cue_ball().pocketed {
                    "GAME OVER — cue ball pocketed"
                } else {
                    "GAME OVER — table cleared"
                };
                ui.colored_label(egui::Color32::RED, message);
            }
        });
    }

    fn draw_hit_spot_selector(&mut self, ui: &mut egui::Ui) {
        ui.label("Hit spot");
        let rows = [
            [HitSpot::TopLeft, HitSpot::Top, HitSpot::TopRight],
            [HitSpot::Left, HitSpot::Center, HitSpot::Right],
            [HitSpot::BottomLeft, HitSpot::Bottom, HitSpot::BottomRight],
        ];
        egui::Grid::new("hit_spot_grid").show(ui, |ui| {
            for row in rows {
                for spot in row {
                    let selected = self.sim.selected_hit_spot() == spot;
                    if ui.selectable_label(selected, spot.label()).clicked() {
                        self.sim.select_hit_spot(spot);
                    }
                }
                ui.end_row();
            }
        });
    }

    fn draw_table(&mut self, ui: &mut egui::Ui) {
        let table = &self.sim.config().table;
        let size = egui::vec2(table.width, table.height);
        let ball_radius = table.ball_radius;
        let pocket_radius = table.pocket_radius;
        let pockets = table.pocket_centers();
        let max_drag = self.sim.config().strike.max_drag_length;

        let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
        let origin = response.rect.min;
        let to_screen = |p: glam::Vec2| origin + egui::vec2(p.x, p.y);

        // Felt
        let [fr, fg, fb] = palette::GREEN;
        painter.rect_filled(response.rect, 0.0, egui::Color32::from_rgb(fr, fg, fb));

        // Pockets
        for center in &pockets {
            painter.circle_filled(to_screen(*center), pocket_radius, egui::Color32::BLACK);
        }

        // Balls
        for body in self.sim.bodies() {
            if body.pocketed {
                continue;
            }
            let [r, g, b] = body.color;
            painter.circle_filled(
                to_screen(body.position),
                ball_radius,
                egui::Color32::from_rgb(r, g, b),
            );
        }

        let pointer_world = response
            .interact_pointer_pos()
            .map(|pos| glam::Vec2::new(pos.x - origin.x, pos.y - origin.y));

        if response.drag_started() {
            self.dragging = true;
        }

        // Cue line while aiming
        let aiming = self.dragging && self.sim.all_at_rest() && !self.sim.game_over();
        if aiming {
            if let Some(mouse) = pointer_world {
                let cue_pos = self.sim.cue_ball().position;
                let drag = cue_pos - mouse;
                let length = drag.length();
                if length >= CUE_DRAW_THRESHOLD {
                    let reach = length.min(max_drag);
                    let end = cue_pos + drag / length * reach;
                    painter.line_segment(
                        [to_screen(cue_pos), to_screen(end)],
                        egui::Stroke::new(4.0, egui::Color32::BLACK),
                    );
                }
            }
        }

        if response.drag_stopped() {
            if self.dragging {
                if let Some(mouse) = pointer_world {
                    let drag = self.sim.cue_ball().position - mouse;
                    // Turn gating inside the simulation decides acceptance
                    self.sim.queue_strike(drag);
                }
            }
            self.dragging = false;
        }
    }

    fn draw_speed_graph(&self, ui: &mut egui::Ui) {
        let width = ui.available_width();
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, 70.0), egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(24));

        let samples = self.telemetry.len();
        if samples < 2 {
            return;
        }
        for (ball, body) in self.sim.bodies().iter().enumerate() {
            let [r, g, b] = body.color;
            let color = egui::Color32::from_rgb(r, g, b);
            let points: Vec<egui::Pos2> = self
                .telemetry
                .speeds(ball)
                .iter()
                .enumerate()
                .map(|(i, speed)| {
                    let x = rect.left() + i as f32 / (samples - 1) as f32 * rect.width();
                    let y = rect.bottom() - (speed / GRAPH_MAX_SPEED).min(1.0) * rect.height();
                    egui::pos2(x, y)
                })
                .collect();
            painter.add(egui::Shape::line(points, egui::Stroke::new(1.0, color)));
        }
    }
}

impl eframe::App for TableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        // Physics first so this frame draws the freshest state
        self.sim.step(&mut self.sound);
        self.telemetry.record(self.sim.elapsed(), self.sim.bodies());

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.draw_controls(ui);
        });

        egui::SidePanel::right("hit_spot").show(ctx, |ui| {
            self.draw_hit_spot_selector(ui);
        });

        if let Some(error) = self.last_load_error.clone() {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.colored_label(egui::Color32::RED, format!("Config error: {}", error));
            });
        }

        egui::TopBottomPanel::bottom("graph").show(ctx, |ui| {
            ui.label("Speed");
            self.draw_speed_graph(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_table(ui);
        });

        // Fixed-timestep cadence: one physics step per repaint
        ctx.request_repaint_after(Duration::from_secs_f32(self.sim.frame_dt()));
    }
}
