// ui.rs - egui rendering and input for the Lights Out grid

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use log::{info, warn};

use lights_out::{LightsOutGame, MAX_GRID_SIZE, MIN_GRID_SIZE};

pub struct LightsOutApp {
    game: LightsOutGame,
    selected_size: usize,
    moves: u32,
    show_win_dialog: bool,
    on_color: Color32,
    off_color: Color32,
}

impl Default for LightsOutApp {
    fn default() -> Self {
        Self {
            game: LightsOutGame::new(),
            selected_size: MIN_GRID_SIZE,
            moves: 0,
            show_win_dialog: false,
            on_color: Color32::from_rgb(255, 210, 60),
            off_color: Color32::from_rgb(40, 40, 40),
        }
    }
}

impl LightsOutApp {
    fn new_game(&mut self) {
        self.game.new_game();
        self.moves = 0;
        self.show_win_dialog = false;
        info!("new game started ({0}x{0})", self.game.size());
    }
}

impl eframe::App for LightsOutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Lights Out");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("🎲 New Game").clicked() {
                    self.new_game();
                }

                ui.separator();

                // Grid size dropdown
                ui.label("Grid size:");
                egui::ComboBox::from_id_source("size_selector")
                    .selected_text(format!("{0}x{0}", self.selected_size))
                    .show_ui(ui, |ui| {
                        for n in MIN_GRID_SIZE..=MAX_GRID_SIZE {
                            ui.selectable_value(&mut self.selected_size, n, format!("{n}x{n}"));
                        }
                    });
                if self.selected_size != self.game.size() {
                    // The dropdown only offers legal sizes, so this never fails
                    match self.game.set_size(self.selected_size) {
                        Ok(()) => {
                            self.moves = 0;
                            self.show_win_dialog = false;
                        }
                        Err(err) => warn!("resize rejected: {err}"),
                    }
                }

                ui.separator();

                ui.label(format!("Moves: {}", self.moves));
            });

            ui.separator();

            // Show current colors
            ui.horizontal(|ui| {
                ui.label("On:");
                ui.color_edit_button_srgba(&mut self.on_color);
                ui.label("Off:");
                ui.color_edit_button_srgba(&mut self.off_color);
            });

            ui.separator();

            ui.label("Click a light to toggle it and all its neighbors. Turn every light off to win!");

            ui.separator();

            // Draw the grid
            let box_size = 48.0;
            let spacing = 2.0;
            let grid_size = self.game.size();

            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((box_size + spacing) * grid_size as f32 - spacing);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            // Fill background
            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::BLACK,
            );

            let mut clicked_cell = None;

            for row in 0..grid_size {
                for col in 0..grid_size {
                    let x = start_pos.x + col as f32 * (box_size + spacing);
                    let y = start_pos.y + row as f32 * (box_size + spacing);

                    let rect = Rect::from_min_size(
                        egui::pos2(x, y),
                        Vec2::splat(box_size),
                    );

                    // Choose color based on cell state
                    let cell_color = if self.game.cell(row, col) {
                        self.on_color
                    } else {
                        self.off_color
                    };

                    painter.rect_filled(rect, 3.0, cell_color);
                    painter.rect_stroke(rect, 3.0, Stroke::new(0.5, Color32::from_gray(90)));

                    // Clicks between cells (in the spacing) hit no rect and are ignored
                    if response.clicked() {
                        if let Some(pos) = response.interact_pointer_pos() {
                            if rect.contains(pos) {
                                clicked_cell = Some((row, col));
                            }
                        }
                    }
                }
            }

            // One move per click, then one game-over check
            if let Some((row, col)) = clicked_cell {
                match self.game.make_move(row, col) {
                    Ok(()) => {
                        self.moves += 1;
                        if self.game.is_game_over() {
                            info!("solved in {} moves", self.moves);
                            self.show_win_dialog = true;
                        }
                    }
                    Err(err) => warn!("move rejected: {err}"),
                }
            }

            ui.separator();

            // Statistics
            let lights_on: usize = (0..grid_size)
                .map(|row| (0..grid_size).filter(|&col| self.game.cell(row, col)).count())
                .sum();

            ui.horizontal(|ui| {
                ui.label(format!("Lights on: {lights_on}"));
                ui.label(format!("Lights off: {}", grid_size * grid_size - lights_on));
            });
        });

        // Winner dialog
        if self.show_win_dialog {
            let mut open = true;
            egui::Window::new("Lights Out!")
                .open(&mut open)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label("Congratulations! You've won!");
                    ui.label(format!("Solved in {} moves.", self.moves));
                    if ui.button("New Game").clicked() {
                        self.new_game();
                    }
                });

            if !open {
                self.show_win_dialog = false;
            }
        }
    }
}
