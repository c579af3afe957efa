//! Main application for the checkers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::board::{Color, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::game::GameMode;
use crate::rules::Outcome;

/// Main checkers application
pub struct CheckersApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    /// Board size for the next game, picked in the new-game card
    pending_size: usize,
    /// Mode for the next game
    pending_mode: GameMode,
}

impl Default for CheckersApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default(), 8),
            board_view: BoardView::default(),
            show_debug: true,
            pending_size: 8,
            pending_mode: GameMode::default(),
        }
    }
}

impl CheckersApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (Human vs AI)").clicked() {
                        self.pending_mode = GameMode::HumanVsAi;
                        self.state.reset(self.pending_mode, self.pending_size);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Human vs Human)").clicked() {
                        self.pending_mode = GameMode::HumanVsHuman;
                        self.state.reset(self.pending_mode, self.pending_size);
                        ui.close_menu();
                    }
                    if ui.button("New Game (AI vs AI)").clicked() {
                        self.pending_mode = GameMode::AiVsAi;
                        self.state.reset(self.pending_mode, self.pending_size);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        self.state.exit.request();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.board.size();
                    ui.label(format!("{} · {size}x{size}", self.state.mode.label()));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_material_card(ui);
                ui.add_space(10.0);

                self.render_new_game_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.state.outcome.is_terminal() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("⛀⛂").size(20.0).color(KING_MARK));
            ui.add_space(4.0);
            ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("forced-capture draughts").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_turn == Color::Black;
            let (color_name, disc) = if is_black {
                ("BLACK", BLACK_PIECE)
            } else {
                ("WHITE", WHITE_PIECE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, disc);
                ui.painter().circle_stroke(
                    rect.center(),
                    20.0,
                    egui::Stroke::new(2.0, if is_black { BLACK_PIECE_RIM } else { WHITE_PIECE_RIM }),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_WARNING)
                    } else if self.state.is_over() {
                        ("Game Over", RESULT_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn", STATUS_OK)
                    } else {
                        ("AI to move", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 0.5 { STATUS_OK } else { STATUS_WARNING };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render material count card
    fn render_material_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MATERIAL").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            self.render_material_row(ui, Color::Black);
            ui.add_space(6.0);
            self.render_material_row(ui, Color::White);

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_material_row(&self, ui: &mut egui::Ui, color: Color) {
        let (men, kings) = self.state.material(color);
        let name = match color {
            Color::Black => "Black",
            Color::White => "White",
        };

        ui.horizontal(|ui| {
            ui.label(RichText::new(name).size(12.0).color(TEXT_PRIMARY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let text = if kings > 0 {
                    format!("{men} men · {kings} kings")
                } else {
                    format!("{men} men")
                };
                let style = if men + kings == 0 {
                    RichText::new("eliminated").size(12.0).color(STATUS_WARNING)
                } else {
                    RichText::new(text).size(12.0).color(TEXT_SECONDARY)
                };
                ui.label(style);
            });
        });
    }

    /// Render new game configuration card
    fn render_new_game_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("NEW GAME").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("Board size").size(12.0).color(TEXT_PRIMARY));
                ui.add(egui::Slider::new(
                    &mut self.pending_size,
                    MIN_BOARD_SIZE..=MAX_BOARD_SIZE,
                ));
            });

            ui.add_space(6.0);
            ui.radio_value(&mut self.pending_mode, GameMode::HumanVsAi, "Human vs AI");
            ui.radio_value(&mut self.pending_mode, GameMode::HumanVsHuman, "Human vs Human");
            ui.radio_value(&mut self.pending_mode, GameMode::AiVsAi, "AI vs AI");

            ui.add_space(8.0);
            let btn = Frame::new()
                .fill(egui::Color32::from_rgb(60, 100, 70))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);
            btn.show(ui, |ui| {
                if ui
                    .add(
                        egui::Label::new(
                            RichText::new("Start (N)").size(13.0).strong().color(TEXT_PRIMARY),
                        )
                        .sense(egui::Sense::click()),
                    )
                    .clicked()
                {
                    self.state.reset(self.pending_mode, self.pending_size);
                }
            });
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{:?}", result.search_type))
                                    .size(11.0)
                                    .strong()
                                    .color(STATUS_OK),
                            );
                            ui.label(
                                RichText::new(format!("Score: {}", result.score))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("Depth: {}", result.depth))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}ms", result.time_ms))
                                        .size(10.0)
                                        .color(TEXT_SECONDARY),
                                );
                                ui.label(
                                    RichText::new(format!("{} nodes", result.nodes))
                                        .size(10.0)
                                        .color(TEXT_MUTED),
                                );
                            });
                        });
                    });

                    if let Some(mv) = &result.best_move {
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("→ {mv}"))
                                .size(12.0)
                                .strong()
                                .color(RESULT_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.state.outcome {
            Outcome::WhiteWins => "WHITE WINS",
            Outcome::BlackWins => "BLACK WINS",
            Outcome::Stalemate => "STALEMATE",
            Outcome::Ongoing => return,
        };
        let detail = match self.state.outcome {
            Outcome::Stalemate => "neither side can move",
            _ => "opponent has no legal move",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));

                    ui.add_space(12.0);
                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("New Game")
                                            .size(14.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.state.reset(self.pending_mode, self.pending_size);
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let targets = self.state.selected_targets();
            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.selected,
                &targets,
                self.state.last_move.as_ref(),
                self.state.is_human_turn(),
            );

            if let Some(pos) = clicked {
                self.state.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game with the pending settings
            if i.key_pressed(egui::Key::N) {
                self.state.reset(self.pending_mode, self.pending_size);
            }
        });
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // An exit request stops any in-flight search and closes the window
        // before further moves are generated.
        if self.state.exit.is_requested() {
            self.state.abort_search();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
