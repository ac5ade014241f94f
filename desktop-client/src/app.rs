use common::games::GameRng;
use common::games::tictactoe::{GameState, GameStatus};
use common::log;
use eframe::egui;

use crate::board_view::BoardView;

pub struct TicTacToeApp {
    rng: GameRng,
    game: GameState,
    board_view: BoardView,
}

impl TicTacToeApp {
    pub fn new(mut rng: GameRng) -> Self {
        let game = GameState::new(&mut rng);
        log_roles(&game);

        Self {
            rng,
            game,
            board_view: BoardView::new(),
        }
    }

    fn restart(&mut self) {
        self.game = GameState::new(&mut self.rng);
        self.board_view = BoardView::new();
        log!("Game restarted");
        log_roles(&self.game);
    }

    fn outcome_text(&self) -> &'static str {
        match self.game.status() {
            GameStatus::Draw => "It's a draw!",
            GameStatus::XWon | GameStatus::OWon => {
                if self.game.winner() == Some(self.game.roles().human) {
                    "You win!"
                } else {
                    "Bot wins!"
                }
            }
            GameStatus::InProgress => "",
        }
    }

    fn render_info_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Tic Tac Toe");
        ui.add_space(10.0);

        let roles = self.game.roles();
        ui.label(format!("You: {}", roles.human.symbol()));
        ui.label(format!("Bot: {}", roles.bot.symbol()));
        ui.add_space(10.0);

        if self.game.status() == GameStatus::InProgress {
            if self.game.is_human_turn() {
                ui.label("Your turn");
            } else {
                ui.label("Bot is thinking...");
            }
        } else {
            ui.label(self.outcome_text());
            ui.add_space(10.0);
            if ui.button("Restart").clicked() {
                self.restart();
            }
        }
    }

    fn handle_human_click(&mut self, index: usize) {
        match self.game.place_mark(index) {
            Ok(()) => {
                log!("You placed {} at cell {}", self.game.roles().human.symbol(), index);
                self.log_game_over();
            }
            Err(e) => log!("Move rejected: {}", e),
        }
    }

    fn play_bot_if_due(&mut self) {
        if !self.game.is_bot_turn() {
            return;
        }

        if let Some(action) = self.game.play_bot_turn() {
            log!("Bot placed {} at cell {}", self.game.roles().bot.symbol(), action);
            self.log_game_over();
        }
    }

    fn log_game_over(&self) {
        if self.game.status().is_over() {
            log!("Game over: {}", self.outcome_text());
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.play_bot_if_due();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                let clicked = ui
                    .vertical(|ui| {
                        ui.add_space(20.0);
                        self.board_view.render(ui, &self.game)
                    })
                    .inner;

                if let Some(index) = clicked {
                    self.handle_human_click(index);
                    // The bot replies on the next frame.
                    ctx.request_repaint();
                }

                ui.separator();

                ui.vertical(|ui| {
                    self.render_info_panel(ui);
                });
            });
        });
    }
}

fn log_roles(game: &GameState) {
    let roles = game.roles();
    log!(
        "You play {}, the bot plays {}",
        roles.human.symbol(),
        roles.bot.symbol()
    );
}
