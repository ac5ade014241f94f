use common::games::tictactoe::{GameState, Mark};
use eframe::egui;

pub struct BoardView {
    last_hover: Option<usize>,
}

impl BoardView {
    const BOARD_PADDING: f32 = 20.0;
    const MIN_CELL_SIZE: f32 = 60.0;
    const MAX_CELL_SIZE: f32 = 160.0;
    const GRID_LINE_WIDTH: f32 = 2.0;
    const SYMBOL_LINE_WIDTH: f32 = 6.0;

    pub fn new() -> Self {
        Self { last_hover: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let side = available_width
            .min(available_height)
            .max(0.0)
            - Self::BOARD_PADDING * 2.0;
        (side / 3.0).clamp(Self::MIN_CELL_SIZE, Self::MAX_CELL_SIZE)
    }

    /// Draws the board and returns the cell index the human clicked, if any.
    pub fn render(&mut self, ui: &mut egui::Ui, game: &GameState) -> Option<usize> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let board_size = cell_size * 3.0;

        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(board_size, board_size), egui::Sense::click());

        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(240, 240, 240));

        for i in 0..=3 {
            let x = rect.left() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
                egui::Stroke::new(Self::GRID_LINE_WIDTH, egui::Color32::BLACK),
            );

            let y = rect.top() + i as f32 * cell_size;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(Self::GRID_LINE_WIDTH, egui::Color32::BLACK),
            );
        }

        for (index, &mark) in game.board().cells().iter().enumerate() {
            let cell_rect = Self::cell_rect(rect, index, cell_size);
            match mark {
                Mark::X => Self::draw_x(painter, cell_rect),
                Mark::O => Self::draw_o(painter, cell_rect),
                Mark::Empty => {}
            }
        }

        if let Some((_, line)) = game.winning_line() {
            let start = Self::cell_rect(rect, line[0], cell_size).center();
            let end = Self::cell_rect(rect, line[2], cell_size).center();
            painter.line_segment(
                [start, end],
                egui::Stroke::new(
                    Self::SYMBOL_LINE_WIDTH,
                    egui::Color32::from_rgb(255, 200, 0),
                ),
            );
        }

        if !game.is_human_turn() {
            self.last_hover = None;
            return None;
        }

        if let Some(hover_pos) = response.hover_pos() {
            let col = ((hover_pos.x - rect.left()) / cell_size) as usize;
            let row = ((hover_pos.y - rect.top()) / cell_size) as usize;

            if col < 3 && row < 3 {
                let index = row * 3 + col;
                if game.board().get(index) == Some(Mark::Empty) {
                    painter.rect_filled(
                        Self::cell_rect(rect, index, cell_size),
                        0.0,
                        egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                    );
                    self.last_hover = Some(index);
                } else {
                    self.last_hover = None;
                }
            } else {
                self.last_hover = None;
            }
        } else {
            self.last_hover = None;
        }

        if response.clicked() {
            return self.last_hover;
        }

        None
    }

    fn cell_rect(board_rect: egui::Rect, index: usize, cell_size: f32) -> egui::Rect {
        let col = index % 3;
        let row = index / 3;
        egui::Rect::from_min_size(
            egui::pos2(
                board_rect.left() + col as f32 * cell_size,
                board_rect.top() + row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    fn draw_x(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(
            Self::SYMBOL_LINE_WIDTH,
            egui::Color32::from_rgb(220, 50, 50),
        );

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );

        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = (rect.width() / 2.0) - padding;
        let stroke = egui::Stroke::new(
            Self::SYMBOL_LINE_WIDTH,
            egui::Color32::from_rgb(50, 180, 70),
        );

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
