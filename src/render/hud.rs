use crate::config::WINDOW_WIDTH;
use crate::entities::PlayerSlot;
use crate::game::{Game, KeyBindings};
use crate::math::vec2;

use super::{Canvas, Color};

const TEXT_SIZE: i32 = 20;
const BANNER_SIZE: i32 = 40;

pub(super) fn draw_hud(game: &Game, bindings: &KeyBindings, canvas: &mut impl Canvas) {
    for (row, tank) in game.tanks().iter().enumerate() {
        let label = format!(
            "{} ({}) score: {}",
            tank.slot.name(),
            tank.slot.color_name(),
            tank.score
        );
        canvas.text(&label, vec2(10.0, 8.0 + row as f32 * 22.0), TEXT_SIZE, Color::BLACK);
    }

    let restart = format!("Press {} to restart", bindings.reset.label());
    let quit = format!("Press {} to quit", bindings.quit.label());
    for (row, hint) in [restart, quit].iter().enumerate() {
        let width = canvas.measure_text(hint, TEXT_SIZE);
        canvas.text(
            hint,
            vec2((WINDOW_WIDTH - width - 10) as f32, 8.0 + row as f32 * 20.0),
            TEXT_SIZE,
            Color::BLACK,
        );
    }
}

pub(super) fn draw_winner(winner: PlayerSlot, bindings: &KeyBindings, canvas: &mut impl Canvas) {
    let banner = format!("{} wins!", winner.name());
    let width = canvas.measure_text(&banner, BANNER_SIZE);
    canvas.text(
        &banner,
        vec2(((WINDOW_WIDTH - width) / 2) as f32, 60.0 - BANNER_SIZE as f32 * 0.5),
        BANNER_SIZE,
        winner.color(),
    );

    let prompt = format!("Press {} to restart", bindings.reset.label());
    let width = canvas.measure_text(&prompt, TEXT_SIZE);
    canvas.text(
        &prompt,
        vec2(((WINDOW_WIDTH - width) / 2) as f32, 110.0),
        TEXT_SIZE,
        Color::BLACK,
    );
}
