//! raylib window, keyboard and drawing collaborators.

mod canvas;
mod keys;

use raylib::prelude::{RaylibHandle, RaylibThread};

use crate::config::{TICKS_PER_SECOND, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game::{Game, KeyBindings, TickInput};
use crate::render::draw_match;

pub use canvas::RaylibCanvas;
pub use keys::RaylibKeys;

/// Everything the loop needs besides the match itself. Built once at
/// startup; dropping it closes the window.
pub struct Window {
    rl: RaylibHandle,
    thread: RaylibThread,
    bindings: KeyBindings,
}

impl Window {
    pub fn open(bindings: KeyBindings) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(WINDOW_WIDTH, WINDOW_HEIGHT)
            .title("Tank Duel")
            .build();
        rl.set_target_fps(TICKS_PER_SECOND);
        // quitting goes through the configured binding
        rl.set_exit_key(None);
        log::info!("window open at {WINDOW_WIDTH}x{WINDOW_HEIGHT}");
        Self {
            rl,
            thread,
            bindings,
        }
    }

    /// One tick and one frame per display refresh until quit or close.
    pub fn run(&mut self, game: &mut Game) {
        while !self.rl.window_should_close() {
            let input = self.poll();
            if input.quit() {
                log::info!("quit requested");
                break;
            }
            game.tick(&input);
            self.draw(game);
        }
        log::info!("closing after {} ticks", game.tick_count());
    }

    /// Simulates a single tick, draws it and saves a screenshot.
    pub fn render_frame(&mut self, game: &mut Game, file: &str) {
        let input = self.poll();
        game.tick(&input);
        self.draw(game);
        self.rl.take_screenshot(&self.thread, file);
        log::info!("saved {file}");
    }

    fn poll(&mut self) -> TickInput {
        let mut keys = RaylibKeys::new(&mut self.rl);
        TickInput::sample(&mut keys, &self.bindings)
    }

    fn draw(&mut self, game: &Game) {
        let mut d = self.rl.begin_drawing(&self.thread);
        let mut canvas = RaylibCanvas::new(&mut d);
        draw_match(game, &self.bindings, &mut canvas);
    }
}
