use raylib::prelude::{KeyboardKey, RaylibHandle};

use crate::game::{InputSource, Key};

/// Keyboard collaborator backed by raylib's key state and key-down queue.
pub struct RaylibKeys<'a> {
    rl: &'a mut RaylibHandle,
}

impl<'a> RaylibKeys<'a> {
    pub fn new(rl: &'a mut RaylibHandle) -> Self {
        Self { rl }
    }
}

impl InputSource for RaylibKeys<'_> {
    fn is_down(&self, key: Key) -> bool {
        self.rl.is_key_down(to_raylib(key))
    }

    fn drain_pressed(&mut self) -> Vec<Key> {
        let mut pressed = Vec::new();
        while let Some(raw) = self.rl.get_key_pressed() {
            if let Some(key) = from_raylib(raw) {
                pressed.push(key);
            }
        }
        pressed
    }
}

fn from_raylib(raw: KeyboardKey) -> Option<Key> {
    Key::ALL.into_iter().find(|key| to_raylib(*key) == raw)
}

pub fn to_raylib(key: Key) -> KeyboardKey {
    match key {
        Key::A => KeyboardKey::KEY_A,
        Key::B => KeyboardKey::KEY_B,
        Key::C => KeyboardKey::KEY_C,
        Key::D => KeyboardKey::KEY_D,
        Key::E => KeyboardKey::KEY_E,
        Key::F => KeyboardKey::KEY_F,
        Key::G => KeyboardKey::KEY_G,
        Key::H => KeyboardKey::KEY_H,
        Key::I => KeyboardKey::KEY_I,
        Key::J => KeyboardKey::KEY_J,
        Key::K => KeyboardKey::KEY_K,
        Key::L => KeyboardKey::KEY_L,
        Key::M => KeyboardKey::KEY_M,
        Key::N => KeyboardKey::KEY_N,
        Key::O => KeyboardKey::KEY_O,
        Key::P => KeyboardKey::KEY_P,
        Key::Q => KeyboardKey::KEY_Q,
        Key::R => KeyboardKey::KEY_R,
        Key::S => KeyboardKey::KEY_S,
        Key::T => KeyboardKey::KEY_T,
        Key::U => KeyboardKey::KEY_U,
        Key::V => KeyboardKey::KEY_V,
        Key::W => KeyboardKey::KEY_W,
        Key::X => KeyboardKey::KEY_X,
        Key::Y => KeyboardKey::KEY_Y,
        Key::Z => KeyboardKey::KEY_Z,
        Key::Num0 => KeyboardKey::KEY_ZERO,
        Key::Num1 => KeyboardKey::KEY_ONE,
        Key::Num2 => KeyboardKey::KEY_TWO,
        Key::Num3 => KeyboardKey::KEY_THREE,
        Key::Num4 => KeyboardKey::KEY_FOUR,
        Key::Num5 => KeyboardKey::KEY_FIVE,
        Key::Num6 => KeyboardKey::KEY_SIX,
        Key::Num7 => KeyboardKey::KEY_SEVEN,
        Key::Num8 => KeyboardKey::KEY_EIGHT,
        Key::Num9 => KeyboardKey::KEY_NINE,
        Key::Up => KeyboardKey::KEY_UP,
        Key::Down => KeyboardKey::KEY_DOWN,
        Key::Left => KeyboardKey::KEY_LEFT,
        Key::Right => KeyboardKey::KEY_RIGHT,
        Key::Space => KeyboardKey::KEY_SPACE,
        Key::Enter => KeyboardKey::KEY_ENTER,
        Key::Escape => KeyboardKey::KEY_ESCAPE,
        Key::Tab => KeyboardKey::KEY_TAB,
        Key::Backspace => KeyboardKey::KEY_BACKSPACE,
        Key::LeftShift => KeyboardKey::KEY_LEFT_SHIFT,
        Key::RightShift => KeyboardKey::KEY_RIGHT_SHIFT,
        Key::LeftControl => KeyboardKey::KEY_LEFT_CONTROL,
        Key::RightControl => KeyboardKey::KEY_RIGHT_CONTROL,
        Key::LeftAlt => KeyboardKey::KEY_LEFT_ALT,
        Key::RightAlt => KeyboardKey::KEY_RIGHT_ALT,
        Key::Comma => KeyboardKey::KEY_COMMA,
        Key::Period => KeyboardKey::KEY_PERIOD,
        Key::Slash => KeyboardKey::KEY_SLASH,
        Key::Semicolon => KeyboardKey::KEY_SEMICOLON,
        Key::Apostrophe => KeyboardKey::KEY_APOSTROPHE,
        Key::LeftBracket => KeyboardKey::KEY_LEFT_BRACKET,
        Key::RightBracket => KeyboardKey::KEY_RIGHT_BRACKET,
        Key::Minus => KeyboardKey::KEY_MINUS,
        Key::Equal => KeyboardKey::KEY_EQUAL,
    }
}
