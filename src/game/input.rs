use serde::{Deserialize, Serialize};

use crate::entities::PlayerSlot;

/// Logical keyboard key, independent of the windowing backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
    Comma,
    Period,
    Slash,
    Semicolon,
    Apostrophe,
    LeftBracket,
    RightBracket,
    Minus,
    Equal,
}

impl Key {
    pub const ALL: [Key; 60] = [
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::Num0,
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Space,
        Key::Enter,
        Key::Escape,
        Key::Tab,
        Key::Backspace,
        Key::LeftShift,
        Key::RightShift,
        Key::LeftControl,
        Key::RightControl,
        Key::LeftAlt,
        Key::RightAlt,
        Key::Comma,
        Key::Period,
        Key::Slash,
        Key::Semicolon,
        Key::Apostrophe,
        Key::LeftBracket,
        Key::RightBracket,
        Key::Minus,
        Key::Equal,
    ];

    /// Short name shown in the HUD.
    pub fn label(self) -> &'static str {
        match self {
            Key::A => "A",
            Key::B => "B",
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::H => "H",
            Key::I => "I",
            Key::J => "J",
            Key::K => "K",
            Key::L => "L",
            Key::M => "M",
            Key::N => "N",
            Key::O => "O",
            Key::P => "P",
            Key::Q => "Q",
            Key::R => "R",
            Key::S => "S",
            Key::T => "T",
            Key::U => "U",
            Key::V => "V",
            Key::W => "W",
            Key::X => "X",
            Key::Y => "Y",
            Key::Z => "Z",
            Key::Num0 => "0",
            Key::Num1 => "1",
            Key::Num2 => "2",
            Key::Num3 => "3",
            Key::Num4 => "4",
            Key::Num5 => "5",
            Key::Num6 => "6",
            Key::Num7 => "7",
            Key::Num8 => "8",
            Key::Num9 => "9",
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Space => "Space",
            Key::Enter => "Enter",
            Key::Escape => "ESC",
            Key::Tab => "Tab",
            Key::Backspace => "Backspace",
            Key::LeftShift => "Left Shift",
            Key::RightShift => "Right Shift",
            Key::LeftControl => "Left Ctrl",
            Key::RightControl => "Right Ctrl",
            Key::LeftAlt => "Left Alt",
            Key::RightAlt => "Right Alt",
            Key::Comma => ",",
            Key::Period => ".",
            Key::Slash => "/",
            Key::Semicolon => ";",
            Key::Apostrophe => "'",
            Key::LeftBracket => "[",
            Key::RightBracket => "]",
            Key::Minus => "-",
            Key::Equal => "=",
        }
    }
}

/// One player's bindings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub turret_left: Key,
    pub turret_right: Key,
    pub fire: Key,
}

impl Controls {
    pub fn player_one() -> Self {
        Self {
            up: Key::W,
            down: Key::S,
            left: Key::A,
            right: Key::D,
            turret_left: Key::Q,
            turret_right: Key::E,
            fire: Key::Space,
        }
    }

    pub fn player_two() -> Self {
        Self {
            up: Key::Up,
            down: Key::Down,
            left: Key::Left,
            right: Key::Right,
            turret_left: Key::Comma,
            turret_right: Key::Period,
            fire: Key::RightControl,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub player_one: Controls,
    pub player_two: Controls,
    pub reset: Key,
    pub quit: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            player_one: Controls::player_one(),
            player_two: Controls::player_two(),
            reset: Key::R,
            quit: Key::Escape,
        }
    }
}

impl KeyBindings {
    pub fn controls(&self, slot: PlayerSlot) -> &Controls {
        match slot {
            PlayerSlot::One => &self.player_one,
            PlayerSlot::Two => &self.player_two,
        }
    }
}

/// Keyboard collaborator: held state plus a queue of key-down events.
pub trait InputSource {
    fn is_down(&self, key: Key) -> bool;

    /// Drains key-down events queued since the previous call.
    fn drain_pressed(&mut self) -> Vec<Key>;
}

/// Held movement and turret signals for one tank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub turret_left: bool,
    pub turret_right: bool,
}

impl ControlState {
    pub fn forward(&self) -> f32 {
        axis(self.down, self.up)
    }

    /// Positive turns clockwise on screen (angle increases).
    pub fn turn(&self) -> f32 {
        axis(self.left, self.right)
    }

    pub fn turret(&self) -> f32 {
        axis(self.turret_left, self.turret_right)
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    positive as i8 as f32 - negative as i8 as f32
}

/// A discrete key-down event, kept in the order the keyboard queued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Fire(PlayerSlot),
    Reset,
    Quit,
}

/// Everything the match loop reads for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    pub controls: [ControlState; 2],
    /// Key-down events this tick, oldest first.
    pub actions: Vec<Action>,
}

impl TickInput {
    pub fn sample(source: &mut impl InputSource, bindings: &KeyBindings) -> Self {
        let mut input = TickInput::default();
        for slot in PlayerSlot::ALL {
            let keys = bindings.controls(slot);
            input.controls[slot.index()] = ControlState {
                up: source.is_down(keys.up),
                down: source.is_down(keys.down),
                left: source.is_down(keys.left),
                right: source.is_down(keys.right),
                turret_left: source.is_down(keys.turret_left),
                turret_right: source.is_down(keys.turret_right),
            };
        }

        for key in source.drain_pressed() {
            for slot in PlayerSlot::ALL {
                if key == bindings.controls(slot).fire {
                    input.actions.push(Action::Fire(slot));
                }
            }
            if key == bindings.reset {
                input.actions.push(Action::Reset);
            }
            if key == bindings.quit {
                input.actions.push(Action::Quit);
            }
        }
        input
    }

    /// A snapshot with no held keys and the given key-down events.
    pub fn with_actions(actions: impl IntoIterator<Item = Action>) -> Self {
        TickInput {
            actions: actions.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn controls(&self, slot: PlayerSlot) -> &ControlState {
        &self.controls[slot.index()]
    }

    pub fn fired(&self, slot: PlayerSlot) -> bool {
        self.actions.contains(&Action::Fire(slot))
    }

    pub fn reset(&self) -> bool {
        self.actions.contains(&Action::Reset)
    }

    pub fn quit(&self) -> bool {
        self.actions.contains(&Action::Quit)
    }
}
