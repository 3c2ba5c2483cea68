//! Input model: logical keys, the binding table that maps raw device
//! buttons onto them, and a few shared interpretations of key events.

use std::collections::{BTreeSet, HashMap};

use tracing::warn;

use crate::immersive::Orientation;
use crate::navigation::TopNavDestination;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    L1,
    R1,
    Start,
    Select,
    Backspace,
}

impl Key {
    /// Keys that can be remapped, in the order the remap prompt asks for them.
    pub const ACTIONS: [Key; 12] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::A,
        Key::B,
        Key::X,
        Key::Y,
        Key::L1,
        Key::R1,
        Key::Start,
        Key::Select,
    ];

    /// Name used for this key in the config's `controller_map`.
    pub fn action_name(self) -> &'static str {
        match self {
            Key::Up => "UP",
            Key::Down => "DOWN",
            Key::Left => "LEFT",
            Key::Right => "RIGHT",
            Key::A => "A",
            Key::B => "B",
            Key::X => "X",
            Key::Y => "Y",
            Key::L1 => "L1",
            Key::R1 => "R1",
            Key::Start => "START",
            Key::Select => "SELECT",
            Key::Backspace => "BACKSPACE",
        }
    }

    pub fn from_action_name(name: &str) -> Option<Key> {
        let name = name.trim().to_ascii_uppercase();
        Key::ACTIONS
            .into_iter()
            .chain([Key::Backspace])
            .find(|k| k.action_name() == name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEventType {
    Down,
    Up,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub kind: KeyEventType,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        KeyEvent { key, kind: KeyEventType::Down }
    }

    pub fn up(key: Key) -> Self {
        KeyEvent { key, kind: KeyEventType::Up }
    }

    pub fn is_down(&self) -> bool {
        self.kind == KeyEventType::Down
    }

    /// True for a key-down of `key`.
    pub fn pressed(&self, key: Key) -> bool {
        self.key == key && self.is_down()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Mouse or touch contact, in window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: u64,
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
    pub time_ms: u64,
}

impl PointerEvent {
    pub fn new(id: u64, kind: PointerKind, x: f32, y: f32, time_ms: u64) -> Self {
        PointerEvent { id, kind, x, y, time_ms }
    }
}

const DEFAULT_BINDINGS: [(&str, Key); 25] = [
    ("keyboard:Up", Key::Up),
    ("keyboard:Down", Key::Down),
    ("keyboard:Left", Key::Left),
    ("keyboard:Right", Key::Right),
    ("keyboard:Return", Key::A),
    ("keyboard:Escape", Key::B),
    ("keyboard:F3", Key::X),
    ("keyboard:F4", Key::Y),
    ("keyboard:PageUp", Key::L1),
    ("keyboard:PageDown", Key::R1),
    ("keyboard:F1", Key::Start),
    ("keyboard:F2", Key::Select),
    ("keyboard:Backspace", Key::Backspace),
    ("controller:DPadUp", Key::Up),
    ("controller:DPadDown", Key::Down),
    ("controller:DPadLeft", Key::Left),
    ("controller:DPadRight", Key::Right),
    ("controller:A", Key::A),
    ("controller:B", Key::B),
    ("controller:X", Key::X),
    ("controller:Y", Key::Y),
    ("controller:LeftShoulder", Key::L1),
    ("controller:RightShoulder", Key::R1),
    ("controller:Start", Key::Start),
    ("controller:Back", Key::Select),
];

/// Maps binding strings (`keyboard:<name>`, `controller:<button>`,
/// `joybutton:<index>`) to logical keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerMap {
    bindings: HashMap<String, Key>,
}

impl Default for ControllerMap {
    fn default() -> Self {
        ControllerMap {
            bindings: DEFAULT_BINDINGS
                .iter()
                .map(|(b, k)| (b.to_string(), *k))
                .collect(),
        }
    }
}

impl ControllerMap {
    /// Built-in bindings with the config's `action -> binding` pairs on top.
    pub fn from_config(overrides: Option<&HashMap<String, String>>) -> Self {
        let mut map = ControllerMap::default();
        if let Some(overrides) = overrides {
            for (action, binding) in overrides {
                match Key::from_action_name(action) {
                    Some(key) => map.bind(binding, key),
                    None => warn!(action = %action, "ignoring unknown action in controller_map"),
                }
            }
        }
        map
    }

    pub fn bind(&mut self, binding: &str, key: Key) {
        self.bindings.insert(binding.trim().to_string(), key);
    }

    pub fn resolve(&self, binding: &str) -> Option<Key> {
        self.bindings.get(binding).copied()
    }

    /// Bindings that produce `key`, sorted.
    pub fn bindings_for(&self, key: Key) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(_, k)| **k == key)
            .map(|(b, _)| b.as_str())
            .collect();
        out.sort_unstable();
        out
    }
}

/// Tab a shoulder-button press switches to.
pub fn shoulder_destination(event: &KeyEvent, current: TopNavDestination) -> Option<TopNavDestination> {
    if !event.is_down() {
        return None;
    }
    match event.key {
        Key::L1 => Some(current.previous()),
        Key::R1 => Some(current.next()),
        _ => None,
    }
}

/// Scroll step for a list's directional keys.
///
/// `Some(-1)`/`Some(1)` on key-down. Key-up of the same keys yields
/// `Some(0)`: consumed, no movement. Other keys are not list keys.
pub fn list_scroll_direction(event: &KeyEvent, orientation: Orientation) -> Option<i64> {
    let (back, forward) = match orientation {
        Orientation::Horizontal => (Key::Left, Key::Right),
        Orientation::Vertical => (Key::Up, Key::Down),
    };
    let step = if event.key == back {
        -1
    } else if event.key == forward {
        1
    } else {
        return None;
    };
    Some(if event.is_down() { step } else { 0 })
}

/// Which gamepads are currently attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GamepadStatus {
    devices: BTreeSet<u32>,
}

impl GamepadStatus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the device was already known.
    pub fn device_added(&mut self, id: u32) -> bool {
        self.devices.insert(id)
    }

    pub fn device_removed(&mut self, id: u32) -> bool {
        self.devices.remove(&id)
    }

    pub fn connected(&self) -> bool {
        !self.devices.is_empty()
    }

    pub fn count(&self) -> usize {
        self.devices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_keyboard_and_controller() {
        let map = ControllerMap::default();
        assert_eq!(map.resolve("keyboard:Return"), Some(Key::A));
        assert_eq!(map.resolve("controller:RightShoulder"), Some(Key::R1));
        assert_eq!(map.resolve("joybutton:0"), None);
        for key in Key::ACTIONS {
            assert!(!map.bindings_for(key).is_empty(), "{key:?} has no binding");
        }
    }

    #[test]
    fn config_overrides_add_bindings() {
        let mut overrides = HashMap::new();
        overrides.insert("a".to_string(), "joybutton:0".to_string());
        overrides.insert("TURBO".to_string(), "joybutton:9".to_string());
        let map = ControllerMap::from_config(Some(&overrides));
        assert_eq!(map.resolve("joybutton:0"), Some(Key::A));
        assert_eq!(map.resolve("joybutton:9"), None);
        assert_eq!(map.bindings_for(Key::A), vec!["controller:A", "joybutton:0", "keyboard:Return"]);
    }

    #[test]
    fn shoulders_cycle_tabs_on_press_only() {
        let games = TopNavDestination::Games;
        assert_eq!(
            shoulder_destination(&KeyEvent::down(Key::L1), games),
            Some(TopNavDestination::Systems)
        );
        assert_eq!(
            shoulder_destination(&KeyEvent::down(Key::R1), TopNavDestination::Search),
            Some(TopNavDestination::Systems)
        );
        assert_eq!(shoulder_destination(&KeyEvent::up(Key::R1), games), None);
        assert_eq!(shoulder_destination(&KeyEvent::down(Key::A), games), None);
    }

    #[test]
    fn scroll_keys_follow_orientation() {
        let h = Orientation::Horizontal;
        assert_eq!(list_scroll_direction(&KeyEvent::down(Key::Left), h), Some(-1));
        assert_eq!(list_scroll_direction(&KeyEvent::down(Key::Right), h), Some(1));
        assert_eq!(list_scroll_direction(&KeyEvent::up(Key::Right), h), Some(0));
        assert_eq!(list_scroll_direction(&KeyEvent::down(Key::Up), h), None);
        assert_eq!(
            list_scroll_direction(&KeyEvent::down(Key::Down), Orientation::Vertical),
            Some(1)
        );
    }

    #[test]
    fn gamepad_status_tracks_devices() {
        let mut pads = GamepadStatus::new();
        assert!(!pads.connected());
        assert!(pads.device_added(3));
        assert!(!pads.device_added(3));
        assert!(pads.device_added(5));
        assert!(pads.device_removed(3));
        assert!(pads.connected());
        assert!(pads.device_removed(5));
        assert!(!pads.connected());
        assert!(!pads.device_removed(5));
    }

    #[test]
    fn action_names_round_trip() {
        for key in Key::ACTIONS {
            assert_eq!(Key::from_action_name(key.action_name()), Some(key));
        }
        assert_eq!(Key::from_action_name(" start "), Some(Key::Start));
        assert_eq!(Key::from_action_name("HOME"), None);
    }
}
