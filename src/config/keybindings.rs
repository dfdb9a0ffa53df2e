//! Keyboard bindings for browse mode.

use crate::model::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps key events to semantic actions.
///
/// Lookups ignore the SHIFT modifier for character keys (crossterm
/// already reports the shifted character itself), so `S` binds as the
/// char `'S'`, not as shift+s.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<(KeyCode, KeyModifiers), KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut map = HashMap::new();
        let none = KeyModifiers::NONE;

        map.insert((KeyCode::Char('q'), none), KeyAction::Quit);
        map.insert((KeyCode::Char('/'), none), KeyAction::EditSearch);
        map.insert((KeyCode::Char('m'), none), KeyAction::EditMinEmployees);
        map.insert((KeyCode::Char('i'), none), KeyAction::CycleIndustry);
        map.insert((KeyCode::Char('o'), none), KeyAction::CycleLocation);
        map.insert((KeyCode::Char('s'), none), KeyAction::CycleSort);
        map.insert((KeyCode::Char('S'), none), KeyAction::ReverseSort);
        map.insert((KeyCode::Char('r'), none), KeyAction::Reset);

        map.insert((KeyCode::Right, none), KeyAction::NextPage);
        map.insert((KeyCode::Left, none), KeyAction::PrevPage);
        map.insert((KeyCode::Char('n'), none), KeyAction::NextPage);
        map.insert((KeyCode::Char('p'), none), KeyAction::PrevPage);

        map.insert((KeyCode::Down, none), KeyAction::SelectNext);
        map.insert((KeyCode::Up, none), KeyAction::SelectPrev);
        map.insert((KeyCode::Char('j'), none), KeyAction::SelectNext);
        map.insert((KeyCode::Char('k'), none), KeyAction::SelectPrev);

        Self { map }
    }
}

impl KeyBindings {
    /// Look up the action for a key event, if any is bound.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let modifiers = key.modifiers.difference(KeyModifiers::SHIFT);
        self.map.get(&(key.code, modifiers)).copied()
    }
}
