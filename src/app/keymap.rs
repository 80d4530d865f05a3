//! Key mapping for lsr
//!
//! Turns the key strings of the `[keys]` config table into lookups from a key event to
//! an [Action] (browse mode) or an [EditAction] (rename, create, delete confirmation).

use crate::config::Config;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any browse-mode action: navigation, file, or system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Nav(NavAction),
    File(FileAction),
    System(SystemAction),
}

/// Navigation actions (move, open, parent, selection)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Up,
    Down,
    Open,
    Parent,
    ToggleSelection,
}

/// File actions that enter another mode
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileAction {
    Rename,
    Delete,
    Create,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SystemAction {
    Quit,
}

/// Keys that finish an edit or a confirmation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    Confirm,
    Cancel,
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built from the config
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    map: HashMap<Key, Action>,
    edit: HashMap<Key, EditAction>,
}

impl Keymap {
    /// Builds the keymap from the config. Unparsable key strings are skipped.
    #[rustfmt::skip]
    pub fn from_config(config: &Config) -> Self {
        let mut map = HashMap::new();
        let mut edit = HashMap::new();
        let keys = config.keys();

        use NavAction as N;
        use FileAction as F;

        bind(keys.up(),        Action::Nav(N::Up),              &mut map);
        bind(keys.down(),      Action::Nav(N::Down),            &mut map);
        bind(keys.open(),      Action::Nav(N::Open),            &mut map);
        bind(keys.parent(),    Action::Nav(N::Parent),          &mut map);
        bind(keys.toggle(),    Action::Nav(N::ToggleSelection), &mut map);

        bind(keys.rename(),    Action::File(F::Rename),         &mut map);
        bind(keys.delete(),    Action::File(F::Delete),         &mut map);
        bind(keys.add(),       Action::File(F::Create),         &mut map);

        bind(keys.quit(),      Action::System(SystemAction::Quit), &mut map);

        bind(keys.confirm(),   EditAction::Confirm,             &mut edit);
        bind(keys.cancel(),    EditAction::Cancel,              &mut edit);

        Keymap { map, edit }
    }

    /// Looks up the browse action for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        lookup_in(&self.map, key)
    }

    /// Looks up the confirm/cancel action for a given key event
    pub fn lookup_edit(&self, key: KeyEvent) -> Option<EditAction> {
        lookup_in(&self.edit, key)
    }
}

/// Ctrl+C quits from every mode regardless of the configured keys.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn lookup_in<A: Copy>(map: &HashMap<Key, A>, key: KeyEvent) -> Option<A> {
    let k = Key {
        code: key.code,
        modifiers: key.modifiers,
    };

    if let Some(action) = map.get(&k).copied() {
        return Some(action);
    }

    // terminals report "A" as Char('A') with SHIFT; bindings are stored without it
    if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
        let k2 = Key {
            code: key.code,
            modifiers: key.modifiers - KeyModifiers::SHIFT,
        };
        return map.get(&k2).copied();
    }
    None
}

/// Parses a key string such as `"j"`, `"Enter"`, `"Ctrl+d"` or `"<c-d>"`.
pub fn parse_key(s: &str) -> Option<Key> {
    if s == " " {
        return Some(Key {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
        });
    }

    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>') && s.len() > 2;
    let mut input = if is_bracketed { &s[1..s.len() - 1] } else { s }.to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    for part in input.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" | "return" => code = Some(KeyCode::Enter),
            "esc" | "escape" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "delete" | "del" => code = Some(KeyCode::Delete),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                let mut chars = part.chars();
                match (chars.next(), chars.next()) {
                    (Some(mut c), None) => {
                        if modifiers.contains(KeyModifiers::SHIFT) {
                            c = c.to_ascii_uppercase();
                            modifiers -= KeyModifiers::SHIFT;
                        }
                        code = Some(KeyCode::Char(c));
                    }
                    _ if p_low.starts_with('f')
                        && p_low.len() > 1
                        && p_low[1..].chars().all(|c| c.is_ascii_digit()) =>
                    {
                        code = Some(KeyCode::F(p_low[1..].parse().ok()?));
                    }
                    (None, _) => continue,
                    _ => return None,
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind<A: Copy>(key_list: &[String], action: A, map: &mut HashMap<Key, A>) {
    for k in key_list {
        match parse_key(k) {
            Some(key) => {
                map.insert(key, action);
            }
            None => tracing::warn!(key = %k, "ignoring unparsable key binding"),
        }
    }
}

/// Human readable form of the first parsable key in `key_list`, for the legend.
pub fn key_label(key_list: &[String]) -> Option<String> {
    let key = key_list.iter().find_map(|k| parse_key(k))?;
    let base = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Delete => "del".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}").to_lowercase(),
    };

    let mut label = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        label.push_str("ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        label.push_str("alt+");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        label.push_str("shift+");
    }
    label.push_str(&base);
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn parse_key_variants() {
        let plain = |c| Key {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
        };
        let ctrl_d = Key {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::CONTROL,
        };

        assert_eq!(parse_key("j"), Some(plain('j')));
        assert_eq!(parse_key(" "), Some(plain(' ')));
        assert_eq!(parse_key("Space"), Some(plain(' ')));
        assert_eq!(parse_key("Shift+n"), Some(plain('N')));
        assert_eq!(parse_key("Ctrl+d"), Some(ctrl_d));
        assert_eq!(parse_key("<c-d>"), Some(ctrl_d));
        assert_eq!(parse_key("Backspace").map(|k| k.code), Some(KeyCode::Backspace));
        assert_eq!(parse_key("f5").map(|k| k.code), Some(KeyCode::F(5)));
        assert_eq!(parse_key("hyper+x"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn default_keymap_lookups() {
        let keymap = Keymap::from_config(&Config::default());
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(Action::Nav(NavAction::Down))
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Up, KeyModifiers::NONE)),
            Some(Action::Nav(NavAction::Up))
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(Action::File(FileAction::Create))
        );
        assert_eq!(
            keymap.lookup_edit(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(EditAction::Cancel)
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn shifted_chars_fall_back_to_plain_binding() {
        let keymap = Keymap::from_config(&Config::default());
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('q'), KeyModifiers::SHIFT)),
            Some(Action::System(SystemAction::Quit))
        );
    }

    #[test]
    fn interrupt_is_ctrl_c_only() {
        assert!(is_interrupt(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_interrupt(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn key_labels_for_legend() {
        assert_eq!(key_label(&["Space".into()]).as_deref(), Some("space"));
        assert_eq!(key_label(&["bogus+key".into(), "q".into()]).as_deref(), Some("q"));
        assert_eq!(key_label(&["<c-x>".into()]).as_deref(), Some("ctrl+x"));
        assert_eq!(key_label(&[]), None);
    }
}
