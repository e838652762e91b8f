use std::fmt;

use eframe::egui;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    CtrlAlt,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::CtrlAlt => "Ctrl+Alt",
        };
        write!(f, "{}", s)
    }
}

/// A single key binding. `key` is compared case-sensitively against typed
/// text, so `'u'` and `'U'` are different hotkeys.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            ' ' => "Space".to_string(),
            other => other.to_string(),
        };

        if self.modifier == Modifier::None {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifier, key)
        }
    }
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }

    pub fn plain(key: char) -> Self {
        Self::new(Modifier::None, key)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hotkeys {
    pub undo: Option<Hotkey>,
    pub redo: Option<Hotkey>,
    pub quit: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            undo: Some(Hotkey::plain('u')),
            redo: Some(Hotkey::plain('r')),
            quit: Some(Hotkey::plain('q')),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HotkeyName {
    Undo,
    Redo,
    Quit,
}

pub fn get_hotkey_for_name(hk: &Hotkeys, name: HotkeyName) -> Option<&Hotkey> {
    match name {
        HotkeyName::Undo => hk.undo.as_ref(),
        HotkeyName::Redo => hk.redo.as_ref(),
        HotkeyName::Quit => hk.quit.as_ref(),
    }
}

/// Window title / status legend listing the controls,
/// e.g. `Left Click = Point | u = Undo | r = Redo | Scroll = Zoom | q = Quit`.
pub fn format_legend(hk: &Hotkeys) -> String {
    let mut parts = vec!["Left Click = Point".to_string()];
    if let Some(k) = &hk.undo {
        parts.push(format!("{} = Undo", k));
    }
    if let Some(k) = &hk.redo {
        parts.push(format!("{} = Redo", k));
    }
    parts.push("Scroll = Zoom".to_string());
    if let Some(k) = &hk.quit {
        parts.push(format!("{} = Quit", k));
    }
    parts.join(" | ")
}

/// Hover text for a button, with its hotkey in brackets when bound.
pub fn format_button_tooltip(description: &str, hk: Option<&Hotkey>) -> String {
    match hk {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

// Shift is already folded into the typed character.
fn text_modifier(m: egui::Modifiers) -> Modifier {
    let ctrl = m.ctrl || m.command;
    match (ctrl, m.alt) {
        (false, false) => Modifier::None,
        (true, false) => Modifier::Ctrl,
        (false, true) => Modifier::Alt,
        (true, true) => Modifier::CtrlAlt,
    }
}

fn event_to_hotkey(ev: &egui::Event, mods: egui::Modifiers) -> Option<Hotkey> {
    match ev {
        egui::Event::Text(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(Hotkey::new(text_modifier(mods), ch)),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Translate one frame's input events into hotkey actions, in event order.
pub fn hotkey_actions_from_events(
    cfg: &Hotkeys,
    events: &[egui::Event],
    mods: egui::Modifiers,
) -> Vec<HotkeyName> {
    let matches_cfg = |cfg_hk: Option<&Hotkey>, hk: &Hotkey| cfg_hk.is_some_and(|c| c == hk);

    let mut actions = Vec::new();
    for ev in events {
        let Some(hk) = event_to_hotkey(ev, mods) else {
            continue;
        };
        for name in [HotkeyName::Undo, HotkeyName::Redo, HotkeyName::Quit] {
            if matches_cfg(get_hotkey_for_name(cfg, name), &hk) {
                actions.push(name);
            }
        }
    }
    actions
}

pub fn detect_hotkey_actions(cfg: &Hotkeys, ctx: &egui::Context) -> Vec<HotkeyName> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|i| hotkey_actions_from_events(cfg, &i.events, i.modifiers))
}
