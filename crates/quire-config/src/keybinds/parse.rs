use quire_common::ConfigError;

use super::{KeyBind, Modifier};

/// Parse a keybind string like `"Ctrl+Alt+Right"` or `"Cmd+Shift+F"`.
///
/// `Cmd` maps to `Super` on macOS and `Ctrl` elsewhere; `Option` is `Alt`.
/// The last token that is not a recognized modifier becomes the key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, ConfigError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    if tokens.iter().all(|t| t.is_empty()) {
        return Err(ConfigError::ParseError("empty keybind string".into()));
    }

    let mut modifiers = Vec::new();
    let mut key: Option<String> = None;

    for (i, token) in tokens.iter().enumerate() {
        let is_last = i == tokens.len() - 1;
        match normalize_modifier(token) {
            Some(modifier) if !is_last => {
                if !modifiers.contains(&modifier) {
                    modifiers.push(modifier);
                }
            }
            _ if is_last && !token.is_empty() => key = Some(normalize_key_name(token)),
            _ => {
                return Err(ConfigError::ParseError(format!(
                    "unrecognized modifier: {token}"
                )))
            }
        }
    }

    let key =
        key.ok_or_else(|| ConfigError::ParseError("keybind has no key component".into()))?;

    Ok(KeyBind { modifiers, key })
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

/// Canonical spelling of a key name, shared by config parsing and live
/// key events.
pub fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        _ => {
            if token.chars().count() == 1 {
                token.to_uppercase()
            } else {
                let mut chars = lower.chars();
                match chars.next() {
                    Some(c) => {
                        let upper: String = c.to_uppercase().collect();
                        format!("{upper}{}", chars.as_str())
                    }
                    None => lower,
                }
            }
        }
    }
}
