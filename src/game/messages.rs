//! Action-bar message templates
//!
//! Templates may use `%PLAYER%` and `%LETTER%`, and `&` colour codes which
//! are translated to the host's `§` form.

use serde::{Deserialize, Serialize};

pub const PLAYER_PLACEHOLDER: &str = "%PLAYER%";
pub const LETTER_PLACEHOLDER: &str = "%LETTER%";

const COLOR_CODES: &str = "0123456789abcdefklmnor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Cooldown,
    AlreadyGuessed,
    RightGuess,
    WrongGuess,
    GameWon,
    GameLost,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub cooldown: String,
    pub already_guessed: String,
    pub right_guess: String,
    pub wrong_guess: String,
    pub game_won: String,
    pub game_lost: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            cooldown: "&cWait a moment before guessing again".to_string(),
            already_guessed: "&e%LETTER% &7has already been guessed".to_string(),
            right_guess: "&a%PLAYER% guessed &f%LETTER%&a, it is in the word!".to_string(),
            wrong_guess: "&c%PLAYER% guessed &f%LETTER%&c, it is not in the word".to_string(),
            game_won: "&6%PLAYER% completed the word with &f%LETTER%&6!".to_string(),
            game_lost: "&4%PLAYER% guessed &f%LETTER%&4, the game is lost".to_string(),
        }
    }
}

impl Messages {
    pub fn template(&self, key: MessageKey) -> &str {
        match key {
            MessageKey::Cooldown => &self.cooldown,
            MessageKey::AlreadyGuessed => &self.already_guessed,
            MessageKey::RightGuess => &self.right_guess,
            MessageKey::WrongGuess => &self.wrong_guess,
            MessageKey::GameWon => &self.game_won,
            MessageKey::GameLost => &self.game_lost,
        }
    }

    /// Fill in the placeholders and translate colour codes
    pub fn render(&self, key: MessageKey, player: &str, letter: char) -> String {
        let text = self
            .template(key)
            .replace(PLAYER_PLACEHOLDER, player)
            .replace(LETTER_PLACEHOLDER, &letter.to_string());
        colorize(&text)
    }
}

/// Translate `&x` colour codes to `§x`
pub fn colorize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '&' && COLOR_CODES.contains(next.to_ascii_lowercase()) => {
                out.push('§');
                out.push(next.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize() {
        assert_eq!(colorize("&aGreen &Lbold"), "§aGreen §lbold");
        assert_eq!(colorize("fish & chips"), "fish & chips");
        assert_eq!(colorize("&zq&"), "&zq&");
    }

    #[test]
    fn test_render_fills_placeholders() {
        let messages = Messages {
            right_guess: "%PLAYER% found %LETTER% (%LETTER%)".to_string(),
            ..Messages::default()
        };
        assert_eq!(
            messages.render(MessageKey::RightGuess, "Alex", 'Q'),
            "Alex found Q (Q)"
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let messages: Messages = toml::from_str("game_won = \"yay\"").unwrap();
        assert_eq!(messages.game_won, "yay");
        assert_eq!(messages.cooldown, Messages::default().cooldown);
    }
}
