use std::collections::HashMap;

use crate::game::PlayerId;

/// Per-player and global guess spacing
///
/// A guess passes only when it is strictly later than both the player's last
/// guess plus the player cooldown and the last guess of anyone plus the
/// global cooldown. Players who never guessed are unconstrained.
#[derive(Debug, Clone)]
pub struct GuessCooldowns {
    player_cooldown_ms: u64,
    global_cooldown_ms: u64,
    last_per_player: HashMap<PlayerId, u64>,
    last_global: Option<u64>,
}

impl GuessCooldowns {
    pub fn new(player_cooldown_ms: u64, global_cooldown_ms: u64) -> Self {
        Self {
            player_cooldown_ms,
            global_cooldown_ms,
            last_per_player: HashMap::new(),
            last_global: None,
        }
    }

    pub fn can_guess(&self, player: &PlayerId, now: u64) -> bool {
        let player_ready = self
            .last_per_player
            .get(player)
            .map_or(true, |last| now > last.saturating_add(self.player_cooldown_ms));
        let global_ready = self
            .last_global
            .map_or(true, |last| now > last.saturating_add(self.global_cooldown_ms));
        player_ready && global_ready
    }

    /// Advance both clocks
    pub fn record(&mut self, player: &PlayerId, now: u64) {
        self.last_per_player.insert(player.clone(), now);
        self.last_global = Some(now);
    }

    pub fn forget(&mut self, player: &PlayerId) {
        self.last_per_player.remove(player);
    }

    pub fn last_guess_at(&self, player: &PlayerId) -> Option<u64> {
        self.last_per_player.get(player).copied()
    }

    pub fn last_global_guess_at(&self) -> Option<u64> {
        self.last_global
    }

    pub fn tracked_players(&self) -> usize {
        self.last_per_player.len()
    }
}
