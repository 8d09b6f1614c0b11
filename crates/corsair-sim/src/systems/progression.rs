//! Experience and levelling.

use tracing::info;

use corsair_core::components::PlayerShip;
use corsair_core::constants::*;
use corsair_core::events::GameEvent;

/// Spend banked experience on levels. Leftover xp carries into the next
/// level; each level needs 25% more than the last and adds hull.
pub fn run(player: &mut PlayerShip, events: &mut Vec<GameEvent>) {
    while player.level < PLAYER_MAX_LEVEL && player.xp >= player.xp_to_next {
        player.xp -= player.xp_to_next;
        player.level += 1;
        player.xp_to_next = (player.xp_to_next as f64 * XP_GROWTH).round() as u32;
        player.hull.max_hp += HP_PER_PLAYER_LEVEL;
        player.hull.hp = player.hull.max_hp;

        info!(level = player.level, next = player.xp_to_next, "player levelled up");
        events.push(GameEvent::LevelUp { level: player.level });
    }
}
