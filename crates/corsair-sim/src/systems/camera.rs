//! Player-follow camera.

use corsair_core::components::{Camera, PlayerShip};
use corsair_core::constants::{MAP_HEIGHT, MAP_WIDTH};
use corsair_core::math::clamp;
use corsair_core::types::Viewport;

/// Center the viewport on the player without showing past the map edge.
/// A viewport larger than the map pins to the top-left corner.
pub fn run(camera: &mut Camera, player: &PlayerShip, viewport: Viewport) {
    camera.x = clamp(player.position.x - viewport.width / 2.0, 0.0, MAP_WIDTH - viewport.width);
    camera.y = clamp(player.position.y - viewport.height / 2.0, 0.0, MAP_HEIGHT - viewport.height);
}
