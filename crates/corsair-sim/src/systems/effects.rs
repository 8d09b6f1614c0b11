//! Cosmetic effect decay.

use hecs::{Entity, World};

use corsair_core::components::VisualEffect;
use corsair_core::enums::EffectKind;

/// Fade every effect; explosions also grow. Expired effects are removed.
pub fn run(world: &mut World, dt: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, effect) in world.query_mut::<&mut VisualEffect>() {
        effect.remaining -= dt;
        if effect.remaining <= 0.0 {
            despawn_buffer.push(entity);
            continue;
        }
        effect.alpha = (effect.remaining / effect.lifetime).clamp(0.0, 1.0);
        if effect.kind == EffectKind::Explosion {
            effect.radius = effect.max_radius * (1.0 - 0.5 * effect.alpha);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
