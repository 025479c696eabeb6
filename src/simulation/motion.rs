//! Movement capability for entities that travel across the surface.

/// Whether an entity moves on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    /// Moves along its velocity every frame.
    #[default]
    Free,
    /// Held in place, usually after snapping onto its target.
    Pinned,
}

/// Entities with a position that can be moved over time.
///
/// Implementors supply the per-type displacement in [`Movable::move_self`];
/// callers go through [`commit_movement`], which honors the pinned state.
pub trait Movable {
    /// Current motion state.
    fn motion_state(&self) -> MotionState;

    /// Advances the entity by `dt` seconds of travel.
    fn move_self(&mut self, dt: f32);
}

/// Moves `item` by one frame of `dt` seconds unless it is pinned.
pub fn commit_movement<M: Movable + ?Sized>(item: &mut M, dt: f32) {
    if item.motion_state() == MotionState::Free {
        item.move_self(dt);
    }
}
