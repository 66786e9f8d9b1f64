//! Shared state and behavior of every moving, colliding game object.
//!
//! Entities are owned by value in their game's `Vec`s. Deactivating an entity
//! only flips its flag; the owning game drops it in a later
//! [`sweep_inactive`] pass once every entity has been examined.

use super::math::{Rect, Vec2};
use crate::ui::renderer::Renderer;

/// Position, size and liveness of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Center of the entity in world units.
    pub pos: Vec2,
    /// Full width and height.
    pub size: Vec2,
    /// False once the entity is destroyed and awaiting removal.
    pub active: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            active: true,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }
}

pub trait Entity {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Advance this entity by one frame of `dt` seconds.
    fn update(&mut self, dt: f32);

    /// Games batch their drawing, so entities draw nothing by default.
    fn render(&self, _renderer: &mut dyn Renderer) {}

    fn is_active(&self) -> bool {
        self.body().active
    }

    fn deactivate(&mut self) {
        self.body_mut().active = false;
    }

    fn bounds(&self) -> Rect {
        self.body().bounds()
    }

    fn collides_with(&self, other: &dyn Entity) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

/// Drop every inactive entity, keeping the survivors in order.
pub fn sweep_inactive<E: Entity>(entities: &mut Vec<E>) {
    entities.retain(|entity| entity.is_active());
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Crate {
        body: Body,
    }

    impl Crate {
        fn at(x: f32, y: f32) -> Self {
            Self {
                body: Body::new(Vec2::new(x, y), Vec2::new(10.0, 10.0)),
            }
        }
    }

    impl Entity for Crate {
        fn body(&self) -> &Body {
            &self.body
        }

        fn body_mut(&mut self) -> &mut Body {
            &mut self.body
        }

        fn update(&mut self, dt: f32) {
            self.body.pos.x += dt;
        }
    }

    #[test]
    fn test_new_entity_is_active() {
        let c = Crate::at(0.0, 0.0);
        assert!(c.is_active());
        assert_eq!(c.bounds(), Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_update_advances_entity() {
        let mut c = Crate::at(0.0, 0.0);
        c.update(0.5);
        assert_eq!(c.body.pos.x, 0.5);
    }

    #[test]
    fn test_collides_with_uses_bounds() {
        let a = Crate::at(0.0, 0.0);
        let touching = Crate::at(10.0, 0.0);
        let far = Crate::at(30.0, 0.0);
        assert!(a.collides_with(&touching));
        assert!(touching.collides_with(&a));
        assert!(!a.collides_with(&far));
    }

    #[test]
    fn test_sweep_keeps_active_in_order() {
        let mut crates = vec![
            Crate::at(0.0, 0.0),
            Crate::at(1.0, 0.0),
            Crate::at(2.0, 0.0),
            Crate::at(3.0, 0.0),
        ];
        crates[1].deactivate();
        crates[3].deactivate();
        sweep_inactive(&mut crates);
        let xs: Vec<f32> = crates.iter().map(|c| c.body.pos.x).collect();
        assert_eq!(xs, vec![0.0, 2.0]);
    }

    #[test]
    fn test_deactivated_entity_survives_until_sweep() {
        let mut crates = vec![Crate::at(0.0, 0.0)];
        crates[0].deactivate();
        assert_eq!(crates.len(), 1);
        sweep_inactive(&mut crates);
        assert!(crates.is_empty());
    }

    #[test]
    fn test_default_render_draws_nothing() {
        let mut list = crate::ui::renderer::DisplayList::new(800.0, 600.0);
        Crate::at(0.0, 0.0).render(&mut list);
        assert!(list.commands().is_empty());
    }
}
