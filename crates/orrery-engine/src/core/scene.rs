use crate::api::types::BodyId;
use crate::core::body::CelestialBody;

/// Flat body storage in spawn order. Index 0 is the non-orbiting root.
/// Bodies are only created at startup and live for the whole run.
pub struct Scene {
    bodies: Vec<CelestialBody>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
        }
    }

    /// Add a body. Parent links must refer to an already-spawned body.
    pub fn spawn(&mut self, body: CelestialBody) {
        debug_assert!(
            body.parent.map_or(true, |p| self.get(p).is_some()),
            "parent of {} spawned out of order",
            body.name
        );
        self.bodies.push(body);
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Bodies orbiting directly in `id`'s frame, in spawn order.
    pub fn children_of(&self, id: BodyId) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(move |b| b.parent == Some(id))
    }

    /// The non-orbiting root body, if any has been spawned.
    pub fn root(&self) -> Option<&CelestialBody> {
        self.bodies.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CelestialBody> {
        self.bodies.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_and_lookup() {
        let mut scene = Scene::new();
        scene.spawn(CelestialBody::new(BodyId(0), "Sun"));
        scene.spawn(CelestialBody::new(BodyId(1), "Earth").with_parent(BodyId(0)));
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.root().unwrap().name, "Sun");
        assert_eq!(scene.find_by_name("Earth").unwrap().id, BodyId(1));
        assert!(scene.get(BodyId(7)).is_none());
    }

    #[test]
    fn children_in_spawn_order() {
        let mut scene = Scene::new();
        scene.spawn(CelestialBody::new(BodyId(0), "Sun"));
        scene.spawn(CelestialBody::new(BodyId(1), "Mercury").with_parent(BodyId(0)));
        scene.spawn(CelestialBody::new(BodyId(2), "Venus").with_parent(BodyId(0)));
        scene.spawn(CelestialBody::new(BodyId(3), "Moon").with_parent(BodyId(1)));
        let names: Vec<_> = scene.children_of(BodyId(0)).map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Mercury", "Venus"]);
        let moons: Vec<_> = scene.children_of(BodyId(1)).map(|b| b.name.as_str()).collect();
        assert_eq!(moons, ["Moon"]);
    }
}
