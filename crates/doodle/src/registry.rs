//! Id-keyed robot registry for embedding applications.

use std::collections::HashMap;

use crate::replay::Robot;
use crate::surface::DrawSurface;

/// Robots keyed by the id of the surface element they are bound to.
///
/// The original widget kept this map in process-global state; here it is
/// an explicit object owned by the embedding application, which holds
/// `&mut` for the UI thread that drives it. Asking for an id twice
/// yields the same robot, so an element keeps its replay cursor and
/// recording across lookups.
#[derive(Default)]
pub struct RobotRegistry<S> {
    robots: HashMap<String, Robot<S>>,
}

impl<S: DrawSurface> RobotRegistry<S> {
    pub fn new() -> Self {
        Self {
            robots: HashMap::new(),
        }
    }

    /// Robot bound to the id, created by `create` on first use.
    pub fn get_or_insert_with(
        &mut self,
        id: &str,
        create: impl FnOnce() -> Robot<S>,
    ) -> &mut Robot<S> {
        self.robots
            .entry(id.to_string())
            .or_insert_with(create)
    }

    pub fn get(&self, id: &str) -> Option<&Robot<S>> {
        self.robots.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Robot<S>> {
        self.robots.get_mut(id)
    }

    /// Unbind and return the robot for an id.
    pub fn remove(&mut self, id: &str) -> Option<Robot<S>> {
        self.robots.remove(id)
    }

    /// Ids with a bound robot.
    pub fn ids(&self) -> Vec<String> {
        self.robots.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Recording;
    use crate::surface::TraceSurface;

    fn robot(text: &str) -> Robot<TraceSurface> {
        Robot::new(TraceSurface::new(), Recording::from(text))
    }

    #[test]
    fn same_id_yields_the_same_robot() {
        let mut registry = RobotRegistry::new();
        registry.get_or_insert_with("left", || robot("m001001"));
        // The second closure must not run; the first binding wins.
        let bound = registry.get_or_insert_with("left", || robot("m002002"));
        assert_eq!(bound.recording().as_str(), "m001001");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn distinct_ids_are_distinct_robots() {
        let mut registry = RobotRegistry::new();
        registry.get_or_insert_with("left", || robot("m001001"));
        registry.get_or_insert_with("right", || robot("m002002"));
        assert_eq!(registry.len(), 2);
        let mut ids = registry.ids();
        ids.sort();
        assert_eq!(ids, vec!["left".to_string(), "right".to_string()]);
    }

    #[test]
    fn remove_unbinds_the_robot() {
        let mut registry = RobotRegistry::new();
        registry.get_or_insert_with("left", || robot("m001001"));
        let removed = registry.remove("left").unwrap();
        assert_eq!(removed.recording().as_str(), "m001001");
        assert!(registry.is_empty());
        assert!(registry.get("left").is_none());
    }
}
