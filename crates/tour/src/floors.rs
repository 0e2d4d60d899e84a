use formats::TourManifest;

/// Direction of a floor change. `Up` moves to the next higher floor order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FloorDirection {
    Up,
    Down,
}

impl FloorDirection {
    pub fn step(self) -> isize {
        match self {
            FloorDirection::Up => 1,
            FloorDirection::Down => -1,
        }
    }
}

/// Floor arrows for the active scene.
///
/// Floors are the scenes sharing the active scene's floor group, ordered by
/// floor order, ties broken by scene key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FloorNav {
    floors: Vec<String>,
    index: Option<usize>,
}

impl FloorNav {
    pub fn for_scene(manifest: &TourManifest, key: &str) -> Self {
        let Some(group) = manifest.scene(key).and_then(|s| s.floor_group.as_deref()) else {
            return Self::default();
        };

        let mut floors: Vec<(&String, f64)> = manifest
            .scenes
            .iter()
            .filter(|(_, s)| s.floor_group.as_deref() == Some(group))
            .map(|(k, s)| (k, s.floor_order.unwrap_or(0.0)))
            .collect();
        floors.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        let floors: Vec<String> = floors.into_iter().map(|(k, _)| k.clone()).collect();
        let index = floors.iter().position(|k| k == key);
        Self { floors, index }
    }

    /// Whether the floor arrows are shown at all.
    pub fn is_visible(&self) -> bool {
        self.index.is_some()
    }

    pub fn can_go_up(&self) -> bool {
        self.index.is_some_and(|i| i + 1 < self.floors.len())
    }

    pub fn can_go_down(&self) -> bool {
        self.index.is_some_and(|i| i > 0)
    }

    pub fn floors(&self) -> &[String] {
        &self.floors
    }

    /// Key of the neighbouring floor, `None` past either end.
    pub fn adjacent(&self, direction: FloorDirection) -> Option<&str> {
        let index = self.index?.checked_add_signed(direction.step())?;
        self.floors.get(index).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tour() -> TourManifest {
        TourManifest::from_json_str(
            r#"{ "meta": { "defaultScene": "garden" },
                 "scenes": {
                   "garden": { "image": "g.jpg" },
                   "attic":  { "image": "a.jpg", "floorGroup": "upper_floors", "floorOrder": 3 },
                   "first":  { "image": "1.jpg", "floorGroup": "upper_floors", "floorOrder": 1 },
                   "second": { "image": "2.jpg", "floorGroup": "upper_floors", "floorOrder": 2 },
                   "cellar": { "image": "c.jpg", "floorGroup": "below", "floorOrder": -1 }
                 } }"#,
        )
        .unwrap()
    }

    #[test]
    fn floors_are_ordered_by_floor_order() {
        let nav = FloorNav::for_scene(&tour(), "second");
        assert_eq!(nav.floors(), ["first", "second", "attic"]);
        assert!(nav.is_visible());
        assert!(nav.can_go_up());
        assert!(nav.can_go_down());
        assert_eq!(nav.adjacent(FloorDirection::Up), Some("attic"));
        assert_eq!(nav.adjacent(FloorDirection::Down), Some("first"));
    }

    #[test]
    fn ends_disable_their_arrow() {
        let tour = tour();
        let top = FloorNav::for_scene(&tour, "attic");
        assert!(!top.can_go_up());
        assert_eq!(top.adjacent(FloorDirection::Up), None);

        let bottom = FloorNav::for_scene(&tour, "first");
        assert!(!bottom.can_go_down());
        assert_eq!(bottom.adjacent(FloorDirection::Down), None);
    }

    #[test]
    fn scenes_outside_a_group_hide_the_arrows() {
        let nav = FloorNav::for_scene(&tour(), "garden");
        assert!(!nav.is_visible());
        assert!(!nav.can_go_up() && !nav.can_go_down());
        assert_eq!(nav.adjacent(FloorDirection::Up), None);
    }

    #[test]
    fn single_floor_group_has_no_neighbours() {
        let nav = FloorNav::for_scene(&tour(), "cellar");
        assert!(nav.is_visible());
        assert!(!nav.can_go_up() && !nav.can_go_down());
    }
}
