//! Navigation and selection over an ordered item collection.
//!
//! Cyclic surfaces wrap at both ends. Bounded surfaces (a catalog category
//! read from top to bottom) stop at the ends and report reaching the last
//! item so the caller can decide what finishing means.

use super::item::CounterItem;

/// Horizontal displacement, in logical pixels, a drag must exceed.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationMode {
    #[default]
    Cyclic,
    Bounded,
}

/// Where a step from the active item lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    To(String),
    /// Bounded mode only: the active item was the last one.
    EndOfSequence,
    /// Nothing to move to (empty collection, or bounded start).
    Stay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

fn index_of(items: &[CounterItem], id: Option<&str>) -> Option<usize> {
    let id = id?;
    items.iter().position(|i| i.id == id)
}

/// Cyclic successor. Falls back to the first item when `active` is unknown.
pub fn next(active: Option<&str>, items: &[CounterItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let idx = match index_of(items, active) {
        Some(i) => (i + 1) % items.len(),
        None => 0,
    };
    Some(items[idx].id.clone())
}

/// Cyclic predecessor. Falls back to the first item when `active` is unknown.
pub fn previous(active: Option<&str>, items: &[CounterItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let idx = match index_of(items, active) {
        Some(i) => (i + items.len() - 1) % items.len(),
        None => 0,
    };
    Some(items[idx].id.clone())
}

/// Resolve one step in `direction` under `mode`.
pub fn step(
    mode: NavigationMode,
    direction: Direction,
    active: Option<&str>,
    items: &[CounterItem],
) -> Step {
    match mode {
        NavigationMode::Cyclic => {
            let target = match direction {
                Direction::Next => next(active, items),
                Direction::Previous => previous(active, items),
            };
            target.map(Step::To).unwrap_or(Step::Stay)
        }
        NavigationMode::Bounded => {
            let Some(idx) = index_of(items, active) else {
                return Step::Stay;
            };
            match direction {
                Direction::Next if idx + 1 < items.len() => Step::To(items[idx + 1].id.clone()),
                Direction::Next => Step::EndOfSequence,
                Direction::Previous if idx > 0 => Step::To(items[idx - 1].id.clone()),
                Direction::Previous => Step::Stay,
            }
        }
    }
}

/// Map a completed horizontal drag to a direction.
///
/// Dragging the content leftward (start to the right of end) moves forward.
pub fn classify_swipe(start_x: f32, end_x: f32) -> Option<Direction> {
    let distance = start_x - end_x;
    if distance > SWIPE_THRESHOLD_PX {
        Some(Direction::Next)
    } else if distance < -SWIPE_THRESHOLD_PX {
        Some(Direction::Previous)
    } else {
        None
    }
}

/// Accumulates touch positions for one gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    end_x: Option<f32>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.end_x = None;
    }

    pub fn touch_move(&mut self, x: f32) {
        self.end_x = Some(x);
    }

    /// Finish the gesture. A tap with no movement yields nothing.
    pub fn touch_end(&mut self) -> Option<Direction> {
        let start = self.start_x.take();
        let end = self.end_x.take();
        classify_swipe(start?, end?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(ids: &[&str]) -> Vec<CounterItem> {
        ids.iter().map(|id| CounterItem::new(*id, *id, 0)).collect()
    }

    #[test]
    fn cyclic_wraps_both_ways() {
        let list = items(&["a", "b", "c"]);
        assert_eq!(next(Some("c"), &list).as_deref(), Some("a"));
        assert_eq!(previous(Some("a"), &list).as_deref(), Some("c"));
        assert_eq!(next(Some("a"), &list).as_deref(), Some("b"));
    }

    #[test]
    fn single_item_is_its_own_neighbour() {
        let list = items(&["only"]);
        assert_eq!(next(Some("only"), &list).as_deref(), Some("only"));
        assert_eq!(previous(Some("only"), &list).as_deref(), Some("only"));
    }

    #[test]
    fn empty_collection_has_no_neighbour() {
        assert_eq!(next(Some("x"), &[]), None);
        assert_eq!(previous(None, &[]), None);
    }

    #[test]
    fn bounded_stops_at_edges() {
        let list = items(&["a", "b"]);
        let mode = NavigationMode::Bounded;
        assert_eq!(step(mode, Direction::Previous, Some("a"), &list), Step::Stay);
        assert_eq!(step(mode, Direction::Next, Some("a"), &list), Step::To("b".into()));
        assert_eq!(step(mode, Direction::Next, Some("b"), &list), Step::EndOfSequence);
    }

    #[test]
    fn swipe_threshold_is_strict() {
        assert_eq!(classify_swipe(200.0, 100.0), Some(Direction::Next));
        assert_eq!(classify_swipe(100.0, 200.0), Some(Direction::Previous));
        assert_eq!(classify_swipe(100.0, 50.0), None);
        assert_eq!(classify_swipe(100.0, 150.0), None);
    }

    #[test]
    fn tracker_ignores_taps_without_movement() {
        let mut t = SwipeTracker::new();
        t.touch_start(300.0);
        assert_eq!(t.touch_end(), None);

        t.touch_start(300.0);
        t.touch_move(240.0);
        t.touch_move(120.0);
        assert_eq!(t.touch_end(), Some(Direction::Next));
        assert_eq!(t.touch_end(), None);
    }
}
