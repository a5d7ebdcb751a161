/// Tracks the last absolute cursor position to turn positions into deltas.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointerTracker {
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    /// Record a cursor position and return the `(dx, dy)` since the last
    /// one, in screen orientation (y grows downward). The first position
    /// only seeds the tracker.
    pub(crate) fn handle_position(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let previous = self.last.replace((x, y));
        previous.map(|(px, py)| (x - px, y - py))
    }

    /// Forget the last position so the next one seeds again.
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_position_only_seeds() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.handle_position(400.0, 300.0), None);
        assert_eq!(tracker.handle_position(410.0, 295.0), Some((10.0, -5.0)));
        tracker.reset();
        assert_eq!(tracker.handle_position(0.0, 0.0), None);
    }
}
