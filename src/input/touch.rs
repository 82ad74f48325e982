use glam::Vec2;

use super::event::{TouchInput, TouchPoint};

/// Most touches a multi-touch gesture tracks.
pub const MAX_TOUCHES: usize = 3;

/// Start/end snapshots of up to [`MAX_TOUCHES`] touch positions.
///
/// The start snapshot holds the previous sample, the end snapshot the
/// current one; [`TouchSet::roll_forward`] promotes end to start after each
/// sample so deltas stay incremental.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchSet {
    start: [Vec2; MAX_TOUCHES],
    end: [Vec2; MAX_TOUCHES],
    /// Number of valid entries in `start`.
    start_count: usize,
    /// Number of valid entries in `end`.
    end_count: usize,
}

impl TouchSet {
    /// Record the touches of a touch-down as the start snapshot.
    pub fn record_start(&mut self, touches: &[TouchPoint]) {
        self.start_count = copy_positions(&mut self.start, touches);
        self.end = self.start;
        self.end_count = self.start_count;
    }

    /// Record the touches of a move as the end snapshot.
    pub fn record_end(&mut self, touches: &[TouchPoint]) {
        self.end_count = copy_positions(&mut self.end, touches);
    }

    /// Promote the end snapshot to be the new start.
    pub fn roll_forward(&mut self) {
        self.start = self.end;
        self.start_count = self.end_count;
    }

    /// Distance between touches 0 and 1 in the start and end snapshots.
    ///
    /// `None` unless both snapshots hold at least two touches.
    #[must_use]
    pub fn pinch_distances(&self) -> Option<(f32, f32)> {
        if self.start_count < 2 || self.end_count < 2 {
            return None;
        }
        Some((
            self.start[0].distance(self.start[1]),
            self.end[0].distance(self.end[1]),
        ))
    }

    /// Centroid of the start snapshot.
    #[must_use]
    pub fn start_centroid(&self) -> Option<Vec2> {
        centroid(&self.start[..self.start_count])
    }

    /// Centroid of the end snapshot.
    #[must_use]
    pub fn end_centroid(&self) -> Option<Vec2> {
        centroid(&self.end[..self.end_count])
    }

    /// Centroid motion from start to end snapshot.
    #[must_use]
    pub fn centroid_delta(&self) -> Vec2 {
        match (self.start_centroid(), self.end_centroid()) {
            (Some(start), Some(end)) => end - start,
            _ => Vec2::ZERO,
        }
    }
}

fn copy_positions(
    target: &mut [Vec2; MAX_TOUCHES],
    touches: &[TouchPoint],
) -> usize {
    let count = touches.len().min(MAX_TOUCHES);
    for (slot, touch) in target.iter_mut().zip(touches) {
        *slot = touch.position;
    }
    count
}

fn centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().copied().sum::<Vec2>() / points.len() as f32)
}

/// Aggregates per-finger touch reports into whole touch lists.
///
/// Platforms like winit report one finger per event; gesture handling
/// wants every active touch at once, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    active: Vec<(u64, TouchPoint)>,
}

impl TouchTracker {
    /// Create an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A finger went down. Returns the full active list.
    pub fn start(&mut self, id: u64, point: TouchPoint) -> TouchInput {
        if let Some(entry) =
            self.active.iter_mut().find(|(tid, _)| *tid == id)
        {
            entry.1 = point;
        } else {
            self.active.push((id, point));
        }
        self.snapshot()
    }

    /// A finger moved. Returns the full active list, or `None` for a
    /// finger the tracker never saw go down.
    pub fn update(&mut self, id: u64, point: TouchPoint) -> Option<TouchInput> {
        let entry = self.active.iter_mut().find(|(tid, _)| *tid == id)?;
        entry.1 = point;
        Some(self.snapshot())
    }

    /// A finger lifted or was cancelled. Returns the remaining touches.
    pub fn end(&mut self, id: u64) -> TouchInput {
        self.active.retain(|(tid, _)| *tid != id);
        self.snapshot()
    }

    /// Number of fingers down.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no finger is down.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    fn snapshot(&self) -> TouchInput {
        TouchInput::new(self.active.iter().map(|(_, point)| *point).collect())
    }
}
