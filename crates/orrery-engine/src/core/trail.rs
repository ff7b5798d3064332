use glam::Vec3;

/// Maximum number of world positions kept per body.
pub const TRAIL_CAPACITY: usize = 200;

/// Fixed-capacity FIFO of recent world-space positions, oldest first.
/// Ring-buffer backed: appending at capacity overwrites the oldest slot
/// in place, so there is no per-frame shifting or reallocation.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: Vec<Vec3>,
    /// Physical index of the oldest point once the arena is full.
    head: usize,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "trail capacity must be non-zero");
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Append a point, evicting the oldest one at capacity.
    pub fn push(&mut self, point: Vec3) {
        if self.points.len() < self.capacity {
            self.points.push(point);
        } else {
            self.points[self.head] = point;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Point at logical index `i`, where 0 is the oldest. `None` past
    /// the end (and on an empty buffer).
    pub fn get(&self, i: usize) -> Option<Vec3> {
        if i >= self.points.len() {
            return None;
        }
        Some(self.points[(self.head + i) % self.points.len()])
    }

    /// Iterate oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }

    /// Per-point fade: the older half of the trail is fully transparent,
    /// the newer half carries alpha = index / length.
    pub fn point_alpha(index: usize, len: usize) -> f32 {
        if index < len / 2 {
            0.0
        } else {
            index as f32 / len as f32
        }
    }

    /// Vertex stream for the line strip, oldest first: white RGB plus the
    /// fade alpha. Fewer than two points cannot form a segment, so the
    /// result is empty below that.
    pub fn line_vertices(&self) -> Vec<(Vec3, [f32; 4])> {
        let n = self.len();
        if n < 2 {
            return Vec::new();
        }
        self.iter()
            .enumerate()
            .map(|(i, point)| (point, [1.0, 1.0, 1.0, Self::point_alpha(i, n)]))
            .collect()
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new()
    }
}
