// Per-contact gesture data tracked between touchstart and touchend

/// A contact position in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactPoint {
    pub x: f64,
    pub y: f64,
}

impl ContactPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GestureSample {
    pub start_x: f64,
    pub start_y: f64,
    pub start_time_ms: f64,
    pub current_x: f64,
    /// Latched once horizontal intent is seen; never cleared mid-gesture.
    pub is_swiping: bool,
}

impl GestureSample {
    pub fn begin(point: ContactPoint, now_ms: f64) -> Self {
        Self {
            start_x: point.x,
            start_y: point.y,
            start_time_ms: now_ms,
            current_x: point.x,
            is_swiping: false,
        }
    }

    pub fn offset_x(&self) -> f64 {
        self.current_x - self.start_x
    }
}
