/// Linear time-based interpolation toward a moving target, used for the
/// animated rotation angle. Pure: the caller supplies the clock.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedValue {
    current: f32,
    target: f32,
    start_value: f32,
    start_ms: f64,
    duration_ms: f64,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
            start_value: value,
            start_ms: 0.0,
            duration_ms: 0.0,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// Retargets the animation, starting from wherever the value currently
    /// is. A zero duration jumps immediately.
    pub fn set_target(&mut self, target: f32, duration_ms: f64, now_ms: f64) {
        if target == self.target {
            return;
        }
        self.start_value = self.current;
        self.target = target;
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
        if duration_ms <= 0.0 {
            self.current = target;
        }
    }

    /// Advances to `now_ms` and returns the interpolated value.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        if self.is_settled() {
            return self.current;
        }
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
        };
        self.current = self.start_value + (self.target - self.start_value) * progress as f32;
        self.current
    }
}
