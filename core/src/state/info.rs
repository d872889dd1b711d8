/// The area the current session state belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaInfo {
    pub area_name: String,
    /// Monotonic counter incremented on every area transition (even re-entering the same area).
    pub generation: u64,
}

impl AreaInfo {
    /// Info for the next area, one generation after this one
    pub fn next(&self, area_name: impl Into<String>) -> Self {
        Self {
            area_name: area_name.into(),
            generation: self.generation + 1,
        }
    }
}
