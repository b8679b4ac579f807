use displaydoc::Display;

/// The target type of a bounded parse
///
/// Each target accepts a closed interval of values, expressed in the `i64`
/// intermediate so that out-of-range input can be detected before narrowing.
#[derive(Display, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntType {
    /// int32
    Int32,
    /// uint32
    Uint32,
}

impl IntType {
    /// Smallest accepted value
    #[must_use]
    pub const fn min(self) -> i64 {
        match self {
            IntType::Int32 => i32::MIN as i64,
            IntType::Uint32 => 0,
        }
    }

    /// Largest accepted value
    ///
    /// `Uint32` is capped at `i32::MAX` rather than `u32::MAX`. Existing
    /// callers rely on the narrower range.
    #[must_use]
    pub const fn max(self) -> i64 {
        match self {
            IntType::Int32 | IntType::Uint32 => i32::MAX as i64,
        }
    }

    /// Whether `value` lies within the accepted interval
    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        value >= self.min() && value <= self.max()
    }
}
