use super::Number;

/// Closed interval that knows how to remap values onto another interval.
#[derive(Clone, Copy)]
pub struct Range<T>
where
    T: Number,
{
    min: T,
    max: T,
}

impl<T> Range<T>
where
    T: Number,
{
    pub const fn new(min: T, max: T) -> Self {
        Range { min, max }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn span(&self) -> T {
        self.max - self.min
    }

    pub fn map_value_to_range(&self, val: T, new_range: &Range<T>) -> T {
        let scale = new_range.span() / self.span();

        (val - self.min) * scale + new_range.min
    }
}
