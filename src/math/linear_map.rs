use num_traits::{clamp_max, clamp_min};

use super::{range::Range, Number};

/// Maps values from one bounded interval onto another.
pub struct LinearMap<T>
where
    T: Number,
{
    input_range: Range<T>,
    output_range: Range<T>,
}

impl<T> LinearMap<T>
where
    T: Number,
{
    pub const fn new(input_range: Range<T>, output_range: Range<T>) -> Self {
        Self {
            input_range,
            output_range,
        }
    }

    /// One-shot clamped remap. Inputs at or beyond a bound land exactly on
    /// the corresponding output bound, with no float round-trip error.
    pub fn map_ranges_bounded<N: Number>(val: N, input_range: Range<N>, output_range: Range<N>) -> N {
        if val <= input_range.min() {
            return output_range.min();
        }

        if val >= input_range.max() {
            return output_range.max();
        }

        input_range.map_value_to_range(val, &output_range)
    }

    pub fn map(&self, val: T) -> T {
        self.input_range.map_value_to_range(val, &self.output_range)
    }

    pub fn map_bounded(&self, val: T) -> T {
        let val = clamp_min(clamp_max(val, self.input_range.max()), self.input_range.min());

        self.map(val)
    }
}
