use core::ops::{Add, Div, Mul, Sub};

use num_traits::{FromPrimitive, ToPrimitive};

pub mod linear_map;
pub mod range;

// scalar bound for the mapping helpers. FromPrimitive/ToPrimitive keeps
// matrix-like types out, PartialOrd is needed for the clamped maps
pub trait Number:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + FromPrimitive
    + ToPrimitive
{
}

impl<T> Number for T where
    T: Copy
        + PartialOrd
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + FromPrimitive
        + ToPrimitive
{
}
