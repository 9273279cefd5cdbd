use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{AddAssign, Neg, Sub, SubAssign};
use core::str::FromStr;

use num_traits::{CheckedAdd, Zero};

/// A trait representing an arc capacity (and flow) type which is typically a signed integer.
///
/// Signed, because a residual arc carries the negated flow of its pair.
pub trait Capacity:
    Copy
    + Sum<Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + CheckedAdd
    + FromStr
    + Debug
    + Display
    + Default
{
}

impl Capacity for i32 {}

impl Capacity for i64 {}
