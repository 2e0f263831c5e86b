use super::{
    Scalar,
    UncertainValue,
};

/// The line fitted through the observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegressionEquation<T>
where
    T: Scalar,
{
    /// A non-vertical line `y = slope * x + intercept_y`.
    FiniteSlope {
        /// The slope of the line with its uncertainty.
        slope: UncertainValue<T>,
        /// The value of `y` where the line crosses `x = 0`, with its uncertainty.
        intercept_y: UncertainValue<T>,
    },
    /// A vertical line `x = intercept_x`.
    InfiniteSlope {
        /// The value of `x` shared by all observations.
        intercept_x: T,
    },
    /// All observations coincide in a single point.
    Degenerate {
        /// The `x` coordinate of the point.
        x: T,
        /// The `y` coordinate of the point.
        y: T,
    },
}

impl<T> RegressionEquation<T>
where
    T: Scalar,
{
    /// `true` if the line collapsed into a single point.
    #[inline(always)]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate { .. })
    }

    /// `true` if the line is not vertical and not degenerate.
    #[inline(always)]
    pub fn has_finite_slope(&self) -> bool {
        matches!(self, Self::FiniteSlope { .. })
    }

    /// `true` for a horizontal line.
    #[inline]
    pub fn has_zero_slope(&self) -> bool {
        match self {
            Self::FiniteSlope { slope, .. } => slope.value() == T::zero(),
            Self::InfiniteSlope { .. } | Self::Degenerate { .. } => false,
        }
    }

    /// The slope, only defined for a finite slope.
    #[inline]
    pub fn slope(&self) -> Option<UncertainValue<T>> {
        match self {
            Self::FiniteSlope { slope, .. } => Some(*slope),
            Self::InfiniteSlope { .. } | Self::Degenerate { .. } => None,
        }
    }

    /// The intercept with the y axis, only defined for a finite slope.
    #[inline]
    pub fn intercept_y(&self) -> Option<UncertainValue<T>> {
        match self {
            Self::FiniteSlope { intercept_y, .. } => Some(*intercept_y),
            Self::InfiniteSlope { .. } | Self::Degenerate { .. } => None,
        }
    }

    /// The intercept with the x axis.
    /// Undefined for horizontal lines and for a degenerate point.
    pub fn intercept_x(&self) -> Option<T> {
        match self {
            Self::FiniteSlope { slope, intercept_y } => {
                if slope.value() == T::zero() {
                    None
                } else {
                    Some(-intercept_y.value() / slope.value())
                }
            }
            Self::InfiniteSlope { intercept_x } => Some(*intercept_x),
            Self::Degenerate { .. } => None,
        }
    }

    /// Evaluate the line at `x`.
    /// Only a line with a finite slope has a unique `y` for every `x`.
    pub fn y_at(&self, x: T) -> Option<T> {
        match self {
            Self::FiniteSlope { slope, intercept_y } => {
                Some(slope.value() * x + intercept_y.value())
            }
            Self::InfiniteSlope { .. } | Self::Degenerate { .. } => None,
        }
    }

    /// Solve the line for the `x` where it reaches `y`.
    /// Horizontal lines and degenerate points have no unique solution.
    pub fn x_at(&self, y: T) -> Option<T> {
        match self {
            Self::FiniteSlope { slope, intercept_y } => {
                if slope.value() == T::zero() {
                    None
                } else {
                    Some((y - intercept_y.value()) / slope.value())
                }
            }
            Self::InfiniteSlope { intercept_x } => Some(*intercept_x),
            Self::Degenerate { .. } => None,
        }
    }
}

impl<T> std::fmt::Display for RegressionEquation<T>
where
    T: Scalar,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FiniteSlope { slope, intercept_y } => {
                write!(f, "y = ({slope})·x + ({intercept_y})")
            }
            Self::InfiniteSlope { intercept_x } => write!(f, "x = {intercept_x}"),
            Self::Degenerate { x, y } => write!(f, "({x}, {y})"),
        }
    }
}
