//! Error taxonomy.
//!
//! Structural problems with tabulated data are reported as [`ValidationError`]
//! at construction time. Operations that are well-formed but mathematically
//! undefined for the data at hand (a logarithm of a non-positive value, a
//! singular closed form, arithmetic on a non-linearised table) are reported
//! as [`DomainError`].

use thiserror::Error;

use crate::interpolation::InterpolationType;

/// Structural problems detected while building a table or integrator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("at least 2 points are required for tabulated data (got x: {x}, y: {y})")]
    InsufficientPoints { x: usize, y: usize },

    #[error("inconsistent number of x and y values for tabulated data (x: {x}, y: {y})")]
    LengthMismatch { x: usize, y: usize },

    #[error("inconsistent number of boundaries ({boundaries}) and interpolants ({interpolants})")]
    RegionMismatch {
        boundaries: usize,
        interpolants: usize,
    },

    #[error("at least one interpolation region is required")]
    NoRegions,

    #[error("the last boundary must point to the last x value (expected {expected}, got {found})")]
    LastBoundary { expected: usize, found: usize },

    #[error("the first boundary cannot point to the first x value, that region holds no panel")]
    EmptyFirstRegion,

    #[error("the boundary values are not strictly increasing (at region {region})")]
    UnsortedBoundaries { region: usize },

    #[error("the x values do not appear to be in ascending order (at index {index})")]
    NotSorted { index: usize },

    #[error("a jump in the x grid cannot occur at the beginning of the x grid")]
    JumpAtStart,

    #[error("a jump in the x grid cannot occur at the end of the x grid")]
    JumpAtEnd,

    #[error("an x value can be repeated at most twice (value at index {index} occurs 3+ times)")]
    TooManyRepeats { index: usize },

    #[error("the grid of the tabulated data is not compatible with the union grid")]
    IncompatibleGrid,

    #[error("the integration boundaries must contain at least 2 values (got {0})")]
    InsufficientIntervals(usize),

    #[error("the integration boundaries must be sorted and unique (at index {index})")]
    IntervalBoundaries { index: usize },

    #[error("no coefficients defined for a series expansion")]
    NoCoefficients,

    #[error("the domain limits must differ and be finite")]
    EmptyDomain,
}

/// Operations that are undefined for the data they were applied to.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("cannot perform {operation} on a table that has not been linearised")]
    NotLinearised { operation: &'static str },

    #[error("log y interpolation requires positive values (y left: {y_left}, y right: {y_right})")]
    NonPositiveValues { y_left: f64, y_right: f64 },

    #[error("log x interpolation needs x of one sign (x left: {x_left}, x right: {x_right})")]
    NonPositiveRatio { x_left: f64, x_right: f64 },

    #[error("possible singularity since the log-log slope {slope} is close to {pole}")]
    Singularity { slope: f64, pole: f64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("the value {x} lies outside of the domain of the function")]
    OutsideDomain { x: f64 },

    #[error("cannot perform {operation} on a function with an open domain")]
    OpenDomain { operation: &'static str },

    #[error("cannot perform {operation} on a region with {law:?} interpolation")]
    UnsupportedLaw {
        operation: &'static str,
        law: InterpolationType,
    },

    #[error("length mismatch (locations: {locations}, output: {output})")]
    OutputLength { locations: usize, output: usize },

    #[error("inconsistent number of boundaries ({boundaries}) and interpolants ({interpolants})")]
    RegionLength {
        boundaries: usize,
        interpolants: usize,
    },
}

/// Any error produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl Error {
    /// Whether this is a [`ValidationError`]
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Whether this is a [`DomainError`]
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}
