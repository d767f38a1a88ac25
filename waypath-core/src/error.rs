//! Error types for the Waypath core library.
//!
//! Defines the error enum exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::mst::{MstError, MstErrorCode};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while computing a tour.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TourError {
    /// A tour needs at least two points.
    #[error("a tour needs at least 2 points (got {got})")]
    InsufficientPoints {
        /// Number of points supplied by the caller.
        got: usize,
    },
    /// The minimum spanning tree could not be built.
    #[error("spanning tree construction failed: {source}")]
    SpanningTree {
        /// Underlying spanning tree error.
        #[from]
        source: MstError,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("tour invariant violated: {invariant}")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`TourError`] variants.
    enum TourErrorCode for TourError {
        /// A tour needs at least two points.
        InsufficientPoints => InsufficientPoints { .. } => "TOUR_INSUFFICIENT_POINTS",
        /// The minimum spanning tree could not be built.
        SpanningTreeFailure => SpanningTree { .. } => "TOUR_SPANNING_TREE_FAILURE",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "TOUR_INVARIANT_VIOLATION",
    }
}

impl TourError {
    /// Retrieve the inner [`MstErrorCode`] when the error originated in the
    /// spanning tree stage.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::SpanningTree { source } => Some(source.code()),
            _ => None,
        }
    }

    pub(crate) const fn invariant(invariant: &'static str) -> Self {
        Self::InvariantViolation { invariant }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TourError>;
