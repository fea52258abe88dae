//! Interval algebra over ordered domains.
//!
//! An [`Interval`] is a pair of [`Endpoint`]s, each finite or infinite and
//! either inclusive or exclusive. On top of it the crate provides the 13
//! Allen-style [`Relation`]s, the set combinators (hull, union, intersection,
//! except, gap), their folds over sequences, and canonicalization between
//! the four boundary [`Shape`]s.
//!
//! Value types plug in through [`Domain`] (a total order) and [`Step`]
//! (successor/predecessor arithmetic used by canonicalization). Integers,
//! floats and the `chrono` date and time types are supported out of the box.
//!
//! ```rust
//! use intervals::{Interval, Relation, Shape};
//!
//! let a: Interval<i32> = "[1, 5]".parse().unwrap();
//! let b: Interval<i32> = "[5, 9]".parse().unwrap();
//! assert_eq!(a.relation(&b), Relation::Meets);
//! assert_eq!(a.union(&b).unwrap().to_string(), "[1, 9]");
//!
//! let open = Interval::open(2, 4).unwrap();
//! assert_eq!(open.canonicalize_unit(Shape::Closed), Interval::singleton(3));
//! ```

pub mod interval;

pub use interval::{
    classify, compare_end, compare_end_to_start, compare_start, compare_start_to_end,
    complement, exclude_overlap, gaps, hull_all, intersect_all, reduce_pairwise,
    sort_by_start, union_all, Domain, Endpoint, Interval, IntervalError, Relation, Shape,
    Step,
};
