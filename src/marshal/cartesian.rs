//! Cartesian-product evaluation over independently sized arguments.
//!
//! Combinations are enumerated with a mixed-radix counter whose last digit
//! belongs to the last argument, so the last argument varies fastest. The
//! output shape concatenates the argument shapes in order; scalars add no
//! axis.

use crate::errors::{EngineError, Result};
use crate::marshal::classify::{ArgumentSet, ElementSource};
use crate::marshal::result::ResultContainer;
use crate::math::{checked_element_count, NumericValue, Scalar};

/// Odometer over digits with independent radices.
///
/// The last digit increments first and carries into the digit before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixedRadixCounter {
    radices: Vec<usize>,
    digits: Vec<usize>,
    exhausted: bool,
}

impl MixedRadixCounter {
    /// Creates a counter at the all-zero state.
    ///
    /// A counter with any zero radix has no states and starts exhausted.
    #[must_use]
    pub fn new(radices: Vec<usize>) -> Self {
        let exhausted = radices.contains(&0);
        let digits = vec![0; radices.len()];
        Self {
            radices,
            digits,
            exhausted,
        }
    }

    /// Current digit values, one per radix.
    #[must_use]
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    /// Number of distinct states, or `None` if it overflows `usize`.
    #[must_use]
    pub fn states(&self) -> Option<usize> {
        checked_element_count(&self.radices)
    }

    /// True once every state has been visited.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Moves to the next state. Returns `false` when wrapping past the last
    /// state, after which the counter is exhausted.
    pub fn advance(&mut self) -> bool {
        if self.exhausted {
            return false;
        }
        for (digit, &radix) in self.digits.iter_mut().zip(&self.radices).rev() {
            *digit += 1;
            if *digit < radix {
                return true;
            }
            *digit = 0;
        }
        self.exhausted = true;
        false
    }
}

/// Applies an N-parameter function to every combination of argument elements.
///
/// If any argument has no elements the result is the empty array of shape
/// `[0]`. Otherwise the result has one value per combination, stored in
/// counter order, with shape equal to the concatenated argument shapes.
///
/// # Errors
///
/// - [`EngineError::TooManyElements`] when the number of combinations
///   overflows `usize` or its result buffer cannot be reserved. This is
///   checked before `f` is first called.
/// - [`EngineError::InvalidElementType`] when a list argument holds a
///   non-numeric element.
pub fn evaluate_cartesian<F>(f: F, arguments: &ArgumentSet<'_>) -> Result<ResultContainer>
where
    F: Fn(&[NumericValue]) -> Scalar,
{
    let extents: Vec<usize> = arguments.iter().map(|argument| argument.len()).collect();
    if extents.contains(&0) {
        return Ok(ResultContainer::empty());
    }

    let shape: Vec<usize> = arguments.iter().flat_map(|argument| argument.shape()).collect();
    let too_many = || EngineError::TooManyElements {
        shape: shape.clone(),
    };
    let combinations = checked_element_count(&extents).ok_or_else(too_many)?;
    let mut results: Vec<Scalar> = Vec::new();
    results
        .try_reserve_exact(combinations)
        .map_err(|_| too_many())?;

    let sources = arguments
        .iter()
        .map(|argument| argument.elements())
        .collect::<Result<Vec<ElementSource<'_>>>>()?;

    let mut counter = MixedRadixCounter::new(extents);
    tracing::trace!(combinations, ?shape, "cartesian evaluation");

    let mut tuple = Vec::with_capacity(sources.len());
    loop {
        tuple.clear();
        tuple.extend(
            sources
                .iter()
                .zip(counter.digits())
                .map(|(source, &digit)| source.at(digit)),
        );
        results.push(f(&tuple));
        if !counter.advance() {
            break;
        }
    }
    ResultContainer::array(shape, results)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use ndarray::{Array1, ArrayD, IxDyn};

    use super::*;
    use crate::host::HostValue;

    fn product(args: &[NumericValue]) -> Scalar {
        args.iter().copied().map(NumericValue::as_f64).product()
    }

    fn cartesian(values: &[HostValue]) -> Result<ResultContainer> {
        let arguments = ArgumentSet::classify(values)?;
        evaluate_cartesian(product, &arguments)
    }

    #[test]
    fn counter_visits_states_last_digit_fastest() {
        let mut counter = MixedRadixCounter::new(vec![2, 3]);
        let mut seen = vec![counter.digits().to_vec()];
        while counter.advance() {
            seen.push(counter.digits().to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
        assert!(counter.is_exhausted());
        assert!(!counter.advance());
    }

    #[test]
    fn counter_with_zero_radix_starts_exhausted() {
        let counter = MixedRadixCounter::new(vec![4, 0, 2]);
        assert!(counter.is_exhausted());
        assert_eq!(counter.states(), Some(0));
    }

    #[test]
    fn counter_without_digits_has_one_state() {
        let mut counter = MixedRadixCounter::new(Vec::new());
        assert_eq!(counter.states(), Some(1));
        assert!(!counter.advance());
    }

    #[test]
    fn products_of_two_sequences() {
        let values = vec![HostValue::from(vec![1_i64, 2]), HostValue::from(vec![10_i64, 20, 30])];
        let result = cartesian(&values).expect("numeric");
        assert_eq!(result.shape(), vec![2, 3]);
        assert_eq!(result.to_vec(), vec![10.0, 20.0, 30.0, 20.0, 40.0, 60.0]);
    }

    #[test]
    fn element_at_each_state_matches_direct_call() {
        let first = vec![0.5, 1.5];
        let second = vec![3.0, 5.0, 7.0];
        let values = vec![HostValue::from(first.clone()), HostValue::from(second.clone())];
        let arguments = ArgumentSet::classify(&values).expect("classify");
        let result = evaluate_cartesian(|args| args[0].as_f64() - args[1].as_f64(), &arguments)
            .expect("numeric");
        let ResultContainer::Array(array) = result else {
            panic!("cartesian result is an array");
        };
        for (i, a) in first.iter().enumerate() {
            for (j, b) in second.iter().enumerate() {
                assert_eq!(array[[i, j].as_slice()], a - b);
            }
        }
    }

    #[test]
    fn any_empty_argument_gives_empty_result() {
        let values = vec![
            HostValue::from(vec![1.0; 10]),
            HostValue::List(Vec::new()),
            HostValue::from(vec![2_i64, 3]),
        ];
        let result = cartesian(&values).expect("empty");
        assert_eq!(result.shape(), vec![0]);
    }

    #[test]
    fn empty_argument_skips_element_checks() {
        let values = vec![
            HostValue::List(vec![HostValue::from("x")]),
            HostValue::from(ArrayD::<f64>::zeros(IxDyn(&[2, 0]))),
        ];
        assert_eq!(cartesian(&values), Ok(ResultContainer::empty()));
    }

    #[test]
    fn scalars_add_no_axis() {
        let values = vec![
            HostValue::from(vec![1.0, 2.0]),
            HostValue::Int(3),
            HostValue::from(vec![1.0, 10.0, 100.0]),
        ];
        let result = cartesian(&values).expect("numeric");
        assert_eq!(result.shape(), vec![2, 3]);
        assert_eq!(result.to_vec(), vec![3.0, 30.0, 300.0, 6.0, 60.0, 600.0]);
    }

    #[test]
    fn only_scalars_give_zero_dimensional_array() {
        let values = vec![HostValue::Float(2.0), HostValue::Int(4)];
        let result = cartesian(&values).expect("numeric");
        assert_eq!(result.shape(), Vec::<usize>::new());
        assert_eq!(result.to_vec(), vec![8.0]);
    }

    #[test]
    fn array_shapes_concatenate() {
        let grid = ArrayD::from_shape_vec(IxDyn(&[2, 2]), vec![1.0, 2.0, 3.0, 4.0]).expect("2x2");
        let codes = Array1::from(vec![1_i64, 10, 100]).into_dyn();
        let values = vec![HostValue::from(grid), HostValue::from(codes)];
        let result = cartesian(&values).expect("numeric");
        assert_eq!(result.shape(), vec![2, 2, 3]);
        assert_eq!(result.len(), 12);
        assert_eq!(&result.to_vec()[..6], &[1.0, 10.0, 100.0, 2.0, 20.0, 200.0]);
    }

    #[test]
    fn combinations_are_visited_in_counter_order() {
        let order = RefCell::new(Vec::new());
        let values = vec![HostValue::from(vec![0_i64, 1]), HostValue::from(vec![0_i64, 1, 2])];
        let arguments = ArgumentSet::classify(&values).expect("classify");
        evaluate_cartesian(
            |args| {
                order.borrow_mut().push((args[0].as_i64(), args[1].as_i64()));
                0.0
            },
            &arguments,
        )
        .expect("numeric");
        assert_eq!(
            order.into_inner(),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn non_contiguous_argument_is_rejected() {
        let grid = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![0.0; 6]).expect("2x3");
        let values = vec![HostValue::from(grid.reversed_axes()), HostValue::Int(1)];
        assert!(matches!(
            cartesian(&values),
            Err(EngineError::NonContiguousLayout { .. })
        ));
    }

    #[test]
    fn bad_element_aborts_before_any_call() {
        let calls = Cell::new(0);
        let values = vec![
            HostValue::List(vec![HostValue::Float(1.0), HostValue::from("x")]),
            HostValue::from(vec![2.0]),
        ];
        let arguments = ArgumentSet::classify(&values).expect("classify");
        let err = evaluate_cartesian(
            |args| {
                calls.set(calls.get() + 1);
                product(args)
            },
            &arguments,
        )
        .expect_err("string element");
        assert_eq!(
            err,
            EngineError::InvalidElementType {
                position: 1,
                actual: "str".into(),
            }
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn overflowing_product_is_rejected_before_any_call() {
        let calls = Cell::new(0);
        let values = vec![HostValue::from(vec![1.0; 8192]); 5];
        let arguments = ArgumentSet::classify(&values).expect("classify");
        let err = evaluate_cartesian(
            |args| {
                calls.set(calls.get() + 1);
                product(args)
            },
            &arguments,
        )
        .expect_err("2^65 combinations");
        assert_eq!(
            err,
            EngineError::TooManyElements {
                shape: vec![8192; 5],
            }
        );
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn counter_reports_overflowing_state_count() {
        let counter = MixedRadixCounter::new(vec![usize::MAX, 2]);
        assert_eq!(counter.states(), None);
    }
}
