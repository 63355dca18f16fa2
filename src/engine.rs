//! Entry points that classify caller values and pick an evaluation strategy.

use crate::config::{CallConfig, EvaluationMode};
use crate::errors::Result;
use crate::host::HostValue;
use crate::marshal::{
    classify, evaluate1, evaluate_cartesian, evaluate_zip, map_elements, ArgumentSet,
    ResultContainer,
};
use crate::math::{NumericValue, Scalar};

/// Applies a one-parameter function to a single caller value.
///
/// The result mirrors the input: scalar in, scalar out; list in, list out;
/// array in, array of the same shape out.
///
/// # Errors
///
/// Propagates classification, layout and element errors.
pub fn evaluate_unary<F>(f: F, value: &HostValue) -> Result<ResultContainer>
where
    F: Fn(Scalar) -> Scalar,
{
    let argument = classify(value)?;
    tracing::debug!(kind = value.type_name(), "single-argument evaluation");
    evaluate1(f, &argument)
}

/// Applies a multi-argument function to caller values.
///
/// In zipped mode a call with exactly one argument keeps that argument's
/// category, the same as [`evaluate_unary`]; with more arguments the rows are
/// zipped. Cartesian mode always produces the full product.
///
/// `values` is any collection of borrowed caller values: `&[HostValue]`,
/// `&Vec<HostValue>` or an array of references such as `[&energy, &code]`.
///
/// # Errors
///
/// Propagates classification, layout, length, rank, element and size errors.
pub fn evaluate<'a, F, I>(f: F, values: I, config: &CallConfig) -> Result<ResultContainer>
where
    F: Fn(&[NumericValue]) -> Scalar,
    I: IntoIterator<Item = &'a HostValue>,
{
    let span = tracing::debug_span!("evaluate", function = %config.name, mode = ?config.mode);
    let _guard = span.enter();

    let arguments = ArgumentSet::classify(values)?;
    tracing::debug!(arity = arguments.len(), "classified arguments");

    match config.mode {
        EvaluationMode::Zipped => match arguments.as_slice() {
            [only] => map_elements(|value| f(std::slice::from_ref(&value)), only),
            _ => evaluate_zip(f, &arguments),
        },
        EvaluationMode::Cartesian => evaluate_cartesian(f, &arguments),
    }
}

/// [`evaluate`] followed by conversion back to a host value.
///
/// # Errors
///
/// Same as [`evaluate`].
pub fn call<'a, F, I>(f: F, values: I, config: &CallConfig) -> Result<HostValue>
where
    F: Fn(&[NumericValue]) -> Scalar,
    I: IntoIterator<Item = &'a HostValue>,
{
    evaluate(f, values, config).map(HostValue::from)
}

/// [`evaluate_unary`] followed by conversion back to a host value.
///
/// # Errors
///
/// Same as [`evaluate_unary`].
pub fn call_unary<F>(f: F, value: &HostValue) -> Result<HostValue>
where
    F: Fn(Scalar) -> Scalar,
{
    evaluate_unary(f, value).map(HostValue::from)
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, ArrayD, IxDyn};

    use super::*;
    use crate::errors::EngineError;
    use crate::host::HostArray;
    use crate::marshal::classify::ACCEPTED_INPUTS;

    fn add(args: &[NumericValue]) -> Scalar {
        args.iter().copied().map(NumericValue::as_f64).sum()
    }

    #[test]
    fn unary_mirrors_list_input() {
        let value = HostValue::from(vec![1.0, 4.0, 9.0]);
        let out = call_unary(f64::sqrt, &value).expect("numeric");
        assert_eq!(out, HostValue::from(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn unary_rejects_strings() {
        let err = evaluate_unary(f64::sqrt, &HostValue::from("string")).expect_err("str");
        assert_eq!(err, EngineError::unsupported(ACCEPTED_INPUTS, "str"));
    }

    #[test]
    fn one_zipped_argument_keeps_its_category() {
        let value = HostValue::from(vec![1_i64, 2]);
        let out = evaluate(add, &[value], &CallConfig::zipped("add")).expect("numeric");
        assert_eq!(out, ResultContainer::Sequence(vec![1.0, 2.0]));
    }

    #[test]
    fn several_zipped_arguments_give_flat_array() {
        let values = vec![HostValue::from(vec![1_i64, 2, 3]), HostValue::Int(10)];
        let out = call(add, &values, &CallConfig::zipped("add")).expect("numeric");
        let expected = HostValue::Array(HostArray::Float(Array1::from(vec![11.0, 12.0, 13.0]).into_dyn()));
        assert_eq!(out, expected);
    }

    #[test]
    fn cartesian_mode_is_honoured_for_one_argument() {
        let values = vec![HostValue::from(vec![1.0, 2.0])];
        let out = evaluate(add, &values, &CallConfig::cartesian("add")).expect("numeric");
        assert_eq!(out, ResultContainer::flat(vec![1.0, 2.0]));
    }

    #[test]
    fn non_contiguous_input_fails_in_every_mode() {
        let grid = ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![0.0; 6]).expect("2x3");
        let value = HostValue::from(grid.reversed_axes());
        assert!(matches!(
            evaluate_unary(|x| x, &value),
            Err(EngineError::NonContiguousLayout { .. })
        ));
        for config in [CallConfig::zipped("f"), CallConfig::cartesian("f")] {
            let values = vec![HostValue::Int(1), value.clone()];
            assert!(matches!(
                evaluate(add, &values, &config),
                Err(EngineError::NonContiguousLayout { .. })
            ));
        }
    }

    #[test]
    fn borrowed_values_need_no_copies() {
        let energies = HostValue::from(vec![1.0, 2.0]);
        let code = HostValue::Int(10);
        let out = evaluate(add, [&energies, &code], &CallConfig::zipped("add")).expect("numeric");
        assert_eq!(out, ResultContainer::flat(vec![11.0, 12.0]));
    }

    #[test]
    fn zero_dimensional_array_does_not_broadcast_in_zipped_mode() {
        let single = HostValue::from(ArrayD::from_elem(IxDyn(&[]), 5.0));
        let values = vec![HostValue::from(vec![1.0, 2.0, 3.0]), single];
        assert_eq!(
            evaluate(add, &values, &CallConfig::zipped("add")),
            Err(EngineError::IncompatibleLength {
                argument: 1,
                expected: 3,
                actual: 1,
            })
        );
    }
}
