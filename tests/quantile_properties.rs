//! Property tests for quantile selection

mod common;

use common::{create_cpu_client, quantile_of, sorted_valid};
use proptest::prelude::*;
use quantr::column::{Column, NullOrder, Order, Table};
use quantr::ops::SortingOps;
use quantr::quantile::{Interpolation, QuantileIndex, Scalar};
use quantr::runtime::cpu::CpuRuntime;

fn any_interpolation() -> impl Strategy<Value = Interpolation> {
    prop::sample::select(Interpolation::ALL.to_vec())
}

fn any_order() -> impl Strategy<Value = Order> {
    prop_oneof![Just(Order::Ascending), Just(Order::Descending)]
}

fn any_null_order() -> impl Strategy<Value = NullOrder> {
    prop_oneof![Just(NullOrder::Before), Just(NullOrder::After)]
}

fn nullable_values() -> impl Strategy<Value = Vec<Option<i32>>> {
    prop::collection::vec(prop::option::weighted(0.8, -1000i32..1000), 0..48)
}

fn to_f64(values: &[Option<i32>]) -> Vec<Option<f64>> {
    values.iter().map(|v| v.map(f64::from)).collect()
}

fn table_of(values: &[Option<i32>]) -> Table<CpuRuntime> {
    let (_, device) = create_cpu_client();
    Table::from_column(Column::from_options(values, &device).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn single_element_is_returned_verbatim(
        value in any::<i32>(),
        q in 0.0f64..=1.0,
        method in any_interpolation(),
        is_sorted in any::<bool>(),
        order in any_order(),
        null_order in any_null_order(),
    ) {
        let (client, _) = create_cpu_client();
        let table = table_of(&[Some(value)]);
        let result = quantile_of(&client, &table, q, method, is_sorted, order, null_order);
        prop_assert_eq!(result, Scalar::valid(f64::from(value)));
    }

    #[test]
    fn all_null_columns_yield_invalid_zero(
        len in 0usize..20,
        q in -1.0f64..=2.0,
        method in any_interpolation(),
        is_sorted in any::<bool>(),
        null_order in any_null_order(),
    ) {
        let (client, _) = create_cpu_client();
        let table = table_of(&vec![None; len]);
        let result = quantile_of(&client, &table, q, method, is_sorted, Order::Ascending, null_order);
        prop_assert_eq!(result, Scalar::null());
    }

    #[test]
    fn boundary_quantiles_are_sorted_ends(
        values in nullable_values(),
        order in any_order(),
        null_order in any_null_order(),
    ) {
        let sorted = sorted_valid(&to_f64(&values), order);
        prop_assume!(!sorted.is_empty());

        let (client, _) = create_cpu_client();
        let table = table_of(&values);
        let min = quantile_of(&client, &table, 0.0, Interpolation::Linear, false, order, null_order);
        let max = quantile_of(&client, &table, 1.0, Interpolation::Linear, false, order, null_order);
        prop_assert_eq!(min, Scalar::valid(sorted[0]));
        prop_assert_eq!(max, Scalar::valid(sorted[sorted.len() - 1]));
    }

    #[test]
    fn selection_follows_quantile_index(
        values in nullable_values(),
        q in 0.0f64..=1.0,
        order in any_order(),
        null_order in any_null_order(),
    ) {
        let sorted = sorted_valid(&to_f64(&values), order);
        prop_assume!(sorted.len() > 1);
        let index = QuantileIndex::new(sorted.len(), q);
        let (a, b) = (sorted[index.lower_bound], sorted[index.upper_bound]);

        let (client, _) = create_cpu_client();
        let table = table_of(&values);
        let at = |method: Interpolation| quantile_of(&client, &table, q, method, false, order, null_order);

        prop_assert_eq!(at(Interpolation::Lower), Scalar::valid(a));
        prop_assert_eq!(at(Interpolation::Higher), Scalar::valid(b));
        prop_assert_eq!(at(Interpolation::Nearest), Scalar::valid(sorted[index.nearest]));
        prop_assert!(index.nearest.abs_diff(index.lower_bound) <= 1);
        prop_assert!(index.nearest.abs_diff(index.upper_bound) <= 1);

        let linear = at(Interpolation::Linear).value;
        prop_assert!(linear >= a.min(b) && linear <= a.max(b), "{} outside [{}, {}]", linear, a, b);
        prop_assert_eq!(at(Interpolation::Midpoint), Scalar::valid((a + b) / 2.0));
    }

    #[test]
    fn presorted_path_matches_sort_path(
        values in nullable_values(),
        q in 0.0f64..=1.0,
        method in any_interpolation(),
        order in any_order(),
        null_order in any_null_order(),
    ) {
        let (client, _) = create_cpu_client();
        let table = table_of(&values);
        let permutation = client.sorted_order(&table, &[order], &[null_order]).unwrap();
        let sorted = client.gather(&table, &permutation).unwrap();

        let unsorted = quantile_of(&client, &table, q, method, false, order, null_order);
        let presorted = quantile_of(&client, &sorted, q, method, true, order, null_order);
        prop_assert_eq!(unsorted, presorted);
    }

    #[test]
    fn linear_at_half_between_two_values_is_midpoint(
        a in -100_000i32..100_000,
        b in -100_000i32..100_000,
    ) {
        let (client, _) = create_cpu_client();
        let table = table_of(&[Some(a), Some(b)]);
        let linear = quantile_of(&client, &table, 0.5, Interpolation::Linear, false, Order::Ascending, NullOrder::After);
        let midpoint = quantile_of(&client, &table, 0.5, Interpolation::Midpoint, false, Order::Ascending, NullOrder::After);
        prop_assert_eq!(linear, midpoint);
    }
}
