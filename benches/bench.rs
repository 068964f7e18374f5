use std::cmp::Ordering;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use sort_test_tools::patterns;

use comparator_sort::{
    last_digit, merge_sort_by, quick_sort_copy_by, quick_sort_inplace_by,
    quick_sort_inplace_stack_by,
};

const BENCH_SIZES: [usize; 3] = [100, 1_000, 10_000];

fn bench_pattern(
    c: &mut Criterion,
    pattern_name: &str,
    pattern_fn: impl Fn(usize) -> Vec<i32>,
    compare: fn(&i32, &i32) -> Ordering,
) {
    let mut group = c.benchmark_group(pattern_name);

    for size in BENCH_SIZES {
        let input = pattern_fn(size);

        group.bench_with_input(BenchmarkId::new("merge_sort", size), &input, |b, v| {
            b.iter(|| merge_sort_by(black_box(v), compare))
        });

        group.bench_with_input(BenchmarkId::new("quicksort_copying", size), &input, |b, v| {
            b.iter(|| quick_sort_copy_by(black_box(v), compare))
        });

        group.bench_with_input(BenchmarkId::new("quicksort_in_place", size), &input, |b, v| {
            b.iter_batched_ref(
                || v.clone(),
                |v| quick_sort_inplace_by(black_box(v), compare),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(
            BenchmarkId::new("quicksort_in_place_stack", size),
            &input,
            |b, v| {
                b.iter_batched_ref(
                    || v.clone(),
                    |v| quick_sort_inplace_stack_by(black_box(v), compare),
                    BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

fn criterion_benchmark(c: &mut Criterion) {
    // Sorted and all equal inputs are quadratic for both quicksorts, keep them out of here.
    bench_pattern(c, "random", patterns::random, |a, b| a.cmp(b));
    bench_pattern(c, "random_zipf", |size| patterns::random_zipf(size, 1.0), |a, b| a.cmp(b));
    bench_pattern(c, "random_d20", |size| patterns::random_uniform(size, 0..20), |a, b| {
        b.cmp(a)
    });
    bench_pattern(c, "random_last_digit", patterns::random, last_digit);
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
