use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use dynarray::DynArray;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;

const COUNT: usize = 1 << 16;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("push-dynarray", |b| {
        b.iter(|| {
            let mut array = DynArray::new();
            for i in 0..COUNT {
                array.push(black_box(i));
            }
            array
        })
    });

    c.bench_function("push-vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..COUNT {
                vec.push(black_box(i));
            }
            vec
        })
    });

    let mut rng = StdRng::seed_from_u64(42);
    let positions: Vec<usize> = (0..1024).map(|i| rng.random_range(0..=i)).collect();

    c.bench_function("insert-dynarray", |b| {
        b.iter_batched(
            || DynArray::with_capacity(positions.len()),
            |mut array| {
                for (value, &index) in positions.iter().enumerate() {
                    array.insert(index, value);
                }
                array
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("insert-vec", |b| {
        b.iter_batched(
            || Vec::with_capacity(positions.len()),
            |mut vec| {
                for (value, &index) in positions.iter().enumerate() {
                    vec.insert(index, value);
                }
                vec
            },
            BatchSize::SmallInput,
        )
    });

    let strings: Vec<String> = (0..1024).map(|i| i.to_string()).collect();
    let source: DynArray<String> = strings.iter().cloned().collect();

    c.bench_function("clone-from-dynarray", |b| {
        let mut target = DynArray::with_capacity(strings.len());
        b.iter(|| target.clone_from(black_box(&source)))
    });

    c.bench_function("clone-from-vec", |b| {
        let mut target = Vec::with_capacity(strings.len());
        b.iter(|| target.clone_from(black_box(&strings)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
