use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    BatchSize,
    BenchmarkId,
    Criterion,
    Throughput,
};
use rand::{
    rngs::SmallRng,
    seq::SliceRandom,
    SeedableRng,
};
use skipset::SkipList;

static SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

fn shuffled(size: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(size as u64);
    let mut values = (0..size as u64).collect::<Vec<_>>();
    values.shuffle(&mut rng);
    values
}

fn filled(size: usize) -> SkipList<u64> {
    let mut list = SkipList::with_seed(0);
    list.extend(shuffled(size));
    list
}

pub fn add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for size in SIZES.iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || shuffled(size),
                |values| {
                    let mut list = SkipList::with_seed(0);
                    for value in values {
                        list.add(value);
                    }
                    list
                },
                BatchSize::LargeInput,
            );
        });
    }
}

pub fn contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");
    for size in SIZES.iter() {
        let list = filled(*size);
        let probes = shuffled(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let mut probe = probes.iter().cycle();
            b.iter(|| list.contains(black_box(probe.next().unwrap_or(&0))));
        });
    }
}

pub fn remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    for size in SIZES.iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter_batched(
                || (filled(size), shuffled(size)),
                |(mut list, values)| {
                    for value in values.iter() {
                        list.remove(value);
                    }
                    list
                },
                BatchSize::LargeInput,
            );
        });
    }
}

pub fn iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");
    for size in SIZES.iter() {
        let list = filled(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| list.iter().copied().sum::<u64>());
        });
    }
}

criterion_group!(benches, add, contains, remove, iter);
criterion_main!(benches);
