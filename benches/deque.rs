use criterion::{Criterion, black_box, criterion_group, criterion_main};
use segmented_deque::SegmentedDeque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 256;
    {
        let mut group = c.benchmark_group("VecDeque vs SegmentedDeque (PushBack 256)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("SegmentedDeque<i32>", |b| {
            b.iter(|| {
                let mut d: SegmentedDeque<i32> = SegmentedDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs SegmentedDeque (PushFront 256)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("SegmentedDeque<i32>", |b| {
            b.iter(|| {
                let mut d: SegmentedDeque<i32> = SegmentedDeque::new();
                for i in 0..n {
                    d.push_front(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs SegmentedDeque (Get 256)");
        let mut d_std = VecDeque::new();
        let mut d_seg: SegmentedDeque<i32> = SegmentedDeque::new();
        for i in 0..n {
            d_std.push_back(i as i32);
            d_seg.push_back(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_std.get(black_box(i)));
                }
            })
        });

        group.bench_function("SegmentedDeque<i32>", |b| {
            b.iter(|| {
                for i in 0..n {
                    black_box(d_seg.get(black_box(i)));
                }
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs SegmentedDeque (Iterate 256)");
        let mut d_std = VecDeque::new();
        let mut d_seg: SegmentedDeque<i32> = SegmentedDeque::new();
        for i in 0..n {
            d_std.push_back(i as i32);
            d_seg.push_back(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for v in d_std.iter() {
                    sum += *v as i64;
                }
                black_box(sum)
            })
        });

        group.bench_function("SegmentedDeque<i32>", |b| {
            b.iter(|| {
                let mut sum = 0i64;
                for v in d_seg.iter() {
                    sum += *v as i64;
                }
                black_box(sum)
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
