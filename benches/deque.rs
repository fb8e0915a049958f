use criterion::{Criterion, black_box, criterion_group, criterion_main};
use linear_collections::Deque;
use std::collections::VecDeque;

fn bench_deque(c: &mut Criterion) {
    let n = 1024;
    {
        let mut group = c.benchmark_group("VecDeque vs Deque (PushBack 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });

        group.bench_function("Deque<i32>", |b| {
            b.iter(|| {
                let mut d: Deque<i32> = Deque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                d
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs Deque (Alternating ends 1024)");
        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        d.push_back(black_box(i as i32));
                    } else {
                        d.push_front(black_box(i as i32));
                    }
                }
                while let Some(v) = d.pop_front() {
                    black_box(v);
                }
            })
        });

        group.bench_function("Deque<i32>", |b| {
            b.iter(|| {
                let mut d: Deque<i32> = Deque::new();
                for i in 0..n {
                    if i % 2 == 0 {
                        d.push_back(black_box(i as i32));
                    } else {
                        d.push_front(black_box(i as i32));
                    }
                }
                while let Some(v) = d.pop_front() {
                    black_box(v);
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_deque);
criterion_main!(benches);
