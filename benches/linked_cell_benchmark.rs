use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linkcell::{BrandedLinkedCell, GhostToken, LinkedCell};
use std::cell::RefCell;
use std::rc::Rc;

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");

    group.bench_function("linked_cell_get_set", |b| {
        let x = LinkedCell::new(0u64);
        let y = LinkedCell::linked_to(&x);
        b.iter(|| {
            y.set(black_box(x.get() + 1));
        });
    });

    group.bench_function("rc_refcell_get_set", |b| {
        let x = Rc::new(RefCell::new(0u64));
        let y = Rc::clone(&x);
        b.iter(|| {
            let next = *x.borrow() + 1;
            *y.borrow_mut() = black_box(next);
        });
    });

    group.bench_function("branded_linked_cell_get_set", |b| {
        GhostToken::new(|mut token| {
            let x = BrandedLinkedCell::new(0u64);
            let y = BrandedLinkedCell::linked_to(&x);
            b.iter(|| {
                let next = x.get(&token) + 1;
                y.set(&mut token, black_box(next));
            });
        });
    });

    group.finish();
}

fn bench_relink(c: &mut Criterion) {
    let mut group = c.benchmark_group("relink");

    for size in [1usize, 16, 256] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("link_then_unlink", size), &size, |b, &size| {
            let anchor = LinkedCell::new([0u8; 32]);
            let mut cells: Vec<_> = (0..size).map(|_| LinkedCell::default()).collect();
            b.iter(|| {
                for cell in &mut cells {
                    cell.link_with(&anchor);
                }
                for cell in &mut cells {
                    cell.remove_links();
                }
                black_box(anchor.link_count());
            });
        });
    }

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    c.bench_function("copy_from_large_group", |b| {
        let anchor = LinkedCell::new(vec![0.5f64; 8]);
        let _peers: Vec<_> = (0..64).map(|_| LinkedCell::linked_to(&anchor)).collect();
        b.iter(|| black_box(anchor.clone()));
    });
}

criterion_group!(benches, bench_access, bench_relink, bench_copy);
criterion_main!(benches);
