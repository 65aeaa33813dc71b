use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vec_llist::{DoublyLinkedList, DynamicArray};

fn bench_push_std(c: &mut Criterion) {
    c.bench_function("std_vec_push", |b| {
        b.iter(|| {
            let mut v = Vec::with_capacity(1);
            for i in 0..1000 {
                v.push(black_box(i));
            }
            v
        })
    });
}

fn bench_push_array(c: &mut Criterion) {
    c.bench_function("dynamic_array_push", |b| {
        b.iter(|| {
            let mut v = DynamicArray::with_capacity(1).unwrap();
            for i in 0..1000 {
                v.push(black_box(i)).unwrap();
            }
            v
        })
    });
}

fn bench_push_pop_boundary(c: &mut Criterion) {
    // Alternating at a growth boundary; hysteresis must keep this allocation free.
    let mut v = DynamicArray::with_capacity(512).unwrap();
    for i in 0..512 {
        v.push(i).unwrap();
    }

    c.bench_function("dynamic_array_push_pop_boundary", |b| {
        b.iter(|| {
            v.push(black_box(1)).unwrap();
            black_box(v.pop().unwrap())
        })
    });
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    for size in [100, 1000] {
        group.bench_with_input(BenchmarkId::new("dynamic_array", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = DynamicArray::with_capacity(1).unwrap();
                for i in 0..size {
                    v.insert(0, black_box(i)).unwrap();
                }
                v
            })
        });
        group.bench_with_input(BenchmarkId::new("linked_list", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = DoublyLinkedList::new();
                for i in 0..size {
                    list.insert(0, black_box(i));
                }
                list
            })
        });
    }
    group.finish();
}

fn bench_list_get(c: &mut Criterion) {
    let list: DoublyLinkedList = (0..1000).collect();

    c.bench_function("linked_list_get_near_tail", |b| {
        b.iter(|| black_box(list.get(black_box(990))))
    });
    c.bench_function("linked_list_get_middle", |b| {
        b.iter(|| black_box(list.get(black_box(500))))
    });
}

criterion_group!(
    benches,
    bench_push_std,
    bench_push_array,
    bench_push_pop_boundary,
    bench_insert_front,
    bench_list_get
);
criterion_main!(benches);
