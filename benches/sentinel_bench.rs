use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slot_sentinel::{AtomicSlotKey, ProbeStep, Sentinels};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// Roughly one slot in eight empty and one in eight erased.
fn slot_keys(s: &Sentinels<u64, u64>, n: usize) -> Vec<u64> {
    lcg(3)
        .take(n)
        .map(|x| match x >> 61 {
            0 => s.empty_key(),
            1 => s.erased_key(),
            _ => x >> 8,
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let s: Sentinels<u64, u64> = Sentinels::reserved();
    let keys = slot_keys(&s, 4096);
    c.bench_function("classify_4k", |b| {
        b.iter(|| {
            for &k in &keys {
                black_box(s.classify(black_box(k)));
            }
        })
    });
}

fn bench_probe_for_find(c: &mut Criterion) {
    let s: Sentinels<u64, u64> = Sentinels::reserved();
    let keys = slot_keys(&s, 4096);
    c.bench_function("probe_for_find_4k", |b| {
        b.iter(|| {
            let mut stops = 0usize;
            for &k in &keys {
                if s.probe_for_find(black_box(42), k) == ProbeStep::Stop {
                    stops += 1;
                }
            }
            black_box(stops)
        })
    });
}

fn bench_claim_erase(c: &mut Criterion) {
    let s: Sentinels<u64, u64> = Sentinels::reserved();
    let slot = AtomicSlotKey::empty(&s);
    c.bench_function("claim_erase_cycle", |b| {
        b.iter(|| {
            slot.try_claim(&s, black_box(7)).unwrap();
            slot.try_erase(&s, black_box(7)).unwrap();
        })
    });
}

criterion_group!(benches, bench_classify, bench_probe_for_find, bench_claim_erase);
criterion_main!(benches);
