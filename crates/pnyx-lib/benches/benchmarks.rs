// ABOUTME: Criterion benchmarks for the pnyx core library
// ABOUTME: Measures rating throughput, stone placement, and issue ranking

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pnyx_lib::ProposalStore;

fn populated_store() -> ProposalStore {
    let store = ProposalStore::with_defaults();
    for s in 0..20 {
        let suggestion = format!("suggestion-{s:02}");
        for v in 0..25 {
            let voter = format!("voter-{v:02}");
            store
                .rate("bench", "issue", &suggestion, &voter, (v % 11) - 5)
                .unwrap();
        }
        store
            .set_stone("bench", "issue", &suggestion, "voter-00")
            .unwrap();
    }
    store
}

fn bench_rate(c: &mut Criterion) {
    c.bench_function("store_rate_100_voters", |b| {
        b.iter(|| {
            let store = ProposalStore::with_defaults();
            for v in 0..100 {
                let voter = format!("voter-{v:03}");
                store
                    .rate("bench", "issue", "suggestion", &voter, (v % 11) - 5)
                    .unwrap();
            }
            black_box(store)
        });
    });
}

fn bench_stone(c: &mut Criterion) {
    let store = populated_store();

    c.bench_function("store_stone_repeat", |b| {
        // Idempotent path: the voter already stoned this suggestion.
        b.iter(|| {
            black_box(
                store
                    .set_stone("bench", "issue", "suggestion-00", "voter-00")
                    .unwrap(),
            )
        });
    });
}

fn bench_ranking(c: &mut Criterion) {
    let store = populated_store();

    c.bench_function("store_rank_20_suggestions", |b| {
        b.iter(|| black_box(store.rank_suggestions("bench", "issue")));
    });

    c.bench_function("store_consensus_winner", |b| {
        b.iter(|| black_box(store.consensus_winner("bench", "issue")));
    });
}

criterion_group!(benches, bench_rate, bench_stone, bench_ranking);
criterion_main!(benches);
