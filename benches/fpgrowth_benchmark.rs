use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fp_rule_miner::FpTree;

const ITEMS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn ranking() -> Vec<String> {
    ITEMS.iter().map(|s| s.to_string()).collect()
}

fn create_test_transactions(count: usize) -> Vec<Vec<String>> {
    let mut transactions = Vec::new();

    for i in 0..count {
        let num_items = (i % 5) + 2; // 2-6 items per transaction
        let tx_items: Vec<String> = ITEMS
            .iter()
            .take(num_items)
            .map(|s| s.to_string())
            .collect();

        transactions.push(tx_items);
    }

    transactions
}

fn bench_mine_100(c: &mut Criterion) {
    c.bench_function("fpgrowth_100_transactions", |b| {
        let transactions = create_test_transactions(100);

        b.iter(|| {
            let mut tree = FpTree::new(ranking()).unwrap();
            for tx in &transactions {
                tree.insert(tx).unwrap();
            }
            black_box(tree.association_rules().unwrap())
        });
    });
}

fn bench_mine_1k(c: &mut Criterion) {
    c.bench_function("fpgrowth_1k_transactions", |b| {
        let transactions = create_test_transactions(1000);

        b.iter(|| {
            let mut tree = FpTree::new(ranking()).unwrap();
            for tx in &transactions {
                tree.insert(tx).unwrap();
            }
            black_box(tree.association_rules().unwrap())
        });
    });
}

fn bench_insert_only_1k(c: &mut Criterion) {
    c.bench_function("insert_1k_transactions", |b| {
        let transactions = create_test_transactions(1000);

        b.iter(|| {
            let mut tree = FpTree::new(ranking()).unwrap();
            for tx in &transactions {
                tree.insert(tx).unwrap();
            }
            black_box(tree.transaction_count())
        });
    });
}

criterion_group!(benches, bench_mine_100, bench_insert_only_1k, bench_mine_1k);
criterion_main!(benches);
