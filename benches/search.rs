use criterion::{criterion_group, criterion_main, Criterion};
use rust_push::core::{Board, Player};
use rust_push::rules::{History, PushRules};
use rust_push::search::{AlphaBeta, Minimax};
use std::hint::black_box;

fn corpus() -> Vec<Board> {
    ["....\n....\n....\n....", "XO..\n.X..\n..O.\n....", "XXO.\nO.X.\n.OX.\nX..O"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let rules = PushRules::with_board_size(4);
    let history = History::new();
    let boards = corpus();

    c.bench_function("minimax/ply3", |bch| {
        bch.iter(|| {
            for b in &boards {
                black_box(Minimax::new(&rules, &history, 3).search(b, Player::X));
            }
        })
    });

    c.bench_function("alphabeta/ply3", |bch| {
        bch.iter(|| {
            for b in &boards {
                black_box(AlphaBeta::new(&rules, &history, 3).search(b, Player::X));
            }
        })
    });
}

fn bench_engine(c: &mut Criterion) {
    let boards = corpus();
    c.bench_function("board/count_straights", |bch| {
        bch.iter(|| {
            let mut acc = 0u32;
            for b in &boards {
                acc += b.count_straights()[Player::X];
            }
            black_box(acc)
        })
    });
}

criterion_group!(search, bench_search, bench_engine);
criterion_main!(search);
