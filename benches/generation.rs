use criterion::{black_box, criterion_group, criterion_main, Criterion};

use burrow::world::{generate_level, LevelConfig};
use burrow::LevelState;

fn bench_generate_level(c: &mut Criterion) {
    let config = LevelConfig::default();
    c.bench_function("generate_level 80x45", |b| {
        b.iter(|| generate_level(black_box(&config)))
    });

    let dense = LevelConfig {
        width: 200,
        height: 120,
        max_room_attempts: 500,
        ..LevelConfig::default()
    };
    c.bench_function("generate_level 200x120 dense", |b| {
        b.iter(|| generate_level(black_box(&dense)))
    });
}

fn bench_player_walk(c: &mut Criterion) {
    let config = LevelConfig {
        seed: 42,
        ..LevelConfig::default()
    };
    c.bench_function("level setup and walk", |b| {
        b.iter(|| {
            let mut level = LevelState::new(black_box(&config)).ok()?;
            for dir in burrow::Direction::ALL {
                level.move_player(dir);
            }
            Some(level.player_position())
        })
    });
}

criterion_group!(benches, bench_generate_level, bench_player_walk);
criterion_main!(benches);
