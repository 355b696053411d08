//! Benchmarks for index building and querying
//!
//! Run with: cargo bench --package engine
//!
//! Uses a synthetic catalog so the bench has no dataset dependency.

use catalog::{Catalog, Movie};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use engine::Recommender;

/// Generate a deterministic synthetic catalog of `size` movies.
///
/// Tags cycle through a fixed word pool so movies share vocabulary the way
/// real tag documents do.
fn synthetic_catalog(size: usize) -> Catalog {
    let pool = [
        "space", "war", "romance", "drama", "alien", "heist", "detective", "comedy", "robot",
        "kingdom", "ocean", "desert", "vampire", "samurai", "pilot", "spy",
    ];

    let movies = (0..size)
        .map(|i| {
            let tags: Vec<&str> = (0..12).map(|k| pool[(i * 7 + k * 3) % pool.len()]).collect();
            Movie {
                id: i as u32 + 1,
                title: format!("Movie {}", i + 1),
                tags: tags.join(" "),
            }
        })
        .collect();

    Catalog::from_movies(movies)
}

fn bench_build_index(c: &mut Criterion) {
    let catalog = synthetic_catalog(1000);

    c.bench_function("build_index_1000", |b| {
        b.iter(|| {
            let recommender = Recommender::build(black_box(catalog.clone())).unwrap();
            black_box(recommender)
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let recommender = Recommender::build(synthetic_catalog(1000)).unwrap();

    c.bench_function("recommend_top_5", |b| {
        b.iter(|| {
            let recs = recommender.recommend(black_box("Movie 500"), black_box(5)).unwrap();
            black_box(recs)
        })
    });
}

criterion_group!(benches, bench_build_index, bench_recommend);
criterion_main!(benches);
