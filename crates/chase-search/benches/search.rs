use chase_core::{Level, Location};
use chase_search::{RouteKind, RouteQuery, Searcher};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn open_level(size: usize) -> Level {
    let row = ".".repeat(size);
    let layout = vec![row; size].join("\n");
    Level::parse(&layout).expect("layout")
}

fn bench_search(c: &mut Criterion) {
    let level = open_level(32);
    let searcher = Searcher::new();
    let path = RouteQuery::new(
        Location::new(0, 0),
        RouteKind::Path {
            dest: Location::new(20, 20),
        },
    );
    let flee = RouteQuery::new(
        Location::new(16, 16),
        RouteKind::Flee {
            origin: Location::new(16, 16),
            from: Location::new(16, 15),
            max_dist: 10,
        },
    );

    c.bench_function("chase-search/route(path, 32x32)", |b| {
        b.iter(|| black_box(searcher.route(&level, &path).len()))
    });
    c.bench_function("chase-search/route(flee, 32x32)", |b| {
        b.iter(|| black_box(searcher.route(&level, &flee).len()))
    });
    c.bench_function("chase-search/footprint(depth=3)", |b| {
        b.iter(|| black_box(searcher.footprint(&level, Location::new(16, 16), 3).len()))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
