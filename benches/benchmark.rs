use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use pitstop_bot::game_interface::{Building, BuildingKind, MapSnapshot, Pitstop};
use pitstop_bot::geo::LatLng;
use pitstop_bot::router::{PathUpdate, StopRouter};

const CENTER: LatLng = LatLng { lat: 45.5017, lng: -73.5673 };

// Stops scattered uniformly over roughly a 2km x 2km downtown area.
fn make_snapshot(stops: usize) -> MapSnapshot {
    let mut rng = SmallRng::seed_from_u64(42);
    let buildings = (0..stops)
        .map(|i| Building {
            id: format!("stop-{i}"),
            kind: BuildingKind::Stop,
            available: true,
            coords: LatLng {
                lat: CENTER.lat + rng.gen_range(-0.01..0.01),
                lng: CENTER.lng + rng.gen_range(-0.01..0.01),
            },
            pitstop: Some(Pitstop { cooldown: false }),
        })
        .collect();
    MapSnapshot { buildings }
}

fn bench_find_next_target(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_next_target");
    for stops in [100, 1000] {
        let snapshot = make_snapshot(stops);
        let router = StopRouter::new();
        group.bench_with_input(
            BenchmarkId::from_parameter(stops), &snapshot,
            |b, snapshot| b.iter(|| {
                router.find_next_target(&CENTER, Some(snapshot))
            }));
    }
    group.finish();
}

fn bench_full_farm_cycle(c: &mut Criterion) {
    let snapshot = make_snapshot(100);
    c.bench_function("farm_100_stops", |b| b.iter(|| {
        let mut router = StopRouter::new();
        let mut pos = CENTER;
        // Teleporting executor: drain each path in one go.
        while let PathUpdate::NewPath(waypoints) =
            router.check_path(&pos, Some(&snapshot)) {
            pos = *waypoints.last().unwrap();
            router.waypoints_mut().clear();
        }
        assert_eq!(router.visited().len(), 100);
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_find_next_target, bench_full_farm_cycle,
}
criterion_main!(benches);
