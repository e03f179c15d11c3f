//! Benchmark ray tracing and map update performance.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use shatkona::grid::{TracerConfig, trace_cells};
use shatkona::{GridConfig, HexCell, HexLayout, HexOccupancyMap, MapConfig, Pose2D, Ray, SensorSweep};

/// Sweep from the middle of a square map with every ray hitting at `range`.
fn center_sweep(layout: &HexLayout, size: usize, num_rays: usize, range: f32) -> SensorSweep {
    let mid = (size / 2) as i32;
    let center = layout.cell_center(HexCell::new(mid, mid));
    let pose = Pose2D::new(center.x + 0.05, center.y - 0.03, 0.01);
    let readings = vec![(range, true); num_rays];
    SensorSweep::from_readings(pose, range * 2.0, &readings)
}

fn bench_single_ray(c: &mut Criterion) {
    let layout = HexLayout::new(1.0);
    let config = TracerConfig::default();
    let mut group = c.benchmark_group("trace_cells");

    for cells in [5, 20, 60] {
        let ray = Ray::from_endpoints(
            layout.cell_center(HexCell::new(0, 0)),
            layout.cell_center(HexCell::new(cells, cells / 2)),
            true,
        );
        group.bench_with_input(BenchmarkId::from_parameter(cells), &ray, |b, ray| {
            b.iter(|| trace_cells(&layout, black_box(ray), &config))
        });
    }

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("observe_sweep");

    for num_rays in [12, 90, 360] {
        let config = MapConfig {
            grid: GridConfig::new(100, 100, 0.25),
            ..Default::default()
        };
        let Ok(mut map) = HexOccupancyMap::new(config) else {
            continue;
        };
        let sweep = center_sweep(map.layout(), 100, num_rays, 8.0);

        group.bench_with_input(BenchmarkId::from_parameter(num_rays), &sweep, |b, sweep| {
            b.iter(|| map.observe_sweep(black_box(sweep)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_ray, bench_sweep);
criterion_main!(benches);
