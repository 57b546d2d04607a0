use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use wayline::coords::{GeoPoint, Vec2};
use wayline::layer::{Compositor, Projector};
use wayline::paint::Color;
use wayline::scene::DrawList;
use wayline::style::{DashStrategy, Polyline};

struct PlaneProjector;

impl Projector for PlaneProjector {
    fn project(&self, p: GeoPoint) -> Vec2 {
        Vec2::new(p.lat as f32, p.lng as f32)
    }

    fn destination(&self, origin: GeoPoint, bearing_deg: f64, meters: f64) -> GeoPoint {
        let rad = bearing_deg.to_radians();
        GeoPoint::new(
            origin.lat + rad.cos() * meters,
            origin.lng + rad.sin() * meters,
        )
    }
}

fn make_lines(n: usize, styles: usize) -> Vec<Polyline> {
    (0..n)
        .map(|i| {
            let base = i as f64 * 10.0;
            let points: Vec<GeoPoint> = (0..32)
                .map(|j| GeoPoint::new(base + j as f64 * 3.0, (j % 5) as f64 * 4.0))
                .collect();
            // Group runs of equal style so batching has something to do.
            let style = (i / 8) % styles;
            Polyline::new(points)
                .with_stroke_width(2.0 + style as f32)
                .with_color(Color::from_rgb8(40 * style as u8, 80, 120))
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render pass");

    group.throughput(Throughput::Elements(512));
    group.bench_function("solid_batched", |b| {
        let lines = make_lines(512, 4);
        let compositor = Compositor::new();
        let mut out = DrawList::new();
        b.iter(|| {
            out.clear();
            compositor.render(black_box(&lines), &PlaneProjector, &mut out);
            black_box(out.len());
        })
    });

    group.throughput(Throughput::Elements(128));
    group.bench_function("dotted", |b| {
        let lines: Vec<Polyline> = make_lines(128, 1).into_iter().map(|l| l.dotted()).collect();
        let compositor = Compositor::new();
        let mut out = DrawList::new();
        b.iter(|| {
            out.clear();
            compositor.render(black_box(&lines), &PlaneProjector, &mut out);
            black_box(out.len());
        })
    });

    group.bench_function("dashed_balanced", |b| {
        let lines: Vec<Polyline> = make_lines(128, 1)
            .into_iter()
            .map(|l| l.dashed(DashStrategy::Balanced, 8.0, 2.0))
            .collect();
        let compositor = Compositor::new();
        let mut out = DrawList::new();
        b.iter(|| {
            out.clear();
            compositor.render(black_box(&lines), &PlaneProjector, &mut out);
            black_box(out.len());
        })
    });

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
