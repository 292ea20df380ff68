use criterion::{Criterion, criterion_group, criterion_main};
use setviz_rs::api::{VennSeries, VennSeriesConfig};
use setviz_rs::core::{Point, RegionDatum, VennRegionNode};
use std::hint::black_box;

fn synthetic_regions(set_count: usize) -> Vec<VennRegionNode> {
    let mut regions = Vec::new();
    for i in 0..set_count {
        let key = format!("S{i}");
        regions.push(VennRegionNode::new(
            RegionDatum::new(key.clone(), 100.0, [key]),
            "M 0 0",
            Point::new(i as f64, i as f64),
        ));
    }
    for i in 0..set_count {
        for j in (i + 1)..set_count {
            let key = format!("S{i}|S{j}");
            regions.push(VennRegionNode::new(
                RegionDatum::new(key, 10.0, [format!("S{i}"), format!("S{j}")]),
                "M 0 0",
                Point::new(i as f64, j as f64),
            ));
        }
    }
    regions
}

fn bench_activation_scan(c: &mut Criterion) {
    let mut series = VennSeries::new(VennSeriesConfig::new("bench", synthetic_regions(16)));

    c.bench_function("venn_activation_scan_16_sets", |b| {
        b.iter(|| {
            series.pointer_enter(black_box("S3"));
            series.pointer_leave();
        })
    });
}

fn bench_scene_build(c: &mut Criterion) {
    let mut series = VennSeries::new(VennSeriesConfig::new("bench", synthetic_regions(16)));
    series.pointer_enter("S3");

    c.bench_function("venn_scene_build_16_sets", |b| {
        b.iter(|| {
            let scene = series.build_scene();
            black_box(scene);
        })
    });
}

criterion_group!(benches, bench_activation_scan, bench_scene_build);
criterion_main!(benches);
