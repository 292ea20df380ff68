use setviz_rs::api::{BubbleSeries, BubbleSeriesConfig, VennSeries, VennSeriesConfig};
use setviz_rs::core::{BubbleNode, CirclePlacement, Point, RegionDatum, SeriesDatum, VennRegionNode};
use setviz_rs::render::{NullRenderer, Scene, SceneRenderer};

fn bubble(key: &str, radius: f64) -> BubbleNode {
    BubbleNode::new(CirclePlacement::new(1.0, 2.0, radius), SeriesDatum::new(key, 1.0))
}

#[test]
fn null_renderer_counts_groups_and_elements() {
    let scene = BubbleSeries::new(BubbleSeriesConfig::new(
        "b",
        vec![bubble("x", 3.0), bubble("y", 4.0)],
    ))
    .build_scene();

    let mut renderer = NullRenderer::default();
    renderer.render(&scene).expect("valid scene");
    assert_eq!(renderer.last_group_count, 2);
    assert_eq!(renderer.last_element_count, 4);
}

#[test]
fn scene_build_is_total_but_validation_catches_bad_geometry() {
    // Coordinators pass layout output through untouched, so a broken
    // placement surfaces at the validation gate, not as a build failure.
    let scene = BubbleSeries::new(BubbleSeriesConfig::new("b", vec![bubble("x", f64::NAN)]))
        .build_scene();

    assert_eq!(scene.groups.len(), 1);
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&scene).is_err());
}

#[test]
fn empty_series_produces_an_empty_valid_scene() {
    let scene = VennSeries::new(VennSeriesConfig::new("venn", Vec::new())).build_scene();

    assert!(scene.is_empty());
    scene.validate().expect("empty scene is valid");
}

#[test]
fn scene_serde_round_trip() {
    let data = vec![VennRegionNode::new(
        RegionDatum::new("A", 10.0, ["A"]),
        "M 0 0",
        Point::new(1.0, 1.0),
    )];
    let scene = VennSeries::new(VennSeriesConfig::new("venn", data)).build_scene();

    let json = serde_json::to_string(&scene).expect("serialize scene");
    let decoded: Scene = serde_json::from_str(&json).expect("deserialize scene");
    assert_eq!(decoded, scene);
}
