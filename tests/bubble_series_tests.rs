use setviz_rs::api::{BubbleSeries, BubbleSeriesConfig};
use setviz_rs::core::{
    BubbleNode, CYBERTRON, CirclePlacement, ColorScheme, SeriesDatum, TransitionConfig,
};
use setviz_rs::render::SceneElement;

fn node(key: &str, x: f64, y: f64, radius: f64, value: f64) -> BubbleNode {
    BubbleNode::new(CirclePlacement::new(x, y, radius), SeriesDatum::new(key, value))
}

fn two_node_series() -> BubbleSeries {
    let data = vec![node("x", 10.0, 10.0, 8.0, 4.0), node("y", 30.0, 12.0, 5.0, 2.0)];
    BubbleSeries::new(BubbleSeriesConfig::new("bubbles", data))
}

#[test]
fn one_group_per_node_with_bubble_and_label() {
    let scene = two_node_series().build_scene();

    assert_eq!(scene.groups.len(), 2);
    assert_eq!(scene.groups[0].key.as_deref(), Some("x"));
    assert_eq!(scene.groups[1].key.as_deref(), Some("y"));

    for group in &scene.groups {
        assert_eq!(group.elements.len(), 2);
        assert!(matches!(group.elements[0], SceneElement::Bubble(_)));
        assert!(matches!(group.elements[1], SceneElement::Label(_)));
    }
}

#[test]
fn element_ids_are_prefixed_with_the_series_id() {
    let scene = two_node_series().build_scene();

    let SceneElement::Bubble(bubble) = &scene.groups[0].elements[0] else {
        panic!("expected bubble element");
    };
    let SceneElement::Label(label) = &scene.groups[0].elements[1] else {
        panic!("expected label element");
    };
    assert_eq!(bubble.id, "bubbles-bubble");
    assert_eq!(label.id, "bubbles-label");
}

#[test]
fn fills_follow_input_order() {
    let scene = two_node_series().build_scene();

    let fills: Vec<_> = scene
        .groups
        .iter()
        .filter_map(|group| match &group.elements[0] {
            SceneElement::Bubble(bubble) => Some(bubble.fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills, vec![CYBERTRON[0], CYBERTRON[1]]);
}

#[test]
fn entrance_motion_pops_from_half_scale() {
    let scene = two_node_series().build_scene();

    let motion = scene.groups[0].motion;
    assert_eq!(motion.initial.scale, 0.5);
    assert_eq!(motion.initial.opacity, 0.0);
    assert_eq!(motion.animate.scale, 1.0);
    assert_eq!(motion.animate.opacity, 1.0);
    assert_eq!(motion.transition, TransitionConfig::EngineDefaults);
}

#[test]
fn disabling_animation_reaches_every_leaf() {
    let data = vec![node("x", 1.0, 1.0, 1.0, 1.0)];
    let config = BubbleSeriesConfig::new("b", data).with_animated(false);
    let scene = BubbleSeries::new(config).build_scene();

    assert_eq!(scene.groups[0].motion.transition, TransitionConfig::Disabled);
    for element in &scene.groups[0].elements {
        match element {
            SceneElement::Bubble(bubble) => assert!(!bubble.animated),
            SceneElement::Label(label) => assert!(!label.animated),
            other => panic!("unexpected element: {other:?}"),
        }
    }
}

#[test]
fn duplicate_keys_do_not_crash() {
    let data = vec![node("dup", 0.0, 0.0, 1.0, 1.0), node("dup", 5.0, 5.0, 2.0, 2.0)];
    let scene = BubbleSeries::new(BubbleSeriesConfig::new("b", data)).build_scene();

    assert_eq!(scene.groups.len(), 2);
    assert_eq!(scene.groups[0].key.as_deref(), Some("dup"));
    assert_eq!(scene.groups[1].key.as_deref(), Some("dup"));
}

#[test]
fn keyless_node_gets_value_label_and_no_group_key() {
    let data = vec![BubbleNode::new(
        CirclePlacement::new(0.0, 0.0, 3.0),
        SeriesDatum::keyless(7.0),
    )];
    let scene = BubbleSeries::new(BubbleSeriesConfig::new("b", data)).build_scene();

    assert_eq!(scene.groups[0].key, None);
    let SceneElement::Label(label) = &scene.groups[0].elements[1] else {
        panic!("expected label element");
    };
    assert_eq!(label.text, "7");
}

#[test]
fn value_label_text_keeps_precision_outside_integer_range() {
    use setviz_rs::core::format_value;

    assert_eq!(format_value(None, 7.0), "7");
    assert_eq!(format_value(None, 2.5), "2.5");
    assert_eq!(format_value(Some("named"), 7.0), "named");
    // Whole numbers beyond i64 range must not saturate to i64::MAX.
    assert_eq!(format_value(None, 1e19), "10000000000000000000");
    assert_eq!(format_value(None, -1e19), "-10000000000000000000");
}

#[test]
fn custom_scheme_changes_fills() {
    let data = vec![node("x", 1.0, 1.0, 1.0, 1.0)];
    let config =
        BubbleSeriesConfig::new("b", data).with_color_scheme(ColorScheme::from_identifier("pastel"));
    let scene = BubbleSeries::new(config).build_scene();

    let SceneElement::Bubble(bubble) = &scene.groups[0].elements[0] else {
        panic!("expected bubble element");
    };
    assert_eq!(bubble.fill, setviz_rs::core::PASTEL[0]);
}
