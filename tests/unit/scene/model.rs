use super::*;
use serde_json::json;

#[test]
fn property_value_is_untagged() {
    let v: PropertyValue = serde_json::from_value(json!(0.5)).unwrap();
    assert_eq!(v, PropertyValue::Number(0.5));
    let v: PropertyValue = serde_json::from_value(json!("red")).unwrap();
    assert_eq!(v, PropertyValue::Text("red".to_owned()));
    assert_eq!(
        serde_json::to_value(PropertyValue::from(2.0)).unwrap(),
        json!(2.0)
    );
}

#[test]
fn property_value_text_coercion() {
    assert_eq!(PropertyValue::Number(1.0).to_text(), "1");
    assert_eq!(PropertyValue::Number(0.25).to_text(), "0.25");
    assert_eq!(PropertyValue::from("a").to_text(), "a");
    assert_eq!(PropertyValue::Number(3.0).as_number(), Some(3.0));
    assert_eq!(PropertyValue::from("x").as_number(), None);
}

#[test]
fn phase_wire_names() {
    for (phase, name) in [(Phase::In, "in"), (Phase::Loop, "loop"), (Phase::Out, "out")] {
        assert_eq!(serde_json::to_value(phase).unwrap(), json!(name));
        assert_eq!(name.parse::<Phase>().unwrap(), phase);
        assert_eq!(phase.to_string(), name);
    }
    assert!("entry".parse::<Phase>().is_err());
}

#[test]
fn animation_defaults_when_fields_missing() {
    let a: Animation = serde_json::from_value(json!({
        "id": "a0",
        "element_id": "e0",
        "phase": "loop",
        "duration_ms": 1500.0
    }))
    .unwrap();
    assert_eq!(a.delay_ms, 0.0);
    assert_eq!(a.easing, "linear");
    assert_eq!(a.template_id, None);
}

#[test]
fn resolve_overlays_animated_values_on_defaults() {
    let mut el = Element::new("e0");
    el.defaults.insert("opacity".to_owned(), 1.0.into());
    el.defaults.insert("width".to_owned(), 120.0.into());

    let mut animated = PropertyMap::new();
    animated.insert("opacity".to_owned(), 0.4.into());
    animated.insert("transform".to_owned(), "scale(2)".into());

    let out = el.resolve(&animated);
    assert_eq!(out["opacity"], PropertyValue::Number(0.4));
    assert_eq!(out["width"], PropertyValue::Number(120.0));
    assert_eq!(out["transform"], PropertyValue::from("scale(2)"));
}

#[test]
fn keyframe_builder_sets_properties() {
    let k = Keyframe::new("k0", "a0", 250.0)
        .with("opacity", 0.0)
        .with("fill", "#fff");
    assert_eq!(k.properties.len(), 2);
    assert_eq!(k.properties["fill"], PropertyValue::from("#fff"));
}
