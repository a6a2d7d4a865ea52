use super::*;

fn text(s: &str) -> PropertyValue {
    PropertyValue::from(s)
}

#[test]
fn numbers_blend_linearly() {
    assert_eq!(interpolate_number(0.0, 100.0, 0.5), 50.0);
    assert_eq!(interpolate_number(10.0, -10.0, 0.25), 5.0);
    assert_eq!(
        interpolate_value("x", &PropertyValue::Number(0.0), &PropertyValue::Number(8.0), 0.75),
        PropertyValue::Number(6.0)
    );
}

#[test]
fn numbers_extrapolate_with_overshooting_progress() {
    // elastic easing hands progress > 1 to the interpolator.
    assert!((interpolate_number(0.0, 10.0, 1.2) - 12.0).abs() < 1e-9);
}

#[test]
fn color_by_property_name() {
    assert_eq!(
        interpolate_value("fill", &text("rgb(255,0,0)"), &text("rgb(0,0,255)"), 0.5),
        text("rgb(128,0,128)")
    );
}

#[test]
fn color_by_value_shape() {
    assert_eq!(
        interpolate_value("highlight", &text("#000000"), &text("#ffffff"), 0.5),
        text("rgb(128,128,128)")
    );
}

#[test]
fn unparseable_color_snaps_as_text() {
    let from = text("red");
    let to = text("var(--accent)");
    assert_eq!(interpolate_value("color", &from, &to, 0.49), text("red"));
    assert_eq!(
        interpolate_value("color", &from, &to, 0.5),
        text("var(--accent)")
    );
}

#[test]
fn transform_by_property_name_and_shape() {
    assert_eq!(
        interpolate_value(
            "transform",
            &text("translateX(0px)"),
            &text("translateX(100px)"),
            0.25
        ),
        text("translateX(25px)")
    );
    assert_eq!(
        interpolate_value("motion", &text("scale(1)"), &text("scale(2)"), 0.5),
        text("scale(1.5)")
    );
}

#[test]
fn malformed_transform_snaps() {
    let from = text("translateX(0px)");
    let to = text("translateX(");
    assert_eq!(interpolate_value("transform", &from, &to, 0.2), from);
    assert_eq!(interpolate_value("transform", &from, &to, 0.8), to);
}

#[test]
fn opaque_and_mixed_values_snap() {
    let a = text("Hello");
    let b = text("World");
    assert_eq!(interpolate_value("label", &a, &b, 0.3), a);
    assert_eq!(interpolate_value("label", &a, &b, 0.5), b);

    let n = PropertyValue::Number(1.0);
    assert_eq!(interpolate_value("opacity", &n, &b, 0.1), n);
    assert_eq!(interpolate_value("opacity", &n, &b, 0.9), b);
}

#[test]
fn aliases_are_static() {
    assert_eq!(output_property_name("fill"), "backgroundColor");
    assert_eq!(output_property_name("stroke"), "borderColor");
    assert_eq!(output_property_name("strokeWidth"), "borderWidth");
    assert_eq!(output_property_name("opacity"), "opacity");
}
