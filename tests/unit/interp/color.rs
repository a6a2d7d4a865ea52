use super::*;

#[test]
fn parses_hex_forms() {
    assert_eq!(parse_color("#ff0000"), Some(Rgba::rgb(255, 0, 0)));
    assert_eq!(parse_color("#0F0"), Some(Rgba::rgb(0, 255, 0)));
    let c = parse_color("#0000ff80").unwrap();
    assert_eq!((c.r, c.g, c.b), (0, 0, 255));
    assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
}

#[test]
fn rejects_bad_hex() {
    assert_eq!(parse_color("#ff00"), None);
    assert_eq!(parse_color("#gggggg"), None);
    assert_eq!(parse_color("#"), None);
}

#[test]
fn parses_rgb_functions() {
    assert_eq!(parse_color("rgb(255, 0, 0)"), Some(Rgba::rgb(255, 0, 0)));
    assert_eq!(parse_color("RGB(1,2,3)"), Some(Rgba::rgb(1, 2, 3)));
    assert_eq!(
        parse_color("rgba(10,20,30,0.5)"),
        Some(Rgba {
            r: 10,
            g: 20,
            b: 30,
            a: 0.5
        })
    );
    assert_eq!(parse_color("rgb(1,2)"), None);
    assert_eq!(parse_color("rgb(a,b,c)"), None);
    assert_eq!(parse_color("rgb(1,2,3"), None);
}

#[test]
fn resolves_named_colors() {
    assert_eq!(parse_color("red"), Some(Rgba::rgb(255, 0, 0)));
    assert_eq!(parse_color("Navy"), Some(Rgba::rgb(0, 0, 128)));
    assert_eq!(parse_color("transparent").map(|c| c.a), Some(0.0));
    assert_eq!(parse_color("blurple"), None);
}

#[test]
fn serializes_opaque_and_translucent() {
    assert_eq!(format_color(Rgba::rgb(1, 2, 3)), "rgb(1,2,3)");
    assert_eq!(
        format_color(Rgba {
            r: 1,
            g: 2,
            b: 3,
            a: 0.12345
        }),
        "rgba(1,2,3,0.123)"
    );
}

#[test]
fn red_to_blue_midpoint() {
    assert_eq!(
        interpolate_color("rgb(255,0,0)", "rgb(0,0,255)", 0.5).as_deref(),
        Some("rgb(128,0,128)")
    );
}

#[test]
fn mixed_encodings_blend() {
    assert_eq!(
        interpolate_color("#000", "white", 0.5).as_deref(),
        Some("rgb(128,128,128)")
    );
    assert_eq!(
        interpolate_color("black", "transparent", 0.5).as_deref(),
        Some("rgba(0,0,0,0.5)")
    );
}

#[test]
fn endpoints_reproduce_inputs() {
    assert_eq!(
        interpolate_color("#336699", "red", 0.0).as_deref(),
        Some("rgb(51,102,153)")
    );
    assert_eq!(
        interpolate_color("#336699", "red", 1.0).as_deref(),
        Some("rgb(255,0,0)")
    );
}

#[test]
fn unparseable_side_yields_none() {
    assert_eq!(interpolate_color("red", "not-a-color", 0.5), None);
    assert_eq!(interpolate_color("", "red", 0.5), None);
}
