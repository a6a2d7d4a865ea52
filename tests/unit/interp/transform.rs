use super::*;

fn arg(value: f64, unit: Option<&str>) -> TransformArg {
    TransformArg {
        value,
        unit: unit.map(str::to_owned),
    }
}

#[test]
fn parses_multiple_functions_with_units() {
    let t = TransformExpr::parse("translate(10px, -5.5%) scale(1.2) rotate(45deg)").unwrap();
    let names: Vec<&str> = t.functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["translate", "scale", "rotate"]);
    assert_eq!(
        t.get("translate").unwrap().args.as_slice(),
        &[arg(10.0, Some("px")), arg(-5.5, Some("%"))]
    );
    assert_eq!(t.get("scale").unwrap().args.as_slice(), &[arg(1.2, None)]);
    assert_eq!(
        t.get("rotate").unwrap().args.as_slice(),
        &[arg(45.0, Some("deg"))]
    );
}

#[test]
fn em_units_and_exponents_are_distinguished() {
    let t = TransformExpr::parse("translateX(2em) translateY(1e2px)").unwrap();
    assert_eq!(
        t.get("translateX").unwrap().args.as_slice(),
        &[arg(2.0, Some("em"))]
    );
    assert_eq!(
        t.get("translateY").unwrap().args.as_slice(),
        &[arg(100.0, Some("px"))]
    );
}

#[test]
fn rejects_non_transforms() {
    for s in [
        "",
        "red",
        "rgb(1,2,3)",
        "translateX(10px",
        "translateX()",
        "translateX(abc)",
        "translateX(10px) 12",
        "wobble(3)",
    ] {
        assert_eq!(TransformExpr::parse(s), None, "{s:?}");
    }
}

#[test]
fn none_is_the_empty_expression() {
    let t = TransformExpr::parse("none").unwrap();
    assert!(t.functions.is_empty());
    assert_eq!(t.to_string(), "none");
}

#[test]
fn repeated_function_keeps_first_position_last_args() {
    let t = TransformExpr::parse("rotate(5deg) scale(2) rotate(9deg)").unwrap();
    assert_eq!(t.to_string(), "rotate(9deg) scale(2)");
}

#[test]
fn quarter_progress_translate() {
    assert_eq!(
        interpolate_transform("translateX(0px)", "translateX(100px)", 0.25).as_deref(),
        Some("translateX(25px)")
    );
}

#[test]
fn missing_functions_use_identity() {
    let from = TransformExpr::parse("translateX(100px)").unwrap();
    let to = TransformExpr::parse("scale(2) rotate(90deg)").unwrap();
    let mid = TransformExpr::interpolate(&from, &to, 0.5);
    assert_eq!(mid.to_string(), "translateX(50px) scale(1.5) rotate(45deg)");
}

#[test]
fn union_order_is_insertion_order_not_alphabetical() {
    let out = interpolate_transform("scale(1) rotate(0deg)", "translateY(10px) scale(3)", 0.5);
    assert_eq!(
        out.as_deref(),
        Some("scale(2) rotate(0deg) translateY(5px)")
    );
}

#[test]
fn units_come_from_whichever_side_has_one() {
    let out = interpolate_transform("rotate(0)", "rotate(180deg)", 0.5);
    assert_eq!(out.as_deref(), Some("rotate(90deg)"));
    let out = interpolate_transform("translate(10px)", "translate(20px, 40px)", 0.5);
    assert_eq!(out.as_deref(), Some("translate(15px, 20px)"));
}

#[test]
fn none_blends_against_identity() {
    let out = interpolate_transform("none", "scale(3) translateX(30px)", 0.5);
    assert_eq!(out.as_deref(), Some("scale(2) translateX(15px)"));
}

#[test]
fn output_is_rounded_for_serialization() {
    let out = interpolate_transform("translateX(0px)", "translateX(100px)", 1.0 / 3.0);
    assert_eq!(out.as_deref(), Some("translateX(33.333px)"));
}

#[test]
fn malformed_side_yields_none() {
    assert_eq!(interpolate_transform("scale(1)", "scale(", 0.5), None);
}
