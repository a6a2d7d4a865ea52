use super::*;

const ALL: [ChartPresetKind; 5] = [
    ChartPresetKind::Grow,
    ChartPresetKind::CountUp,
    ChartPresetKind::Stagger,
    ChartPresetKind::Pulse,
    ChartPresetKind::Reveal,
];

fn series(keys: &[Keyframe], i: usize) -> Vec<f64> {
    let mut props: Vec<(&String, &PropertyValue)> = keys[i].properties.iter().collect();
    props.sort_by_key(|(name, _)| {
        name.trim_start_matches("series-")
            .parse::<usize>()
            .unwrap()
    });
    props
        .into_iter()
        .map(|(_, v)| v.as_number().unwrap())
        .collect()
}

#[test]
fn stagger_reveals_points_in_order() {
    let data = [10.0, 20.0, 30.0];
    let (a, keys) = create_chart_animation(
        "chart",
        "tpl",
        Phase::In,
        ChartPresetKind::Stagger,
        Some(&data),
    );
    assert_eq!(a.id, "chart-in-stagger");
    assert_eq!(keys.len(), 4);
    assert_eq!(series(&keys, 0), [0.0, 0.0, 0.0]);
    assert_eq!(series(&keys, 1), [10.0, 0.0, 0.0]);
    assert_eq!(series(&keys, 2), [10.0, 20.0, 0.0]);
    assert_eq!(series(&keys, 3), [10.0, 20.0, 30.0]);
    assert_eq!(keys[0].position_ms, 0.0);
    assert_eq!(keys[3].position_ms, 100.0);
    assert!(keys.windows(2).all(|w| w[0].position_ms < w[1].position_ms));
}

#[test]
fn stagger_exit_reverses_schedule() {
    let data = [10.0, 20.0, 30.0];
    let (_, keys) = create_chart_animation(
        "chart",
        "tpl",
        Phase::Out,
        ChartPresetKind::Stagger,
        Some(&data),
    );
    assert_eq!(keys.len(), 4);
    assert_eq!(series(&keys, 0), [10.0, 20.0, 30.0]);
    assert_eq!(series(&keys, 1), [10.0, 20.0, 0.0]);
    assert_eq!(series(&keys, 3), [0.0, 0.0, 0.0]);
}

#[test]
fn stagger_loop_is_closed() {
    let data = [1.0, 2.0];
    let (a, keys) = create_chart_animation(
        "chart",
        "tpl",
        Phase::Loop,
        ChartPresetKind::Stagger,
        Some(&data),
    );
    assert_eq!(a.duration_ms, 1500.0);
    assert_eq!(keys.len(), 5);
    assert_eq!(keys[0].properties, keys[4].properties);
    assert_eq!(keys[2].position_ms, 50.0);
    assert_eq!(series(&keys, 2), [1.0, 2.0]);
}

#[test]
fn stagger_duration_grows_with_data() {
    let data = [1.0; 10];
    let (a, _) = create_chart_animation(
        "chart",
        "tpl",
        Phase::In,
        ChartPresetKind::Stagger,
        Some(&data),
    );
    assert_eq!(a.duration_ms, 1500.0);
}

#[test]
fn stagger_without_data_falls_back_to_grow() {
    for data in [None, Some(&[][..])] {
        let (a, keys) =
            create_chart_animation("chart", "tpl", Phase::In, ChartPresetKind::Stagger, data);
        assert_eq!(a.id, "chart-in-stagger");
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].properties["progress"], PropertyValue::Number(0.0));
        assert_eq!(keys[1].properties["progress"], PropertyValue::Number(1.0));
    }
}

#[test]
fn count_up_uses_elastic_easing() {
    let (a, keys) =
        create_chart_animation("chart", "tpl", Phase::In, ChartPresetKind::CountUp, None);
    assert_eq!(a.easing, "elastic-out");
    assert_eq!(keys.len(), 2);
    let (a, _) =
        create_chart_animation("chart", "tpl", Phase::Loop, ChartPresetKind::CountUp, None);
    assert_eq!(a.easing, "ease-in-out");
}

#[test]
fn pulse_is_a_loop_in_every_phase() {
    for phase in [Phase::In, Phase::Loop, Phase::Out] {
        let (a, keys) = create_chart_animation("chart", "tpl", phase, ChartPresetKind::Pulse, None);
        assert_eq!(a.phase, phase);
        assert_eq!(a.duration_ms, 1500.0);
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0].properties, keys[2].properties);
        assert_eq!(
            keys[1].properties["transform"],
            PropertyValue::from("scale(1.05)")
        );
    }
}

#[test]
fn reveal_mirrors_between_entry_and_exit() {
    let (_, ins) = create_chart_animation("chart", "tpl", Phase::In, ChartPresetKind::Reveal, None);
    let (_, outs) =
        create_chart_animation("chart", "tpl", Phase::Out, ChartPresetKind::Reveal, None);
    assert_eq!(ins[0].properties, outs[1].properties);
    assert_eq!(ins[1].properties, outs[0].properties);
    assert_eq!(ins[0].properties["transform"], PropertyValue::from("scale(0)"));
}

#[test]
fn timing_configuration_is_honored() {
    let timing = PresetTiming {
        entry_ms: 900.0,
        exit_ms: 250.0,
        loop_ms: 2000.0,
    };
    let (a, _) = create_chart_animation_with(
        "chart",
        "tpl",
        Phase::Out,
        ChartPresetKind::Grow,
        None,
        &timing,
    );
    assert_eq!(a.duration_ms, 250.0);
}

#[test]
fn generation_is_deterministic() {
    let data = [3.0, 1.0];
    for kind in ALL {
        for phase in [Phase::In, Phase::Loop, Phase::Out] {
            assert_eq!(
                create_chart_animation("chart", "tpl", phase, kind, Some(&data)),
                create_chart_animation("chart", "tpl", phase, kind, Some(&data))
            );
        }
    }
}

#[test]
fn names_round_trip() {
    for kind in ALL {
        assert_eq!(kind.name().parse::<ChartPresetKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert!("explode".parse::<ChartPresetKind>().is_err());
}
