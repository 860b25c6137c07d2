use super::*;

fn fixed_curves() -> [(&'static str, fn(f64) -> f64); 19] {
    [
        ("linear", linear),
        ("in1", ease_in1),
        ("in2", ease_in2),
        ("in3", ease_in3),
        ("in4", ease_in4),
        ("in5", ease_in5),
        ("in6", ease_in6),
        ("out1", ease_out1),
        ("out2", ease_out2),
        ("out3", ease_out3),
        ("out4", ease_out4),
        ("out5", ease_out5),
        ("out6", ease_out6),
        ("inOut1", ease_in_out1),
        ("inOut2", ease_in_out2),
        ("inOut3", ease_in_out3),
        ("inOut4", ease_in_out4),
        ("inOut5", ease_in_out5),
        ("inOut6", ease_in_out6),
    ]
}

fn samples(n: u32) -> impl Iterator<Item = f64> {
    (0..=n).map(move |k| f64::from(k) / f64::from(n))
}

fn assert_unit_curve(name: &str, f: impl Fn(f64) -> f64) {
    assert_eq!(f(0.0), 0.0, "{name}(0)");
    assert_eq!(f(1.0), 1.0, "{name}(1)");
    for x in [-1e9, -3.0, -0.5, -1e-12] {
        assert_eq!(f(x), 0.0, "{name}({x})");
    }
    for x in [1.0 + 1e-12, 1.5, 7.0, 1e9] {
        assert_eq!(f(x), 1.0, "{name}({x})");
    }

    let mut prev = f(0.0);
    for x in samples(2000) {
        let y = f(x);
        assert!((0.0..=1.0).contains(&y), "{name}({x}) = {y} out of range");
        assert!(y >= prev - 1e-12, "{name} decreases at {x}: {prev} -> {y}");
        prev = y;
    }
}

#[test]
fn fixed_curves_are_normalized_and_monotonic() {
    for (name, f) in fixed_curves() {
        assert_unit_curve(name, f);
    }
}

#[test]
fn ease_out_is_point_complement_of_ease_in() {
    for d in Degree::ALL {
        for x in samples(500) {
            let a = ease_out(x, d);
            let b = 1.0 - ease_in(1.0 - x, d);
            assert!((a - b).abs() <= 1e-9, "degree {} at {x}", d.get());
        }
    }
}

#[test]
fn ease_in_out_n_is_symmetric() {
    for d in Degree::ALL {
        for x in samples(500) {
            let sum = ease_in_out_n(x, d) + ease_in_out_n(1.0 - x, d);
            assert!((sum - 1.0).abs() <= 1e-9, "degree {} at {x}", d.get());
        }
        assert!((ease_in_out_n(0.5, d) - 0.5).abs() <= 1e-12);
    }
}

#[test]
fn degree_dispatch_matches_named_functions() {
    let d3 = Degree::new(3).unwrap();
    for x in samples(50) {
        assert_eq!(ease_in(x, d3), ease_in3(x));
        assert_eq!(ease_out(x, d3), ease_out3(x));
        assert_eq!(ease_in_out_n(x, d3), ease_in_out3(x));
    }
}

#[test]
fn degree_rejects_out_of_range() {
    assert!(Degree::new(0).is_err());
    assert!(Degree::new(7).is_err());
    assert_eq!(Degree::new(6).unwrap().get(), 6);
}

#[test]
fn generalized_in_out_matches_fixed_degrees() {
    for (n, d) in [(1.0, 1u8), (2.0, 2), (3.0, 3)] {
        let d = Degree::new(d).unwrap();
        for x in samples(400) {
            let a = ease_in_out(x, n, 0.5);
            let b = ease_in_out_n(x, d);
            assert!((a - b).abs() <= 1e-6, "p={n} x={x}: {a} vs {b}");
        }
    }
}

#[test]
fn generalized_in_out_is_normalized_for_asymmetric_inflection() {
    for p in [1.5, 2.0, 3.0, 5.0] {
        for i in [0.2, 0.5, 0.8] {
            assert_unit_curve("inOut", |x| ease_in_out(x, p, i));
            // Both branches meet at the inflection point.
            let below = ease_in_out(i - 1e-9, p, i);
            let at = ease_in_out(i, p, i);
            assert!((below - at).abs() <= 1e-6, "p={p} i={i}");
        }
    }
}

#[test]
fn in_linear_out_full_linear_is_identity() {
    for x in samples(200) {
        assert_eq!(ease_in_linear_ease_out(x, 2.0, 3.0, 1.0), x);
    }
    assert_eq!(ease_in_linear_ease_out(1.5, 2.0, 3.0, 1.0), 1.0);
    assert_eq!(ease_in_linear_ease_out(-0.5, 2.0, 3.0, 1.0), 0.0);
}

#[test]
fn in_linear_out_is_normalized_and_monotonic() {
    for p in [1.5, 2.0, 4.0] {
        for q in [1.5, 2.0, 4.0] {
            for s in [0.0, 0.3, 0.7] {
                let f = |x| ease_in_linear_ease_out(x, p, q, s);
                assert_unit_curve("inLinearOut", f);
                let near_end = f(1.0 - 1e-9);
                assert!((near_end - 1.0).abs() <= 1e-6, "p={p} q={q} s={s}");
            }
        }
    }
}

#[test]
fn in_linear_out_unit_exponents_use_limit_knee() {
    // p = q = 1 degenerates to the identity through the 1/e knee.
    for x in samples(100) {
        let y = ease_in_linear_ease_out(x, 1.0, 1.0, 0.0);
        assert!((y - x).abs() <= 1e-12, "x={x} y={y}");
        assert!(y.is_finite());
    }
    let near = ease_in_linear_ease_out(0.3, 1.0 + 1e-7, 2.0, 0.2);
    assert!(near.is_finite());
}

#[test]
fn in_linear_out_linear_phase_has_constant_slope() {
    let (p, q, s) = (2.0, 2.0, 0.5);
    // With p = q = 2 the knees sit at 1/2, so the linear phase spans [0.25, 0.75].
    let f = |x| ease_in_linear_ease_out(x, p, q, s);
    let d1 = f(0.45) - f(0.4);
    let d2 = f(0.65) - f(0.6);
    assert!((d1 - d2).abs() <= 1e-12);
}

#[test]
fn ease_apply_dispatches() {
    assert_eq!(Ease::Linear.apply(0.25), 0.25);
    assert_eq!(Ease::In(Degree::new(2).unwrap()).apply(0.5), 0.25);
    assert_eq!(Ease::Out(Degree::new(2).unwrap()).apply(0.5), 0.75);
    assert!((Ease::power_default().apply(0.25) - ease_in_out3(0.25)).abs() <= 1e-12);
    assert_eq!(
        Ease::InLinearOut {
            p: 2.0,
            q: 4.0,
            s: 0.3
        }
        .apply(0.4),
        ease_in_linear_ease_out(0.4, 2.0, 4.0, 0.3)
    );
}

#[test]
fn ease_parses_registry_names() {
    assert_eq!("linear".parse::<Ease>().unwrap(), Ease::Linear);
    assert_eq!(
        "in3".parse::<Ease>().unwrap(),
        Ease::In(Degree::new(3).unwrap())
    );
    assert_eq!(
        "out6".parse::<Ease>().unwrap(),
        Ease::Out(Degree::new(6).unwrap())
    );
    assert_eq!(
        "inOut2".parse::<Ease>().unwrap(),
        Ease::InOut(Degree::new(2).unwrap())
    );
    assert_eq!("inOut".parse::<Ease>().unwrap(), Ease::power_default());
    assert_eq!(
        "inLinearOut".parse::<Ease>().unwrap(),
        Ease::in_linear_out_default()
    );
}

#[test]
fn ease_rejects_unpublished_names() {
    for name in ["", "in", "in0", "in7", "in+3", "in03", "out", "inOut9", "easeIn3", "IN3"] {
        let err = name.parse::<Ease>().unwrap_err();
        assert!(
            matches!(err, EaseKitError::UnknownCurve(ref n) if n == name),
            "{name}: {err}"
        );
    }
}

#[test]
fn ease_name_round_trips_through_from_str() {
    for name in ["linear", "in1", "out4", "inOut6", "inOut", "inLinearOut"] {
        assert_eq!(name.parse::<Ease>().unwrap().name(), name);
    }
}

#[test]
fn ease_json_shapes() {
    let e: Ease = serde_json::from_str("\"inOut3\"").unwrap();
    assert_eq!(e, Ease::InOut(Degree::new(3).unwrap()));
    assert_eq!(serde_json::to_string(&e).unwrap(), "\"inOut3\"");

    let p = Ease::Power { p: 2.0, i: 0.25 };
    assert_eq!(
        serde_json::to_string(&p).unwrap(),
        r#"{"inOut":{"p":2.0,"i":0.25}}"#
    );

    let partial: Ease = serde_json::from_str(r#"{"inOut":{"p":4}}"#).unwrap();
    assert_eq!(partial, Ease::Power { p: 4.0, i: 0.5 });

    let three: Ease = serde_json::from_str(r#"{"inLinearOut":{"p":2,"q":3,"s":0.4}}"#).unwrap();
    assert_eq!(
        three,
        Ease::InLinearOut {
            p: 2.0,
            q: 3.0,
            s: 0.4
        }
    );
}

#[test]
fn ease_json_unknown_name_is_an_error() {
    let err = serde_json::from_str::<Ease>("\"in9\"").unwrap_err();
    assert!(err.to_string().contains("unknown curve"), "{err}");
}

#[test]
fn validate_checks_parameter_domains() {
    assert!(Ease::power_default().validate().is_ok());
    assert!(Ease::Power { p: 3.0, i: 0.0 }.validate().is_err());
    assert!(Ease::Power { p: 3.0, i: 1.0 }.validate().is_err());
    assert!(Ease::Power { p: -1.0, i: 0.5 }.validate().is_err());
    assert!(
        Ease::InLinearOut {
            p: 2.0,
            q: f64::NAN,
            s: 0.5
        }
        .validate()
        .is_err()
    );
    assert!(
        Ease::InLinearOut {
            p: 2.0,
            q: 2.0,
            s: 1.5
        }
        .validate()
        .is_err()
    );
    assert!(
        Ease::InLinearOut {
            p: 2.0,
            q: 2.0,
            s: 1.0
        }
        .validate()
        .is_ok()
    );
}

#[test]
fn display_includes_parameters() {
    assert_eq!(Ease::In(Degree::new(4).unwrap()).to_string(), "in4");
    assert_eq!(
        Ease::Power { p: 2.0, i: 0.5 }.to_string(),
        "inOut(p=2, i=0.5)"
    );
}

#[test]
fn ease_json_rejects_stray_keys() {
    for json in [
        r#"{"inOut":{"p":2,"q":9,"bogus":1}}"#,
        r#"{"inOut":{"p":2},"inLinearOut":{"p":3}}"#,
        r#"{"inLinearOut":{"p":2,"i":0.5}}"#,
        r#"{"inOut":{"p":2},"extra":true}"#,
        r#"{"in_out":{"p":2}}"#,
        r#"{}"#,
    ] {
        assert!(serde_json::from_str::<Ease>(json).is_err(), "{json}");
    }
}
