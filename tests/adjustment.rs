use winsight::adjust::{apply_toggles, AdjustmentToggles, DRAW_MAX, DRAW_MIN, HOME_AWAY_MAX, HOME_AWAY_MIN};
use winsight::state::ProbabilityTriple;

const BASE: ProbabilityTriple = ProbabilityTriple {
    home: 45.0,
    draw: 25.0,
    away: 30.0,
};

fn toggles_from_bits(bits: u8) -> AdjustmentToggles {
    AdjustmentToggles {
        rain: bits & 1 != 0,
        home_fatigue: bits & 2 != 0,
        home_injury: bits & 4 != 0,
        away_fatigue: bits & 8 != 0,
        away_injury: bits & 16 != 0,
    }
}

#[test]
fn no_toggles_is_the_identity() {
    let out = apply_toggles(&BASE, &AdjustmentToggles::default()).unwrap();
    assert_eq!(out, BASE);
}

#[test]
fn home_fatigue_scenario() {
    // 45/25/30 with home fatigue: raw 35/30/35 is already inside every
    // clamp band, so it passes through untouched.
    let toggles = AdjustmentToggles {
        home_fatigue: true,
        ..Default::default()
    };
    let out = apply_toggles(&BASE, &toggles).unwrap();
    assert_eq!(out, ProbabilityTriple::new(35.0, 30.0, 35.0));
}

#[test]
fn every_toggle_combination_holds_the_invariants() {
    for bits in 0u8..32 {
        let toggles = toggles_from_bits(bits);
        let out = apply_toggles(&BASE, &toggles).unwrap();

        assert_eq!(out.sum(), 100.0, "combination {bits:05b} broke the sum");
        assert!(
            (HOME_AWAY_MIN..=HOME_AWAY_MAX).contains(&out.home),
            "combination {bits:05b} pushed home to {}",
            out.home
        );
        assert!(
            (HOME_AWAY_MIN..=HOME_AWAY_MAX).contains(&out.away),
            "combination {bits:05b} pushed away to {}",
            out.away
        );
        assert!(
            (DRAW_MIN..=DRAW_MAX).contains(&out.draw),
            "combination {bits:05b} pushed draw to {}",
            out.draw
        );
        // Output is integral: rounding happens exactly once, at the end.
        assert_eq!(out.home, out.home.round());
        assert_eq!(out.draw, out.draw.round());
        assert_eq!(out.away, out.away.round());
    }
}

#[test]
fn recomputation_from_base_never_drifts() {
    // Toggling on and off repeatedly must land back on the base, because
    // every application starts from the base rather than the previous
    // adjusted value.
    let mut toggles = AdjustmentToggles::default();
    for _ in 0..100 {
        toggles.rain = !toggles.rain;
        toggles.home_injury = !toggles.home_injury;
        let _ = apply_toggles(&BASE, &toggles).unwrap();
    }
    toggles.rain = false;
    toggles.home_injury = false;
    assert_eq!(apply_toggles(&BASE, &toggles).unwrap(), BASE);
}

#[test]
fn lopsided_base_is_held_inside_the_bands() {
    let lopsided = ProbabilityTriple::new(78.0, 12.0, 10.0);
    for bits in 0u8..32 {
        let out = apply_toggles(&lopsided, &toggles_from_bits(bits)).unwrap();
        assert_eq!(out.sum(), 100.0);
        assert!(out.home <= HOME_AWAY_MAX && out.home >= HOME_AWAY_MIN);
        assert!(out.away <= HOME_AWAY_MAX && out.away >= HOME_AWAY_MIN);
    }
}
