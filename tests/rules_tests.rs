use broadside::{interception_enabled, roll_interception, shots_per_turn, UnknownVariant, Variant};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_shots_per_turn() {
    for afloat in 0..=5 {
        assert_eq!(shots_per_turn(Variant::Classic, afloat), 1);
        assert_eq!(shots_per_turn(Variant::CruiseMissiles, afloat), 1);
        assert_eq!(shots_per_turn(Variant::Multifire, afloat), afloat);
        assert_eq!(shots_per_turn(Variant::Hardcore, afloat), afloat);
    }
}

#[test]
fn test_interception_flags() {
    assert!(!interception_enabled(Variant::Classic));
    assert!(!interception_enabled(Variant::Multifire));
    assert!(interception_enabled(Variant::CruiseMissiles));
    assert!(interception_enabled(Variant::Hardcore));
}

#[test]
fn test_interception_rate_is_eighty_percent() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let trials = 10_000;
    let intercepted = (0..trials).filter(|_| roll_interception(&mut rng)).count();
    assert!(
        (7_600..=8_400).contains(&intercepted),
        "intercepted {} of {}",
        intercepted,
        trials
    );
}

#[test]
fn test_variant_parsing() {
    assert_eq!("classic".parse::<Variant>(), Ok(Variant::Classic));
    assert_eq!("MULTIFIRE".parse::<Variant>(), Ok(Variant::Multifire));
    assert_eq!("cruise-missiles".parse::<Variant>(), Ok(Variant::CruiseMissiles));
    assert_eq!("Cruise Missiles".parse::<Variant>(), Ok(Variant::CruiseMissiles));
    assert_eq!("hardcore".parse::<Variant>(), Ok(Variant::Hardcore));
    assert_eq!("salvo".parse::<Variant>(), Err(UnknownVariant));
}

#[test]
fn test_variant_display_round_trips_through_parse() {
    for v in Variant::ALL {
        assert_eq!(v.to_string().parse::<Variant>(), Ok(v));
    }
    assert_eq!(Variant::CruiseMissiles.to_string(), "CRUISE MISSILES");
}
