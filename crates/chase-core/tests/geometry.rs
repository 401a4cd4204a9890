use chase_core::rng::derive_seed;
use chase_core::subject::nearest;
use chase_core::{AgentId, DeterministicRng, Direction, Location, Pace, Speed, SplitMix64, Subject};

#[test]
fn distances() {
    let a = Location::new(1, 1);
    let b = Location::new(4, 5);
    assert_eq!(a.manhattan(b), 7);
    assert!((a.euclidean(b) - 5.0).abs() < 1e-9);
}

#[test]
fn directions_step_and_invert() {
    let at = Location::new(2, 2);
    assert_eq!(at.step(Direction::Up), Location::new(1, 2));
    assert_eq!(at.step(Direction::Right), Location::new(2, 3));
    assert_eq!(Direction::Left.opposite(), Direction::Right);
    assert_eq!(Direction::Idle.opposite(), Direction::Idle);
    assert_eq!(Direction::between(at, Location::new(3, 2)), Direction::Down);
    assert_eq!(Direction::between(at, Location::new(4, 2)), Direction::Idle);
}

#[test]
fn rank_follows_the_digit() {
    assert!(AgentId(3).outranks(AgentId(1)));
    assert!(!AgentId(0).outranks(AgentId(1)));
    assert_eq!(AgentId::from_glyph('7'), Some(AgentId(7)));
    assert_eq!(AgentId(7).glyph(), '7');
}

#[test]
fn subjects_compare_by_id_and_nearest_keeps_the_first_tie() {
    let a = Subject::heard(AgentId(1), Location::new(0, 2));
    let b = Subject::heard(AgentId(2), Location::new(2, 0));
    assert_eq!(a, Subject::new(AgentId(1), Location::new(5, 5), Direction::Up));
    let from = Location::new(0, 0);
    assert_eq!(nearest([&a, &b], from).unwrap().id, AgentId(1));
    assert_eq!(nearest([&b, &a], from).unwrap().id, AgentId(2));
    assert!(nearest(std::iter::empty(), from).is_none());
}

#[test]
fn pace_converts_speed_tiers_to_ticks() {
    let pace = Pace {
        ticks_per_second: 60,
        simulation_speed: 10.0,
    };
    assert_eq!(pace.move_interval(Speed::Medium), 48);
    assert_eq!(pace.move_interval(Speed::VeryFast), 12);
    assert_eq!(pace.countdown(50.0), 300);
    assert!(pace.move_interval(Speed::Fast) < pace.move_interval(Speed::Slow));
}

#[test]
fn rng_streams_are_reproducible() {
    let mut a = SplitMix64::new(derive_seed(7, 1, 0));
    let mut b = SplitMix64::new(derive_seed(7, 1, 0));
    let items = [10, 20, 30, 40];
    for _ in 0..16 {
        assert_eq!(a.choose(&items), b.choose(&items));
    }
    let mut c = SplitMix64::new(1);
    for _ in 0..64 {
        assert!(c.below(5) < 5);
    }
    assert_eq!(c.choose::<u8>(&[]), None);
}
