use chase_core::{AgentId, Direction, Level, LevelError, Location};
use chase_mind::{IntentionKind, Target};
use chase_sim::trace::write_jsonl;
use chase_sim::{Outcome, SimConfig, SimError, Simulation};
use chase_tools::trace::tags;

// Pursued agent 1 faces the pursuer, which stands right next to it.
const OPEN: &str = "\
.....
.10..
.....
.....
....A
";

fn open_level() -> Level {
    Level::parse(OPEN)
        .unwrap()
        .with_facing(AgentId(1), Direction::Right)
        .with_facing(AgentId(0), Direction::Left)
}

#[test]
fn both_sides_commit_on_the_first_tick() {
    let mut config = SimConfig::default();
    config.mind.flee_distance = 4;
    let mut sim = Simulation::new(open_level(), config).unwrap();
    assert_eq!(sim.step().unwrap(), None);

    let pursuer = sim.agent(AgentId(0)).unwrap();
    assert_eq!(pursuer.intention().kind, IntentionKind::Flee);
    assert_eq!(pursuer.intention().target, Some(Target::Agent(AgentId(1))));
    assert!(!pursuer.plan().is_empty());

    // The pursuer is already running flat out, so there is no point hiding.
    let pursued = sim.agent(AgentId(1)).unwrap();
    assert_eq!(pursued.intention().kind, IntentionKind::Capture);
    assert!(!pursued.plan().is_empty());
    assert_eq!(pursued.plan().last(), Some(Location::new(1, 2)));
}

#[test]
fn cornered_pursuer_is_caught() {
    // Nowhere on a 5x5 grid is ten steps from the pursuer, so it cannot plan an escape.
    let mut sim = Simulation::new(open_level(), SimConfig::default()).unwrap();
    let outcome = sim.run().unwrap();
    assert_eq!(
        outcome,
        Outcome::PursuedWin {
            at: Location::new(1, 2)
        }
    );
    assert!(sim.tick() < 100);
    assert!(sim.world().body(AgentId(0)).unwrap().path.is_empty());
    assert_eq!(sim.trace().with_tag(tags::OUTCOME).count(), 1);

    // Finished runs stay finished.
    let tick = sim.tick();
    assert_eq!(sim.step().unwrap(), Some(outcome));
    assert_eq!(sim.tick(), tick);
}

#[test]
fn separated_agents_time_out() {
    let layout = "\
+++++++
+1....+
+++++++
+0...A+
+++++++
";
    let config = SimConfig {
        max_ticks: 50,
        ..SimConfig::default()
    };
    let mut sim = Simulation::from_layout(layout, config).unwrap();
    assert_eq!(sim.run().unwrap(), Outcome::Timeout);
    assert_eq!(sim.tick(), 50);
    assert_eq!(sim.outcome(), Some(Outcome::Timeout));
}

#[test]
fn levels_need_both_sides() {
    let err = Simulation::from_layout("1...\n", SimConfig::default()).err().unwrap();
    assert!(matches!(err, SimError::Level(LevelError::MissingPursuer)));
}

#[test]
fn snapshots_describe_every_agent() {
    let mut sim = Simulation::new(open_level(), SimConfig::default()).unwrap();
    sim.step().unwrap();
    let snapshots = sim.snapshots();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].id, AgentId(0));
    assert!(snapshots[0].intention.starts_with("flee"));
    assert_eq!(snapshots[1].intention, "capture(0)");
    assert!(snapshots[1].visible.contains(&Location::new(1, 2)));

    let json = serde_json::to_value(&snapshots[1]).unwrap();
    assert_eq!(json["location"]["row"], 1);
}

#[test]
fn traces_are_written_as_json_lines() {
    let mut sim = Simulation::new(open_level(), SimConfig::default()).unwrap();
    sim.run().unwrap();
    let mut out = Vec::new();
    write_jsonl(&mut out, &sim.trace().events).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), sim.trace().events.len());
    let last: serde_json::Value = serde_json::from_str(lines.last().unwrap()).unwrap();
    assert_eq!(last["tag"], "outcome");
}

#[test]
fn bundled_maps_are_playable() {
    let house = Level::parse(include_str!("../../../maps/house.txt")).unwrap();
    house.validate().unwrap();
    assert_eq!(house.rooms().len(), 3);
    assert_eq!(house.foods().len(), 3);
    assert_eq!(house.spawns().len(), 4);
    assert_eq!(house.rendezvous(), Some(Location::new(1, 1)));

    let corridor = Level::parse(include_str!("../../../maps/corridor.txt")).unwrap();
    corridor.validate().unwrap();
}
