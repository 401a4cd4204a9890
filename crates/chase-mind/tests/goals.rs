use chase_core::{AgentId, Direction, Level, Location, Role, RoomId, Speed, Subject, World};
use chase_mind::obstacles::dynamic_obstacles;
use chase_mind::{
    Archetype, Beliefs, Deliberation, Intention, IntentionKind, Pursued, Pursuer, Target,
};

const LAYOUT: &str = "\
++++++++++
+1.......+
+........+
+2...bb..+
+....bb.0+
++++++++++
";

const PURSUER: AgentId = AgentId(0);

fn world() -> World {
    World::new(Level::parse(LAYOUT).unwrap())
}

fn spot(beliefs: &mut Beliefs, id: AgentId, row: i32, col: i32) {
    let subject = Subject::new(id, Location::new(row, col), Direction::Left);
    beliefs.sees.agents.insert(id, subject);
    beliefs.agents.insert(id, subject);
}

fn me(id: u8, row: i32, col: i32) -> Subject {
    Subject::new(AgentId(id), Location::new(row, col), Direction::Right)
}

fn select(archetype: &dyn Archetype, d: &Deliberation<'_>) -> Intention {
    archetype.goals().select(d).unwrap()
}

#[test]
fn pursued_goal_order() {
    let kinds: Vec<_> = Pursued::default().goals().kinds().collect();
    assert_eq!(
        kinds,
        vec![
            IntentionKind::Recover,
            IntentionKind::Capture,
            IntentionKind::Halt,
            IntentionKind::Track,
            IntentionKind::Flank,
            IntentionKind::Assist,
            IntentionKind::Ambush,
            IntentionKind::Search,
            IntentionKind::GoTo,
            IntentionKind::Regroup,
        ]
    );
}

#[test]
fn recover_wins_over_capture() {
    let mut world = world();
    world.body_mut(PURSUER).unwrap().speed = Speed::VeryFast;
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, AgentId(2), 1, 1);
    spot(&mut beliefs, PURSUER, 1, 5);
    let pursued = Pursued::default();

    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(select(&pursued, &d), Intention::new(IntentionKind::Recover));

    // Capture holds on its own once recovering is already under way.
    let recovering = Intention::new(IntentionKind::Recover);
    let d = Deliberation {
        current: &recovering,
        ..d
    };
    assert_eq!(
        select(&pursued, &d),
        Intention::targeting(IntentionKind::Capture, Target::Agent(PURSUER))
    );
}

#[test]
fn pursued_halts_when_the_pursuer_is_close() {
    let world = world();
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, PURSUER, 1, 3);
    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(select(&Pursued::default(), &d), Intention::new(IntentionKind::Halt));
}

#[test]
fn pursued_heads_for_a_distant_pursuer_in_the_open() {
    let world = world();
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, PURSUER, 2, 5);
    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::GoTo, Target::Agent(PURSUER))
    );
}

#[test]
fn pursued_ambushes_a_pursuer_inside_a_room() {
    let world = world();
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, PURSUER, 4, 5);
    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Ambush, Target::Room(RoomId('b')))
    );
}

#[test]
fn pursued_tracks_after_losing_sight_mid_capture() {
    let world = world();
    let beliefs = Beliefs::with_rooms(world.level());
    let capturing = Intention::targeting(IntentionKind::Capture, Target::Agent(PURSUER));
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &capturing,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Track, Target::Agent(PURSUER))
    );
}

fn sees(beliefs: &mut Beliefs, observer: AgentId, targets: &[(AgentId, i32, i32)]) {
    let mut nested = Beliefs::new();
    for &(id, row, col) in targets {
        spot(&mut nested, id, row, col);
    }
    beliefs.tom.insert(observer, nested);
}

#[test]
fn pursued_flanks_a_pursuer_its_peer_is_watching() {
    let world = world();
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, PURSUER, 2, 6);
    spot(&mut beliefs, AgentId(2), 3, 1);
    // The peer has eyes on the pursuer but has not noticed me.
    sees(&mut beliefs, AgentId(2), &[(PURSUER, 2, 6)]);

    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Flank, Target::Agent(AgentId(2)))
    );
}

#[test]
fn pursued_captures_while_a_higher_ranked_peer_covers() {
    let world = world();
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, PURSUER, 2, 6);
    spot(&mut beliefs, AgentId(2), 3, 1);
    sees(&mut beliefs, AgentId(2), &[(PURSUER, 2, 6), (AgentId(1), 1, 1)]);

    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Capture, Target::Agent(PURSUER))
    );
}

#[test]
fn lower_ranked_peer_only_covers_when_it_cannot_see_the_pursuer() {
    let world = world();
    let none = Intention::none();

    // Peer 1 watches both me and the pursuer; it outranks no one, so no cover.
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, PURSUER, 2, 6);
    spot(&mut beliefs, AgentId(1), 1, 1);
    sees(&mut beliefs, AgentId(1), &[(PURSUER, 2, 6), (AgentId(2), 3, 1)]);
    let d = Deliberation {
        me: me(2, 3, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::GoTo, Target::Agent(PURSUER))
    );

    // Once it only sees me, the pursuer can be drawn off.
    sees(&mut beliefs, AgentId(1), &[(AgentId(2), 3, 1)]);
    let d = Deliberation {
        me: me(2, 3, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Capture, Target::Agent(PURSUER))
    );
}

#[test]
fn pursued_captures_a_pursuer_that_hears_it() {
    let world = world();
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, PURSUER, 2, 5);
    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(select(&Pursued::default(), &d).kind, IntentionKind::GoTo);

    let mut listening = Beliefs::new();
    listening
        .hears
        .agents
        .insert(AgentId(1), Subject::heard(AgentId(1), Location::new(1, 1)));
    beliefs.tom.insert(PURSUER, listening);
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Capture, Target::Agent(PURSUER))
    );
}

#[test]
fn pursued_searches_then_regroups() {
    let world = world();
    let mut beliefs = Beliefs::with_rooms(world.level());
    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Search, Target::Room(RoomId('b')))
    );

    beliefs.rooms.clear();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Regroup, Target::Rendezvous)
    );
}

#[test]
fn pursued_assists_a_stationary_peer() {
    let mut world = world();
    world.body_mut(AgentId(2)).unwrap().moving = false;
    let mut beliefs = Beliefs::with_rooms(world.level());
    spot(&mut beliefs, AgentId(2), 3, 1);
    let none = Intention::none();
    let d = Deliberation {
        me: me(1, 1, 1),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&Pursued::default(), &d),
        Intention::targeting(IntentionKind::Assist, Target::Agent(AgentId(2)))
    );
}

#[test]
fn pursuer_flees_from_close_agents_and_waits_on_distant_ones() {
    let world = world();
    let pursuer = Pursuer::default();
    let none = Intention::none();

    let mut close = Beliefs::with_rooms(world.level());
    spot(&mut close, AgentId(1), 4, 6);
    let d = Deliberation {
        me: me(0, 4, 8),
        beliefs: &close,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&pursuer, &d),
        Intention::targeting(IntentionKind::Flee, Target::Agent(AgentId(1)))
    );

    let mut far = Beliefs::with_rooms(world.level());
    spot(&mut far, AgentId(1), 1, 1);
    let d = Deliberation {
        beliefs: &far,
        ..d
    };
    assert_eq!(select(&pursuer, &d), Intention::new(IntentionKind::Wait));

    // Waiting always ends in running.
    let waiting = Intention::new(IntentionKind::Wait);
    let d = Deliberation {
        current: &waiting,
        ..d
    };
    assert_eq!(
        select(&pursuer, &d).kind,
        IntentionKind::Flee
    );
}

#[test]
fn pursuer_eats_what_it_sees_and_otherwise_searches() {
    let world = world();
    let pursuer = Pursuer::default();
    let none = Intention::none();

    let mut beliefs = Beliefs::with_rooms(world.level());
    beliefs.sees.foods.insert(Location::new(3, 5));
    let d = Deliberation {
        me: me(0, 4, 8),
        beliefs: &beliefs,
        current: &none,
        world: &world,
    };
    assert_eq!(
        select(&pursuer, &d),
        Intention::targeting(IntentionKind::Eat, Target::Food)
    );

    let beliefs = Beliefs::with_rooms(world.level());
    let d = Deliberation {
        beliefs: &beliefs,
        ..d
    };
    assert_eq!(
        select(&pursuer, &d),
        Intention::targeting(IntentionKind::Search, Target::Room(RoomId('b')))
    );

    let idle = Beliefs::new();
    let d = Deliberation { beliefs: &idle, ..d };
    assert_eq!(select(&pursuer, &d), Intention::none());
}

#[test]
fn pursuer_routes_around_everyone_it_sees() {
    let world = world();
    let mut beliefs = Beliefs::new();
    spot(&mut beliefs, AgentId(1), 4, 6);
    spot(&mut beliefs, AgentId(2), 4, 8);
    let blocked = dynamic_obstacles(&me(0, 4, 8), Role::Pursuer, &beliefs, &world);
    assert_eq!(blocked.into_iter().collect::<Vec<_>>(), vec![Location::new(4, 6)]);
}

#[test]
fn pursued_yields_to_peers_by_rank_and_status() {
    let mut world = world();
    let mut beliefs = Beliefs::new();
    spot(&mut beliefs, PURSUER, 2, 2);
    spot(&mut beliefs, AgentId(1), 2, 1);
    let me = me(2, 3, 1);

    // The peer does not see me, so it will not step aside.
    let blocked = dynamic_obstacles(&me, Role::Pursued, &beliefs, &world);
    assert_eq!(blocked.into_iter().collect::<Vec<_>>(), vec![Location::new(2, 1)]);

    // A lower-ranked peer that sees me yields, so I walk through.
    let mut nested = Beliefs::new();
    spot(&mut nested, AgentId(2), 3, 1);
    beliefs.tom.insert(AgentId(1), nested);
    assert!(dynamic_obstacles(&me, Role::Pursued, &beliefs, &world).is_empty());

    // Unless it is busy with something urgent.
    world.body_mut(AgentId(1)).unwrap().status.urgent = true;
    assert!(!dynamic_obstacles(&me, Role::Pursued, &beliefs, &world).is_empty());

    // Regrouping peers are never in the way.
    world.body_mut(AgentId(1)).unwrap().status.regrouping = true;
    assert!(dynamic_obstacles(&me, Role::Pursued, &beliefs, &world).is_empty());
}
