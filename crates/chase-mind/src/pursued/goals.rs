use chase_core::room::nearest_room;
use chase_core::subject::nearest;
use chase_core::Subject;

use crate::IntentionKind::{
    Ambush, Assist, Capture, Flank, GoTo, Halt, Recover, Regroup, Search, Track,
};
use crate::{Deliberation, Goal, GoalTable, Intention, IntentionKind, MindError, Result, Target};

/// Pursued priorities, highest first.
pub fn table() -> GoalTable {
    GoalTable::new(vec![
        Goal::untargeted(Recover, recover),
        Goal::new(Capture, capture, |d| toward_pursuer(d, Capture)),
        Goal::untargeted(Halt, halt),
        Goal::new(Track, track, |d| toward_pursuer(d, Track)),
        Goal::new(Flank, flank, flank_target),
        Goal::new(Assist, assist, assist_target),
        Goal::new(Ambush, ambush, ambush_target),
        Goal::new(Search, search, search_target),
        Goal::new(GoTo, go_to, |d| toward_pursuer(d, GoTo)),
        Goal::new(Regroup, regroup, |_| {
            Ok(Intention::targeting(Regroup, Target::Rendezvous))
        }),
    ])
}

/// A higher-ranked peer stands on my cell.
fn recover(d: &Deliberation<'_>) -> bool {
    !d.is_current(Recover)
        && d
            .seen()
            .any(|s| s.location == d.me.location && s.id.outranks(d.me.id))
}

/// Go for the pursuer when it knows about me anyway, or when a peer that sees me is covering.
fn capture(d: &Deliberation<'_>) -> bool {
    if !d.sees_pursuer() {
        return false;
    }
    if d.pursuer_hears_me() || d.pursuer_at_top_speed() {
        return true;
    }
    let Some(pursuer) = d.pursuer() else {
        return false;
    };
    d.beliefs.sees.agents.len() > 1
        && d.seen_peers().any(|peer| {
            d.beliefs.believes_sees(peer.id, d.me.id)
                && (!d.beliefs.believes_sees(peer.id, pursuer) || peer.id.outranks(d.me.id))
        })
}

/// Freeze while the pursuer is watching (unless it is already running), or when it is close.
fn halt(d: &Deliberation<'_>) -> bool {
    if !d.sees_pursuer() {
        return false;
    }
    if d.pursuer_sees_me() {
        !d.pursuer_at_top_speed()
    } else {
        d.pursuer_location()
            .is_some_and(|at| at.manhattan(d.me.location) <= 2)
    }
}

/// Lost sight of the pursuer mid-capture.
fn track(d: &Deliberation<'_>) -> bool {
    !d.sees_pursuer() && d.is_current(Capture)
}

fn flank(d: &Deliberation<'_>) -> bool {
    d.sees_pursuer()
        && d.beliefs.sees.agents.len() > 1
        && !d.pursuer_sees_me()
        && !d.pursuer_at_top_speed()
        && flank_candidate(d).is_some()
}

/// First visible peer that sees the pursuer but not me.
fn flank_candidate<'a>(d: &Deliberation<'a>) -> Option<&'a Subject> {
    let pursuer = d.pursuer()?;
    let beliefs = d.beliefs;
    let me = d.me.id;
    d.seen_peers()
        .find(|peer| beliefs.believes_sees(peer.id, pursuer) && !beliefs.believes_sees(peer.id, me))
}

fn flank_target(d: &Deliberation<'_>) -> Result<Intention> {
    flank_candidate(d)
        .map(|peer| Intention::targeting(Flank, Target::Agent(peer.id)))
        .ok_or(MindError::NoCandidates("flank"))
}

/// A peer that is standing still on its own account (not regrouping or recovering).
fn stationary(d: &Deliberation<'_>, subject: &Subject) -> bool {
    let status = d.world.status(subject.id);
    !status.regrouping && !status.recovering && !d.world.is_moving(subject.id)
}

fn assist(d: &Deliberation<'_>) -> bool {
    !d.sees_pursuer()
        && !d.is_current(Ambush)
        && d
            .seen()
            .any(|s| !d.beliefs.believes_sees(s.id, d.me.id) && stationary(d, s))
}

fn assist_target(d: &Deliberation<'_>) -> Result<Intention> {
    nearest(d.seen().filter(|s| stationary(d, s)), d.me.location)
        .map(|s| Intention::targeting(Assist, Target::Agent(s.id)))
        .ok_or(MindError::NoCandidates("assist"))
}

/// The pursuer went into a room without noticing me: wait for it at the exit.
fn ambush(d: &Deliberation<'_>) -> bool {
    d.sees_pursuer()
        && d.pursuer_location()
            .is_some_and(|at| d.world.level().in_any_room(at))
        && !d.pursuer_sees_me()
        && !d.is_current(Halt)
        && !d.is_current(Flank)
}

fn ambush_target(d: &Deliberation<'_>) -> Result<Intention> {
    d.pursuer_location()
        .and_then(|at| d.world.level().room_at(at))
        .map(|room| Intention::targeting(Ambush, Target::Room(room.id)))
        .ok_or(MindError::NoCandidates("ambush"))
}

fn search(d: &Deliberation<'_>) -> bool {
    !d.sees_pursuer() && !d.beliefs.rooms.is_empty()
}

fn search_target(d: &Deliberation<'_>) -> Result<Intention> {
    nearest_room(&d.beliefs.rooms, d.me.location)
        .map(|room| Intention::targeting(Search, Target::Room(room.id)))
        .ok_or(MindError::NoRooms)
}

fn go_to(d: &Deliberation<'_>) -> bool {
    d.sees_pursuer()
}

fn regroup(d: &Deliberation<'_>) -> bool {
    !d.sees_pursuer() && d.beliefs.rooms.is_empty()
}

fn toward_pursuer(d: &Deliberation<'_>, kind: IntentionKind) -> Result<Intention> {
    d.pursuer()
        .map(|p| Intention::targeting(kind, Target::Agent(p)))
        .ok_or(MindError::NoCandidates("pursuer"))
}
