use chase_core::{Location, RoomId};
use chase_search::{Route, RouteKind};

use crate::perception::{field_of_view, shared_view};
use crate::IntentionKind::{
    Ambush, Assist, Capture, Flank, GoTo, Halt, Recover, Regroup, Search, Track,
};
use crate::{MindError, PlanLibrary, PlanProcedure, Planning, Result, Target};
use chase_core::DeterministicRng;

pub fn library() -> PlanLibrary {
    PlanLibrary::new(vec![
        PlanProcedure::new(Recover, hold),
        PlanProcedure::new(Capture, capture),
        PlanProcedure::new(Halt, hold),
        PlanProcedure::new(Track, track),
        PlanProcedure::new(Flank, flank),
        PlanProcedure::new(Assist, assist),
        PlanProcedure::new(Ambush, ambush),
        PlanProcedure::new(Search, search),
        PlanProcedure::new(GoTo, go_to),
        PlanProcedure::new(Regroup, regroup),
    ])
}

fn hold(p: &mut Planning<'_>) -> Result<Route> {
    Ok(Route::hold(p.me.location))
}

fn go_to(p: &mut Planning<'_>) -> Result<Route> {
    go_to_from(p, p.me.location)
}

/// Route from `from` towards the intention's target. Routes into a room stop at the first cell
/// that is inside some room without being an entrance of the target room.
fn go_to_from(p: &Planning<'_>, from: Location) -> Result<Route> {
    match p.intention.target {
        Some(Target::Rendezvous) => {
            let dest = p
                .world
                .level()
                .rendezvous()
                .ok_or(MindError::NoCandidates("rendezvous"))?;
            Ok(p.path(from, dest))
        }
        Some(Target::Agent(id)) => {
            let dest = p.beliefs.location_of(id).ok_or(MindError::UnknownAgent(id))?;
            Ok(p.path(from, dest))
        }
        Some(Target::Room(id)) => {
            let level = p.world.level();
            let room = level.room(id)?;
            let dest = room
                .nearest_entrance(from)
                .ok_or(MindError::NoCandidates("room entrance"))?;
            let mut route = p.path(from, dest);
            route.truncate_at(|at| !level.in_any_room(at) || room.is_entrance(at));
            Ok(route)
        }
        Some(Target::Food) | None => Ok(Route::new()),
    }
}

/// Appends `next` to `route` and returns where the combined route ends.
fn chain(route: &mut Route, next: Route, from: Location) -> Location {
    let end = next.last().unwrap_or(from);
    route.extend(next);
    end
}

fn capture(p: &mut Planning<'_>) -> Result<Route> {
    let pursuer = p.intention.agent().ok_or(MindError::NoCandidates("capture"))?;
    let mut route = Route::new();
    let mut at = p.me.location;
    if !p.world.is_at(pursuer, at) {
        let approach = go_to_from(p, at)?;
        at = chain(&mut route, approach, at);
    }
    route.push(at);
    Ok(route)
}

/// Where the pursuer is likely to run: a cell `flee_distance` away from it, reached from here,
/// favouring the pursuer's heading.
fn escape_route(p: &Planning<'_>) -> Result<Route> {
    let pursuer = p
        .world
        .pursuer()
        .ok_or(MindError::NoCandidates("pursuer"))?;
    let seen = p
        .beliefs
        .agents
        .get(&pursuer)
        .ok_or(MindError::UnknownAgent(pursuer))?;
    Ok(p.search(
        p.me.location,
        RouteKind::Pursue {
            origin: seen.location,
            from: p.me.location,
            max_dist: p.config.flee_distance,
            heading: seen.direction,
            facing: p.me.direction,
        },
    ))
}

fn track(p: &mut Planning<'_>) -> Result<Route> {
    match escape_route(p)?.last() {
        Some(end) => Ok(p.path(p.me.location, end)),
        None => Ok(Route::new()),
    }
}

fn flank(p: &mut Planning<'_>) -> Result<Route> {
    let peer = p.intention.agent().ok_or(MindError::NoCandidates("flank"))?;
    let pursuer = p
        .world
        .pursuer()
        .ok_or(MindError::NoCandidates("pursuer"))?;
    let dest = p
        .beliefs
        .location_of(pursuer)
        .ok_or(MindError::UnknownAgent(pursuer))?;
    let avoid = p.beliefs.location_of(peer).ok_or(MindError::UnknownAgent(peer))?;
    Ok(p.search(p.me.location, RouteKind::Flank { dest, avoid }))
}

/// Cover a cell the assisted peer can see but I cannot, keeping away from the peer.
fn assist(p: &mut Planning<'_>) -> Result<Route> {
    let id = p.intention.agent().ok_or(MindError::NoCandidates("assist"))?;
    let peer = *p.beliefs.agents.get(&id).ok_or(MindError::UnknownAgent(id))?;
    let view = field_of_view(p.world, peer.direction, peer.location);
    let shared = shared_view(p.world, &p.me, &peer);
    let hidden: Vec<Location> = view.difference(&shared).copied().collect();
    let pool: Vec<Location> = if hidden.is_empty() {
        view.into_iter().collect()
    } else {
        hidden
    };
    let Some(&dest) = p.rng.choose(&pool) else {
        return Ok(Route::new());
    };
    Ok(p.search(
        p.me.location,
        RouteKind::Flank {
            dest,
            avoid: peer.location,
        },
    ))
}

/// Back out along the walked path to the last cell outside every room.
fn leave(p: &Planning<'_>, from: Location) -> Route {
    let level = p.world.level();
    match p.history.iter().rev().find(|&&at| !level.in_any_room(at)) {
        Some(&dest) => p.path(from, dest),
        None => Route::new(),
    }
}

fn ambush(p: &mut Planning<'_>) -> Result<Route> {
    let room = target_room(p)?;
    let mut route = Route::new();
    let mut at = p.me.location;
    if p.world.level().in_room(room, at) {
        let out = leave(p, at);
        at = chain(&mut route, out, at);
    }
    let approach = go_to_from(p, at)?;
    at = chain(&mut route, approach, at);
    route.push(at);
    Ok(route)
}

fn search(p: &mut Planning<'_>) -> Result<Route> {
    let room = target_room(p)?;
    let mut route = Route::new();
    let mut at = p.me.location;
    if !p.world.level().in_room(room, at) {
        let approach = go_to_from(p, at)?;
        at = chain(&mut route, approach, at);
    }
    route.extend(p.explore(at, room));
    Ok(route)
}

fn regroup(p: &mut Planning<'_>) -> Result<Route> {
    let rendezvous = p
        .world
        .level()
        .rendezvous()
        .ok_or(MindError::NoCandidates("rendezvous"))?;
    let mut route = Route::new();
    let mut at = p.me.location;
    if at != rendezvous {
        let approach = go_to_from(p, at)?;
        at = chain(&mut route, approach, at);
    }
    route.push(at);
    Ok(route)
}

fn target_room(p: &Planning<'_>) -> Result<RoomId> {
    p.intention
        .room()
        .ok_or(MindError::NoCandidates("room target"))
}
