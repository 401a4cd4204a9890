use chase_core::subject::nearest;
use chase_search::{Route, RouteKind};

use crate::planning::nearest_cell;
use crate::IntentionKind::{Eat, Flee, Search, Wait};
use crate::{MindError, PlanLibrary, PlanProcedure, Planning, Result};

pub fn library() -> PlanLibrary {
    PlanLibrary::new(vec![
        PlanProcedure::new(Flee, flee),
        PlanProcedure::new(Wait, hold),
        PlanProcedure::new(Search, search),
        PlanProcedure::new(Eat, eat),
    ])
}

fn hold(p: &mut Planning<'_>) -> Result<Route> {
    Ok(Route::hold(p.me.location))
}

/// Walk to the nearest remembered food unless already standing on some, then eat in place.
fn eat(p: &mut Planning<'_>) -> Result<Route> {
    let mut route = Route::new();
    let mut at = p.me.location;
    if !p.world.has_food(at) {
        let food = nearest_cell(&p.beliefs.foods, at).ok_or(MindError::NoCandidates("food"))?;
        let approach = p.path(at, food);
        at = approach.last().unwrap_or(at);
        route.extend(approach);
    }
    route.push(at);
    Ok(route)
}

fn search(p: &mut Planning<'_>) -> Result<Route> {
    let id = p
        .intention
        .room()
        .ok_or(MindError::NoCandidates("room target"))?;
    let level = p.world.level();
    let mut route = Route::new();
    let mut at = p.me.location;
    if !level.in_room(id, at) {
        let entrance = level
            .room(id)?
            .nearest_entrance(at)
            .ok_or(MindError::NoCandidates("room entrance"))?;
        let approach = p.path(at, entrance);
        at = approach.last().unwrap_or(at);
        route.extend(approach);
    }
    route.extend(p.explore(at, id));
    Ok(route)
}

/// Run from the threat the intention names, else the nearest one perceived, else from here.
fn flee(p: &mut Planning<'_>) -> Result<Route> {
    let perceived = p.beliefs.perceived();
    let threat = p
        .intention
        .agent()
        .and_then(|id| perceived.iter().find(|s| s.id == id))
        .or_else(|| nearest(&perceived, p.me.location))
        .map_or(p.me.location, |s| s.location);
    Ok(p.search(
        p.me.location,
        RouteKind::Flee {
            origin: p.me.location,
            from: threat,
            max_dist: p.config.flee_distance,
        },
    ))
}
