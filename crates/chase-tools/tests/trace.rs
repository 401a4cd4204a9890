use chase_core::AgentId;
use chase_tools::trace::tags;
use chase_tools::{NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};

#[test]
fn sinks_collect_events_in_order() {
    let mut sink = VecTraceSink::default();
    sink.emit(TraceEvent::new(1, tags::INTENTION).with_agent(AgentId(2)).with_detail("search(a)"));
    sink.emit(TraceEvent::new(2, tags::PLAN).with_agent(AgentId(2)).with_detail("4"));
    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.events[0].detail, "search(a)");
    assert_eq!(sink.events[1].tick, 2);

    let mut null = NullTraceSink;
    null.emit(TraceEvent::new(0, "ignored"));
}

#[test]
fn log_filters_by_agent_and_tag() {
    let mut log = TraceLog::default();
    log.emit(TraceEvent::new(1, tags::INTENTION).with_agent(AgentId(0)));
    log.emit(TraceEvent::new(1, tags::INTENTION).with_agent(AgentId(1)));
    log.emit(TraceEvent::new(3, tags::OUTCOME).with_detail("pursuer wins"));

    assert_eq!(log.for_agent(AgentId(1)).count(), 1);
    assert_eq!(log.with_tag(tags::INTENTION).count(), 2);
    assert_eq!(log.with_tag(tags::OUTCOME).next().unwrap().agent, None);
}

#[cfg(feature = "serde")]
#[test]
fn events_round_trip_through_json() {
    let event = TraceEvent::new(7, tags::REPLAN).with_agent(AgentId(3)).with_detail("2");
    let json = serde_json::to_string(&event).unwrap();
    let back: TraceEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(back, event);
}
