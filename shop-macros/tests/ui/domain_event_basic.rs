use shop_domain::domain_event::DomainEvent;
use shop_macros::domain_event;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
struct Renamed {
    from: String,
    to: String,
}

#[domain_event(name = "ThingRenamed")]
struct ThingRenamedEvent {
    event_data: Renamed,
}

#[domain_event]
struct PingEvent {
    occurred_at: chrono::DateTime<chrono::Utc>,
    event_data: u32,
}

fn main() {
    let event = ThingRenamedEvent::new(Renamed {
        from: "a".into(),
        to: "b".into(),
    });
    assert_eq!(ThingRenamedEvent::NAME, "ThingRenamed");
    assert_eq!(event.event_name(), "ThingRenamed");
    assert_eq!(event.event_data().to, "b");

    let at = chrono::Utc::now();
    let ping = PingEvent::with_occurred_at(7, at);
    assert_eq!(PingEvent::NAME, "PingEvent");
    assert_eq!(*ping.occurred_at(), at);
    assert_eq!(*ping.event_data(), 7);
    let _copy = ping.clone();
}
