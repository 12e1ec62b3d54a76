use dotgrid::{channel, DotGridApp, EventFilter, EventKind};

#[test]
fn sink_commands_are_ingested_in_order() {
    let (sink, rx) = channel();
    let mut app = DotGridApp::new(rx);

    sink.add_dot(1.0, 2.0).unwrap();
    sink.add_dot(3.0, 4.0).unwrap();
    app.ingest_commands();

    let dots = app.store.dots();
    assert_eq!(dots.len(), 2);
    assert_eq!((dots[0].id, dots[0].x, dots[0].y), (1, 1.0, 2.0));
    assert_eq!((dots[1].id, dots[1].x, dots[1].y), (2, 3.0, 4.0));
}

#[test]
fn clear_all_resets_ids_for_subsequent_adds() {
    let (sink, rx) = channel();
    let mut app = DotGridApp::new(rx);

    sink.add_dot(1.0, 1.0).unwrap();
    sink.clear_all().unwrap();
    sink.add_dot(9.0, 9.0).unwrap();
    app.ingest_commands();

    let dots = app.store.dots();
    assert_eq!(dots.len(), 1);
    assert_eq!(dots[0].id, 1, "clearing resets id assignment");
}

#[test]
fn ingest_emits_events_to_subscribers() {
    let (sink, rx) = channel();
    let mut app = DotGridApp::new(rx);

    let events = dotgrid::EventController::new();
    let added = events.subscribe(EventFilter::only(EventKind::DOT_ADDED));
    let cleared = events.subscribe(EventFilter::only(EventKind::DATA_CLEARED));
    app.apply_config(&dotgrid::DotGridConfig {
        event_controller: Some(events),
        ..Default::default()
    });

    sink.add_dot(2.0, 7.0).unwrap();
    sink.clear_all().unwrap();
    app.ingest_commands();

    let evt = added.try_recv().expect("DOT_ADDED should be delivered");
    let meta = evt.dot.expect("add events carry dot metadata");
    assert_eq!(meta.id, 1);
    assert_eq!(meta.logical, [2.0, 7.0]);
    assert!(meta.pixel.is_none(), "sink-fed dots have no pointer position");

    let evt = cleared.try_recv().expect("DATA_CLEARED should be delivered");
    assert!(evt.dot.is_none());
}

#[test]
fn detached_app_ignores_ingest() {
    let mut app = DotGridApp::detached();
    app.ingest_commands();
    assert!(app.store.is_empty());
}
