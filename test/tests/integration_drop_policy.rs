/// The server's availability-over-strictness policy: inbound messages it
/// cannot apply are dropped, never queued, and never abort the pump.
use envlink_client::Client;
use envlink_server::{Server, ServerEvent};
use envlink_shared::{
    DespawnMessage, Environment, ObjectModel, PropertyValue, Protocol, Transport, UpdateMessage,
};
use envlink_test::{sphere_protocol, LocalBroker};

struct Fixture {
    server: Server<Environment>,
    rogue: Box<dyn Transport>,
    protocol: Protocol,
}

fn fixture() -> Fixture {
    let protocol = sphere_protocol();
    let broker = LocalBroker::new();
    let server = Server::new(&protocol, Environment::new(&protocol), broker.endpoint())
        .expect("loopback subscribe cannot fail");
    Fixture {
        server,
        rogue: broker.endpoint(),
        protocol,
    }
}

fn dropped(events: &envlink_server::Events) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, ServerEvent::DroppedMessage { .. }))
        .count()
}

#[test]
fn update_arriving_before_creation_is_dropped() {
    let mut fx = fixture();
    let topic = fx.protocol.property_topic("sphere", "radius");
    fx.rogue
        .publish(
            &topic,
            UpdateMessage::new("cursor", PropertyValue::Scalar(0.5)).ser(),
        )
        .unwrap();

    let events = fx.server.pump();

    // no queueing, no backfill: the environment is untouched
    assert!(fx.server.model().is_empty());
    assert_eq!(dropped(&events), 1);
}

#[test]
fn update_is_applied_once_the_object_exists() {
    let mut fx = fixture();
    let radius = fx.protocol.property_topic("sphere", "radius");

    // early update is lost for good
    fx.rogue
        .publish(
            &radius,
            UpdateMessage::new("cursor", PropertyValue::Scalar(0.5)).ser(),
        )
        .unwrap();
    fx.server.pump();

    fx.server.model_mut().create("sphere", "cursor").unwrap();
    fx.rogue
        .publish(
            &radius,
            UpdateMessage::new("cursor", PropertyValue::Scalar(0.25)).ser(),
        )
        .unwrap();
    fx.server.pump();

    assert_eq!(
        fx.server.model().get_property("cursor", "radius"),
        Ok(PropertyValue::Scalar(0.25))
    );
}

#[test]
fn despawn_for_absent_object_is_dropped() {
    let mut fx = fixture();
    let topic = fx.protocol.despawn_topic("sphere");
    fx.rogue
        .publish(&topic, DespawnMessage::new("cursor").ser())
        .unwrap();

    let events = fx.server.pump();

    assert!(fx.server.model().is_empty());
    assert_eq!(dropped(&events), 1);
}

#[test]
fn undecodable_payload_is_dropped() {
    let mut fx = fixture();
    let topic = fx.protocol.property_topic("sphere", "radius");
    fx.rogue.publish(&topic, vec![0xff, 0xff, 0xff]).unwrap();

    let events = fx.server.pump();

    assert!(fx.server.model().is_empty());
    assert_eq!(dropped(&events), 1);
}

#[test]
fn wrong_shape_update_is_dropped() {
    let mut fx = fixture();
    fx.server.model_mut().create("sphere", "cursor").unwrap();

    // a Vector3 payload on the scalar radius channel
    let topic = fx.protocol.property_topic("sphere", "radius");
    let payload = UpdateMessage::new(
        "cursor",
        PropertyValue::Vector3 {
            x: 1.0,
            y: 2.0,
            z: 3.0,
        },
    )
    .ser();
    fx.rogue.publish(&topic, payload).unwrap();

    let events = fx.server.pump();

    assert_eq!(dropped(&events), 1);
    assert_eq!(
        fx.server.model().get_property("cursor", "radius"),
        Ok(PropertyValue::Scalar(1.0))
    );
}

#[test]
fn duplicate_creation_is_idempotent() {
    let protocol = sphere_protocol();
    let broker = LocalBroker::new();
    let mut server = Server::new(&protocol, Environment::new(&protocol), broker.endpoint())
        .expect("loopback subscribe cannot fail");
    let mut client = Client::new(&protocol, Environment::new(&protocol), broker.endpoint());

    client.initialize_object("sphere", "cursor").unwrap();
    // second call re-announces without surfacing an error
    client.initialize_object("sphere", "cursor").unwrap();
    client.pump();
    let events = server.pump();

    assert_eq!(server.model().len(), 1);
    // the repeat spawn is ignored: one spawn event, nothing dropped
    let spawns = events
        .iter()
        .filter(|event| matches!(event, ServerEvent::SpawnObject { .. }))
        .count();
    assert_eq!(spawns, 1);
    assert_eq!(dropped(&events), 0);
}

#[test]
fn pump_applies_every_buffered_message_in_one_step() {
    let mut fx = fixture();
    let spawn = fx.protocol.spawn_topic("sphere");
    let radius = fx.protocol.property_topic("sphere", "radius");

    fx.rogue
        .publish(&spawn, envlink_shared::SpawnMessage::new("cursor").ser())
        .unwrap();
    fx.rogue
        .publish(
            &radius,
            UpdateMessage::new("cursor", PropertyValue::Scalar(0.75)).ser(),
        )
        .unwrap();

    // both messages were buffered before this single step
    let events = fx.server.pump();
    assert_eq!(events.len(), 2);
    assert_eq!(
        fx.server.model().get_property("cursor", "radius"),
        Ok(PropertyValue::Scalar(0.75))
    );
}
