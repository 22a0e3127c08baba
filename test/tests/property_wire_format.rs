/// Property-based tests for the wire format and the topic scheme.
///
/// Key invariants:
/// 1. Encoding then decoding any value returns it bit-for-bit
/// 2. Distinct (type, property) pairs never share a channel address
/// 3. Lifecycle channels never collide with property channels
use proptest::prelude::*;

use envlink_shared::{
    despawn_topic, property_topic, spawn_topic, PropertyValue, Shape, UpdateMessage,
};

// Strategy for channel segments: what the protocol registry accepts
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,11}"
}

// Strategy for object labels
fn label_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,15}"
}

fn value_strategy() -> impl Strategy<Value = PropertyValue> {
    prop_oneof![
        any::<f64>().prop_map(PropertyValue::Scalar),
        (any::<f64>(), any::<f64>(), any::<f64>())
            .prop_map(|(x, y, z)| PropertyValue::Vector3 { x, y, z }),
        (any::<f64>(), any::<f64>(), any::<f64>(), any::<f64>())
            .prop_map(|(r, g, b, a)| PropertyValue::Rgba { r, g, b, a }),
    ]
}

// Bit-level equality, so NaN payloads also round-trip
fn bits(value: &PropertyValue) -> Vec<u64> {
    match *value {
        PropertyValue::Scalar(v) => vec![v.to_bits()],
        PropertyValue::Vector3 { x, y, z } => vec![x.to_bits(), y.to_bits(), z.to_bits()],
        PropertyValue::Rgba { r, g, b, a } => {
            vec![r.to_bits(), g.to_bits(), b.to_bits(), a.to_bits()]
        }
    }
}

proptest! {
    /// decode(encode(v), shape) == v for every supported shape
    #[test]
    fn prop_update_round_trip_is_lossless(
        label in label_strategy(),
        value in value_strategy(),
    ) {
        let message = UpdateMessage::new(&label, value);
        let decoded = UpdateMessage::de(&message.ser(), value.shape()).unwrap();
        prop_assert_eq!(decoded.label, label);
        prop_assert_eq!(bits(&decoded.value), bits(&value));
    }

    /// decoding against any other shape fails instead of misreading
    #[test]
    fn prop_decoding_with_a_different_shape_fails(
        label in label_strategy(),
        value in value_strategy(),
        other in prop_oneof![Just(Shape::Scalar), Just(Shape::Vector3), Just(Shape::Rgba)],
    ) {
        prop_assume!(other != value.shape());
        let message = UpdateMessage::new(&label, value);
        prop_assert!(UpdateMessage::de(&message.ser(), other).is_err());
    }

    /// distinct (type, property) pairs map to distinct addresses
    #[test]
    fn prop_property_addresses_are_injective(
        t1 in segment_strategy(),
        p1 in segment_strategy(),
        t2 in segment_strategy(),
        p2 in segment_strategy(),
    ) {
        prop_assume!((t1.clone(), p1.clone()) != (t2.clone(), p2.clone()));
        prop_assert_ne!(
            property_topic("env", &t1, &p1),
            property_topic("env", &t2, &p2)
        );
    }

    /// creation and destruction channels stay clear of property channels,
    /// given that the registry rejects the reserved destroy segment
    #[test]
    fn prop_lifecycle_addresses_do_not_collide(
        type_tag in segment_strategy(),
        property in segment_strategy(),
    ) {
        prop_assume!(property != "destroy");
        let spawn = spawn_topic("env", &type_tag);
        let despawn = despawn_topic("env", &type_tag);
        let update = property_topic("env", &type_tag, &property);
        prop_assert_ne!(spawn.clone(), despawn.clone());
        prop_assert_ne!(spawn, update.clone());
        prop_assert_ne!(despawn, update);
    }
}
