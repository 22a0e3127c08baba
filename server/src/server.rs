use std::collections::HashMap;

use log::{debug, warn};

use envlink_shared::{
    DespawnMessage, ModelError, ObjectModel, Protocol, Shape, SpawnMessage, TopicAddr, Transport,
    TransportError, UpdateMessage,
};

use crate::events::{Events, ServerEvent};

/// How deliveries on one subscribed topic are interpreted.
enum Route {
    Spawn { type_tag: String },
    Despawn { type_tag: String },
    Update { property: String, shape: Shape },
}

/// The authoritative side of the bridge. Wraps the real object model, so
/// mutations applied here are immediately visible to any local observer.
///
/// The server holds no state between messages beyond the model itself: each
/// delivery is decoded, applied, and forgotten.
pub struct Server<M: ObjectModel> {
    model: M,
    transport: Box<dyn Transport>,
    routes: HashMap<TopicAddr, Route>,
}

impl<M: ObjectModel> Server<M> {
    /// Subscribes once to the creation, destruction and per-property
    /// channels of every type the model declares. The subscription set is
    /// static for the life of the server.
    pub fn new(
        protocol: &Protocol,
        model: M,
        mut transport: Box<dyn Transport>,
    ) -> Result<Self, TransportError> {
        let mut routes = HashMap::new();
        for type_tag in model.type_tags() {
            let spawn = protocol.spawn_topic(&type_tag);
            transport.subscribe(&spawn)?;
            routes.insert(
                spawn,
                Route::Spawn {
                    type_tag: type_tag.clone(),
                },
            );

            let despawn = protocol.despawn_topic(&type_tag);
            transport.subscribe(&despawn)?;
            routes.insert(
                despawn,
                Route::Despawn {
                    type_tag: type_tag.clone(),
                },
            );

            let Ok(schema) = model.schema(&type_tag) else {
                // type_tags() and schema() come from the same registry
                continue;
            };
            for (property, default) in schema.properties() {
                let topic = protocol.property_topic(&type_tag, property);
                transport.subscribe(&topic)?;
                routes.insert(
                    topic,
                    Route::Update {
                        property: property.to_string(),
                        shape: default.shape(),
                    },
                );
            }
        }
        debug!("subscribed to {} channels", routes.len());
        Ok(Self {
            model,
            transport,
            routes,
        })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// One processing step: drain whatever the transport has buffered and
    /// apply each message in delivery order. Never blocks, never queues a
    /// message for a later step.
    pub fn pump(&mut self) -> Events {
        let mut events = Events::new();
        for (topic, payload) in self.transport.pump() {
            self.process(topic, &payload, &mut events);
        }
        events
    }

    fn process(&mut self, topic: TopicAddr, payload: &[u8], events: &mut Events) {
        let Some(route) = self.routes.get(&topic) else {
            warn!("dropping message on unroutable topic '{}'", topic);
            events.push(ServerEvent::DroppedMessage {
                topic,
                reason: "unroutable topic".to_string(),
            });
            return;
        };

        match route {
            Route::Spawn { type_tag } => match SpawnMessage::de(payload) {
                Ok(message) => match self.model.create(type_tag, &message.label) {
                    Ok(()) => {
                        events.push(ServerEvent::SpawnObject {
                            type_tag: type_tag.clone(),
                            label: message.label,
                        });
                    }
                    Err(ModelError::DuplicateLabel { label }) => {
                        // re-announcing an existing object is not an error
                        debug!("ignoring duplicate spawn of '{}' on '{}'", label, topic);
                    }
                    Err(error) => {
                        warn!("dropping spawn on '{}': {}", topic, error);
                        events.push(ServerEvent::DroppedMessage {
                            topic,
                            reason: error.to_string(),
                        });
                    }
                },
                Err(error) => {
                    warn!("dropping undecodable spawn on '{}': {}", topic, error);
                    events.push(ServerEvent::DroppedMessage {
                        topic,
                        reason: error.to_string(),
                    });
                }
            },
            Route::Despawn { type_tag } => match DespawnMessage::de(payload) {
                Ok(message) => match self.model.destroy(&message.label) {
                    Ok(()) => {
                        events.push(ServerEvent::DespawnObject {
                            type_tag: type_tag.clone(),
                            label: message.label,
                        });
                    }
                    Err(error) => {
                        warn!("dropping despawn on '{}': {}", topic, error);
                        events.push(ServerEvent::DroppedMessage {
                            topic,
                            reason: error.to_string(),
                        });
                    }
                },
                Err(error) => {
                    warn!("dropping undecodable despawn on '{}': {}", topic, error);
                    events.push(ServerEvent::DroppedMessage {
                        topic,
                        reason: error.to_string(),
                    });
                }
            },
            Route::Update { property, shape } => match UpdateMessage::de(payload, *shape) {
                Ok(message) => {
                    match self
                        .model
                        .set_property(&message.label, property, message.value)
                    {
                        Ok(()) => {
                            events.push(ServerEvent::UpdateProperty {
                                label: message.label,
                                property: property.clone(),
                            });
                        }
                        Err(error) => {
                            // last message wins: an update that outruns its
                            // object's spawn is discarded, never buffered
                            warn!("dropping update on '{}': {}", topic, error);
                            events.push(ServerEvent::DroppedMessage {
                                topic,
                                reason: error.to_string(),
                            });
                        }
                    }
                }
                Err(error) => {
                    warn!("dropping undecodable update on '{}': {}", topic, error);
                    events.push(ServerEvent::DroppedMessage {
                        topic,
                        reason: error.to_string(),
                    });
                }
            },
        }
    }
}
