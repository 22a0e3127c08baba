use crate::codec::{ByteReader, ByteWriter, CodecError, PropertyValue, Shape};

/// Announces creation of one object on its type's spawn channel. The payload
/// is the object's label alone; default property values are assigned by the
/// receiving model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnMessage {
    pub label: String,
}

impl SpawnMessage {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }

    pub fn ser(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        writer.write_string(&self.label);
        writer.finish()
    }

    pub fn de(payload: &[u8]) -> Result<Self, CodecError> {
        let mut reader = ByteReader::new(payload);
        let label = reader.read_string()?;
        reader.finish()?;
        Ok(Self { label })
    }
}

/// Announces destruction of one object on its type's despawn channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DespawnMessage {
    pub label: String,
}

impl DespawnMessage {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }

    pub fn ser(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        writer.write_string(&self.label);
        writer.finish()
    }

    pub fn de(payload: &[u8]) -> Result<Self, CodecError> {
        let mut reader = ByteReader::new(payload);
        let label = reader.read_string()?;
        reader.finish()?;
        Ok(Self { label })
    }
}

/// Carries exactly one property's new value for one labeled object. Updates
/// are never batched; each property travels on its own channel and the
/// channel identifies which property this is.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMessage {
    pub label: String,
    pub value: PropertyValue,
}

impl UpdateMessage {
    pub fn new(label: &str, value: PropertyValue) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }

    pub fn ser(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();
        writer.write_string(&self.label);
        self.value.ser(&mut writer);
        writer.finish()
    }

    /// `expected` comes from the subscribing side's schema for the property
    /// this channel carries.
    pub fn de(payload: &[u8], expected: Shape) -> Result<Self, CodecError> {
        let mut reader = ByteReader::new(payload);
        let label = reader.read_string()?;
        let value = PropertyValue::de(&mut reader, expected)?;
        reader.finish()?;
        Ok(Self { label, value })
    }
}
