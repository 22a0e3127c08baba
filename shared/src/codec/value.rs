use crate::codec::{ByteReader, ByteWriter, CodecError};

/// Declared structure of a property's value. Shape is always supplied by the
/// decoding caller from static knowledge of the property; the codec never
/// infers it from a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One numeric field
    Scalar,
    /// Three named numeric fields: x, y, z
    Vector3,
    /// Four named numeric fields: r, g, b, a
    Rgba,
}

impl Shape {
    pub fn field_count(&self) -> u8 {
        match self {
            Shape::Scalar => 1,
            Shape::Vector3 => 3,
            Shape::Rgba => 4,
        }
    }
}

/// One property's value as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    Scalar(f64),
    Vector3 { x: f64, y: f64, z: f64 },
    Rgba { r: f64, g: f64, b: f64, a: f64 },
}

impl PropertyValue {
    pub fn shape(&self) -> Shape {
        match self {
            PropertyValue::Scalar(_) => Shape::Scalar,
            PropertyValue::Vector3 { .. } => Shape::Vector3,
            PropertyValue::Rgba { .. } => Shape::Rgba,
        }
    }

    /// Field-count byte followed by the fields in declaration order.
    pub fn ser(&self, writer: &mut ByteWriter) {
        writer.write_u8(self.shape().field_count());
        match *self {
            PropertyValue::Scalar(value) => {
                writer.write_f64(value);
            }
            PropertyValue::Vector3 { x, y, z } => {
                writer.write_f64(x);
                writer.write_f64(y);
                writer.write_f64(z);
            }
            PropertyValue::Rgba { r, g, b, a } => {
                writer.write_f64(r);
                writer.write_f64(g);
                writer.write_f64(b);
                writer.write_f64(a);
            }
        }
    }

    pub fn de(reader: &mut ByteReader, expected: Shape) -> Result<Self, CodecError> {
        let actual = reader.read_u8()?;
        if actual != expected.field_count() {
            return Err(CodecError::ShapeMismatch {
                shape: expected,
                expected: expected.field_count(),
                actual,
            });
        }
        let value = match expected {
            Shape::Scalar => PropertyValue::Scalar(reader.read_f64()?),
            Shape::Vector3 => PropertyValue::Vector3 {
                x: reader.read_f64()?,
                y: reader.read_f64()?,
                z: reader.read_f64()?,
            },
            Shape::Rgba => PropertyValue::Rgba {
                r: reader.read_f64()?,
                g: reader.read_f64()?,
                b: reader.read_f64()?,
                a: reader.read_f64()?,
            },
        };
        Ok(value)
    }
}
