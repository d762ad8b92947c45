//! Descriptor-driven decoding into the canonical JSON form.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::{Map, Value};
use viaduct_proto_parser::proto::{Field, Label, Message, Scalar, Ty};

use crate::registry::Pool;
use crate::wire::{zigzag_decode, Reader, WireType};
use crate::CodecError;

/// Decode `bytes` against `desc`, producing an object keyed by JSON field
/// names. Unknown field numbers are skipped; singular fields holding their
/// default value are omitted so the output is canonical.
pub(crate) fn decode_message(
    pool: &Pool,
    desc: &Message,
    bytes: &[u8],
) -> Result<Value, CodecError> {
    let mut reader = Reader::from_slice(bytes);
    let mut out = Map::new();

    while reader.remaining() > 0 {
        let tag = reader.read_varint()?;
        let wire_type = WireType::from_tag(tag)?;
        let field_number = (tag >> 3) as u32;

        let Some(field) = desc.field_by_number(field_number) else {
            reader.skip(wire_type)?;
            continue;
        };

        match &field.label {
            Label::Map(key) => {
                decode_map_entry(pool, desc, field, *key, &mut reader, wire_type, &mut out)?
            }
            Label::Repeated => {
                decode_repeated(pool, desc, field, &mut reader, wire_type, &mut out)?
            }
            Label::Single => {
                let value = decode_value(pool, desc, field, &mut reader, wire_type)?;
                if is_default(&value) {
                    out.remove(&field.json_name);
                } else {
                    out.insert(field.json_name.clone(), value);
                }
            }
        }
    }

    Ok(Value::Object(out))
}

fn decode_repeated(
    pool: &Pool,
    scope: &Message,
    field: &Field,
    reader: &mut Reader<'_>,
    wire_type: WireType,
    out: &mut Map<String, Value>,
) -> Result<(), CodecError> {
    let list = out
        .entry(field.json_name.clone())
        .or_insert_with(|| Value::Array(Vec::new()));
    if !list.is_array() {
        *list = Value::Array(Vec::new());
    }
    let Value::Array(items) = list else { unreachable!() };

    let packable = packed_wire_type(pool, scope, &field.ty);
    if wire_type == WireType::LengthDelimited {
        if let Some(element_type) = packable {
            // Packed encoding: a run of elements inside one length.
            let len = reader.read_varint()? as usize;
            let mut inner = Reader::from_slice(reader.read_slice(len)?);
            while inner.remaining() > 0 {
                items.push(decode_value(pool, scope, field, &mut inner, element_type)?);
            }
            return Ok(());
        }
    }
    items.push(decode_value(pool, scope, field, reader, wire_type)?);
    Ok(())
}

fn decode_map_entry(
    pool: &Pool,
    scope: &Message,
    field: &Field,
    key_type: Scalar,
    reader: &mut Reader<'_>,
    wire_type: WireType,
    out: &mut Map<String, Value>,
) -> Result<(), CodecError> {
    if wire_type != WireType::LengthDelimited {
        return Err(CodecError::Mismatch {
            field: field.name.clone(),
            reason: "map entries are length-delimited",
        });
    }
    let len = reader.read_varint()? as usize;
    let mut entry = Reader::from_slice(reader.read_slice(len)?);

    let mut key = default_scalar(key_type);
    let mut value = Value::Null;
    while entry.remaining() > 0 {
        let tag = entry.read_varint()?;
        let entry_wire = WireType::from_tag(tag)?;
        match tag >> 3 {
            1 => key = decode_scalar(key_type, &mut entry, entry_wire, &field.name)?,
            2 => {
                let value_field = Field {
                    name: field.name.clone(),
                    json_name: field.json_name.clone(),
                    number: 2,
                    ty: field.ty.clone(),
                    label: Label::Single,
                };
                value = decode_value(pool, scope, &value_field, &mut entry, entry_wire)?;
            }
            _ => entry.skip(entry_wire)?,
        }
    }

    let map = out
        .entry(field.json_name.clone())
        .or_insert_with(|| Value::Object(Map::new()));
    if !map.is_object() {
        *map = Value::Object(Map::new());
    }
    let Value::Object(map) = map else { unreachable!() };
    map.insert(map_key_string(&key), value);
    Ok(())
}

fn decode_value(
    pool: &Pool,
    scope: &Message,
    field: &Field,
    reader: &mut Reader<'_>,
    wire_type: WireType,
) -> Result<Value, CodecError> {
    match &field.ty {
        Ty::Scalar(s) => decode_scalar(*s, reader, wire_type, &field.name),
        Ty::Named(name) => {
            if pool.resolve_enum(scope, name).is_some() {
                if wire_type != WireType::Varint {
                    return Err(CodecError::Mismatch {
                        field: field.name.clone(),
                        reason: "enums are varint-encoded",
                    });
                }
                let raw = reader.read_varint()? as i64 as i32;
                return Ok(Value::from(raw));
            }
            let Some(nested) = pool.resolve_message(scope, name) else {
                return Err(CodecError::UnresolvedType(name.clone()));
            };
            if wire_type != WireType::LengthDelimited {
                return Err(CodecError::Mismatch {
                    field: field.name.clone(),
                    reason: "messages are length-delimited",
                });
            }
            let len = reader.read_varint()? as usize;
            let bytes = reader.read_slice(len)?;
            decode_message(pool, nested, bytes)
        }
    }
}

fn decode_scalar(
    scalar: Scalar,
    reader: &mut Reader<'_>,
    wire_type: WireType,
    field_name: &str,
) -> Result<Value, CodecError> {
    let mismatch = |reason| CodecError::Mismatch { field: field_name.to_owned(), reason };

    Ok(match scalar {
        Scalar::Uint32 | Scalar::Uint64 => match wire_type {
            WireType::Varint => Value::from(reader.read_varint()?),
            _ => return Err(mismatch("expected varint")),
        },
        Scalar::Int32 | Scalar::Int64 => match wire_type {
            WireType::Varint => Value::from(reader.read_varint()? as i64),
            _ => return Err(mismatch("expected varint")),
        },
        Scalar::Sint32 | Scalar::Sint64 => match wire_type {
            WireType::Varint => Value::from(zigzag_decode(reader.read_varint()?)),
            _ => return Err(mismatch("expected varint")),
        },
        Scalar::Bool => match wire_type {
            WireType::Varint => Value::from(reader.read_varint()? != 0),
            _ => return Err(mismatch("expected varint")),
        },
        Scalar::Fixed32 => match wire_type {
            WireType::Fixed32 => Value::from(reader.read_fixed32()?),
            _ => return Err(mismatch("expected fixed32")),
        },
        Scalar::Sfixed32 => match wire_type {
            WireType::Fixed32 => Value::from(reader.read_fixed32()? as i32),
            _ => return Err(mismatch("expected fixed32")),
        },
        Scalar::Fixed64 => match wire_type {
            WireType::Fixed64 => Value::from(reader.read_fixed64()?),
            _ => return Err(mismatch("expected fixed64")),
        },
        Scalar::Sfixed64 => match wire_type {
            WireType::Fixed64 => Value::from(reader.read_fixed64()? as i64),
            _ => return Err(mismatch("expected fixed64")),
        },
        Scalar::Float => match wire_type {
            WireType::Fixed32 => json_float(f64::from(f32::from_bits(reader.read_fixed32()?))),
            _ => return Err(mismatch("expected fixed32")),
        },
        Scalar::Double => match wire_type {
            WireType::Fixed64 => json_float(f64::from_bits(reader.read_fixed64()?)),
            _ => return Err(mismatch("expected fixed64")),
        },
        Scalar::String => match wire_type {
            WireType::LengthDelimited => {
                let len = reader.read_varint()? as usize;
                let bytes = reader.read_slice(len)?;
                match std::str::from_utf8(bytes) {
                    Ok(s) => Value::from(s),
                    Err(_) => return Err(mismatch("invalid utf-8 in string field")),
                }
            }
            _ => return Err(mismatch("expected length-delimited")),
        },
        Scalar::Bytes => match wire_type {
            WireType::LengthDelimited => {
                let len = reader.read_varint()? as usize;
                Value::from(BASE64.encode(reader.read_slice(len)?))
            }
            _ => return Err(mismatch("expected length-delimited")),
        },
    })
}

/// Non-finite floats cannot live in a JSON number; fold them to the
/// default so they drop out like any other default value.
fn json_float(v: f64) -> Value {
    serde_json::Number::from_f64(v).map(Value::Number).unwrap_or(Value::from(0))
}

fn default_scalar(scalar: Scalar) -> Value {
    match scalar {
        Scalar::Bool => Value::from(false),
        Scalar::String => Value::from(""),
        _ => Value::from(0),
    }
}

fn map_key_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

/// The element wire type when this field type can be packed
/// (numeric scalars and enums).
fn packed_wire_type(pool: &Pool, scope: &Message, ty: &Ty) -> Option<WireType> {
    match ty {
        Ty::Scalar(Scalar::String) | Ty::Scalar(Scalar::Bytes) => None,
        Ty::Named(name) => pool.resolve_enum(scope, name).map(|_| WireType::Varint),
        Ty::Scalar(Scalar::Fixed32) | Ty::Scalar(Scalar::Sfixed32) | Ty::Scalar(Scalar::Float) => {
            Some(WireType::Fixed32)
        }
        Ty::Scalar(Scalar::Fixed64) | Ty::Scalar(Scalar::Sfixed64) | Ty::Scalar(Scalar::Double) => {
            Some(WireType::Fixed64)
        }
        Ty::Scalar(_) => Some(WireType::Varint),
    }
}

pub(crate) fn is_default(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => {
            n.as_u64() == Some(0) || n.as_i64() == Some(0) || n.as_f64() == Some(0.0)
        }
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        // Message fields have explicit presence: an empty submessage is
        // not the same as an absent one.
        Value::Object(_) => false,
    }
}
