//! Canonical-form encoding against a message descriptor.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::Value;
use viaduct_proto_parser::proto::{Field, Label, Message, Scalar, Ty};

use crate::decode::is_default;
use crate::registry::Pool;
use crate::wire::{write_tag, write_varint, zigzag_encode, WireType};
use crate::CodecError;

/// Encode `value` (an object keyed by JSON field names) against `desc`.
///
/// Keys with no counterpart field are dropped; singular fields holding
/// their default are omitted. Fields are written in field-number order so
/// re-encoding a decoded message is byte-stable.
pub(crate) fn encode_message(
    pool: &Pool,
    desc: &Message,
    value: &Value,
) -> Result<Vec<u8>, CodecError> {
    let object = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        _ => {
            return Err(CodecError::Mismatch {
                field: desc.name.clone(),
                reason: "message values must be objects",
            })
        }
    };

    let mut fields: Vec<&Field> = desc.fields.iter().collect();
    fields.sort_by_key(|f| f.number);

    let mut out = Vec::new();
    for field in fields {
        let Some(field_value) = object.get(&field.json_name) else { continue };
        if field_value.is_null() {
            continue;
        }
        match &field.label {
            Label::Single => {
                if !is_default(field_value) {
                    encode_value(pool, desc, field, field_value, &mut out)?;
                }
            }
            Label::Repeated => encode_repeated(pool, desc, field, field_value, &mut out)?,
            Label::Map(key) => encode_map(pool, desc, field, *key, field_value, &mut out)?,
        }
    }
    Ok(out)
}

fn encode_repeated(
    pool: &Pool,
    scope: &Message,
    field: &Field,
    value: &Value,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let Value::Array(items) = value else {
        return Err(CodecError::Mismatch {
            field: field.name.clone(),
            reason: "repeated fields must be arrays",
        });
    };
    if items.is_empty() {
        return Ok(());
    }

    // Numeric scalars and enums pack; everything else repeats its tag.
    if packed_element(pool, scope, &field.ty).is_some() {
        let mut packed = Vec::new();
        for item in items {
            encode_scalar_payload(pool, scope, field, item, &mut packed)?;
        }
        write_tag(out, field.number, WireType::LengthDelimited);
        write_varint(out, packed.len() as u64);
        out.extend_from_slice(&packed);
        return Ok(());
    }

    for item in items {
        encode_value(pool, scope, field, item, out)?;
    }
    Ok(())
}

fn encode_map(
    pool: &Pool,
    scope: &Message,
    field: &Field,
    key_type: Scalar,
    value: &Value,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let Value::Object(entries) = value else {
        return Err(CodecError::Mismatch {
            field: field.name.clone(),
            reason: "map fields must be objects",
        });
    };

    for (key, entry_value) in entries {
        let mut entry = Vec::new();

        let key_value = parse_map_key(key, key_type).ok_or_else(|| CodecError::Mismatch {
            field: field.name.clone(),
            reason: "map key does not fit the declared key type",
        })?;
        let key_field = Field {
            name: field.name.clone(),
            json_name: field.json_name.clone(),
            number: 1,
            ty: Ty::Scalar(key_type),
            label: Label::Single,
        };
        if !is_default(&key_value) {
            encode_value(pool, scope, &key_field, &key_value, &mut entry)?;
        }

        if !is_default(entry_value) {
            let value_field = Field {
                name: field.name.clone(),
                json_name: field.json_name.clone(),
                number: 2,
                ty: field.ty.clone(),
                label: Label::Single,
            };
            encode_value(pool, scope, &value_field, entry_value, &mut entry)?;
        }

        write_tag(out, field.number, WireType::LengthDelimited);
        write_varint(out, entry.len() as u64);
        out.extend_from_slice(&entry);
    }
    Ok(())
}

fn encode_value(
    pool: &Pool,
    scope: &Message,
    field: &Field,
    value: &Value,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    match &field.ty {
        Ty::Scalar(Scalar::String) => {
            let Value::String(s) = value else {
                return Err(mismatch(field, "expected a string"));
            };
            write_tag(out, field.number, WireType::LengthDelimited);
            write_varint(out, s.len() as u64);
            out.extend_from_slice(s.as_bytes());
        }
        Ty::Scalar(Scalar::Bytes) => {
            let Value::String(s) = value else {
                return Err(mismatch(field, "expected base64 bytes"));
            };
            let raw = BASE64
                .decode(s)
                .map_err(|_| mismatch(field, "invalid base64 in bytes field"))?;
            write_tag(out, field.number, WireType::LengthDelimited);
            write_varint(out, raw.len() as u64);
            out.extend_from_slice(&raw);
        }
        Ty::Scalar(scalar) => {
            write_tag(out, field.number, scalar_wire_type(*scalar));
            encode_scalar_payload(pool, scope, field, value, out)?;
        }
        Ty::Named(name) => {
            if pool.resolve_enum(scope, name).is_some() {
                write_tag(out, field.number, WireType::Varint);
                encode_scalar_payload(pool, scope, field, value, out)?;
                return Ok(());
            }
            let Some(nested) = pool.resolve_message(scope, name) else {
                return Err(CodecError::UnresolvedType(name.clone()));
            };
            let bytes = encode_message(pool, nested, value)?;
            write_tag(out, field.number, WireType::LengthDelimited);
            write_varint(out, bytes.len() as u64);
            out.extend_from_slice(&bytes);
        }
    }
    Ok(())
}

/// Write just the payload of a numeric/bool/enum value (no tag) — shared
/// by the packed and single paths.
fn encode_scalar_payload(
    pool: &Pool,
    scope: &Message,
    field: &Field,
    value: &Value,
    out: &mut Vec<u8>,
) -> Result<(), CodecError> {
    let scalar = match &field.ty {
        Ty::Scalar(s) => *s,
        Ty::Named(name) if pool.resolve_enum(scope, name).is_some() => Scalar::Int32,
        Ty::Named(_) => return Err(mismatch(field, "messages cannot be packed")),
    };

    match scalar {
        Scalar::Uint32 | Scalar::Uint64 => {
            write_varint(out, as_u64(value).ok_or_else(|| mismatch(field, "expected an unsigned integer"))?)
        }
        Scalar::Int32 | Scalar::Int64 => {
            let v = as_i64(value).ok_or_else(|| mismatch(field, "expected an integer"))?;
            write_varint(out, v as u64);
        }
        Scalar::Sint32 | Scalar::Sint64 => {
            let v = as_i64(value).ok_or_else(|| mismatch(field, "expected an integer"))?;
            write_varint(out, zigzag_encode(v));
        }
        Scalar::Bool => {
            let Value::Bool(b) = value else { return Err(mismatch(field, "expected a bool")) };
            write_varint(out, u64::from(*b));
        }
        Scalar::Fixed32 => {
            let v = as_u64(value).ok_or_else(|| mismatch(field, "expected an unsigned integer"))?;
            out.extend_from_slice(&(v as u32).to_le_bytes());
        }
        Scalar::Sfixed32 => {
            let v = as_i64(value).ok_or_else(|| mismatch(field, "expected an integer"))?;
            out.extend_from_slice(&(v as i32).to_le_bytes());
        }
        Scalar::Fixed64 => {
            let v = as_u64(value).ok_or_else(|| mismatch(field, "expected an unsigned integer"))?;
            out.extend_from_slice(&v.to_le_bytes());
        }
        Scalar::Sfixed64 => {
            let v = as_i64(value).ok_or_else(|| mismatch(field, "expected an integer"))?;
            out.extend_from_slice(&v.to_le_bytes());
        }
        Scalar::Float => {
            let v = value.as_f64().ok_or_else(|| mismatch(field, "expected a number"))?;
            out.extend_from_slice(&(v as f32).to_le_bytes());
        }
        Scalar::Double => {
            let v = value.as_f64().ok_or_else(|| mismatch(field, "expected a number"))?;
            out.extend_from_slice(&v.to_le_bytes());
        }
        Scalar::String | Scalar::Bytes => return Err(mismatch(field, "not a numeric scalar")),
    }
    Ok(())
}

fn scalar_wire_type(scalar: Scalar) -> WireType {
    match scalar {
        Scalar::Fixed32 | Scalar::Sfixed32 | Scalar::Float => WireType::Fixed32,
        Scalar::Fixed64 | Scalar::Sfixed64 | Scalar::Double => WireType::Fixed64,
        Scalar::String | Scalar::Bytes => WireType::LengthDelimited,
        _ => WireType::Varint,
    }
}

fn packed_element(pool: &Pool, scope: &Message, ty: &Ty) -> Option<WireType> {
    match ty {
        Ty::Scalar(Scalar::String) | Ty::Scalar(Scalar::Bytes) => None,
        Ty::Named(name) => pool.resolve_enum(scope, name).map(|_| WireType::Varint),
        Ty::Scalar(s) => Some(scalar_wire_type(*s)),
    }
}

/// Accept any JSON number that fits: handlers write plain integers and
/// serde does not distinguish u32 from u64.
fn as_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_i64().and_then(|v| u64::try_from(v).ok()))
}

fn as_i64(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_u64().and_then(|v| i64::try_from(v).ok()))
}

fn parse_map_key(key: &str, key_type: Scalar) -> Option<Value> {
    Some(match key_type {
        Scalar::String => Value::from(key),
        Scalar::Bool => Value::from(key.parse::<bool>().ok()?),
        Scalar::Int32 | Scalar::Int64 | Scalar::Sint32 | Scalar::Sint64 | Scalar::Sfixed32
        | Scalar::Sfixed64 => Value::from(key.parse::<i64>().ok()?),
        _ => Value::from(key.parse::<u64>().ok()?),
    })
}

fn mismatch(field: &Field, reason: &'static str) -> CodecError {
    CodecError::Mismatch { field: field.name.clone(), reason }
}
