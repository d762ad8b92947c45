use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::json;
use viaduct_proto::{Mapping, Protocol};

/// Write a schema directory: a protocol.csv plus `protocol/*.proto` files.
fn write_version(root: &PathBuf, csv: &str, files: &[(&str, &str)]) {
    let proto_dir = root.join("protocol");
    fs::create_dir_all(&proto_dir).unwrap();
    fs::write(root.join("protocol.csv"), csv).unwrap();
    for (name, src) in files {
        fs::write(proto_dir.join(format!("{name}.proto")), src).unwrap();
    }
}

fn fixture(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("viaduct-proto-tests")
        .join(format!("{}-{tag}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

const PING_REQ: &str = r#"
syntax = "proto3";
message PingReq {
    uint32 client_time = 1;
    float ue_time = 2;
    string payload = 3;
}
"#;

const MARK_MAP_REQ: &str = r#"
syntax = "proto3";
import "MapMarkPoint.proto";
message MarkMapReq {
    int32 op = 1;
    MapMarkPoint old = 2;
    MapMarkPoint mark = 3;
}
"#;

const MAP_MARK_POINT: &str = r#"
syntax = "proto3";
import "Vector.proto";
message MapMarkPoint {
    uint32 scene_id = 1;
    string name = 2;
    Vector pos = 3;
}
"#;

const VECTOR: &str = r#"
syntax = "proto3";
message Vector {
    float x = 1;
    float y = 2;
    float z = 3;
}
"#;

fn two_version_mapping(tag: &str) -> (Mapping, Protocol, Protocol) {
    let root = fixture(tag);
    let v1 = Protocol::from("v3.2.0");
    let v2 = Protocol::from("v3.3.0");

    let v1_dir = root.join("v3.2.0");
    let v2_dir = root.join("v3.3.0");
    write_version(
        &v1_dir,
        "PingReq,101\nMarkMapReq,1116\nClientOnlyNotify,150\nDebugNotify,1\n,5\n",
        &[
            ("PingReq", PING_REQ),
            ("MarkMapReq", MARK_MAP_REQ),
            ("MapMarkPoint", MAP_MARK_POINT),
            ("Vector", VECTOR),
            ("ClientOnlyNotify", "message ClientOnlyNotify { uint32 value = 1; }"),
        ],
    );
    write_version(
        &v2_dir,
        "PingReq,203\nMarkMapReq,1217\n",
        &[
            ("PingReq", PING_REQ),
            ("MarkMapReq", MARK_MAP_REQ),
            ("MapMarkPoint", MAP_MARK_POINT),
            ("Vector", VECTOR),
        ],
    );

    let dirs: HashMap<Protocol, PathBuf> =
        [(v1.clone(), v1_dir), (v2.clone(), v2_dir)].into_iter().collect();
    let mapping = Mapping::load(&v2, &dirs).unwrap();
    (mapping, v1, v2)
}

#[test]
fn decode_encode_round_trips() {
    let (mapping, v1, _) = two_version_mapping("round-trip");
    let value = json!({ "clientTime": 123456u32, "payload": "hello" });

    let bytes = mapping.encode(&v1, "PingReq", &value).unwrap();
    let decoded = mapping.decode(&v1, "PingReq", &bytes).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn defaults_are_dropped_on_encode() {
    let (mapping, v1, _) = two_version_mapping("defaults");
    let value = json!({ "clientTime": 0, "payload": "" });
    let bytes = mapping.encode(&v1, "PingReq", &value).unwrap();
    assert!(bytes.is_empty());
}

#[test]
fn unknown_keys_are_dropped_on_encode() {
    let (mapping, v1, _) = two_version_mapping("unknown-keys");
    let value = json!({ "clientTime": 7, "notAField": 9 });
    let bytes = mapping.encode(&v1, "PingReq", &value).unwrap();
    let decoded = mapping.decode(&v1, "PingReq", &bytes).unwrap();
    assert_eq!(decoded, json!({ "clientTime": 7 }));
}

#[test]
fn unknown_wire_fields_are_skipped_on_decode() {
    let (mapping, v1, _) = two_version_mapping("unknown-wire");
    // field 1 = 7, then unknown field 15 (varint 99)
    let bytes = [0x08, 0x07, 0x78, 0x63];
    let decoded = mapping.decode(&v1, "PingReq", &bytes).unwrap();
    assert_eq!(decoded, json!({ "clientTime": 7 }));
}

#[test]
fn nested_messages_resolve_through_imports() {
    let (mapping, v1, v2) = two_version_mapping("nested");
    let value = json!({
        "op": 1,
        "mark": { "sceneId": 3, "name": "goto", "pos": { "x": 1.5, "y": 0.25, "z": 2.0 } }
    });
    let bytes = mapping.encode(&v1, "MarkMapReq", &value).unwrap();
    let decoded = mapping.decode(&v2, "MarkMapReq", &bytes).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn pair_table_translates_by_name() {
    let (mapping, v1, v2) = two_version_mapping("pair");
    // Property: pair(from, to, c) == nameToId[to][idToName[from][c]].
    assert_eq!(mapping.pair(&v1, &v2, 101), Some(203));
    assert_eq!(mapping.pair(&v2, &v1, 203), Some(101));
    assert_eq!(mapping.pair(&v1, &v2, 1116), Some(1217));

    let name = mapping.command_name(&v1, 101).unwrap();
    assert_eq!(mapping.command_id(&v2, name), Some(203));
}

#[test]
fn pair_table_is_identity_for_same_version() {
    let (mapping, v1, _) = two_version_mapping("pair-identity");
    assert_eq!(mapping.pair(&v1, &v1, 101), Some(101));
}

#[test]
fn commands_without_counterpart_are_absent() {
    let (mapping, v1, v2) = two_version_mapping("no-counterpart");
    assert_eq!(mapping.pair(&v1, &v2, 150), None);
    assert_eq!(mapping.command_name(&v1, 9999), None);
}

#[test]
fn skipped_csv_rows_do_not_register() {
    let (mapping, v1, _) = two_version_mapping("skipped-rows");
    assert_eq!(mapping.command_name(&v1, 1), None); // DebugNotify
    assert_eq!(mapping.command_name(&v1, 5), None); // empty name
}

#[test]
fn unknown_message_errors() {
    let (mapping, v1, _) = two_version_mapping("unknown-message");
    assert!(mapping.decode(&v1, "NoSuchThing", &[]).is_err());
    assert!(mapping.encode(&v1, "NoSuchThing", &json!({})).is_err());
}

#[test]
fn duplicate_names_fail_the_load() {
    let root = fixture("duplicate");
    let v = Protocol::from("v1.0.0");
    let dir = root.join("v1");
    write_version(&dir, "PingReq,1\nPingReq,2\n", &[("PingReq", PING_REQ)]);
    let dirs: HashMap<Protocol, PathBuf> = [(v.clone(), dir)].into_iter().collect();
    assert!(Mapping::load(&v, &dirs).is_err());
}
