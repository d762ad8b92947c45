use viaduct_proto_parser::errors::ParseError;
use viaduct_proto_parser::parse_proto_file;
use viaduct_proto_parser::proto::{Label, Scalar, Ty};

#[test]
fn parses_scalar_fields() {
    let file = parse_proto_file(
        r#"
        syntax = "proto3";
        message PingReq {
            uint32 client_time = 1;
            float ue_time = 2;
            bytes payload = 3;
        }
        "#,
    )
    .unwrap();

    let msg = &file.messages[0];
    assert_eq!(msg.name, "PingReq");
    assert_eq!(msg.fields.len(), 3);

    let time = msg.field_by_number(1).unwrap();
    assert_eq!(time.name, "client_time");
    assert_eq!(time.json_name, "clientTime");
    assert_eq!(time.ty, Ty::Scalar(Scalar::Uint32));
    assert_eq!(time.label, Label::Single);
}

#[test]
fn parses_repeated_map_and_named_fields() {
    let file = parse_proto_file(
        r#"
        message MarkMapReq {
            repeated MapMarkPoint old_list = 1;
            map<uint32, string> notes = 2;
            MapMarkPoint mark = 3;
        }
        "#,
    )
    .unwrap();

    let msg = &file.messages[0];
    assert_eq!(msg.field_by_number(1).unwrap().label, Label::Repeated);
    assert_eq!(msg.field_by_number(2).unwrap().label, Label::Map(Scalar::Uint32));
    assert_eq!(
        msg.field_by_number(3).unwrap().ty,
        Ty::Named("MapMarkPoint".to_owned())
    );
}

#[test]
fn flattens_oneof_members() {
    let file = parse_proto_file(
        r#"
        message Wrapper {
            uint32 id = 1;
            oneof payload {
                bytes raw = 2;
                string text = 3;
            }
        }
        "#,
    )
    .unwrap();

    let msg = &file.messages[0];
    assert_eq!(msg.fields.len(), 3);
    assert_eq!(msg.field_by_number(2).unwrap().name, "raw");
    assert_eq!(msg.field_by_number(3).unwrap().label, Label::Single);
}

#[test]
fn parses_nested_messages_and_enums() {
    let file = parse_proto_file(
        r#"
        message ChatInfo {
            enum Icon {
                ICON_NONE = 0;
                ICON_SYSTEM = 1;
            }
            message SystemHint { int32 type = 1; }
            uint32 time = 1;
            SystemHint system_hint = 2;
        }
        "#,
    )
    .unwrap();

    let msg = &file.messages[0];
    assert_eq!(msg.nested_message("SystemHint").unwrap().fields.len(), 1);
    assert_eq!(msg.nested_enum("Icon").unwrap().value("ICON_SYSTEM"), Some(1));
}

#[test]
fn records_imports_and_skips_options() {
    let file = parse_proto_file(
        r#"
        syntax = "proto3";
        import "Vector.proto";
        option java_package = "irrelevant";
        message Dummy {
            Vector pos = 1 [deprecated = true];
        }
        "#,
    )
    .unwrap();

    assert_eq!(file.imports, vec!["Vector".to_owned()]);
    assert_eq!(file.messages[0].fields.len(), 1);
}

#[test]
fn skips_comments() {
    let file = parse_proto_file(
        r#"
        // line comment
        /* block
           comment */
        message A { uint32 x = 1; /* inline */ }
        "#,
    )
    .unwrap();
    assert_eq!(file.messages[0].fields.len(), 1);
}

#[test]
fn rejects_duplicate_field_numbers() {
    let err = parse_proto_file("message A { uint32 x = 1; uint32 y = 1; }").unwrap_err();
    assert!(matches!(err, ParseError::DuplicateFieldNumber { number: 1, .. }));
}

#[test]
fn rejects_zero_field_number() {
    let err = parse_proto_file("message A { uint32 x = 0; }").unwrap_err();
    assert!(matches!(err, ParseError::InvalidFieldNumber { .. }));
}

#[test]
fn rejects_truncated_input() {
    let err = parse_proto_file("message A { uint32 x = 1;").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedEof);
}
