#![cfg(feature = "serde")]

// ==============================================
// JSON ROUND TRIP (integration, feature = "serde")
// ==============================================

use lrukit::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Session {
    user: String,
    hits: u32,
}

#[test]
fn limit_map_round_trips_through_json() {
    let mut map = LimitLruMap::new(8);
    map.set("s1".to_string(), Session { user: "ana".into(), hits: 1 });
    map.set("s2".to_string(), Session { user: "bo".into(), hits: 5 });
    map.get("s1");

    let json = map.to_json().unwrap();
    assert_eq!(
        json,
        r#"[["s2",{"user":"bo","hits":5}],["s1",{"user":"ana","hits":1}]]"#
    );

    let mut restored: LimitLruMap<String, Session> = LimitLruMap::new(8);
    restored.assign_from_json(&json).unwrap();
    assert_eq!(restored.export(), map.export());
    assert_eq!(restored.to_string(), "s2 < s1");
}

#[test]
fn smaller_limit_keeps_newest_on_import() {
    let json = r#"[["a",1],["b",2],["c",3]]"#;
    let mut map: LimitLruMap<String, i32> = LimitLruMap::new(2);
    map.assign_from_json(json).unwrap();
    assert_eq!(map.to_string(), "b < c");
}

#[test]
fn serde_json_value_encoding_matches_to_json() {
    let mut map = LimitLruMap::new(4);
    map.set(1u32, "x");
    map.set(2u32, "y");
    let value = serde_json::to_value(&map).unwrap();
    assert_eq!(value, serde_json::json!([[1, "x"], [2, "y"]]));
}

#[test]
fn import_errors_are_typed() {
    let mut map: SizeLruMap<String, SizedItem<u8>> = SizeLruMap::new(10);
    let err = map.assign_from_json("{").unwrap_err();
    assert!(matches!(err, ImportError::Malformed(_)));

    let err = map
        .assign_from_json(r#"[["k",{"value":1,"size":11}]]"#)
        .unwrap_err();
    assert!(matches!(err, ImportError::Capacity(_)));
    assert!(err.to_string().contains("exceeds max size"));
}
