//! Writing values through paths.

use facet_dotpath::{Path, Segment, get, set};
use facet_testhelpers::test;
use facet_value::{Value, ValueType, value};

// ---------------------------------------------------------------------------
// Auto-vivification
// ---------------------------------------------------------------------------

#[test]
fn creates_missing_objects() {
    let mut tree = value!({});
    set(&mut tree, "a.b.c", 1).unwrap();
    assert_eq!(tree, value!({"a": {"b": {"c": 1}}}));
}

#[test]
fn keeps_existing_siblings() {
    let mut tree = value!({"a": {"keep": true}});
    set(&mut tree, "a.b.c", "new").unwrap();
    assert_eq!(tree, value!({"a": {"keep": true, "b": {"c": "new"}}}));
}

#[test]
fn descends_into_existing_containers() {
    let mut tree = value!({"a": {"list": [1]}});
    set(&mut tree, "a.list.[0]", 2).unwrap();
    assert_eq!(tree, value!({"a": {"list": [2]}}));
}

#[test]
fn index_on_object_creates_bracketed_member() {
    let mut tree = value!({});
    set(&mut tree, "a.[0]", 1).unwrap();
    assert_eq!(tree, value!({"a": {"[0]": 1}}));
    assert_eq!(get(&tree, "a.[0]", &Value::NULL), &Value::from(1));
}

#[test]
fn terminal_write_replaces_containers() {
    let mut tree = value!({"a": {"b": {"c": 1}}});
    set(&mut tree, "a.b", "flat").unwrap();
    assert_eq!(tree, value!({"a": {"b": "flat"}}));
}

#[test]
fn terminal_write_replaces_scalars() {
    let mut tree = value!({"a": 1});
    set(&mut tree, "a", value!({"b": 2})).unwrap();
    assert_eq!(tree, value!({"a": {"b": 2}}));
}

#[test]
fn empty_path_is_a_no_op() {
    let mut tree = value!({"a": 1});
    set(&mut tree, "", 2).unwrap();
    set(&mut tree, "..", 2).unwrap();
    set(&mut tree, Path::new(), 2).unwrap();
    assert_eq!(tree, value!({"a": 1}));
}

#[test]
fn pre_split_path_writes_dotted_key() {
    let mut tree = value!({});
    set(&mut tree, ["hosts", "example.com"], 443).unwrap();
    assert_eq!(tree, value!({"hosts": {"example.com": 443}}));
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn terminal_index_replaces_element() {
    let mut tree = value!({"a": [10, 20, 30]});
    set(&mut tree, "a.[1]", 99).unwrap();
    assert_eq!(tree, value!({"a": [10, 99, 30]}));
}

#[test]
fn terminal_index_at_length_appends() {
    let mut tree = value!({"a": [1]});
    set(&mut tree, "a.[1]", 2).unwrap();
    set(&mut tree, "a.2", 3).unwrap();
    assert_eq!(tree, value!({"a": [1, 2, 3]}));
}

#[test]
fn terminal_index_beyond_length_is_a_conflict() {
    let mut tree = value!({"a": [1]});

    let err = set(&mut tree, "a.[2]", 3).unwrap_err();
    assert_eq!(err.blocked_at(), Path::parse("a"));
    assert_eq!(err.found(), Some(ValueType::Array));
    insta::assert_snapshot!(err.to_string(), @"cannot add a nested property `[2]` under `a`: found an array");

    let err = set(&mut tree, "a.[1000000000000]", 2).unwrap_err();
    assert_eq!(err.segment(), &Segment::Index(1_000_000_000_000));

    assert_eq!(tree, value!({"a": [1]}));
}

#[test]
fn index_descends_into_existing_element() {
    let mut tree = value!({"credentials": [{"user": "ann"}]});
    set(&mut tree, "credentials.[0].token", "t0k3n").unwrap();
    assert_eq!(
        tree,
        value!({"credentials": [{"user": "ann", "token": "t0k3n"}]})
    );
}

#[test]
fn decimal_key_writes_array_element() {
    let mut tree = value!({"a": [10, 20]});
    set(&mut tree, "a.0", 11).unwrap();
    assert_eq!(tree, value!({"a": [11, 20]}));
}

// ---------------------------------------------------------------------------
// Conflicts
// ---------------------------------------------------------------------------

#[test]
fn nesting_under_scalar_is_a_conflict() {
    let mut tree = value!({"a": 1});
    let err = set(&mut tree, "a.b", 2).unwrap_err();

    assert_eq!(tree, value!({"a": 1}));
    assert_eq!(err.blocked_at(), Path::parse("a"));
    assert_eq!(err.segment(), &Segment::Key("b".to_string()));
    assert_eq!(err.found(), Some(ValueType::Number));
    insta::assert_snapshot!(err.to_string(), @"cannot add a nested property `b` under `a`: found a number");
}

#[test]
fn nesting_under_null_is_a_conflict() {
    let mut tree = value!({"a": {"b": null}});
    let err = set(&mut tree, "a.b.c.d", 2).unwrap_err();

    assert_eq!(tree, value!({"a": {"b": null}}));
    assert_eq!(err.path(), &Path::parse("a.b.c.d"));
    assert_eq!(err.segment_index(), 2);
    insta::assert_snapshot!(err.to_string(), @"cannot add a nested property `c` under `a.b`: found null");
}

#[test]
fn missing_array_slot_on_the_way_down_is_a_conflict() {
    let mut tree = value!({"a": [{"x": 1}]});
    let err = set(&mut tree, "a.[5].x", 2).unwrap_err();

    assert_eq!(tree, value!({"a": [{"x": 1}]}));
    assert_eq!(err.found(), None);
    insta::assert_snapshot!(err.to_string(), @"cannot add a nested property `x` under `a.[5]`: found nothing");
}

#[test]
fn scalar_array_element_on_the_way_down_is_a_conflict() {
    let mut tree = value!({"a": ["text"]});
    let err = set(&mut tree, "a.[0].x", 2).unwrap_err();

    assert_eq!(err.found(), Some(ValueType::String));
    assert_eq!(err.blocked_at(), Path::parse("a.[0]"));
}

#[test]
fn named_key_on_array_is_a_conflict() {
    let mut tree = value!({"a": [1, 2]});

    let err = set(&mut tree, "a.name", 3).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"cannot add a nested property `name` under `a`: found an array");

    let err = set(&mut tree, "a.name.deeper", 3).unwrap_err();
    assert_eq!(err.blocked_at(), Path::parse("a"));
    assert_eq!(err.found(), Some(ValueType::Array));

    let err = set(&mut tree, "a.[]", 3).unwrap_err();
    assert_eq!(err.segment(), &Segment::Key("[]".to_string()));

    assert_eq!(tree, value!({"a": [1, 2]}));
}

#[test]
fn scalar_root_is_a_conflict() {
    let mut tree = Value::from(3);
    let err = set(&mut tree, "a", 1).unwrap_err();

    assert_eq!(tree, Value::from(3));
    insta::assert_snapshot!(err.to_string(), @"cannot add a nested property `a` under `<root>`: found a number");
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn written_values_read_back() {
    let mut tree = value!({"list": [{"slot": 0}], "flag": true});
    let paths = [
        "a",
        "a2.b",
        "deep.er.and.deeper",
        "list.[0].slot",
        "list.[0].other.thing",
        "list.[1]",
    ];
    for (i, path) in paths.iter().enumerate() {
        let value = Value::from(format!("v{i}"));
        set(&mut tree, *path, value.clone()).unwrap();
        assert_eq!(get(&tree, *path, &Value::NULL), &value, "path {path}");
    }
}
