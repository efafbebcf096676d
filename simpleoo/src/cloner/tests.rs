//! Unit tests for the deep-copy rules.

use std::cell::Cell;
use std::rc::Rc;

use rstest::{fixture, rstest};

use super::*;
use crate::Capabilities;
use crate::value::{Attributes, Cloneable, HostObject, Pattern, Property, TreeNode};

#[fixture]
fn realm() -> Realm {
    Realm::with_capabilities(Capabilities::FULL)
}

fn record_of(value: &Value) -> &Record {
    value.as_record().expect("value is a record")
}

#[derive(Debug, Default)]
struct Counter {
    calls: Cell<u32>,
}

impl HostObject for Counter {
    fn type_name(&self) -> &'static str {
        "counter"
    }

    fn as_cloneable(&self) -> Option<&dyn Cloneable> {
        Some(self)
    }
}

impl Cloneable for Counter {
    fn clone_with(&self, mode: CloneMode) -> Value {
        assert_eq!(mode, CloneMode::Deep);
        self.calls.set(self.calls.get() + 1);
        Value::from("cloned by counter")
    }
}

#[derive(Debug)]
struct Node {
    label: &'static str,
}

impl HostObject for Node {
    fn type_name(&self) -> &'static str {
        "node"
    }

    fn as_tree_node(&self) -> Option<&dyn TreeNode> {
        Some(self)
    }
}

impl TreeNode for Node {
    fn clone_node(&self, deep: bool) -> Value {
        Value::Host(Host::new(Node {
            label: if deep { "deep copy" } else { self.label },
        }))
    }
}

#[derive(Debug)]
struct Opaque;

impl HostObject for Opaque {
    fn type_name(&self) -> &'static str {
        "opaque"
    }
}

#[rstest]
#[case(Value::Undefined)]
#[case(Value::Null)]
#[case(Value::from(true))]
#[case(Value::from(1.5))]
#[case(Value::from("text"))]
fn scalars_pass_through(realm: Realm, #[case] value: Value) {
    assert_eq!(realm.deep_copy(&value), value);
}

#[rstest]
fn nested_records_are_independent(realm: Realm) {
    let inner = realm.record_from([("b", Value::from(1))]);
    let outer = realm.record_from([("a", Value::from(&inner))]);
    let copy = realm.deep_copy(&Value::from(&outer));
    let copy_inner = record_of(&copy).get("a");
    assert_ne!(copy_inner, Value::from(&inner));
    record_of(&copy_inner).set("b", 2);
    assert_eq!(inner.get("b"), Value::from(1));
}

#[rstest]
fn self_reference_becomes_self_reference_of_copy(realm: Realm) {
    let record = realm.record();
    record.set("self", &record);
    let copy = realm.deep_copy(&Value::from(&record));
    assert_ne!(copy, Value::from(&record));
    assert_eq!(record_of(&copy).get("self"), copy);
}

#[rstest]
fn mutual_references_terminate(realm: Realm) {
    let a = realm.record();
    let b = realm.record();
    a.set("peer", &b);
    b.set("peer", &a);
    let copy_a = realm.deep_copy(&Value::from(&a));
    let copy_b = record_of(&copy_a).get("peer");
    assert_ne!(copy_b, Value::from(&b));
    assert_eq!(record_of(&copy_b).get("peer"), copy_a);
}

#[rstest]
fn shared_children_stay_shared(realm: Realm) {
    let child = realm.record();
    let holder = realm.record_from([
        ("left", Value::from(&child)),
        ("right", Value::from(&child)),
    ]);
    let copy = realm.deep_copy(&Value::from(&holder));
    let copied = record_of(&copy);
    assert_eq!(copied.get("left"), copied.get("right"));
    assert_ne!(copied.get("left"), Value::from(&child));
}

#[rstest]
fn dates_keep_their_instant(realm: Realm) {
    let date = Date::from_timestamp_millis(1_700_000_000_000).expect("in range");
    let copy = realm.deep_copy(&Value::from(date.clone()));
    let copied = copy.as_date().expect("copy is a date");
    assert!(!copied.ptr_eq(&date));
    assert_eq!(copied.instant(), date.instant());
}

#[rstest]
fn patterns_keep_source_and_flags(realm: Realm) {
    let pattern = Pattern::new("m(e)+ow", "gi").expect("compiles");
    let copy = realm.deep_copy(&Value::from(pattern.clone()));
    let copied = copy.as_pattern().expect("copy is a pattern");
    assert!(!copied.ptr_eq(&pattern));
    assert_eq!(copied.to_string(), "/m(e)+ow/gi");
    assert!(copied.is_match("MEEOW"));
}

#[rstest]
fn cloneable_hosts_delegate_once(realm: Realm) {
    let host = Host::new(Counter::default());
    let holder = realm.record_from([
        ("first", Value::from(host.clone())),
        ("second", Value::from(host.clone())),
    ]);
    let copy = realm.deep_copy(&Value::from(&holder));
    assert_eq!(record_of(&copy).get("first"), Value::from("cloned by counter"));
    assert_eq!(record_of(&copy).get("second"), Value::from("cloned by counter"));
    let calls = host.downcast_ref::<Counter>().map(|c| c.calls.get());
    assert_eq!(calls, Some(1));
}

#[rstest]
fn record_clone_hooks_win_over_field_copy(realm: Realm) {
    struct Frozen;
    impl Cloneable for Frozen {
        fn clone_with(&self, _mode: CloneMode) -> Value {
            Value::from("snapshot")
        }
    }
    let record = realm.record_from([("a", Value::from(1))]);
    record.set_clone_hook(Rc::new(Frozen));
    assert_eq!(realm.deep_copy(&Value::from(&record)), Value::from("snapshot"));
}

#[rstest]
fn tree_nodes_clone_deeply(realm: Realm) {
    let node = Host::new(Node { label: "root" });
    let copy = realm.deep_copy(&Value::from(node));
    let label = copy
        .as_host()
        .and_then(|host| host.downcast_ref::<Node>())
        .map(|n| n.label);
    assert_eq!(label, Some("deep copy"));
}

#[rstest]
fn opaque_hosts_are_shared(realm: Realm) {
    let host = Value::from(Host::new(Opaque));
    assert_eq!(realm.deep_copy(&host), host);
}

#[rstest]
fn copies_keep_the_identity_link(realm: Realm) {
    let base = realm.record_from([("eat", Value::from("yum"))]);
    let child = Record::new(Some(base.clone()));
    child.set("meow", "meow");
    let copy = realm.deep_copy(&Value::from(&child));
    let copied = record_of(&copy);
    assert!(copied.prototype().is_some_and(|p| p.ptr_eq(&base)));
    assert!(copied.has_own("eat"), "inherited enumerables become own");
    assert_eq!(copied.own_keys(), vec!["meow", "eat"]);
}

#[rstest]
fn legacy_hosts_link_through_the_constructor() {
    let realm = Realm::with_capabilities(Capabilities::LEGACY);
    let cat = realm.function("Cat", |_, _| Value::Undefined);
    let garfield = realm.instantiate(&cat);
    let orphan = realm.record_with_prototype(Some(&realm.record_with_prototype(None)));
    orphan.set("x", 1);

    let copy = realm.deep_copy(&Value::from(&garfield));
    assert!(realm.instance_of(&copy, &cat));

    let orphan_copy = realm.deep_copy(&Value::from(&orphan));
    assert!(record_of(&orphan_copy).prototype().is_none());
    assert_eq!(record_of(&orphan_copy).get("x"), Value::from(1));
}

#[rstest]
fn function_records_share_code(realm: Realm) {
    let function = realm.function("bark", |_, _| Value::from("woof"));
    function.set("volume", 11);
    let copy = realm.deep_copy(&Value::from(&function));
    let copied = record_of(&copy);
    assert!(!copied.ptr_eq(&function));
    assert_eq!(copied.get("volume"), Value::from(11));
    let shares = copied
        .callable()
        .zip(function.callable())
        .is_some_and(|(a, b)| a.ptr_eq(&b));
    assert!(shares);
}

#[rstest]
fn attributes_are_not_preserved(realm: Realm) {
    let record = realm.record();
    record.define_property("id", Property::with_attributes(1, Attributes::FROZEN));
    record.define_property("hidden", Property::hidden(2));
    let copy = realm.deep_copy(&Value::from(&record));
    let copied = record_of(&copy);
    assert_eq!(
        copied.own_property("id").map(|p| p.attributes),
        Some(Attributes::VISIBLE)
    );
    assert!(!copied.has_own("hidden"));
}

#[rstest]
fn arrays_copy_elementwise(realm: Realm) {
    let inner = realm.record_from([("n", Value::from(1))]);
    let array = Array::from_values(vec![Value::from(&inner), Value::from("x")]);
    array.push(Value::from(array.clone()));
    let copy = realm.deep_copy(&Value::from(array.clone()));
    let copied = copy.as_array().expect("copy is an array");
    assert!(!copied.ptr_eq(&array));
    assert_eq!(copied.len(), 3);
    assert_ne!(copied.get(0), Some(Value::from(&inner)));
    assert_eq!(copied.get(1), Some(Value::from("x")));
    assert_eq!(copied.get(2), Some(copy.clone()));
}
