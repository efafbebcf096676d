//! Unit tests for property transfer and layered extension.

use rstest::{fixture, rstest};

use super::*;
use crate::realm::{CONSTRUCTOR_KEY, STRINGIFY_KEY};
use crate::value::{Attributes, Property};
use crate::{Capabilities, SimpleooError};

#[fixture]
fn realm() -> Realm {
    Realm::with_capabilities(Capabilities::FULL)
}

fn legacy() -> Realm {
    Realm::with_capabilities(Capabilities::LEGACY)
}

fn stringify(realm: &Realm, text: &'static str) -> Record {
    realm.function("toString", move |_, _| Value::from(text))
}

#[rstest]
#[case(false, "dst")]
#[case(true, "src")]
fn transfer_honours_conflict_policy(
    realm: Realm,
    #[case] replace_existing: bool,
    #[case] expected: &str,
) {
    let dst = realm.record_from([("shared", Value::from("dst"))]);
    let src = realm.record_from([
        ("shared", Value::from("src")),
        ("extra", Value::from(1)),
    ]);
    realm.transfer_properties(&dst, &Value::from(&src), replace_existing);
    assert_eq!(dst.get("shared"), Value::from(expected));
    assert_eq!(dst.get("extra"), Value::from(1));
}

#[rstest]
fn keep_existing_is_the_default_policy(realm: Realm) {
    let dst = realm.record_from([("a", Value::from(1))]);
    let src = realm.record_from([("a", Value::from(2))]);
    realm.composer().transfer_properties(&dst, &Value::from(&src));
    assert_eq!(dst.get("a"), Value::from(1));
    assert_eq!(ConflictPolicy::default(), ConflictPolicy::KeepExisting);
}

#[rstest]
fn transfer_skips_inherited_and_hidden_properties(realm: Realm) {
    let parent = realm.record_from([("inherited", Value::from(1))]);
    let src = Record::new(Some(parent));
    src.set("own", 2);
    src.define_property("secret", Property::hidden(3));
    let dst = realm.record();
    realm.transfer_properties(&dst, &Value::from(&src), true);
    assert_eq!(dst.own_property_names(), vec!["own"]);
}

#[rstest]
#[case(CONSTRUCTOR_KEY)]
#[case(STRINGIFY_KEY)]
#[case("hasOwnProperty")]
fn transfer_skips_universal_member_names(realm: Realm, #[case] name: &str) {
    let src = realm.record();
    src.set(name, "shadow");
    let dst = realm.record();
    realm.transfer_properties(&dst, &Value::from(&src), true);
    assert!(!dst.has_own(name));
}

#[rstest]
fn metadata_is_copied_when_supported(realm: Realm) {
    let src = realm.record();
    src.define_property("id", Property::with_attributes(7, Attributes::FROZEN));
    let dst = realm.record();
    realm.transfer_properties(&dst, &Value::from(&src), false);
    let copied = dst.own_property("id").expect("id transferred");
    assert_eq!(copied.attributes, Attributes::FROZEN);
}

#[rstest]
fn legacy_hosts_copy_values_only() {
    let realm = legacy();
    let src = realm.record();
    src.define_property("id", Property::with_attributes(7, Attributes::FROZEN));
    let dst = realm.record();
    realm.transfer_properties(&dst, &Value::from(&src), false);
    let copied = dst.own_property("id").expect("id transferred");
    assert_eq!(copied.value, Value::from(7));
    assert_eq!(copied.attributes, Attributes::VISIBLE);
}

#[rstest]
#[case(Capabilities::FULL)]
#[case(Capabilities::LEGACY)]
fn rejected_writes_are_skipped(#[case] capabilities: Capabilities) {
    let realm = Realm::with_capabilities(capabilities);
    let dst = realm.record();
    dst.define_property("id", Property::with_attributes(1, Attributes::FROZEN));
    let src = realm.record_from([("id", Value::from(2)), ("name", Value::from("x"))]);
    realm.transfer_properties(&dst, &Value::from(&src), true);
    assert_eq!(dst.get("id"), Value::from(1));
    assert_eq!(dst.get("name"), Value::from("x"));
}

#[rstest]
#[case(Capabilities::FULL)]
#[case(Capabilities::LEGACY)]
fn replace_existing_overwrites_sealed_writable_slots(#[case] capabilities: Capabilities) {
    let realm = Realm::with_capabilities(capabilities);
    let dst = realm.record();
    dst.define_property(
        "id",
        Property::with_attributes(
            1,
            Attributes {
                enumerable: true,
                writable: true,
                configurable: false,
            },
        ),
    );
    let src = realm.record_from([("id", Value::from(2))]);
    realm.transfer_properties(&dst, &Value::from(&src), true);
    assert_eq!(dst.get("id"), Value::from(2));
    let kept = dst.own_property("id").map(|p| p.is_configurable());
    assert_eq!(kept, Some(false));
}

#[rstest]
#[case(Value::Null)]
#[case(Value::Undefined)]
#[case(Value::from(42))]
#[case(Value::from("text"))]
fn non_record_sources_are_no_ops(realm: Realm, #[case] src: Value) {
    let dst = realm.record_from([("a", Value::from(1))]);
    realm.transfer_properties(&dst, &src, true);
    assert_eq!(dst.own_keys(), vec!["a"]);
}

#[rstest]
fn transfer_onto_itself_is_stable(realm: Realm) {
    let record = realm.record_from([("a", Value::from(1))]);
    realm.transfer_properties(&record, &Value::from(&record), true);
    assert_eq!(record.own_keys(), vec!["a"]);
    assert_eq!(record.get("a"), Value::from(1));
}

#[rstest]
fn mixin_applies_sources_in_order(realm: Realm) {
    let dst = realm.record_from([("a", Value::from("dst"))]);
    let first = realm.record_from([("a", Value::from("first")), ("b", Value::from("first"))]);
    let second = realm.record_from([("b", Value::from("second"))]);
    let returned = realm.mixin(&dst, &[Value::from(&first), Value::Null, Value::from(&second)]);
    assert!(returned.ptr_eq(&dst));
    assert_eq!(dst.get("a"), Value::from("first"));
    assert_eq!(dst.get("b"), Value::from("second"));
}

#[rstest]
fn extend_links_result_to_base(realm: Realm) {
    let base = realm.record_from([("eat", Value::from("yum"))]);
    let result = realm.extend(&base, &[]);
    assert!(result.prototype().is_some_and(|p| p.ptr_eq(&base)));
    assert!(!result.has_own("eat"));
    assert_eq!(result.get("eat"), Value::from("yum"));
    base.set("eat", "crunch");
    assert_eq!(result.get("eat"), Value::from("crunch"));
}

#[rstest]
fn extend_later_layers_win(realm: Realm) {
    let base = realm.record_from([("k", Value::from("base"))]);
    let a = realm.record_from([("k", Value::from("a"))]);
    let b = realm.record_from([("k", Value::from("b"))]);
    let result = realm.extend(&base, &[Value::from(&a), Value::from(&b)]);
    assert_eq!(result.get("k"), Value::from("b"));
    assert!(base.get("k") == Value::from("base"), "base must not be mutated");
}

#[rstest]
fn extend_copies_callable_stringify_last_layer_wins(realm: Realm) {
    let base = realm.record();
    let first = realm.record();
    first.set(STRINGIFY_KEY, stringify(&realm, "first"));
    let second = realm.record();
    second.set(STRINGIFY_KEY, stringify(&realm, "second"));
    let result = realm.extend(&base, &[Value::from(&first), Value::from(&second)]);
    let member = result.get_own(STRINGIFY_KEY).expect("stringify propagated");
    let output = member
        .as_record()
        .and_then(|f| f.call(&Value::from(&result), &[]));
    assert_eq!(output, Some(Value::from("second")));
}

#[rstest]
fn extend_ignores_non_callable_stringify(realm: Realm) {
    let layer = realm.record_from([(STRINGIFY_KEY, Value::from("not a function"))]);
    let result = realm.extend(&realm.record(), &[Value::from(&layer)]);
    assert!(!result.has_own(STRINGIFY_KEY));
}

#[rstest]
fn extend_sets_hidden_object_tag(realm: Realm) {
    let cat = realm.function("Cat", |_, _| Value::Undefined);
    let base = realm.instantiate(&cat).prototype().expect("linked");
    let result = realm.extend(&base, &[]);
    let tag = result.own_property(CONSTRUCTOR_KEY).expect("tag defined");
    assert!(!tag.is_enumerable());
    assert_eq!(tag.value, Value::from(realm.object_constructor()));
    assert!(result.enumerable_keys().is_empty());
}

#[rstest]
fn extend_all_requires_a_record_base(realm: Realm) {
    let empty = realm.extend_all(&[]).expect_err("empty sources rejected");
    assert!(matches!(empty.as_ref(), SimpleooError::EmptySources));
    let scalar = realm
        .extend_all(&[Value::from(1)])
        .expect_err("scalar base rejected");
    assert!(matches!(
        scalar.as_ref(),
        SimpleooError::InvalidBase { found: "number" }
    ));
    let base = realm.record_from([("a", Value::from(1))]);
    let layer = realm.record_from([("b", Value::from(2))]);
    let result = realm
        .extend_all(&[Value::from(&base), Value::from(&layer)])
        .expect("valid sources");
    assert_eq!(result.enumerable_keys(), vec!["b", "a"]);
}

#[rstest]
fn tagging_overrides_the_default_tag(realm: Realm) {
    let cat = realm.function("Cat", |_, _| Value::Undefined);
    let proto = realm.extend(&realm.record(), &[]);
    let tagged = make_tagged_record(&cat, &proto);
    assert!(tagged.ptr_eq(&proto));
    assert_eq!(proto.get(CONSTRUCTOR_KEY), Value::from(&cat));
}

#[rstest]
fn tagging_leaves_sealed_tags_alone(realm: Realm) {
    let cat = realm.function("Cat", |_, _| Value::Undefined);
    let def = realm.record();
    def.define_property(
        CONSTRUCTOR_KEY,
        Property::with_attributes(Value::Null, Attributes::FROZEN),
    );
    make_tagged_record(&cat, &def);
    assert_eq!(def.get(CONSTRUCTOR_KEY), Value::Null);
}

#[rstest]
fn record_composer_collects_layers_and_tag(realm: Realm) {
    let cat = realm.function("Cat", |_, _| Value::Undefined);
    let base = realm.record_from([("eat", Value::from("yum"))]);
    let mut composer = RecordComposer::with_capacity(base, 2);
    composer.push_layer(realm.record_from([("meow", Value::from("meow"))]));
    let tagged = composer.layer(Value::Null).tag(cat.clone());
    assert_eq!(tagged.layers().len(), 2);
    let result = tagged.compose(&realm);
    assert_eq!(result.get("meow"), Value::from("meow"));
    assert_eq!(result.get(CONSTRUCTOR_KEY), Value::from(&cat));
}
