//! Loaded capabilities and their effect on composition and copying.

use anyhow::{Context, Result, ensure};
use rstest::rstest;
use simpleoo::{Attributes, Capabilities, Property, Realm, Value};
use test_helpers::{fixtures::animal_kingdom, jail::load_capabilities};

#[rstest]
#[case(Capabilities::FULL, Attributes::FROZEN)]
#[case(Capabilities::LEGACY, Attributes::VISIBLE)]
fn capabilities_drive_transfer(
    #[case] capabilities: Capabilities,
    #[case] expected: Attributes,
) -> Result<()> {
    let realm = Realm::with_capabilities(capabilities);
    let src = realm.record();
    src.define_property("id", Property::with_attributes(1, Attributes::FROZEN));
    let merged = realm.extend(&realm.record(), &[Value::from(&src)]);
    let copied = merged.own_property("id").context("id transferred")?;
    ensure!(copied.value == Value::from(1));
    ensure!(copied.attributes == expected);
    Ok(())
}

#[rstest]
fn file_configured_realm_copies_through_constructors() -> Result<()> {
    let capabilities = load_capabilities(|jail| {
        jail.create_file("simpleoo.toml", "prototype_introspection = false\n")?;
        jail.set_env("SIMPLEOO_CONFIG_PATH", "simpleoo.toml");
        Ok(())
    })?;
    ensure!(capabilities.metadata_preservation);
    ensure!(!capabilities.prototype_introspection);

    let realm = Realm::with_capabilities(capabilities);
    let kingdom = animal_kingdom(&realm);
    let garfield = realm.instantiate(&kingdom.cat);
    let orphan = realm.record_with_prototype(Some(&realm.record_with_prototype(None)));

    ensure!(realm.instance_of(&realm.deep_copy(&Value::from(&garfield)), &kingdom.cat));
    let orphan_copy = realm.deep_copy(&Value::from(&orphan));
    let link = orphan_copy
        .as_record()
        .context("copy is a record")?
        .prototype();
    ensure!(link.is_none(), "no constructor means no link");
    Ok(())
}
