//! The Animal / Cat hierarchy used across behavioural tests.

use simpleoo::{Realm, Record, RecordComposer, Value, make_tagged_record};

/// An `Animal` constructor and a `Cat` constructor whose prototype extends
/// `Animal.prototype` with a `meow` member.
#[derive(Debug)]
pub struct AnimalKingdom {
    /// The `Animal` constructor.
    pub animal: Record,
    /// The `Cat` constructor.
    pub cat: Record,
    /// `Animal.prototype`, holding `eat`.
    pub animal_prototype: Record,
    /// `Cat.prototype`, linked to `Animal.prototype` and holding `meow`.
    pub cat_prototype: Record,
    /// The `eat` member.
    pub eat: Record,
    /// The `meow` member.
    pub meow: Record,
}

/// Build the hierarchy inside `realm`.
#[must_use]
pub fn animal_kingdom(realm: &Realm) -> AnimalKingdom {
    let animal = realm.function("Animal", |_, _| Value::Undefined);
    let cat = realm.function("Cat", |_, _| Value::Undefined);
    let eat = realm.function("eat", |_, _| Value::from("yum"));
    let meow = realm.function("meow", |_, _| Value::from("meow"));

    let animal_prototype = realm.record_from([("eat", Value::from(&eat))]);
    make_tagged_record(&animal, &animal_prototype);
    animal.set("prototype", &animal_prototype);

    let cat_prototype = RecordComposer::new(animal_prototype.clone())
        .layer(realm.record_from([("meow", Value::from(&meow))]))
        .tag(cat.clone())
        .compose(realm);
    cat.set("prototype", &cat_prototype);

    AnimalKingdom {
        animal,
        cat,
        animal_prototype,
        cat_prototype,
        eat,
        meow,
    }
}
