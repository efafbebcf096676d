//! Members of the universal base record.

use crate::value::{Property, Record, Value};

pub(super) fn install(object_prototype: &Record, function_prototype: &Record) {
    let members: [(&str, fn(&Value, &[Value]) -> Value); 4] = [
        ("toString", to_string),
        ("valueOf", value_of),
        ("hasOwnProperty", has_own_property),
        ("isPrototypeOf", is_prototype_of),
    ];
    for (name, body) in members {
        let member = Record::with_callable(
            Some(function_prototype.clone()),
            crate::value::Callable::new(name, body),
        );
        object_prototype.define_property(name, Property::hidden(member));
    }
}

pub(super) fn object_call(_this: &Value, args: &[Value]) -> Value {
    args.first()
        .filter(|value| value.is_composite())
        .cloned()
        .unwrap_or_default()
}

fn to_string(this: &Value, _args: &[Value]) -> Value {
    Value::from(format!("[object {}]", this.type_name()))
}

fn value_of(this: &Value, _args: &[Value]) -> Value {
    this.clone()
}

fn has_own_property(this: &Value, args: &[Value]) -> Value {
    let name = args.first().and_then(Value::as_str);
    let owned = this
        .as_record()
        .zip(name)
        .is_some_and(|(record, name)| record.has_own(name));
    Value::Bool(owned)
}

fn is_prototype_of(this: &Value, args: &[Value]) -> Value {
    let related = this
        .as_record()
        .zip(args.first().and_then(Value::as_record))
        .is_some_and(|(prototype, other)| prototype.is_prototype_of(other));
    Value::Bool(related)
}
