//! Structural comparison of value graphs.
//!
//! Two graphs are structurally equal when they have the same shape and the
//! same leaves, regardless of which handles they use. Records compare their
//! enumerable own properties in order and must share the same identity link.
//! Cycles are followed once: a pair of composites already under comparison
//! is assumed equal.

use simpleoo::{Record, Value};

/// Returns `true` when `left` and `right` are structurally equal.
///
/// # Examples
///
/// ```
/// use simpleoo::{Capabilities, Realm, Value};
/// use simpleoo_test_helpers::graph::structurally_equal;
///
/// let realm = Realm::with_capabilities(Capabilities::FULL);
/// let a = realm.record_from([("n", Value::from(1))]);
/// let b = realm.record_from([("n", Value::from(1))]);
/// assert!(structurally_equal(&Value::from(&a), &Value::from(&b)));
/// assert!(!structurally_equal(&Value::from(&a), &Value::from(2)));
/// ```
#[must_use]
pub fn structurally_equal(left: &Value, right: &Value) -> bool {
    Comparison::default().values(left, right)
}

#[derive(Default)]
struct Comparison {
    in_progress: Vec<(Value, Value)>,
}

impl Comparison {
    fn values(&mut self, left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Number(a), Value::Number(b)) if a.is_nan() && b.is_nan() => true,
            (Value::Record(a), Value::Record(b)) => {
                self.guarded(left, right, |cmp| cmp.records(a, b))
            }
            (Value::Array(a), Value::Array(b)) => self.guarded(left, right, |cmp| {
                a.len() == b.len()
                    && a
                        .to_vec()
                        .iter()
                        .zip(b.to_vec().iter())
                        .all(|(x, y)| cmp.values(x, y))
            }),
            (Value::Date(a), Value::Date(b)) => a.instant() == b.instant(),
            (Value::Pattern(a), Value::Pattern(b)) => {
                a.source() == b.source() && a.flags() == b.flags()
            }
            _ => left.strict_equals(right),
        }
    }

    fn records(&mut self, left: &Record, right: &Record) -> bool {
        let same_link = match (left.prototype(), right.prototype()) {
            (Some(a), Some(b)) => a.ptr_eq(&b),
            (None, None) => true,
            _ => false,
        };
        let keys = left.own_keys();
        same_link
            && keys == right.own_keys()
            && keys
                .iter()
                .all(|key| self.values(&left.get(key), &right.get(key)))
    }

    fn guarded<F>(&mut self, left: &Value, right: &Value, compare: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
    {
        let seen = self
            .in_progress
            .iter()
            .any(|(a, b)| a.strict_equals(left) && b.strict_equals(right));
        if seen {
            return true;
        }
        self.in_progress.push((left.clone(), right.clone()));
        compare(self)
    }
}

#[cfg(test)]
mod tests {
    use simpleoo::{Array, Capabilities, Date, Realm, Value};

    use super::structurally_equal;

    #[test]
    fn cyclic_graphs_compare_equal() {
        let realm = Realm::with_capabilities(Capabilities::FULL);
        let a = realm.record();
        a.set("self", &a);
        let b = realm.record();
        b.set("self", &b);
        assert!(structurally_equal(&Value::from(&a), &Value::from(&b)));
    }

    #[test]
    fn leaf_values_compare_by_content() {
        let first = Date::from_timestamp_millis(5).expect("in range");
        let second = Date::from_timestamp_millis(5).expect("in range");
        assert!(structurally_equal(&Value::from(first), &Value::from(second)));
        let short = Array::from_values(vec![Value::from(1)]);
        let long = Array::from_values(vec![Value::from(1), Value::from(2)]);
        assert!(!structurally_equal(&Value::from(short), &Value::from(long)));
        assert!(structurally_equal(
            &Value::Number(f64::NAN),
            &Value::Number(f64::NAN)
        ));
    }

    #[test]
    fn identity_links_must_match() {
        let realm = Realm::with_capabilities(Capabilities::FULL);
        let linked = realm.record();
        let bare = realm.record_with_prototype(None);
        assert!(!structurally_equal(&Value::from(&linked), &Value::from(&bare)));
    }
}
