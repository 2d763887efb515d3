use serde_json::{Map, Value};

use crate::errors::ServiceError;

/// A catalog record: an arbitrary JSON object.
pub type Record = Map<String, Value>;

/// Identifier field assigned to every store.
pub const STORE_ID: &str = "Store_ID";
/// Identifier field assigned to every item.
pub const ITEM_ID: &str = "Item_ID";

/// Which collection a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Store,
    Item,
}

impl RecordKind {
    /// Name of the server-assigned identifier field.
    pub fn id_field(self) -> &'static str {
        match self {
            Self::Store => STORE_ID,
            Self::Item => ITEM_ID,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Store => "Store",
            Self::Item => "Item",
        }
    }

    pub fn not_found(self) -> ServiceError {
        ServiceError::not_found(self.label())
    }
}

/// Interpret a request body as a record. Only JSON objects qualify.
pub fn into_record(value: Value) -> Result<Record, ServiceError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ServiceError::Validation("request body must be a JSON object".into())),
    }
}

/// Build a new record from client fields plus its identifier.
/// The identifier always wins over a client-supplied field of the same name.
pub fn with_id(mut body: Record, kind: RecordKind, id: &str) -> Record {
    body.insert(kind.id_field().to_string(), Value::String(id.to_string()));
    body
}

/// Shallow merge: top-level keys of `patch` overwrite or extend `target`.
///
/// Keys absent from `patch` are left alone and nothing is ever removed. The
/// identifier field of `kind` is immutable and skipped if present in `patch`.
pub fn merge(target: &mut Record, patch: Record, kind: RecordKind) {
    let id_field = kind.id_field();
    for (key, value) in patch {
        if key == id_field {
            continue;
        }
        target.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rec(v: Value) -> Record {
        into_record(v).expect("object")
    }

    #[test]
    fn merge_overwrites_adds_and_keeps() {
        let mut target = rec(json!({"name": "Acme", "city": "Paris", "Store_ID": "abc"}));
        merge(&mut target, rec(json!({"name": "Acme2", "open": true})), RecordKind::Store);
        assert_eq!(
            Value::Object(target),
            json!({"name": "Acme2", "city": "Paris", "open": true, "Store_ID": "abc"})
        );
    }

    #[test]
    fn merge_is_last_write_wins() {
        let mut target = rec(json!({"Store_ID": "abc"}));
        merge(&mut target, rec(json!({"a": 1})), RecordKind::Store);
        merge(&mut target, rec(json!({"a": 2})), RecordKind::Store);
        assert_eq!(target["a"], json!(2));
    }

    #[test]
    fn merge_never_touches_own_id() {
        let mut store = rec(json!({"Store_ID": "abc"}));
        merge(&mut store, rec(json!({"Store_ID": "evil"})), RecordKind::Store);
        assert_eq!(store["Store_ID"], json!("abc"));

        // an item may be re-pointed at another store, but keeps its own id
        let mut item = rec(json!({"Item_ID": "i1", "Store_ID": "s1"}));
        merge(&mut item, rec(json!({"Item_ID": "i2", "Store_ID": "s2"})), RecordKind::Item);
        assert_eq!(item["Item_ID"], json!("i1"));
        assert_eq!(item["Store_ID"], json!("s2"));
    }

    #[test]
    fn nested_objects_are_replaced_not_merged() {
        let mut target = rec(json!({"address": {"city": "Paris", "zip": "75001"}}));
        merge(&mut target, rec(json!({"address": {"city": "Lyon"}})), RecordKind::Store);
        assert_eq!(target["address"], json!({"city": "Lyon"}));
    }

    #[test]
    fn with_id_overrides_client_value() {
        let r = with_id(rec(json!({"name": "Acme", "Store_ID": "mine"})), RecordKind::Store, "server");
        assert_eq!(r["Store_ID"], json!("server"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn only_objects_are_records() {
        assert!(into_record(json!([1, 2])).is_err());
        assert!(into_record(json!("x")).is_err());
        assert!(into_record(json!(null)).is_err());
        assert!(into_record(json!({})).is_ok());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(RecordKind::Item.not_found().message(), "Item not found");
        assert_eq!(RecordKind::Store.id_field(), "Store_ID");
    }
}
