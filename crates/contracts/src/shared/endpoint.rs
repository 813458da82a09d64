use serde::{Deserialize, Serialize};

use super::RecordId;
use crate::enums::BulkActionKind;

const ID_PLACEHOLDER: &str = "{id}";

/// Path segment for an id; `/`, `?` and `#` in string ids are escaped
fn id_segment(id: &RecordId) -> String {
    urlencoding::encode(id.as_str()).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Mutation endpoint with an `{id}` placeholder, e.g. `PUT /api/vehicle-types/{id}/activate/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEndpoint {
    pub method: HttpMethod,
    pub path: String,
}

impl ActionEndpoint {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Path with the record id substituted
    pub fn path_for(&self, id: &RecordId) -> String {
        self.path.replace(ID_PLACEHOLDER, &id_segment(id))
    }
}

/// REST surface of one managed resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEndpoints {
    /// `GET` for the list, `POST` for create
    pub collection: String,
    /// `PUT` target for update, with `{id}`
    pub item: String,
    #[serde(default)]
    pub activate: Option<ActionEndpoint>,
    #[serde(default)]
    pub deactivate: Option<ActionEndpoint>,
    #[serde(default)]
    pub delete: Option<ActionEndpoint>,
}

impl ResourceEndpoints {
    pub fn item_path(&self, id: &RecordId) -> String {
        self.item.replace(ID_PLACEHOLDER, &id_segment(id))
    }

    pub fn action(&self, kind: BulkActionKind) -> Option<&ActionEndpoint> {
        match kind {
            BulkActionKind::Activate => self.activate.as_ref(),
            BulkActionKind::Deactivate => self.deactivate.as_ref(),
            BulkActionKind::Delete => self.delete.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> ResourceEndpoints {
        ResourceEndpoints {
            collection: "/api/services/".into(),
            item: "/api/services/{id}/".into(),
            activate: Some(ActionEndpoint::new(HttpMethod::Put, "/api/services/{id}/activate/")),
            deactivate: None,
            delete: Some(ActionEndpoint::new(HttpMethod::Delete, "/api/services/{id}/")),
        }
    }

    #[test]
    fn test_id_substitution() {
        let e = endpoints();
        let id = RecordId::from(15);
        assert_eq!(e.item_path(&id), "/api/services/15/");
        assert_eq!(
            e.action(BulkActionKind::Activate).map(|a| a.path_for(&id)).as_deref(),
            Some("/api/services/15/activate/")
        );
        assert!(e.action(BulkActionKind::Deactivate).is_none());
    }

    #[test]
    fn test_string_ids_are_escaped() {
        let e = endpoints();
        let id = RecordId::from("bk/7?x#1");
        assert_eq!(e.item_path(&id), "/api/services/bk%2F7%3Fx%231/");
        assert_eq!(
            e.action(BulkActionKind::Delete).map(|a| a.path_for(&id)).as_deref(),
            Some("/api/services/bk%2F7%3Fx%231/")
        );
        assert_eq!(e.item_path(&RecordId::from("svc-12_a")), "/api/services/svc-12_a/");
    }

    #[test]
    fn test_method_wire_format() {
        let a: ActionEndpoint = serde_json::from_str(r#"{"method":"DELETE","path":"/x/{id}"}"#).unwrap();
        assert_eq!(a.method, HttpMethod::Delete);
        assert_eq!(a.method.as_str(), "DELETE");
    }
}
