//! Index definition for the trusted-article corpus.

use serde_json::{json, Value};

/// Builds the index body for `PUT /indexes/{name}`.
///
/// `title` and `content` are full-text searchable; the remaining fields are
/// stored and retrievable only.
#[must_use]
pub fn index_definition(name: &str) -> Value {
    json!({
        "name": name,
        "fields": [
            { "name": "id", "type": "Edm.String", "key": true, "filterable": true },
            { "name": "title", "type": "Edm.String", "searchable": true },
            { "name": "content", "type": "Edm.String", "searchable": true },
            { "name": "source", "type": "Edm.String", "searchable": false, "filterable": true },
            { "name": "published_date", "type": "Edm.DateTimeOffset", "filterable": true, "sortable": true },
            { "name": "url", "type": "Edm.String", "searchable": false }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(def: &'a Value, name: &str) -> &'a Value {
        def["fields"]
            .as_array()
            .expect("fields array")
            .iter()
            .find(|f| f["name"] == name)
            .unwrap_or_else(|| panic!("missing field {name}"))
    }

    #[test]
    fn id_is_the_only_key() {
        let def = index_definition("news-index");
        assert_eq!(def["name"], "news-index");
        let keys: Vec<&str> = def["fields"]
            .as_array()
            .expect("fields array")
            .iter()
            .filter(|f| f["key"] == true)
            .filter_map(|f| f["name"].as_str())
            .collect();
        assert_eq!(keys, vec!["id"]);
    }

    #[test]
    fn title_and_content_are_searchable() {
        let def = index_definition("news-index");
        assert_eq!(field(&def, "title")["searchable"], true);
        assert_eq!(field(&def, "content")["searchable"], true);
        assert_eq!(field(&def, "source")["searchable"], false);
    }

    #[test]
    fn published_date_is_date_time_offset() {
        let def = index_definition("news-index");
        assert_eq!(field(&def, "published_date")["type"], "Edm.DateTimeOffset");
    }
}
