//! Module: response::links
//! Responsibility: navigation link maps for response envelopes.
//! Does not own: routing; paths here are templates, not resolved routes.

use std::collections::BTreeMap;

///
/// Links
///
/// Navigation links keyed by action name, each a URL template with `id`
/// standing in for the resource identifier.
///

pub type Links = BTreeMap<&'static str, String>;

/// Link map for the *other* CRUD actions on a resource.
///
/// Unrecognized actions yield an empty map: link generation is
/// permissive by design and never blocks a response from being sent.
#[must_use]
pub fn response_links(action: &str, url_prefix: &str) -> Links {
    let create = || format!("/{url_prefix}/create/");
    let update = || format!("/{url_prefix}/update/id/");
    let list = || format!("/{url_prefix}/list/");
    let details = || format!("/{url_prefix}/details/id/");
    let delete = || format!("/{url_prefix}/delete/id/");

    match action {
        "create" => Links::from([
            ("update", update()),
            ("list", list()),
            ("details", details()),
            ("delete", delete()),
        ]),
        "update" => Links::from([
            ("create", create()),
            ("list", list()),
            ("details", details()),
            ("delete", delete()),
        ]),
        "list" => Links::from([
            ("create", create()),
            ("update", update()),
            ("details", details()),
            ("delete", delete()),
        ]),
        "details" => Links::from([
            ("create", create()),
            ("update", update()),
            ("list", list()),
            ("delete", delete()),
        ]),
        "delete" => Links::from([
            ("create", create()),
            ("update", update()),
            ("list", list()),
            ("details", details()),
        ]),
        "upload" => Links::from([("list", list())]),
        _ => Links::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_links_point_to_the_other_actions() {
        let links = response_links("create", "brand");

        assert_eq!(links.len(), 4);
        assert!(!links.contains_key("create"));
        assert_eq!(links["update"], "/brand/update/id/");
        assert_eq!(links["list"], "/brand/list/");
        assert_eq!(links["details"], "/brand/details/id/");
        assert_eq!(links["delete"], "/brand/delete/id/");
    }

    #[test]
    fn every_crud_action_omits_itself() {
        for action in ["create", "update", "list", "details", "delete"] {
            let links = response_links(action, "category");

            assert_eq!(links.len(), 4, "{action} should link the other four");
            assert!(!links.contains_key(action), "{action} must not link itself");
        }
    }

    #[test]
    fn upload_links_back_to_list_only() {
        let links = response_links("upload", "brand");

        assert_eq!(links.len(), 1);
        assert_eq!(links["list"], "/brand/list/");
    }

    #[test]
    fn unrecognized_action_is_permissive() {
        assert!(response_links("publish", "brand").is_empty());
    }
}
