//! Collection query options and their query-string encoding.

/// Name of the collection holding request records.
pub const REQUESTS_COLLECTION: &str = "requests";

/// Attributes the explorer asks the API to include for each request.
pub const REQUEST_ATTRIBUTES: [&str; 6] = [
    "picture",
    "picture.image_href",
    "approval_state",
    "created_on",
    "description",
    "requester_name",
];

/// Options accepted by a collection query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Sub-collection to expand (typically `resources`).
    pub expand: Option<String>,
    /// Attribute projection; empty means the API default.
    pub attributes: Vec<String>,
    /// Server-side filter expressions, sent as repeated `filter[]` pairs.
    pub filter: Vec<String>,
}

impl QueryOptions {
    /// Options used by the request explorer: expanded resources, the fixed
    /// attribute projection and no server-side filters.
    #[must_use]
    pub fn requests() -> Self {
        Self {
            expand: Some("resources".to_owned()),
            attributes: REQUEST_ATTRIBUTES.iter().map(|&attr| attr.to_owned()).collect(),
            filter: Vec::new(),
        }
    }

    /// Encodes the options as query-string pairs.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(expand) = &self.expand {
            pairs.push(("expand", expand.clone()));
        }
        if !self.attributes.is_empty() {
            pairs.push(("attributes", self.attributes.join(",")));
        }
        pairs.extend(self.filter.iter().map(|expr| ("filter[]", expr.clone())));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_options_expand_resources_with_fixed_projection() {
        let pairs = QueryOptions::requests().query_pairs();

        assert_eq!(
            pairs,
            vec![
                ("expand", "resources".to_owned()),
                (
                    "attributes",
                    "picture,picture.image_href,approval_state,created_on,description,requester_name"
                        .to_owned()
                ),
            ]
        );
    }

    #[test]
    fn each_filter_becomes_its_own_pair() {
        let options = QueryOptions {
            filter: vec!["approval_state=denied".to_owned(), "id>5".to_owned()],
            ..QueryOptions::default()
        };

        assert_eq!(
            options.query_pairs(),
            vec![
                ("filter[]", "approval_state=denied".to_owned()),
                ("filter[]", "id>5".to_owned()),
            ]
        );
    }
}
