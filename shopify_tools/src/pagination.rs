//! Cursor pagination for the Shopify REST API.
//!
//! Shopify returns continuation links in the `Link` header, e.g.
//!
//! ```text
//! <https://shop.myshopify.com/admin/api/2024-04/products.json?limit=250&page_info=abc>; rel="previous",
//! <https://shop.myshopify.com/admin/api/2024-04/products.json?limit=250&page_info=def>; rel="next"
//! ```
//!
//! Only the link whose relation is `next` is followed; the `page_info` query value of that link is the cursor.
use url::Url;

/// A single `<uri>; param=value; ...` entry of a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkValue {
    pub uri: String,
    pub rels: Vec<String>,
}

impl LinkValue {
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rels.iter().any(|r| r.eq_ignore_ascii_case(rel))
    }
}

/// Splits a `Link` header into its entries. URIs are delimited by angle brackets, so commas inside a URI (e.g. in a
/// `fields=` list) do not split an entry.
pub fn parse_link_header(header: &str) -> Vec<LinkValue> {
    header
        .split('<')
        .skip(1)
        .filter_map(|entry| {
            let (uri, params) = entry.split_once('>')?;
            let rels = params
                .split(';')
                .filter_map(|p| {
                    let (key, value) = p.trim().split_once('=')?;
                    key.trim().eq_ignore_ascii_case("rel").then(|| value.trim().trim_end_matches(',').trim())
                })
                .flat_map(|v| v.trim_matches('"').split_whitespace().map(String::from).collect::<Vec<_>>())
                .collect();
            Some(LinkValue { uri: uri.trim().to_string(), rels })
        })
        .collect()
}

/// Extracts the `page_info` cursor from the `rel="next"` entry of a `Link` header. Returns `None` when there is no
/// header, no `next` entry, or the `next` entry has no `page_info` parameter.
pub fn next_page_cursor(header: Option<&str>) -> Option<String> {
    let next = parse_link_header(header?).into_iter().find(|l| l.has_rel("next"))?;
    page_info(&next.uri)
}

fn page_info(uri: &str) -> Option<String> {
    let url = Url::parse(uri).ok()?;
    url.query_pairs().find(|(k, _)| k == "page_info").map(|(_, v)| v.into_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    const BASE: &str = "https://bundles.myshopify.com/admin/api/2024-04/products.json";

    #[test]
    fn next_link_only() {
        let header = format!("<{BASE}?limit=250&page_info=eyJsYXN0X2lkIjo0fQ>; rel=\"next\"");
        assert_eq!(next_page_cursor(Some(&header)).as_deref(), Some("eyJsYXN0X2lkIjo0fQ"));
    }

    #[test]
    fn previous_before_next() {
        let header = format!(
            "<{BASE}?limit=250&page_info=prevcursor>; rel=\"previous\", <{BASE}?limit=250&page_info=nextcursor>; \
             rel=\"next\""
        );
        assert_eq!(next_page_cursor(Some(&header)).as_deref(), Some("nextcursor"));
    }

    #[test]
    fn last_page_has_only_previous() {
        let header = format!("<{BASE}?limit=250&page_info=prevcursor>; rel=\"previous\"");
        assert_eq!(next_page_cursor(Some(&header)), None);
        assert_eq!(next_page_cursor(None), None);
        assert_eq!(next_page_cursor(Some("")), None);
    }

    #[test]
    fn next_without_cursor_terminates() {
        let header = format!("<{BASE}?limit=250>; rel=\"next\"");
        assert_eq!(next_page_cursor(Some(&header)), None);
    }

    #[test]
    fn commas_inside_uri() {
        let header = format!(
            "<{BASE}?limit=250&fields=id,title,tags&page_info=abc>; rel=\"previous\", \
             <{BASE}?limit=250&fields=id,title,tags&page_info=def>; rel=\"next\""
        );
        let links = parse_link_header(&header);
        assert_eq!(links.len(), 2);
        assert!(links[0].has_rel("previous"));
        assert!(links[1].has_rel("next"));
        assert_eq!(next_page_cursor(Some(&header)).as_deref(), Some("def"));
    }

    #[test]
    fn unquoted_rel() {
        let header = format!("<{BASE}?page_info=xyz>; rel=next");
        assert_eq!(next_page_cursor(Some(&header)).as_deref(), Some("xyz"));
    }
}
