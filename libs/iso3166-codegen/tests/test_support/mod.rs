#![allow(dead_code)]

use iso3166_codegen::DatasetClient;
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DATASET_PATH: &str = "/core/country-codes/r/country-codes.json";

/// One dataset row with the keys the generator reads, plus an unrelated column
pub fn row(name: &str, alpha2: &str, alpha3: &str) -> Value {
    json!({
        "CLDR display name": name,
        "ISO3166-1-Alpha-2": alpha2,
        "ISO3166-1-Alpha-3": alpha3,
        "Capital": "n/a"
    })
}

/// Start a mock server that serves `response` for the dataset path
pub async fn serve(response: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DATASET_PATH))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;
    server
}

pub async fn serve_json(body: Value) -> MockServer {
    serve(ResponseTemplate::new(200).set_body_json(body)).await
}

pub fn client_for(server: &MockServer, timeout: Duration) -> DatasetClient {
    DatasetClient::with_url(format!("{}{}", server.uri(), DATASET_PATH), timeout)
        .expect("failed to build dataset client")
}

/// Names of every `const` in the generated module, grouped by type name
pub fn const_names(source: &str, type_name: &str) -> Vec<String> {
    module_items(source)
        .into_iter()
        .filter_map(|item| match item {
            syn::Item::Const(c) => match c.ty.as_ref() {
                syn::Type::Path(p) if p.path.is_ident(type_name) => Some(c.ident.to_string()),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// Identifiers listed in a `&[T] = &[A, B, ...]` lookup list
pub fn list_entries(source: &str, list_name: &str) -> Vec<String> {
    let list = module_items(source)
        .into_iter()
        .find_map(|item| match item {
            syn::Item::Const(c) if c.ident == list_name => Some(c),
            _ => None,
        })
        .unwrap_or_else(|| panic!("missing list {list_name}"));

    let array = match list.expr.as_ref() {
        syn::Expr::Reference(r) => match r.expr.as_ref() {
            syn::Expr::Array(a) => a.clone(),
            other => panic!("unexpected list expression: {other:?}"),
        },
        other => panic!("unexpected list expression: {other:?}"),
    };

    array
        .elems
        .iter()
        .map(|e| match e {
            syn::Expr::Path(p) => p
                .path
                .get_ident()
                .expect("list entry should be a bare identifier")
                .to_string(),
            other => panic!("unexpected list entry: {other:?}"),
        })
        .collect()
}

fn module_items(source: &str) -> Vec<syn::Item> {
    let file = syn::parse_file(source).expect("generated source should parse");
    file.items
        .into_iter()
        .find_map(|item| match item {
            syn::Item::Mod(m) => m.content.map(|(_, items)| items),
            _ => None,
        })
        .expect("generated module")
}
