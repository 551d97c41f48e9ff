//! Schema-level tests: the query/mutation contract executed without HTTP.

use async_graphql::{BatchRequest, BatchResponse, Request, Variables};
use layer_graph::scalar::parse_value;
use layer_graph::{build_schema, InMemoryLayerStore, LayerSchema, LayerStore, SharedStore};
use serde_json::{json, Value};
use std::sync::Arc;

const LAYERS: &str = "{ layers { id name visible color lastModified } }";
const TOGGLE: &str =
    "mutation Toggle($id: ID!) { toggleLayerVisibility(id: $id) { id visible lastModified } }";

fn fresh() -> (LayerSchema, SharedStore) {
    let store: SharedStore = Arc::new(InMemoryLayerStore::new());
    (build_schema(store.clone()), store)
}

async fn run(schema: &LayerSchema, request: impl Into<Request>) -> (Value, Vec<async_graphql::ServerError>) {
    let response = schema.execute(request).await;
    (response.data.into_json().unwrap(), response.errors)
}

fn toggle(id: &str) -> Request {
    Request::new(TOGGLE).variables(Variables::from_json(json!({ "id": id })))
}

#[tokio::test]
async fn layers_returns_seeded_set() {
    let (schema, _) = fresh();
    let (data, errors) = run(&schema, LAYERS).await;
    assert!(errors.is_empty(), "{errors:?}");

    let layers = data["layers"].as_array().unwrap();
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0]["id"], "1");
    assert_eq!(layers[0]["name"], "Layer 1");
    assert_eq!(layers[0]["visible"], true);
    assert_eq!(layers[0]["color"], "#FF0000");
    assert_eq!(layers[1]["id"], "2");
    assert_eq!(layers[1]["visible"], false);
    assert_eq!(layers[1]["color"], "#00FF00");

    let stamp = layers[0]["lastModified"].as_str().unwrap();
    assert!(stamp.ends_with('Z'));
    assert!(parse_value(stamp).is_ok());
}

#[tokio::test]
async fn toggle_layer_two_makes_it_visible() {
    let (schema, _) = fresh();
    let (before, _) = run(&schema, LAYERS).await;
    let initial = parse_value(before["layers"][1]["lastModified"].as_str().unwrap()).unwrap();

    let (data, errors) = run(&schema, toggle("2")).await;
    assert!(errors.is_empty(), "{errors:?}");
    let toggled = &data["toggleLayerVisibility"];
    assert_eq!(toggled["id"], "2");
    assert_eq!(toggled["visible"], true);
    let stamped = parse_value(toggled["lastModified"].as_str().unwrap()).unwrap();
    assert!(stamped > initial);

    let (after, _) = run(&schema, LAYERS).await;
    assert_eq!(after["layers"][0], before["layers"][0]);
    assert_eq!(after["layers"][1]["visible"], true);
}

#[tokio::test]
async fn toggling_twice_is_an_involution_on_visible() {
    let (schema, _) = fresh();
    let (first, _) = run(&schema, toggle("1")).await;
    let (second, _) = run(&schema, toggle("1")).await;
    assert_eq!(first["toggleLayerVisibility"]["visible"], false);
    assert_eq!(second["toggleLayerVisibility"]["visible"], true);

    let t1 = parse_value(first["toggleLayerVisibility"]["lastModified"].as_str().unwrap()).unwrap();
    let t2 = parse_value(second["toggleLayerVisibility"]["lastModified"].as_str().unwrap()).unwrap();
    assert!(t2 > t1);
}

#[tokio::test]
async fn unknown_id_fails_and_changes_nothing() {
    let (schema, store) = fresh();
    let before = store.list_layers().await.unwrap();

    let (data, errors) = run(&schema, toggle("99")).await;
    assert_eq!(data["toggleLayerVisibility"], Value::Null);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Layer with ID 99 not found");
    let ext = errors[0].extensions.as_ref().unwrap();
    assert_eq!(ext.get("code"), Some(&async_graphql::Value::from("NOT_FOUND")));
    assert_eq!(ext.get("id"), Some(&async_graphql::Value::from("99")));

    assert_eq!(store.list_layers().await.unwrap(), before);
}

#[tokio::test]
async fn missing_id_argument_is_a_validation_error() {
    let (schema, store) = fresh();
    let before = store.list_layers().await.unwrap();
    let response = schema
        .execute("mutation { toggleLayerVisibility { id } }")
        .await;
    assert!(!response.errors.is_empty());
    assert_eq!(store.list_layers().await.unwrap(), before);
}

#[tokio::test]
async fn batch_failure_is_scoped_to_its_operation() {
    let (schema, _) = fresh();
    let batch = BatchRequest::Batch(vec![toggle("99"), toggle("2"), Request::new(LAYERS)]);
    let responses = match schema.execute_batch(batch).await {
        BatchResponse::Batch(responses) => responses,
        BatchResponse::Single(_) => panic!("expected a batch response"),
    };
    assert_eq!(responses.len(), 3);
    assert!(responses[0].is_err());
    assert!(responses[1].is_ok());
    assert!(responses[2].is_ok());

    let layers = responses[2].data.clone().into_json().unwrap();
    assert_eq!(layers["layers"][1]["visible"], true);
}

#[tokio::test]
async fn stores_are_isolated_per_schema() {
    let (a, _) = fresh();
    let (b, _) = fresh();
    run(&a, toggle("1")).await;
    let (data, _) = run(&b, LAYERS).await;
    assert_eq!(data["layers"][0]["visible"], true);
}

#[test]
fn sdl_exposes_the_contract() {
    let (schema, _) = fresh();
    let sdl = schema.sdl();
    assert!(sdl.contains("scalar DateTime"));
    assert!(sdl.contains("lastModified: DateTime\n"));
    assert!(sdl.contains("color: String\n"));
    assert!(sdl.contains("layers: [Layer!]!"));
    assert!(sdl.contains("toggleLayerVisibility(id: ID!): Layer\n"));
}
