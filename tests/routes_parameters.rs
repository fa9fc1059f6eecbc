use bunner_route_trie::{RouteSpec, RouteTrie, RouterOptions, TrieError, path::PathError};

#[test]
fn router_when_parameter_route_registered_then_extracts_values() {
    let mut trie = RouteTrie::new();
    trie.add_route("/users/:id", RouteSpec::handler("user"))
        .expect("parameter route should register");

    let found = trie.find_route("/users/42").expect("parameter route should match");

    assert_eq!(*found.handler, "user");
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.params.get("id").map(|s| s.as_str()), Some("42"));
}

#[test]
fn router_when_multiple_parameters_then_extracts_all() {
    let mut trie = RouteTrie::new();
    trie.add_route("/users/:user/posts/:post", RouteSpec::handler(()))
        .expect("route should register");

    let found = trie.find_route("/users/7/posts/99").expect("route should match");

    assert_eq!(found.params.get("user").map(|s| s.as_str()), Some("7"));
    assert_eq!(found.params.get("post").map(|s| s.as_str()), Some("99"));
}

#[test]
fn router_when_value_is_percent_encoded_then_decodes_it() {
    let mut trie = RouteTrie::new();
    trie.add_route("/search/:term", RouteSpec::handler(()))
        .expect("route should register");

    let found = trie.find_route("/search/a%20b").expect("route should match");
    assert_eq!(found.params.get("term").map(|s| s.as_str()), Some("a b"));

    let found = trie
        .find_route("/search/caf%C3%A9%2Fbar")
        .expect("route should match");
    assert_eq!(found.params.get("term").map(|s| s.as_str()), Some("caf\u{e9}/bar"));
}

#[test]
fn router_when_parameter_name_is_percent_encoded_then_decodes_name() {
    let mut trie = RouteTrie::new();
    trie.add_route("/:first%20name", RouteSpec::handler(()))
        .expect("route should register");

    let found = trie.find_route("/ada").expect("route should match");
    assert_eq!(found.params.get("first name").map(|s| s.as_str()), Some("ada"));
}

#[test]
fn router_when_decoding_disabled_then_binds_raw_text() {
    let options = RouterOptions::builder()
        .decode_parameters(false)
        .build()
        .expect("options should build");
    let mut trie = RouteTrie::with_options(options);
    trie.add_route("/search/:q%21", RouteSpec::handler(()))
        .expect("route should register");

    let found = trie.find_route("/search/a%20b").expect("route should match");
    assert_eq!(found.params.get("q%21").map(|s| s.as_str()), Some("a%20b"));
}

#[test]
fn router_when_value_does_not_decode_then_returns_none() {
    let mut trie = RouteTrie::new();
    trie.add_route("/files/:name", RouteSpec::handler(()))
        .expect("route should register");

    assert!(trie.find_route("/files/%E0%A4%A").is_none());
    assert!(trie.find_route("/files/%C3").is_none());
}

#[test]
fn router_when_parameter_name_does_not_decode_then_returns_error() {
    let mut trie: RouteTrie<()> = RouteTrie::new();
    let err = trie.add_route("/files/:na%zzme", RouteSpec::handler(()));

    match err.expect_err("expected invalid parameter name") {
        TrieError::InvalidParameterName {
            segment, source, ..
        } => {
            assert_eq!(segment, ":na%zzme");
            assert!(matches!(source, PathError::InvalidPercentEncoding { index: 2, .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_sibling_branches_bind_different_names_then_bindings_do_not_leak() {
    let mut trie = RouteTrie::new();
    trie.add_route("/a/:x/c", RouteSpec::handler("c"))
        .expect("route should register");
    trie.add_route("/a/:y/d", RouteSpec::handler("d"))
        .expect("route should register");

    let found = trie.find_route("/a/1/d").expect("route should match");
    assert_eq!(*found.handler, "d");
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.params.get("y").map(|s| s.as_str()), Some("1"));
    assert!(!found.params.contains_key("x"));

    let found = trie.find_route("/a/1/c").expect("route should match");
    assert_eq!(*found.handler, "c");
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.params.get("x").map(|s| s.as_str()), Some("1"));
}

#[test]
fn router_when_parameter_and_literal_siblings_then_both_reachable() {
    let mut trie = RouteTrie::new();
    trie.add_route("/users/profile/edit", RouteSpec::handler("edit"))
        .expect("route should register");
    trie.add_route("/users/:id", RouteSpec::handler("user"))
        .expect("route should register");

    let found = trie.find_route("/users/profile/edit").expect("route should match");
    assert_eq!(*found.handler, "edit");
    assert!(found.params.is_empty());

    let found = trie.find_route("/users/profile").expect("route should match");
    assert_eq!(*found.handler, "user");
    assert_eq!(found.params.get("id").map(|s| s.as_str()), Some("profile"));
}

#[test]
fn router_when_parameter_segment_value_starts_with_colon_then_matches_as_value() {
    let mut trie = RouteTrie::new();
    trie.add_route("/tags/:tag", RouteSpec::handler(()))
        .expect("route should register");

    let found = trie.find_route("/tags/:rust").expect("route should match");
    assert_eq!(found.params.get("tag").map(|s| s.as_str()), Some(":rust"));
}
