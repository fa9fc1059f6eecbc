use bunner_route_trie::{RouteSpec, RouteTrie};

#[test]
fn router_when_two_parameter_routes_overlap_then_last_registered_wins() {
    let mut trie = RouteTrie::new();
    trie.add_route("/a/:x", RouteSpec::handler("h1"))
        .expect("route should register");
    trie.add_route("/a/:y", RouteSpec::handler("h2"))
        .expect("route should register");

    let found = trie.find_route("/a/1").expect("route should match");

    assert_eq!(*found.handler, "h2");
    assert_eq!(found.index, 1);
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.params.get("y").map(|s| s.as_str()), Some("1"));
}

#[test]
fn router_when_literal_registered_before_parameter_then_parameter_wins() {
    let mut trie = RouteTrie::new();
    trie.add_route("/users/me", RouteSpec::handler("me"))
        .expect("route should register");
    trie.add_route("/users/:id", RouteSpec::handler("user"))
        .expect("route should register");

    let found = trie.find_route("/users/me").expect("route should match");
    assert_eq!(*found.handler, "user");
    assert_eq!(found.params.get("id").map(|s| s.as_str()), Some("me"));
}

#[test]
fn router_when_literal_registered_after_parameter_then_literal_wins() {
    let mut trie = RouteTrie::new();
    trie.add_route("/users/:id", RouteSpec::handler("user"))
        .expect("route should register");
    trie.add_route("/users/me", RouteSpec::handler("me"))
        .expect("route should register");

    let found = trie.find_route("/users/me").expect("route should match");
    assert_eq!(*found.handler, "me");
    assert!(found.params.is_empty());

    let found = trie.find_route("/users/7").expect("route should match");
    assert_eq!(*found.handler, "user");
}

#[test]
fn router_when_deep_routes_compete_then_highest_index_wins_across_branches() {
    let mut trie = RouteTrie::new();
    trie.add_route("/:a/:b", RouteSpec::handler("params"))
        .expect("route should register");
    trie.add_route("/x/:b", RouteSpec::handler("half"))
        .expect("route should register");
    trie.add_route("/:a/y", RouteSpec::handler("other-half"))
        .expect("route should register");

    let found = trie.find_route("/x/y").expect("route should match");
    assert_eq!(*found.handler, "other-half");
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.params.get("a").map(|s| s.as_str()), Some("x"));

    let found = trie.find_route("/x/z").expect("route should match");
    assert_eq!(*found.handler, "half");
    assert_eq!(found.params.get("b").map(|s| s.as_str()), Some("z"));
    assert!(!found.params.contains_key("a"));
}

#[test]
fn router_when_same_pattern_registered_twice_then_later_handler_replaces_earlier() {
    let mut trie = RouteTrie::new();
    let first = trie
        .add_route("/same", RouteSpec::handler("old"))
        .expect("route should register");
    let second = trie
        .add_route("/same", RouteSpec::handler("new"))
        .expect("route should register");

    assert_eq!(first, vec![0]);
    assert_eq!(second, vec![1]);
    assert_eq!(trie.len(), 1);

    let found = trie.find_route("/same").expect("route should match");
    assert_eq!(*found.handler, "new");
    assert_eq!(found.index, 1);
}

#[test]
fn router_when_list_registered_then_last_element_wins() {
    let mut trie = RouteTrie::new();
    let assigned = trie
        .add_route("/multi", RouteSpec::list(["first", "second", "third"]))
        .expect("list should register");

    assert_eq!(assigned, vec![0, 1, 2]);

    let found = trie.find_route("/multi").expect("route should match");
    assert_eq!(*found.handler, "third");
    assert_eq!(found.index, 2);
}

#[test]
fn router_when_indices_assigned_then_strictly_increase_across_calls() {
    let mut trie = RouteTrie::new();
    let mut all = Vec::new();
    all.extend(trie.add_route("/a", RouteSpec::handler(1)).expect("add"));
    all.extend(trie.add_route("/b", RouteSpec::list([2, 3])).expect("add"));
    all.extend(
        trie.add_route("/c", RouteSpec::group([("d", RouteSpec::handler(4))]))
            .expect("add"),
    );

    assert_eq!(all, vec![0, 1, 2, 3]);
    assert_eq!(trie.next_index(), 4);
}
