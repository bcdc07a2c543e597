use lattice_router::{routes, CompileOptions, Method, Route, Router};

fn compile<T>(routes: Vec<Route<T, &'static str>>) -> Router<T, &'static str>
where
    T: Clone + Eq + std::hash::Hash,
{
    Router::compile(routes, CompileOptions::default()).unwrap()
}

#[test]
fn router_common() {
    let router = compile(routes! {
        GET "/user/:user_id/post/:post_id" => 1,
        GET "/user/:user_id/profile" => 2,
        GET "/user/:user_id/file/:*" => 3,
        GET "/user/:user_id/" => 4,
        GET "/explore" => 5,
        GET "/pan/*" => 6,
    });

    let cases: &[(_, _, &[(&str, &str)])] = &[
        (
            "/user/asd/post/123",
            1,
            &[("user_id", "asd"), ("post_id", "123")],
        ),
        ("/user/asd/profile", 2, &[("user_id", "asd")]),
        (
            "/user/asd/file/home/asd/.bashrc",
            3,
            &[("user_id", "asd"), ("*", "home/asd/.bashrc")],
        ),
        ("/user/asd/", 4, &[("user_id", "asd")]),
        ("/explore", 5, &[]),
        ("/pan/home/asd", 6, &[("*", "home/asd")]),
    ];

    for &(url, data, expected) in cases {
        let (found, params) = router.find(url, Method::Get).unwrap();
        assert_eq!(*found, data, "url = {:?}", url);
        let got: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_ref())).collect();
        assert_eq!(&got, expected, "url = {:?}", url);
    }
}

#[test]
fn literal_match_has_empty_params() {
    let router = compile(routes! {
        GET "/health" => 1,
        GET "/api/v1/items" => 2,
    });

    let (found, params) = router.find("/health", Method::Get).unwrap();
    assert_eq!(*found, 1);
    assert!(params.is_empty());

    let (found, _) = router.find("/api/v1/items", Method::Get).unwrap();
    assert_eq!(*found, 2);
}

#[test]
fn specific_method_beats_any() {
    let router = compile(routes! {
        GET "/items" => 1,
        ANY "/items" => 2,
    });

    assert_eq!(*router.find("/items", Method::Get).unwrap().0, 1);
    assert_eq!(*router.find("/items", Method::Post).unwrap().0, 2);
    assert_eq!(*router.find("/items", Method::Delete).unwrap().0, 2);
    // `Any` as a lookup method only reaches any-method routes.
    assert_eq!(*router.find("/items", Method::Any).unwrap().0, 2);
}

#[test]
fn captured_values_are_decoded() {
    let router = compile(routes! {
        GET "/items/:id" => 1,
    });

    let (_, params) = router.find("/items/42", Method::Get).unwrap();
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(params.parse::<u32>("id"), Some(Ok(42)));

    let (_, params) = router.find("/items/space%20case", Method::Get).unwrap();
    assert_eq!(params.get("id"), Some("space case"));
}

#[test]
fn literal_beats_capture() {
    let router = compile(routes! {
        GET "/items/:id" => 1,
        GET "/items/all" => 2,
    });

    assert_eq!(*router.find("/items/all", Method::Get).unwrap().0, 2);

    let (found, params) = router.find("/items/7", Method::Get).unwrap();
    assert_eq!(*found, 1);
    assert_eq!(params.get("id"), Some("7"));
}

#[test]
fn literal_subtree_failure_backs_out_to_capture() {
    let router = compile(routes! {
        GET "/u/:id/posts" => 1,
        GET "/u/admin/settings" => 2,
    });

    // "admin" exists as a literal child but its subtree has no "posts";
    // the walk backs out and retries through the capture.
    let (found, params) = router.find("/u/admin/posts", Method::Get).unwrap();
    assert_eq!(*found, 1);
    assert_eq!(params.get("id"), Some("admin"));

    assert_eq!(*router.find("/u/admin/settings", Method::Get).unwrap().0, 2);
}

#[test]
fn catch_all_binds_remainder_and_loses_to_siblings() {
    let router = compile(routes! {
        GET "/files/:*" => 1,
        GET "/files/readme" => 2,
        GET "/files/:name" => 3,
    });

    let (found, params) = router.find("/files/a/b/c", Method::Get).unwrap();
    assert_eq!(*found, 1);
    assert_eq!(params.get("*"), Some("a/b/c"));

    assert_eq!(*router.find("/files/readme", Method::Get).unwrap().0, 2);
    assert_eq!(*router.find("/files/other", Method::Get).unwrap().0, 3);

    // A catch-all needs at least one remaining segment.
    assert!(router.find("/files", Method::Get).is_none());
}

#[test]
fn wildcard_spellings_behave_identically() {
    let named = compile(routes! { GET "/docs/:*" => 1 });
    let bare = compile(routes! { GET "/docs/*" => 1 });

    for router in &[named, bare] {
        let (_, params) = router.find("/docs/a/b", Method::Get).unwrap();
        assert_eq!(params.get("*"), Some("a/b"));
    }

    let custom = compile(routes! { GET "/docs/:*rest" => 1 });
    let (_, params) = custom.find("/docs/a/b", Method::Get).unwrap();
    assert_eq!(params.get("rest"), Some("a/b"));
}

#[test]
fn nested_wildcard_beats_root_catch_all() {
    let router = compile(routes! {
        ANY "/:*" => 0,
        GET "/static/*" => 1,
    });

    // The deeper literal prefix wins regardless of wildcard spelling.
    let (found, params) = router.find("/static/js/app.js", Method::Get).unwrap();
    assert_eq!(*found, 1);
    assert_eq!(params.get("*"), Some("js/app.js"));

    let (found, params) = router.find("/other/x", Method::Get).unwrap();
    assert_eq!(*found, 0);
    assert_eq!(params.get("*"), Some("other/x"));

    // Wrong method under the literal prefix falls back to the root catch-all.
    assert_eq!(*router.find("/static/js/app.js", Method::Post).unwrap().0, 0);
}

#[test]
fn catch_all_names_are_per_method() {
    let router = compile(routes! {
        GET "/f/:*alpha" => 1,
        POST "/f/:*beta" => 2,
    });

    let (found, params) = router.find("/f/a/b", Method::Get).unwrap();
    assert_eq!(*found, 1);
    assert_eq!(params.get("alpha"), Some("a/b"));
    assert_eq!(params.get("beta"), None);

    let (found, params) = router.find("/f/a/b", Method::Post).unwrap();
    assert_eq!(*found, 2);
    assert_eq!(params.get("beta"), Some("a/b"));
    assert_eq!(params.get("alpha"), None);
}

#[test]
fn catch_all_any_keeps_its_own_name() {
    let router = compile(routes! {
        GET "/f/:*file" => 1,
        ANY "/f/:*rest" => 2,
    });

    let (found, params) = router.find("/f/x/y", Method::Get).unwrap();
    assert_eq!(*found, 1);
    assert_eq!(params.get("file"), Some("x/y"));

    let (found, params) = router.find("/f/x/y", Method::Delete).unwrap();
    assert_eq!(*found, 2);
    assert_eq!(params.get("rest"), Some("x/y"));
}

#[test]
fn catch_all_remainder_is_decoded() {
    let router = compile(routes! { GET "/files/:*" => 1 });

    let (_, params) = router.find("/files/a/b%20c", Method::Get).unwrap();
    assert_eq!(params.get("*"), Some("a/b c"));
}

#[test]
fn wrong_method_is_no_match() {
    let router = compile(routes! { GET "/items" => 1 });

    assert!(router.find("/items", Method::Post).is_none());
    assert!(router.find("/nothing", Method::Get).is_none());
}

#[test]
fn trailing_slash_is_ignored_once() {
    let router = compile(routes! {
        GET "/a/b" => 1,
        GET "/c//" => 2,
    });

    assert_eq!(*router.find("/a/b", Method::Get).unwrap().0, 1);
    assert_eq!(*router.find("/a/b/", Method::Get).unwrap().0, 1);
    // Only a single trailing empty segment is dropped, so "/c//" keeps one.
    assert_eq!(*router.find("/c//", Method::Get).unwrap().0, 2);
    assert!(router.find("/c", Method::Get).is_none());
}

#[test]
fn duplicate_route_last_wins() {
    let router = compile(routes! {
        GET "/items" => 1,
        GET "/items" => 2,
    });

    assert_eq!(*router.find("/items", Method::Get).unwrap().0, 2);
}

#[test]
fn catch_all_must_be_final() {
    let result: Result<Router<usize>, _> = Router::compile(
        vec![Route::new(Method::Get, "/files/:*/x", 1)],
        CompileOptions::default(),
    );
    let err = result.unwrap_err();
    assert_eq!(err.pattern(), "/files/:*/x");

    let result: Result<Router<usize>, _> = Router::compile(
        vec![Route::new(Method::Get, "/x/:", 1)],
        CompileOptions::default(),
    );
    assert!(result.is_err());
}

#[test]
fn duplicate_capture_name_is_rejected() {
    let result: Result<Router<usize>, _> = Router::compile(
        vec![Route::new(Method::Get, "/u/:id/p/:id", 1)],
        CompileOptions::default(),
    );
    let err = result.unwrap_err();
    assert_eq!(err.pattern(), "/u/:id/p/:id");

    let result: Result<Router<usize>, _> = Router::compile(
        vec![Route::new(Method::Get, "/u/:id/:*id", 1)],
        CompileOptions::default(),
    );
    assert!(result.is_err());

    // Distinct names in one template stay fine.
    let result: Result<Router<usize>, _> = Router::compile(
        vec![Route::new(Method::Get, "/u/:uid/p/:pid", 1)],
        CompileOptions::default(),
    );
    assert!(result.is_ok());
}

#[test]
fn routers_are_independent_values() {
    let v1 = compile(routes! { GET "/items/:id" => 1 });
    let v2 = compile(routes! { GET "/items/:id/detail" => 2 });

    assert!(v1.find("/items/7", Method::Get).is_some());
    assert!(v2.find("/items/7", Method::Get).is_none());
    assert!(v2.find("/items/7/detail", Method::Get).is_some());
}

#[test]
fn router_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Router<usize, String>>();

    let router = std::sync::Arc::new(compile(routes! { GET "/items/:id" => 1 }));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = router.clone();
            std::thread::spawn(move || {
                let path = format!("/items/{}", i);
                let (found, params) = router.find(&path, Method::Get).unwrap();
                assert_eq!(*found, 1);
                assert_eq!(params.get("id"), Some(format!("{}", i).as_str()));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}
