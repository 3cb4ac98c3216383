use assertables::*;
use httpmock::Method::*;
use serde_json::json;

use super::*;

fn resource_list(group_version: &str, names: &[(&str, &str)]) -> metav1::APIResourceList {
    let resources: Vec<_> = names
        .iter()
        .map(|(name, singular)| {
            json!({
                "name": name,
                "singularName": singular,
                "namespaced": true,
                "kind": "Thing",
                "verbs": ["delete", "get", "patch"],
            })
        })
        .collect();
    serde_json::from_value(json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": group_version,
        "resources": resources,
    }))
    .unwrap()
}

// Any discovery request at all means we didn't use the built-in table
fn forbid_discovery(fake_apiserver: &mut MockServerBuilder) {
    fake_apiserver.forbid(|when, then| {
        when.method(GET);
        then.json_body(status_ok());
    });
}

#[rstest]
#[case::pod("pod", GVR::new("", "v1", "pods"))]
#[case::deployment("deployment", GVR::new("apps", "v1", "deployments"))]
#[case::service("service", GVR::new("", "v1", "services"))]
#[case::configmap("configmap", GVR::new("", "v1", "configmaps"))]
#[case::secret("secret", GVR::new("", "v1", "secrets"))]
#[case::pvc("pvc", GVR::new("", "v1", "persistentvolumeclaims"))]
#[case::pv("pv", GVR::new("", "v1", "persistentvolumes"))]
#[case::uppercase("POD", GVR::new("", "v1", "pods"))]
#[case::mixed_case("Deployment", GVR::new("apps", "v1", "deployments"))]
#[traced_test]
#[tokio::test]
async fn test_resolve_static_table(#[case] type_token: &str, #[case] expected: GVR) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    forbid_discovery(&mut fake_apiserver);
    fake_apiserver.build();

    let gvr = resolve(&client, type_token).await.unwrap();

    assert_eq!(gvr, expected);
    fake_apiserver.assert();
}

#[rstest]
fn test_static_gvr_for_whole_table() {
    for (token, group, version, plural) in STATIC_RESOURCE_TABLE {
        assert_eq!(static_gvr_for(token), Some(GVR::new(group, version, plural)));
    }
    assert_none!(static_gvr_for("widget"));
    assert_none!(static_gvr_for("pods"));
}

#[rstest]
#[case::group_plural("widgets", GVR::new(WIDGETS_GROUP, "v1", "widgets"))]
#[case::group_singular("widget", GVR::new(WIDGETS_GROUP, "v1", "widgets"))]
#[case::apps_singular("statefulset", GVR::new("apps", "v1", "statefulsets"))]
#[case::core_singular("serviceaccount", GVR::new("", "v1", "serviceaccounts"))]
#[case::core_plural("namespaces", GVR::new("", "v1", "namespaces"))]
#[traced_test]
#[tokio::test]
async fn test_resolve_discovery(#[case] type_token: &str, #[case] expected: GVR) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_discovery().build();

    let gvr = resolve(&client, type_token).await.unwrap();

    assert_eq!(gvr, expected);
    fake_apiserver.assert();
}

#[rstest]
#[case::unknown("gizmo")]
// discovery matches are case-sensitive, unlike the built-in table
#[case::wrong_case("Widgets")]
#[traced_test]
#[tokio::test]
async fn test_resolve_unknown(#[case] type_token: &str) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_discovery().build();

    let err = resolve(&client, type_token).await.unwrap_err();

    assert_eq!(format!("{}", err.root_cause()), format!("unknown resource type: {type_token}"));
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_resolve_discovery_failure() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(GET).path("/api");
            then.status(503).json_body(status_failure(503, "ServiceUnavailable"));
        })
        .forbid(|when, then| {
            when.method(GET).path("/apis");
            then.json_body(api_group_list());
        })
        .build();

    let err = resolve(&client, "widget").await.unwrap_err();

    assert_eq!(format!("{err}"), "failed to get server resources");
    assert_not_contains!(format!("{err:#}"), "unknown resource type");
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_resolve_group_discovery_failure() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(GET).path("/api");
            then.json_body(core_api_versions());
        })
        .handle(|when, then| {
            when.method(GET).path("/api/v1");
            then.json_body(core_v1_discovery());
        })
        .handle(|when, then| {
            when.method(GET).path("/apis");
            then.json_body(api_group_list());
        })
        .handle(|when, then| {
            when.method(GET).path("/apis/apps/v1");
            then.status(500).json_body(status_failure(500, "InternalError"));
        })
        .build();

    // even though the core group would have matched, a failed discovery call is fatal
    let err = resolve(&client, "serviceaccount").await.unwrap_err();

    assert_eq!(format!("{err}"), "failed to get server resources");
    fake_apiserver.assert();
}

#[rstest]
fn test_find_in_resource_lists_first_match_wins() {
    let lists = vec![
        resource_list("first.example.com/v1", &[("gadgets", "gadget")]),
        resource_list("second.example.com/v2", &[("widgets", "widget")]),
        resource_list("third.example.com/v1", &[("widgets", "widget")]),
    ];

    assert_eq!(find_in_resource_lists("widget", &lists), Some(GVR::new("second.example.com", "v2", "widgets")));
    assert_eq!(find_in_resource_lists("gadgets", &lists), Some(GVR::new("first.example.com", "v1", "gadgets")));
    assert_none!(find_in_resource_lists("gizmo", &lists));
}

#[rstest]
fn test_find_in_resource_lists_skips_bad_group_version() {
    let lists = vec![
        resource_list("bad/group/version", &[("widgets", "widget")]),
        resource_list("good.example.com/v1", &[("widgets", "widget")]),
    ];

    assert_eq!(find_in_resource_lists("widgets", &lists), Some(GVR::new("good.example.com", "v1", "widgets")));
}
