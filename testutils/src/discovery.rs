use httpmock::prelude::*;
use serde_json::json;

use crate::fake::MockServerBuilder;

pub const WIDGETS_GROUP: &str = "widgets.example.com";

impl MockServerBuilder {
    // Registers the full set of discovery endpoints that a "preferred resources" lookup walks:
    // the core group, the group list, and the preferred version of each group in it.
    pub fn handle_discovery(&mut self) -> &mut Self {
        self.handle(|when, then| {
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
            then.json_body(apps_v1_discovery());
        })
        .handle(|when, then| {
            when.method(GET).path(format!("/apis/{WIDGETS_GROUP}/v1"));
            then.json_body(widgets_v1_discovery());
        })
    }
}

pub fn core_api_versions() -> serde_json::Value {
    json!({
        "kind": "APIVersions",
        "apiVersion": "v1",
        "versions": ["v1"],
        "serverAddressByClientCIDRs": [{"clientCIDR": "0.0.0.0/0", "serverAddress": "10.0.0.1:6443"}],
    })
}

pub fn api_group_list() -> serde_json::Value {
    json!({
        "kind": "APIGroupList",
        "apiVersion": "v1",
        "groups": [
            {
                "name": "apps",
                "versions": [{"groupVersion": "apps/v1", "version": "v1"}],
                "preferredVersion": {"groupVersion": "apps/v1", "version": "v1"},
            },
            {
                "name": WIDGETS_GROUP,
                "versions": [
                    {"groupVersion": format!("{WIDGETS_GROUP}/v1"), "version": "v1"},
                    {"groupVersion": format!("{WIDGETS_GROUP}/v1beta1"), "version": "v1beta1"},
                ],
                "preferredVersion": {"groupVersion": format!("{WIDGETS_GROUP}/v1"), "version": "v1"},
            },
        ],
    })
}

pub fn core_v1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "v1",
        "resources": [
            {
                "name": "namespaces",
                "singularName": "namespace",
                "namespaced": false,
                "kind": "Namespace",
                "verbs": ["create", "delete", "get", "list", "patch", "update", "watch"],
                "shortNames": ["ns"],
            },
            {
                "name": "namespaces/finalize",
                "singularName": "",
                "namespaced": false,
                "kind": "Namespace",
                "verbs": ["update"],
            },
            {
                "name": "serviceaccounts",
                "singularName": "serviceaccount",
                "namespaced": true,
                "kind": "ServiceAccount",
                "verbs": ["create", "delete", "deletecollection", "get", "list", "patch", "update", "watch"],
                "shortNames": ["sa"],
            },
        ],
    })
}

pub fn apps_v1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": "apps/v1",
        "resources": [
            {
                "name": "daemonsets",
                "singularName": "daemonset",
                "namespaced": true,
                "kind": "DaemonSet",
                "verbs": ["create", "delete", "deletecollection", "get", "list", "patch", "update", "watch"],
                "shortNames": ["ds"],
                "categories": ["all"],
            },
            {
                "name": "daemonsets/status",
                "singularName": "",
                "namespaced": true,
                "kind": "DaemonSet",
                "verbs": ["get", "patch", "update"],
            },
            {
                "name": "statefulsets",
                "singularName": "statefulset",
                "namespaced": true,
                "kind": "StatefulSet",
                "verbs": ["create", "delete", "deletecollection", "get", "list", "patch", "update", "watch"],
                "shortNames": ["sts"],
                "categories": ["all"],
            },
        ],
    })
}

pub fn widgets_v1_discovery() -> serde_json::Value {
    json!({
        "kind": "APIResourceList",
        "apiVersion": "v1",
        "groupVersion": format!("{WIDGETS_GROUP}/v1"),
        "resources": [
            {
                "name": "widgets",
                "singularName": "widget",
                "namespaced": true,
                "kind": "Widget",
                "verbs": ["create", "delete", "deletecollection", "get", "list", "patch", "update", "watch"],
            },
            {
                "name": "widgets/status",
                "singularName": "",
                "namespaced": true,
                "kind": "Widget",
                "verbs": ["get", "patch", "update"],
            },
        ],
    })
}
