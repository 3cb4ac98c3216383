use k8s_openapi::api::core::v1 as corev1;
use rstest::fixture;
use serde_json::json;

use crate::constants::*;

// Builds a namespace with the given phase; if `deletion_ts` is None the namespace is not
// scheduled for deletion.  Going through JSON keeps us from having to construct timestamps
// by hand.
pub fn build_namespace(name: &str, phase: &str, deletion_ts: Option<&str>) -> corev1::Namespace {
    let mut ns = json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": "4f3c2b1a-0000-0000-0000-000000000000",
            "resourceVersion": "1234",
        },
        "spec": {"finalizers": [TEST_NS_FINALIZER]},
        "status": {"phase": phase},
    });
    if let Some(ts) = deletion_ts {
        ns["metadata"]["deletionTimestamp"] = json!(ts);
    }
    serde_json::from_value(ns).unwrap()
}

#[fixture]
pub fn test_terminating_namespace(#[default(TEST_STUCK_NS_NAME)] name: &str) -> corev1::Namespace {
    build_namespace(name, "Terminating", Some(TEST_DELETION_TIMESTAMP))
}

#[fixture]
pub fn test_active_namespace(#[default(TEST_STUCK_NS_NAME)] name: &str) -> corev1::Namespace {
    build_namespace(name, "Active", None)
}

// Shouldn't really happen in a live cluster, but the phase and the deletion timestamp are
// checked independently
#[fixture]
pub fn test_terminating_namespace_no_timestamp(#[default(TEST_STUCK_NS_NAME)] name: &str) -> corev1::Namespace {
    build_namespace(name, "Terminating", None)
}

pub fn finalized_namespace(ns: &corev1::Namespace) -> corev1::Namespace {
    let mut ns = ns.clone();
    if let Some(spec) = ns.spec.as_mut() {
        spec.finalizers = None;
    }
    ns
}

pub fn test_dynamic_obj(api_version: &str, kind: &str, ns: &str, name: &str) -> serde_json::Value {
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": {
            "namespace": ns,
            "name": name,
            "deletionTimestamp": TEST_DELETION_TIMESTAMP,
        },
    })
}
