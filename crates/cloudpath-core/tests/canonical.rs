// SPDX-License-Identifier: Apache-2.0

use cloudpath_core::{canonical, sha256_hex};
use serde_json::json;

#[test]
fn stable_json_bytes_are_key_order_deterministic() {
    let a = json!({"provider": "Azure", "id": "az-900"});
    let b = json!({"id": "az-900", "provider": "Azure"});
    let ba = canonical::stable_json_bytes(&a).expect("stable json a");
    let bb = canonical::stable_json_bytes(&b).expect("stable json b");
    assert_eq!(ba, bb);
}

#[test]
fn sha256_is_repeatable_for_same_bytes() {
    let bytes = b"cloudpath-core-determinism";
    assert_eq!(sha256_hex(bytes), sha256_hex(bytes));
    assert_eq!(sha256_hex(bytes).len(), 64);
}

#[test]
fn stable_json_hash_ignores_nested_key_order() {
    let a = json!({"cost": 99, "resources": {"udemy": ["u"], "coursera": []}});
    let b = json!({"resources": {"coursera": [], "udemy": ["u"]}, "cost": 99});
    let h1 = canonical::stable_json_hash_hex(&a).expect("hash a");
    let h2 = canonical::stable_json_hash_hex(&b).expect("hash b");
    assert_eq!(h1, h2);
}

#[test]
fn array_order_is_significant() {
    let a = json!(["az-900", "az-104"]);
    let b = json!(["az-104", "az-900"]);
    assert_ne!(
        canonical::stable_json_hash_hex(&a).expect("hash a"),
        canonical::stable_json_hash_hex(&b).expect("hash b")
    );
}
