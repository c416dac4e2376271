// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

#[test]
fn server_routes_match_openapi_paths() {
    let app_src = std::fs::read_to_string(
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src/app.rs"),
    )
    .expect("read server routing source");

    let param_re = regex::Regex::new(r":([A-Za-z_][A-Za-z0-9_]*)").expect("param regex");
    let route_set: BTreeSet<String> = regex::Regex::new(r#"\.route\(\s*"([^"]+)""#)
        .expect("regex")
        .captures_iter(&app_src)
        .map(|cap| param_re.replace_all(&cap[1], "{$1}").to_string())
        .collect();

    let spec = cloudpath_api::openapi_v1_spec();
    let spec_set: BTreeSet<String> = spec["paths"]
        .as_object()
        .expect("paths object")
        .keys()
        .cloned()
        .collect();

    assert_eq!(route_set, spec_set, "server route registry drift");
}

#[test]
fn every_documented_path_is_get_only() {
    let spec = cloudpath_api::openapi_v1_spec();
    for (path, item) in spec["paths"].as_object().expect("paths object") {
        let methods: Vec<&String> = item.as_object().expect("path item").keys().collect();
        assert_eq!(methods, vec!["get"], "{path} must expose GET only");
    }
}
