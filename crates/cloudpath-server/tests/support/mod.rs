// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

use cloudpath_model::RecordSet;
use cloudpath_server::{build_router, ApiConfig, AppState, Catalog, StaticRecordSource};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

pub const FIXTURE_JSON: &str = r#"[
  {"id": "az-900", "name": "Azure Fundamentals", "examCode": "AZ-900", "provider": "Azure",
   "level": "Fundamental", "role": ["Administrator", "Developer"], "domains": ["Cloud Concepts"],
   "leadsTo": ["az-104"], "cost": 99, "durationHours": 15, "difficulty": "Beginner"},
  {"id": "az-104", "name": "Azure Administrator", "examCode": "AZ-104", "provider": "Azure",
   "level": "Associate", "role": ["Administrator"], "domains": ["Compute", "Networking"],
   "prerequisites": ["az-900"], "leadsTo": ["az-305", "az-999"], "cost": 165,
   "durationHours": 40, "difficulty": "Intermediate"},
  {"id": "az-305", "name": "Azure Solutions Architect Expert", "examCode": "AZ-305",
   "provider": "Azure", "level": "Expert", "role": ["Architect"], "domains": ["Networking"],
   "prerequisites": ["az-104", "aws-saa"], "cost": 165, "durationHours": 60,
   "difficulty": "Advanced"},
  {"id": "aws-saa", "name": "AWS Solutions Architect Associate", "examCode": "SAA-C03",
   "provider": "AWS", "level": "Associate", "role": ["Developer", "Ops"], "cost": 150,
   "durationHours": 30},
  {"id": "aws-sap", "name": "AWS Solutions Architect Professional", "examCode": "SAP-C02",
   "provider": "AWS", "level": "Professional", "role": ["Ops", "Security"], "cost": 225,
   "durationHours": 50, "prerequisites": ["aws-saa"]}
]"#;

pub fn fixture_set() -> RecordSet {
    RecordSet::from_json_slice(FIXTURE_JSON.as_bytes()).expect("fixture records")
}

pub async fn loaded_state() -> AppState {
    let catalog = Catalog::new(Arc::new(StaticRecordSource::new(fixture_set())));
    catalog.reload().await.expect("load fixture");
    AppState::with_config(catalog, ApiConfig::default())
}

pub fn unloaded_state() -> AppState {
    AppState::new(Catalog::new(Arc::new(StaticRecordSource::new(fixture_set()))))
}

pub async fn spawn_server(state: AppState) -> std::net::SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, build_router(state))
            .await
            .expect("serve");
    });
    addr
}

pub async fn send_raw(
    addr: std::net::SocketAddr,
    path: &str,
    headers: &[(&str, &str)],
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    req.push_str("\r\n");
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

pub async fn get_json(addr: std::net::SocketAddr, path: &str) -> (u16, serde_json::Value) {
    let (status, _, body) = send_raw(addr, path, &[]).await;
    let value = serde_json::from_str(&body).expect("json body");
    (status, value)
}

pub fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().find_map(|line| {
        let (k, v) = line.split_once(':')?;
        k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
    })
}
