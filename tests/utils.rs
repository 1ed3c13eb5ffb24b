#![allow(dead_code)]

use std::fs;
use std::io::{Cursor, Read, Write};
use std::net::TcpListener;
use std::time::Duration;
use std::path::Path;
use walkdir::WalkDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zip::write::SimpleFileOptions;

pub const STARTER_PATH: &str = "/starter.zip";

/// Writes a small generated-project tree below `root/<name>`, laid out the way the
/// generator service nests it under `baseDir`.
pub fn write_fixture_project(root: &Path, name: &str) {
    let project = root.join(name);
    let files = [
        ("pom.xml", "<project><artifactId>demo</artifactId></project>\n"),
        ("mvnw", "#!/bin/sh\nexec java -jar .mvn/wrapper/maven-wrapper.jar \"$@\"\n"),
        ("HELP.md", "# Getting Started\n"),
        (
            "src/main/java/com/example/demo/DemoApplication.java",
            "package com.example.demo;\n\npublic class DemoApplication {}\n",
        ),
        ("src/main/resources/application.properties", "spring.application.name=demo\n"),
    ];
    for (relative, content) in files {
        let target = project.join(relative);
        fs::create_dir_all(target.parent().unwrap()).unwrap();
        fs::write(target, content).unwrap();
    }
    fs::create_dir_all(project.join("src/test/java")).unwrap();
}

/// Zips every entry below `root`, keeping paths relative to it.
pub fn zip_dir(root: &Path) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.unwrap();
        let name = entry
            .path()
            .strip_prefix(root)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        if entry.file_type().is_dir() {
            writer.add_directory(format!("{name}/"), SimpleFileOptions::default()).unwrap();
        } else {
            writer.start_file(name, SimpleFileOptions::default()).unwrap();
            writer.write_all(&fs::read(entry.path()).unwrap()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

/// Serves `body` with `status` on the starter endpoint.
pub async fn mock_starter(server: &MockServer, status: u16, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(STARTER_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Serves `body` with `status` on the starter endpoint after `delay`.
pub async fn mock_slow_starter(server: &MockServer, delay: Duration, body: Vec<u8>) {
    Mock::given(method("GET"))
        .and(path(STARTER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body).set_delay(delay))
        .mount(server)
        .await;
}

/// Answers one request with a `Content-Length` of `declared` bytes, sends only
/// `sent` of them and closes the connection. Returns the starter URL.
pub fn serve_truncated_body(declared: usize, sent: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let head = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/zip\r\nContent-Length: {declared}\r\n\r\n"
        );
        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(&vec![7u8; sent]).unwrap();
        stream.flush().unwrap();
    });
    format!("http://127.0.0.1:{port}{STARTER_PATH}")
}

pub fn starter_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), STARTER_PATH)
}

/// Query of the only request the server received.
pub async fn received_query(server: &MockServer) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    requests[0].url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}

/// Asserts two directory trees hold the same files with the same content.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    let different = dir_diff::is_different(actual, expected).unwrap();
    if different {
        let list = |root: &Path| {
            WalkDir::new(root)
                .min_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .map(|e| e.path().strip_prefix(root).unwrap().display().to_string())
                .collect::<Vec<_>>()
        };
        panic!(
            "Directories differ.\nActual:   {:?}\nExpected: {:?}",
            list(actual),
            list(expected)
        );
    }
}
