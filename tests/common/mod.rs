//! Shared fixtures for integration tests.
//!
//! Builds real PNG payloads, in-memory stores, and edit clients pointed at a
//! [`wiremock::MockServer`].

#![allow(dead_code)]

use std::io::Cursor;

use imageshelf::config::{EditConfig, Environment};
use imageshelf::edit::EditClient;
use imageshelf::images::{ImageFile, ImageStore};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "sk-test-key";

/// Encode a `width` x `height` PNG with a gradient so payloads differ by size.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("failed to encode test PNG");
    buf.into_inner()
}

pub fn png_file(name: &str, width: u32, height: u32) -> ImageFile {
    ImageFile::new(name, "image/png", png_bytes(width, height))
}

pub fn memory_store() -> ImageStore {
    ImageStore::open_in_memory().expect("failed to open in-memory store")
}

pub fn edit_config(server: &MockServer, environment: Environment) -> EditConfig {
    EditConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        environment,
        ..EditConfig::default()
    }
}

pub fn edit_client(server: &MockServer) -> EditClient {
    EditClient::new(&edit_config(server, Environment::Development))
        .expect("failed to build edit client")
}

/// A successful generation response whose first choice carries `image`.
pub fn generation_body(image: &str) -> Value {
    json!({
        "output": {
            "choices": [{
                "finish_reason": "stop",
                "message": {
                    "role": "assistant",
                    "content": [{"image": image}]
                }
            }]
        },
        "usage": {"width": 1024, "height": 1024, "image_count": 1},
        "request_id": "7f3c1a2e-0000-0000-0000-000000000000"
    })
}
