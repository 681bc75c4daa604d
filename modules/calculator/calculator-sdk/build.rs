//! Generates the tonic client and server for `demo.calculator.Calculator`.
//!
//! Message types are written by hand in `src/proto.rs` (mirroring
//! `proto/demo/calculator/calculator.proto`), so no `protoc` is needed.

use tonic_build::manual::{Builder, Method, Service};

const CODEC: &str = "tonic_prost::ProstCodec";

fn unary(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(input)
        .output_type(output)
        .codec_path(CODEC)
        .build()
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=proto/demo/calculator/calculator.proto");

    let calculator = Service::builder()
        .name("Calculator")
        .package("demo.calculator")
        .method(unary(
            "add",
            "Add",
            "crate::proto::AddRequest",
            "crate::proto::AddResponse",
        ))
        .method(unary(
            "ping",
            "Ping",
            "crate::proto::Empty",
            "crate::proto::Empty",
        ))
        .build();

    Builder::new().compile(&[calculator]);
}
