//! Protobuf messages and generated gRPC stubs for `demo.calculator.Calculator`.
//!
//! Field tags and scalar types match `proto/demo/calculator/calculator.proto`
//! exactly; clients and servers written against that file interoperate with
//! these types.

#![allow(clippy::pedantic, clippy::empty_structs_with_brackets)]

/// Input to `Add`.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct AddRequest {
    #[prost(double, tag = "1")]
    pub a: f64,
    #[prost(double, tag = "2")]
    pub b: f64,
}

/// Output of `Add`.
#[derive(Clone, Copy, PartialEq, prost::Message)]
pub struct AddResponse {
    #[prost(double, tag = "1")]
    pub result: f64,
}

/// Payload of `Ping`, in both directions.
#[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
pub struct Empty {}

include!(concat!(env!("OUT_DIR"), "/demo.calculator.Calculator.rs"));
