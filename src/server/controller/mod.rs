//! HTTP request handlers.
//!
//! Controllers adapt one request to one service call: they decode the JSON body,
//! parse path parameters, and wrap the service result in a `WebResponse` envelope.
//! Failures are returned as `AppError` and never handled locally.

pub mod category;
