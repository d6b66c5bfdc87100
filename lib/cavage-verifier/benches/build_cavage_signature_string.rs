use criterion::{criterion_group, criterion_main, Criterion};
use cavage_verifier::cavage::{signature_string, DEFAULT_HEADERS};
use http::Request;
use std::hint::black_box;

const ALL_HEADERS: &[&str] = &[
    "(request-target)",
    "host",
    "date",
    "content-type",
    "digest",
    "content-length",
];

fn request() -> Request<()> {
    Request::post("/foo?param=value&pet=dog")
        .header("Host", "example.com")
        .header("Date", "Sun, 05 Jan 2014 21:31:40 GMT")
        .header("Content-Type", "application/json")
        .header(
            "Digest",
            "SHA-256=X48E9qOokqqrvdts8nOJRJN3OWDUoyWxBf7kbu9DBPE=",
        )
        .header("Content-Length", "18")
        .body(())
        .unwrap()
}

fn default_headers(c: &mut Criterion) {
    let request = request();

    c.bench_function("build_default_signature_string", |b| {
        b.iter(|| black_box(signature_string::construct(black_box(&request), DEFAULT_HEADERS)));
    });
}

fn all_headers(c: &mut Criterion) {
    let request = request();

    c.bench_function("build_all_headers_signature_string", |b| {
        b.iter(|| black_box(signature_string::construct(black_box(&request), ALL_HEADERS)));
    });
}

criterion_group!(build_cavage_signature_string, default_headers, all_headers);
criterion_main!(build_cavage_signature_string);
