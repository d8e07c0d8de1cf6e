//! Benchmarks for the C++ class extractor

use classgen_cpp::{extract_active_class, extract_classes, CppClassParser};
use classgen_parser_api::ClassExtractor;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SAMPLE_CODE: &str = r#"
#include <iostream>
#include <map>
#include <vector>

namespace myproject {

template <typename T>
class Container {
public:
    Container() = default;
    ~Container() = default;

    void add(T item) {
        items.push_back(std::move(item));
    }

    T &get(std::size_t index) {
        return items[index];
    }

private:
    std::vector<T> items;
    std::size_t capacity = 8, size = 0;
};

class Base {
public:
    virtual ~Base() = default;
    virtual void process() = 0;

protected:
    static int instances;
    const char *label;
};

class Derived : public Base, protected virtual Observer {
    friend class Inspector;

    struct Node {
        int id;
        Node *next;
    };

public:
    void process() override {
        std::cout << "Processing" << std::endl;
    }

private:
    std::map<std::string, int> counts;  // by name
    double weights[16];
    void (*callback)(int, const char *);
    Node *head{nullptr};
};

} // namespace myproject
"#;

fn benchmark_extract_classes(c: &mut Criterion) {
    c.bench_function("cpp_extract_classes", |b| {
        b.iter(|| extract_classes(black_box(SAMPLE_CODE)))
    });
}

fn benchmark_extract_active_class(c: &mut Criterion) {
    c.bench_function("cpp_extract_active_class", |b| {
        b.iter(|| extract_active_class(black_box(SAMPLE_CODE), black_box(50)).unwrap())
    });
}

fn benchmark_extract_source(c: &mut Criterion) {
    let parser = CppClassParser::new();
    let large = SAMPLE_CODE.repeat(100);

    c.bench_function("cpp_extract_source_large", |b| {
        b.iter(|| parser.extract_source(black_box(&large)))
    });
}

criterion_group!(
    benches,
    benchmark_extract_classes,
    benchmark_extract_active_class,
    benchmark_extract_source
);
criterion_main!(benches);
