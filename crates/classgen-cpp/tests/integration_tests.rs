//! Integration tests for the C++ class extractor

use classgen_cpp::{extract_active_class, extract_classes, CppClassParser};
use classgen_parser_api::{
    AccessLevel, ClassDescriptor, ClassExtractor, ExtractError, ExtractorConfig, Field, SuperClass,
};
use std::io::Write;

const SHAPES_HPP: &str = include_str!("fixtures/shapes.hpp");
const CONTAINERS_HPP: &str = include_str!("fixtures/containers.hpp");

fn names(class: &ClassDescriptor) -> Vec<&str> {
    class.fields.iter().map(|f| f.name.as_str()).collect()
}

#[test]
fn test_extract_shapes_hpp() {
    let extraction = extract_classes(SHAPES_HPP);
    let class_names: Vec<&str> = extraction.classes.iter().map(|c| c.name.as_str()).collect();

    // The commented-out class and the friend declaration must not appear
    assert_eq!(class_names, vec!["Point", "Shape", "Circle", "Polygon"]);
    assert_eq!(extraction.metrics.classes_rejected, 0);
}

#[test]
fn test_line_ranges() {
    let extraction = extract_classes(SHAPES_HPP);
    let ranges: Vec<(usize, usize)> = extraction
        .classes
        .iter()
        .map(|c| (c.start_line, c.end_line))
        .collect();
    assert_eq!(ranges, vec![(12, 14), (16, 24), (26, 39), (41, 50)]);
}

#[test]
fn test_point_fields() {
    let extraction = extract_classes(SHAPES_HPP);
    let point = extraction.class("Point").unwrap();
    assert!(point.bases.is_empty());
    assert_eq!(
        point.fields,
        vec![
            Field::new("x", "double").fundamental(),
            Field::new("y", "double").fundamental(),
        ]
    );
}

#[test]
fn test_methods_and_statics() {
    let extraction = extract_classes(SHAPES_HPP);
    let shape = extraction.class("Shape").unwrap();
    assert_eq!(
        shape.fields,
        vec![
            Field::new("name_", "std::string"),
            Field::new("instances", "int").static_field().fundamental(),
        ]
    );
    assert_eq!(shape.instance_fields().count(), 1);
}

#[test]
fn test_method_bodies_and_initializer_lists() {
    let extraction = extract_classes(SHAPES_HPP);
    let circle = extraction.class("Circle").unwrap();
    assert_eq!(circle.bases, vec![SuperClass::new("Shape")]);
    assert_eq!(names(circle), vec!["radius_", "center_"]);
    assert!(circle.field("radius_").unwrap().is_fundamental);
    assert!(!circle.field("center_").unwrap().is_fundamental);
}

#[test]
fn test_polygon_declarators() {
    let extraction = extract_classes(SHAPES_HPP);
    let polygon = extraction.class("Polygon").unwrap();

    assert_eq!(
        polygon.bases,
        vec![
            SuperClass::new("Shape"),
            SuperClass::new("Observable")
                .with_access(AccessLevel::Protected)
                .virtual_base(),
        ]
    );
    assert_eq!(
        polygon.fields,
        vec![
            Field::new("vertices_", "std::vector<Point>"),
            Field::new("corners_", "unsigned int*").fundamental().array(),
            Field::new("label_", "const char*").fundamental(),
            Field::new("on_change_", "void (*)(Polygon &, int)").fundamental(),
        ]
    );
}

#[test]
fn test_template_class_with_nested_type() {
    let extraction = extract_classes(CONTAINERS_HPP);
    assert_eq!(extraction.classes.len(), 2);

    let registry = &extraction.classes[0];
    assert_eq!(registry.name, "Registry");
    assert_eq!(registry.template_preamble, "template <typename K, typename V>");
    assert!(registry.is_template());
    assert_eq!(registry.bases[0].name, "std::map<K, V>");
    assert_eq!((registry.start_line, registry.end_line), (7, 26));

    // Entry's members and the wrapped parameter list belong elsewhere
    assert_eq!(
        names(registry),
        vec!["index_", "on_insert_", "capacity_", "size_", "dirty_"]
    );
    assert_eq!(registry.field("capacity_").unwrap().declared_type, "std::size_t");
    assert_eq!(
        registry.field("dirty_").unwrap(),
        &Field::new("dirty_", "bool").fundamental()
    );
}

#[test]
fn test_full_specialization() {
    let extraction = extract_classes(CONTAINERS_HPP);
    let special = &extraction.classes[1];
    assert_eq!(special.name, "Registry<int, int>");
    assert_eq!(special.template_preamble, "template <>");
    assert_eq!(special.fields, vec![Field::new("fast_path_", "int").fundamental()]);
}

#[test]
fn test_active_class_selection() {
    assert_eq!(extract_active_class(SHAPES_HPP, 30).unwrap().name, "Circle");
    assert_eq!(extract_active_class(SHAPES_HPP, 41).unwrap().name, "Polygon");
    // Between Point and Shape: the last class starting before the caret
    assert_eq!(extract_active_class(SHAPES_HPP, 15).unwrap().name, "Point");
    // Above every class
    assert_eq!(extract_active_class(SHAPES_HPP, 0).unwrap().name, "Point");
    // Below every class
    assert_eq!(extract_active_class(SHAPES_HPP, 52).unwrap().name, "Polygon");
    // Inside the nested class: the enclosing descriptor
    assert_eq!(extract_active_class(CONTAINERS_HPP, 12).unwrap().name, "Registry");
}

#[test]
fn test_single_class_without_members() {
    let class = extract_active_class("class Empty {\n};\n", 5).unwrap();
    assert_eq!(class.name, "Empty");
    assert!(class.bases.is_empty());
    assert!(class.fields.is_empty());
    assert_eq!(class.start_line, 0);
}

#[test]
fn test_nested_class_fields() {
    let source = "class Outer {\n    class Inner {\n        int y;\n    };\n    int x;\n};\n";
    let extraction = extract_classes(source);
    assert_eq!(extraction.classes.len(), 1);
    assert_eq!(extraction.classes[0].name, "Outer");
    assert_eq!(names(&extraction.classes[0]), vec!["x"]);
}

#[test]
fn test_no_class_found() {
    let result = extract_active_class("int main() { return 0; }\n", 0);
    assert!(matches!(result, Err(ExtractError::NoClassFound)));

    let result = extract_active_class("", 0);
    assert!(matches!(result, Err(ExtractError::NoClassFound)));

    let result = extract_active_class("class Forward;\n", 0);
    assert!(matches!(result, Err(ExtractError::NoClassFound)));
}

#[test]
fn test_only_malformed_classes() {
    let result = extract_active_class("class Broken<T {\n    int x;\n};\n", 1);
    assert!(matches!(result, Err(ExtractError::NoClassFound)));
}

#[test]
fn test_extraction_is_idempotent() {
    for source in [SHAPES_HPP, CONTAINERS_HPP] {
        let first = extract_classes(source);
        let second = extract_classes(source);
        assert_eq!(first, second);
    }
}

#[test]
fn test_descriptor_serialization() {
    let class = extract_active_class(SHAPES_HPP, 45).unwrap();
    let json = serde_json::to_string(&class).unwrap();
    let back: ClassDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, class);
}

#[test]
fn test_extract_file() {
    let mut file = tempfile::Builder::new().suffix(".hpp").tempfile().unwrap();
    file.write_all(SHAPES_HPP.as_bytes()).unwrap();

    let parser = CppClassParser::new();
    assert!(parser.can_extract(file.path()));

    let result = parser.extract_file(file.path()).unwrap();
    assert_eq!(result.classes.len(), 4);
    assert_eq!(result.byte_count, SHAPES_HPP.len());
    assert_eq!(result.line_count, SHAPES_HPP.lines().count());
    assert_eq!(result.field_count(), 10);
    assert_eq!(result.metrics.classes_extracted, 4);
}

#[test]
fn test_extract_file_too_large() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CONTAINERS_HPP.as_bytes()).unwrap();

    let parser = CppClassParser::with_config(ExtractorConfig::default().with_max_source_size(16));
    let result = parser.extract_file(file.path());
    assert!(matches!(result, Err(ExtractError::SourceTooLarge(_, _))));
}

#[test]
fn test_extract_files_parallel_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let mut paths = Vec::new();
    for (name, text) in [("shapes.hpp", SHAPES_HPP), ("containers.hpp", CONTAINERS_HPP)] {
        let path = dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        paths.push(path);
    }
    paths.push(dir.path().join("missing.hpp"));

    let sequential = CppClassParser::new().extract_files(&paths);
    let parallel = CppClassParser::with_config(
        ExtractorConfig::default().with_parallel(true).with_workers(2),
    )
    .extract_files(&paths);

    for project in [&sequential, &parallel] {
        assert_eq!(project.total_files(), 3);
        assert_eq!(project.total_classes(), 6);
        assert_eq!(project.failed_files.len(), 1);
        assert_eq!(project.metrics().classes_extracted, 6);
    }
}
