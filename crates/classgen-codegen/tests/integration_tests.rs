//! Generating members for classes read from C++ source

use classgen_codegen::{Action, FieldSelection, Generator, GeneratorConfig, Placement, Snippet};
use classgen_cpp::extract_active_class;

const ACCOUNT_HPP: &str = r#"#include <string>

class Account {
    std::string owner_;
    double balance_ = 0.0;
    static int open_accounts;
    char code_[4];
};

template <typename T>
struct Slot {
    T value;
};
"#;

#[test]
fn test_generate_from_extracted_class() {
    let class = extract_active_class(ACCOUNT_HPP, 4).unwrap();
    assert_eq!(class.name, "Account");

    let generator = Generator::new(&class, &GeneratorConfig::default());
    let Snippet::Inline(text) = generator.constructor(&FieldSelection::All) else {
        panic!("expected inline output");
    };
    assert_eq!(
        text,
        "\n\tAccount(const std::string &owner_, double balance_, char* code_) : owner_(owner_), balance_(balance_), code_(code_){};\n"
    );
}

#[test]
fn test_out_of_line_getters() {
    let class = extract_active_class(ACCOUNT_HPP, 2).unwrap();
    let generator = Generator::new(&class, &GeneratorConfig::out_of_line());
    let snippet = generator.getters(&FieldSelection::named(["balance_", "code_", "open_accounts"]));

    assert_eq!(
        snippet.declaration(),
        "\tdouble getBalance_() const;\n\tint getOpen_accounts() const;\n\tconst char* getCode_() const;\n"
    );
    let definition = snippet.definition().unwrap();
    assert!(definition.contains("\ndouble Account::getBalance_() const { return balance_; }\n"));
    assert!(definition.contains("\nconst char* Account::getCode_() const { return code_; }\n"));
}

#[test]
fn test_insertions_target_class_end() {
    let class = extract_active_class(ACCOUNT_HPP, 2).unwrap();
    assert_eq!(class.end_line, 7);

    let generator = Generator::new(&class, &GeneratorConfig::out_of_line());
    let edits = generator.destructor().insertions(&class);
    assert_eq!(edits.len(), 2);
    assert_eq!(edits[0].line, 8);
    assert_eq!(edits[0].text, "\nAccount::~Account(){};\n");
    assert_eq!(edits[1].line, 7);
}

#[test]
fn test_template_struct_generated_inline() {
    let class = extract_active_class(ACCOUNT_HPP, 11).unwrap();
    assert_eq!(class.name, "Slot");
    assert!(class.is_template());

    let config = GeneratorConfig::default().with_placement(Placement::OutOfLine);
    let generator = Generator::new(&class, &config);
    for action in Action::ALL {
        let snippet = generator.generate(action, &FieldSelection::All);
        assert!(matches!(snippet, Snippet::Inline(_)), "{action:?} was not inline");
    }
}

#[test]
fn test_config_serialization() {
    let config = GeneratorConfig::out_of_line().with_indent("  ");
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"out_of_line\""));

    let back: GeneratorConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    let partial: GeneratorConfig = serde_json::from_str(r#"{"placement":"out_of_line"}"#).unwrap();
    assert_eq!(partial.indent, "\t");
}
