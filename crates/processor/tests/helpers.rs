use std::collections::HashMap;

use brix_processor::{create_context, ProcessorCore, ProcessorContext};

fn render(template: &str, pairs: &[(&str, &str)]) -> String {
    let core = ProcessorCore::new();
    let context = create_context(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
    );
    core.process(template, &context).unwrap()
}

fn render_err(template: &str, pairs: &[(&str, &str)]) -> String {
    let core = ProcessorCore::new();
    let context: ProcessorContext = create_context(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );
    core.process(template, &context).unwrap_err().to_string()
}

#[test]
fn to_upper() {
    assert_eq!(render("{{to-upper module}}", &[("module", "orders")]), "ORDERS");
    assert_eq!(render("{{to-upper \"mixed Case\"}}", &[]), "MIXED CASE");
}

#[test]
fn to_lower() {
    assert_eq!(render("{{to-lower word}}", &[("word", "HeLLo WoRLD")]), "hello world");
}

#[test]
fn to_title() {
    assert_eq!(render("{{to-title one}}", &[("one", "oneword")]), "Oneword");
    assert_eq!(
        render("{{to-title two}}", &[("two", "Already in the Title Case")]),
        "Already in the Title Case"
    );
}

#[test]
fn to_case() {
    let template = "{{to-case \"snake\" a}}\n{{to-case \"camel\" b}}\n{{to-case \"kebab\" c}}\n{{to-case \"pascal\" d}}\n{{to-case \"screaming-snake\" e}}\n{{to-case \"UpperCamel\" b}}\n{{to-case \"train\" b}}\n{{to-case \"cobol\" b}}\n{{to-case \"flat\" b}}";
    let result = render(
        template,
        &[
            ("a", "ThisIsPascalCase"),
            ("b", "this_is_snake_case"),
            ("c", "THIS_IS_UPPER_SNAKE_CASE"),
            ("d", "this-is-kebab-case"),
            ("e", "thisIsCamelCase"),
        ],
    );
    let lines: Vec<&str> = result.lines().collect();
    assert_eq!(
        lines,
        vec![
            "this_is_pascal_case",
            "thisIsSnakeCase",
            "this-is-upper-snake-case",
            "ThisIsKebabCase",
            "THIS_IS_CAMEL_CASE",
            "ThisIsSnakeCase",
            "This-Is-Snake-Case",
            "THIS-IS-SNAKE-CASE",
            "thisissnakecase",
        ]
    );
}

#[test]
fn to_case_unsupported() {
    let message = render_err("{{to-case \"shouting\" a}}", &[("a", "value")]);
    assert!(message.contains("case 'shouting' not supported"), "{message}");
}

#[test]
fn to_case_unquoted_case_name() {
    let message = render_err("{{to-case snake a}}", &[("a", "value")]);
    assert!(message.contains("quotation marks"), "{message}");
}

#[test]
fn to_case_missing_argument() {
    let message = render_err("{{to-case \"snake\"}}", &[]);
    assert!(message.contains("argument to process not specified"), "{message}");
}

#[test]
fn to_flat() {
    assert_eq!(render("{{to-flat name}}", &[("name", "My-Module")]), "mymodule");
}

#[test]
fn to_java_package() {
    assert_eq!(
        render("{{to-java-package pkg}}", &[("pkg", "com.Example.my-module")]),
        "com.example.mymodule"
    );
    assert_eq!(
        render("{{to-java-package-path pkg}}", &[("pkg", "com.Example.my-module")]),
        "com/example/mymodule"
    );
}

#[test]
fn helper_without_argument() {
    let message = render_err("{{to-upper}}", &[]);
    assert!(
        message.contains("this function requires an argument to process"),
        "{message}"
    );
}
