use hoist_fmt::FormatError;
use hoist_toml::{TomlToHoistError, toml_to_hoist};

#[test]
fn test_simple_conversion() {
    let input = "\
число = 42
строка = \"значение\"

[словарь]
подключ = 100
";
    let expected = "\
const число = 42
const строка = \"значение\"
const словарь_подключ = 100

{
    число : @[число];
    строка : @[строка];
    словарь : {
        подключ : @[словарь_подключ];
    };
}";
    assert_eq!(toml_to_hoist(input).unwrap(), expected);
}

#[test]
fn test_nested_tables() {
    let input = "[level1.level2]\nlevel3 = 789";
    let expected = "\
const level1_level2_level3 = 789

{
    level1 : {
        level2 : {
            level3 : @[level1_level2_level3];
        };
    };
}";
    assert_eq!(toml_to_hoist(input).unwrap(), expected);
}

#[test]
fn test_boolean_handling() {
    let input = "flag = true\nother_flag = false";
    let expected = "\
const flag = \"true\"
const other_flag = \"false\"

{
    flag : @[flag];
    other_flag : @[other_flag];
}";
    assert_eq!(toml_to_hoist(input).unwrap(), expected);
}

#[test]
fn test_comments_do_not_affect_conversion() {
    let input = "\
# a comment
key = 123  # an inline comment
";
    let expected = "const key = 123\n\n{\n    key : @[key];\n}";
    assert_eq!(toml_to_hoist(input).unwrap(), expected);
}

#[test]
fn test_empty_document() {
    assert_eq!(toml_to_hoist("").unwrap(), "{\n}");
}

#[test]
fn test_key_order_is_preserved() {
    let input = "b = 1\na = 2\nc = 3";
    let output = toml_to_hoist(input).unwrap();
    let b = output.find("const b").unwrap();
    let a = output.find("const a").unwrap();
    let c = output.find("const c").unwrap();
    assert!(b < a && a < c);
}

#[test]
fn test_invalid_name() {
    // TOML itself allows quoted keys that Hoist rejects.
    let result = toml_to_hoist("\"bad name\" = 123");
    assert!(matches!(
        result,
        Err(TomlToHoistError::Format(FormatError::InvalidKey { key, .. })) if key == "bad name"
    ));
}

#[test]
fn test_unsupported_value_type() {
    let result = toml_to_hoist("список = [1, 2, 3]");
    assert_eq!(
        result,
        Err(TomlToHoistError::Format(FormatError::UnsupportedValue {
            key: "список".to_string(),
            kind: "array".to_string(),
        }))
    );
}

#[test]
fn test_duplicate_constant() {
    // A top-level `a_b` clashes with the constant synthesized for `a.b`.
    let input = "a_b = 2\n\n[a]\nb = 1";
    assert_eq!(
        toml_to_hoist(input),
        Err(TomlToHoistError::Format(FormatError::DuplicateConstant {
            name: "a_b".to_string(),
        }))
    );
}

#[test]
fn test_conversion_is_deterministic() {
    let input = "x = 1\n[group]\ny = \"two\"";
    assert_eq!(toml_to_hoist(input).unwrap(), toml_to_hoist(input).unwrap());
}
