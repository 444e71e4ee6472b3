//! Unit tests for core veinflow types.
use std::collections::BTreeMap;
use veinflow::prelude::*;

#[test]
fn test_field_value_display() {
    assert_eq!(format!("{}", FieldValue::Bool(true)), "true");
    assert_eq!(format!("{}", FieldValue::from("list")), "\"list\"");
    let dict = BTreeMap::from([
        ("a".to_string(), "1".to_string()),
        ("b".to_string(), "2".to_string()),
    ]);
    assert_eq!(format!("{}", FieldValue::Dict(dict)), "{a: \"1\", b: \"2\"}");
}

#[test]
fn test_field_value_emptiness() {
    assert!(FieldValue::empty_str().is_empty());
    assert!(FieldValue::Dict(BTreeMap::new()).is_empty());
    assert!(!FieldValue::Bool(false).is_empty());
    assert!(!FieldValue::from("x").is_empty());
}

#[test]
fn test_field_value_wire_form() {
    assert_eq!(serde_json::to_string(&FieldValue::Bool(false)).unwrap(), "false");
    assert_eq!(serde_json::to_string(&FieldValue::from("str")).unwrap(), "\"str\"");
    let parsed: FieldValue = serde_json::from_str(r#"{"zh-CN": "字幕"}"#).unwrap();
    assert_eq!(
        parsed.as_dict().unwrap().get("zh-CN").map(String::as_str),
        Some("字幕")
    );
    assert!(serde_json::from_str::<FieldValue>("42").is_err());
}

#[test]
fn test_parse_loose() {
    assert_eq!(FieldValue::parse_loose("true"), FieldValue::Bool(true));
    assert_eq!(FieldValue::parse_loose("false"), FieldValue::Bool(false));
    assert_eq!(FieldValue::parse_loose("BV1xx411c7abc"), FieldValue::from("BV1xx411c7abc"));
    assert_eq!(FieldValue::parse_loose(""), FieldValue::empty_str());
    assert_eq!(
        FieldValue::parse_loose(r#"{"k": "v"}"#),
        FieldValue::Dict(BTreeMap::from([("k".to_string(), "v".to_string())]))
    );
    assert_eq!(FieldValue::parse_loose("{oops"), FieldValue::from("{oops"));
}

#[test]
fn test_field_value_accessors() {
    assert_eq!(FieldValue::Bool(true).as_bool(), Some(true));
    assert_eq!(FieldValue::from("true").as_bool(), None);
    assert_eq!(FieldValue::from("list").as_str(), Some("list"));
    assert!(FieldValue::Bool(false).as_dict().is_none());
}

#[test]
fn test_parse_value_follows_field_type() {
    assert_eq!(FieldType::Str.parse_value("true"), FieldValue::from("true"));
    assert_eq!(FieldType::Str.parse_value(r#"{"k": "v"}"#), FieldValue::from(r#"{"k": "v"}"#));
    assert_eq!(FieldType::Bool.parse_value("true"), FieldValue::Bool(true));
    assert_eq!(FieldType::Bool.parse_value("yes"), FieldValue::from("yes"));
    assert_eq!(FieldType::StrOrDict.parse_value("false"), FieldValue::from("false"));
    assert_eq!(
        FieldType::StrOrDict.parse_value(r#"{"k": "v"}"#),
        FieldValue::Dict(BTreeMap::from([("k".to_string(), "v".to_string())]))
    );

    let template = veinflow::nodes::web_crawlers::bilibili_crawler();
    let mut node = NodeInstance::new(&template);
    node.set_value("url_or_bvid", FieldType::Str.parse_value("true")).unwrap();
    assert_eq!(node.value("url_or_bvid"), Some(&FieldValue::from("true")));
}

#[test]
fn test_field_type_accepts() {
    let text = FieldValue::from("x");
    let flag = FieldValue::Bool(true);
    let dict = FieldValue::Dict(BTreeMap::new());

    assert!(FieldType::Str.accepts(&text));
    assert!(!FieldType::Str.accepts(&flag));
    assert!(!FieldType::Str.accepts(&dict));
    assert!(FieldType::Bool.accepts(&flag));
    assert!(!FieldType::Bool.accepts(&text));
    assert!(FieldType::StrOrDict.accepts(&text));
    assert!(FieldType::StrOrDict.accepts(&dict));
    assert!(!FieldType::StrOrDict.accepts(&flag));

    assert_eq!(FieldType::Bool.default_value(), FieldValue::Bool(false));
    assert_eq!(FieldType::StrOrDict.default_value(), FieldValue::empty_str());
}

#[test]
fn test_type_tags() {
    assert_eq!(FieldType::StrOrDict.to_string(), "str|dict");
    assert_eq!(serde_json::to_string(&FieldType::StrOrDict).unwrap(), "\"str|dict\"");
    assert_eq!(
        serde_json::from_str::<FieldType>("\"bool\"").unwrap(),
        FieldType::Bool
    );
    assert_eq!(WidgetKind::Textarea.to_string(), "textarea");
    assert_eq!(serde_json::to_string(&WidgetKind::Checkbox).unwrap(), "\"checkbox\"");
    assert!(serde_json::from_str::<WidgetKind>("\"slider\"").is_err());
}

#[test]
fn test_field_spec_defaults() {
    let field = FieldSpec::new("url_or_bvid", FieldType::Str, WidgetKind::Input);
    assert_eq!(field.display_name, "url_or_bvid");
    assert_eq!(field.value, FieldValue::empty_str());
    assert!(!field.required && !field.show && !field.list && !field.is_output);
    assert!(field.clear_after_run);
    assert!(field.options.is_none() && field.condition.is_none());

    let output = FieldSpec::output("output_title");
    assert_eq!(output.value_type, FieldType::StrOrDict);
    assert_eq!(output.widget, WidgetKind::Textarea);
    assert!(output.required && output.is_output);

    let labelled = FieldSpec::new("url_or_bvid", FieldType::Str, WidgetKind::Input)
        .display_name("URL or BV id")
        .placeholder("BV1xx411c7abc");
    assert_eq!(labelled.display_name, "URL or BV id");
    assert_eq!(labelled.placeholder, "BV1xx411c7abc");
    let json = serde_json::to_value(&labelled).unwrap();
    assert_eq!(json["display_name"], "URL or BV id");
    assert_eq!(json["placeholder"], "BV1xx411c7abc");
}

#[test]
fn test_allows_option() {
    let field = FieldSpec::new("output_type", FieldType::Str, WidgetKind::Select)
        .options(vec![SelectOption::new("str", "str"), SelectOption::new("list", "list")]);
    assert!(field.allows_option(&"list".into()));
    assert!(!field.allows_option(&"json".into()));
    let free = FieldSpec::new("text", FieldType::Str, WidgetKind::Input);
    assert!(free.allows_option(&"anything".into()));
}

#[test]
fn test_error_display() {
    let err = SchemaError::DanglingCondition {
        field: "output_video".to_string(),
        missing: "download".to_string(),
    };
    assert!(err.to_string().contains("output_video"));
    assert!(err.to_string().contains("download"));

    let err = InstanceError::TypeMismatch {
        field: "download_video".to_string(),
        expected: FieldType::Bool,
        found: FieldValue::from("yes"),
    };
    assert!(err.to_string().contains("'bool'"));
    assert!(err.to_string().contains("\"yes\""));

    let err = RegistryError::UnknownTask("web_crawlers.x".to_string());
    assert!(err.to_string().contains("web_crawlers.x"));

    let err: InstanceError = ConditionError::FieldNotFound("ghost".to_string()).into();
    assert_eq!(err.to_string(), "Field 'ghost' not found in the provided field values");
}
