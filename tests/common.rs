//! Common test utilities for building templates and field values.
use veinflow::prelude::*;

/// The Bilibili crawler node exactly as the editor front end declares it.
#[allow(dead_code)]
pub const BILIBILI_TEMPLATE_JSON: &str = r#"{
    "description": "description",
    "task_name": "web_crawlers.bilibili_crawler",
    "has_inputs": true,
    "template": {
        "url_or_bvid": {
            "required": true, "placeholder": "", "show": true, "value": "",
            "name": "url_or_bvid", "display_name": "url_or_bvid", "type": "str",
            "clear_after_run": true, "list": false, "field_type": "input"
        },
        "download_video": {
            "required": false, "placeholder": "", "show": false, "value": false,
            "name": "download_video", "display_name": "download_video", "type": "bool",
            "clear_after_run": true, "list": false, "field_type": "checkbox"
        },
        "output_type": {
            "required": false, "placeholder": "", "show": false, "value": "str",
            "options": [{"value": "str", "label": "str"}, {"value": "list", "label": "list"}],
            "name": "output_type", "display_name": "output_type", "type": "str",
            "clear_after_run": false, "list": true, "field_type": "select"
        },
        "output_title": {
            "required": true, "placeholder": "", "show": false, "value": "",
            "name": "output_title", "display_name": "output_title", "type": "str|dict",
            "clear_after_run": true, "list": false, "field_type": "textarea", "is_output": true
        },
        "output_subtitle": {
            "required": true, "placeholder": "", "show": false, "value": "",
            "name": "output_subtitle", "display_name": "output_subtitle", "type": "str|dict",
            "clear_after_run": true, "list": false, "field_type": "textarea", "is_output": true
        },
        "output_video": {
            "required": true, "placeholder": "", "show": false, "value": "",
            "name": "output_video", "display_name": "output_video", "type": "str|dict",
            "clear_after_run": true, "list": false, "field_type": "textarea", "is_output": true,
            "condition": {"predicate": "is_truthy", "depends_on": "download_video"}
        }
    }
}"#;

/// Creates a small, valid template with one conditional select field.
///
/// `quality` is only relevant while `mode == "advanced"`.
#[allow(dead_code)]
pub fn create_simple_template() -> NodeTemplate {
    NodeTemplate::new("test_tasks.simple", "A test node", false)
        .with_field(
            FieldSpec::new("prompt", FieldType::Str, WidgetKind::Textarea)
                .required(true)
                .show(true),
        )
        .with_field(
            FieldSpec::new("mode", FieldType::Str, WidgetKind::Select)
                .default_value("basic")
                .options(vec![
                    SelectOption::new("basic", "Basic"),
                    SelectOption::new("advanced", "Advanced"),
                ])
                .show(true),
        )
        .with_field(
            FieldSpec::new("quality", FieldType::Str, WidgetKind::Input)
                .required(true)
                .show(true)
                .when(Condition::equals("mode", "advanced")),
        )
        .with_field(FieldSpec::output("output"))
}

/// Builds a field-value mapping from `(name, value)` pairs.
#[allow(dead_code)]
pub fn values(pairs: &[(&str, FieldValue)]) -> FieldValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}
