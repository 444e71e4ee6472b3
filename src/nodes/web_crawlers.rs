use crate::condition::Condition;
use crate::schema::{FieldSpec, FieldType, NodeTemplate, SelectOption, WidgetKind};

pub const BILIBILI_CRAWLER: &str = "web_crawlers.bilibili_crawler";

/// Template of the Bilibili crawler node.
///
/// Takes a video URL or BV id and yields the title, the subtitles and, when `download_video`
/// is set, the downloaded video. `output_type` decides whether results come back as plain
/// strings or as lists.
pub fn bilibili_crawler() -> NodeTemplate {
    NodeTemplate::new(
        BILIBILI_CRAWLER,
        "Fetch the title, subtitles and optionally the video of a Bilibili video",
        true,
    )
    .with_field(
        FieldSpec::new("url_or_bvid", FieldType::Str, WidgetKind::Input)
            .required(true)
            .show(true),
    )
    .with_field(FieldSpec::new(
        "download_video",
        FieldType::Bool,
        WidgetKind::Checkbox,
    ))
    .with_field(
        FieldSpec::new("output_type", FieldType::Str, WidgetKind::Select)
            .default_value("str")
            .options(vec![
                SelectOption::new("str", "str"),
                SelectOption::new("list", "list"),
            ])
            .clear_after_run(false)
            .list(true),
    )
    .with_field(FieldSpec::output("output_title"))
    .with_field(FieldSpec::output("output_subtitle"))
    .with_field(FieldSpec::output("output_video").when(Condition::truthy("download_video")))
}
