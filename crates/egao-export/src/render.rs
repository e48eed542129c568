use tera::{Context, Tera};

use egao_core::models::care_plan::CarePlan;

use crate::error::ExportError;

/// Default plain-text layout for a care plan. Every `CarePlan` field is
/// addressable by name; deployments can substitute their own template via
/// [`render_template`].
pub const PLAN_TEXT_TEMPLATE: &str = "\
居宅サービス計画書

利用者名：{{ client_name }}様

■ 利用者及び家族の生活に対する意向
{{ intentions }}

■ 介護認定審査会の意見及びサービスの種類の指定
{{ certification_opinion }}

■ 総合的な援助の方針
{{ support_policy }}

■ 援助目標
短期目標：
{% for goal in goals.short_term %}・{{ goal }}
{% endfor %}長期目標：
{% for goal in goals.long_term %}・{{ goal }}
{% endfor %}
判定ステージ：{{ scores.stage }}　モチベーションレベル：{{ scores.motivation }}
{% for name, body in extra_sections %}
■ {{ name }}
{{ body }}
{% endfor %}";

/// Render a Tera template with a care plan as the context.
///
/// The `template_content` is the raw template string (Jinja2 syntax); the
/// plan's fields become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    plan: &CarePlan,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(plan)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// Render the plan with the default text layout (the `.txt` export body).
pub fn render_plan_text(plan: &CarePlan) -> Result<String, ExportError> {
    render_template("care_plan_text", PLAN_TEXT_TEMPLATE, plan)
}
