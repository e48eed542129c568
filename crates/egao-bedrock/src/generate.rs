//! Converse invocation with bounded retry, and the sequential
//! three-section care-plan generation flow.

use std::time::Duration;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use egao_assess::AssessmentOutcome;
use egao_core::models::adl::AdlAssessment;
use egao_core::models::care_plan::CarePlan;
use egao_core::models::client::ClientProfile;
use egao_core::models::usage::TokenUsage;

use crate::error::BedrockError;
use crate::prompts;
use crate::tokens;

/// Inference parameters for one section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InferenceParams {
    pub temperature: f32,
    pub max_tokens: i32,
}

impl InferenceParams {
    pub const INTENTIONS: InferenceParams = InferenceParams {
        temperature: 0.7,
        max_tokens: 1000,
    };
    pub const CERTIFICATION_OPINION: InferenceParams = InferenceParams {
        temperature: 0.7,
        max_tokens: 1000,
    };
    pub const SUPPORT_POLICY: InferenceParams = InferenceParams {
        temperature: 0.7,
        max_tokens: 1500,
    };
}

const MAX_ATTEMPTS: u32 = 3;

/// One generated section with its token usage.
#[derive(Debug, Clone, Serialize)]
pub struct SectionOutput {
    pub text: String,
    pub usage: TokenUsage,
}

/// Core invocation using the Bedrock Converse API.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
    params: InferenceParams,
) -> Result<SectionOutput, BedrockError> {
    let inference = InferenceConfiguration::builder()
        .temperature(params.temperature)
        .max_tokens(params.max_tokens)
        .build();

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .inference_config(inference)
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let usage = response
        .usage()
        .map(|u| tokens::price_usage(model_id, tokens::extract_token_count(u)))
        .unwrap_or_default();

    Ok(SectionOutput { text, usage })
}

/// Generate one section, retrying transient failures with a linear
/// backoff. Empty completions count as failures — the last one surfaces
/// as [`BedrockError::EmptyCompletion`].
pub async fn generate_section(
    client: &Client,
    model_id: &str,
    section: &str,
    system_prompt: &str,
    user_message: &str,
    params: InferenceParams,
) -> Result<SectionOutput, BedrockError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        let result = invoke_converse(client, model_id, system_prompt, user_message, params)
            .await
            .and_then(|output| {
                if output.text.trim().is_empty() {
                    Err(BedrockError::EmptyCompletion(section.to_string()))
                } else {
                    Ok(output)
                }
            });

        match result {
            Ok(output) => return Ok(output),
            Err(e) if attempt < MAX_ATTEMPTS => {
                warn!(section, attempt, error = %e, "section generation failed, retrying");
                tokio::time::sleep(Duration::from_secs(attempt as u64)).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Generate the three narrative sections and assemble the care plan.
///
/// The sections run sequentially: the support policy embeds the two
/// sections generated before it.
pub async fn generate_care_plan(
    config: &aws_config::SdkConfig,
    model_id: &str,
    client_profile: &ClientProfile,
    assessment: &AdlAssessment,
    outcome: &AssessmentOutcome,
    client_needs: &str,
) -> Result<CarePlan, BedrockError> {
    let client = Client::new(config);
    let plan_id = Uuid::new_v4();
    info!(plan_id = %plan_id, model_id, "starting care plan generation");

    let mut usage = TokenUsage::default();

    let intentions = generate_section(
        &client,
        model_id,
        "intentions",
        prompts::CARE_MANAGER_SYSTEM_PROMPT,
        &prompts::build_intentions_prompt(client_profile, assessment, client_needs),
        InferenceParams::INTENTIONS,
    )
    .await?;
    usage.accumulate(intentions.usage);

    let certification_opinion = generate_section(
        &client,
        model_id,
        "certification_opinion",
        prompts::CERTIFICATION_BOARD_SYSTEM_PROMPT,
        &prompts::build_certification_opinion_prompt(client_profile, assessment),
        InferenceParams::CERTIFICATION_OPINION,
    )
    .await?;
    usage.accumulate(certification_opinion.usage);

    let support_policy = generate_section(
        &client,
        model_id,
        "support_policy",
        prompts::CARE_MANAGER_SYSTEM_PROMPT,
        &prompts::build_support_policy_prompt(
            client_profile,
            assessment,
            &intentions.text,
            &certification_opinion.text,
        ),
        InferenceParams::SUPPORT_POLICY,
    )
    .await?;
    usage.accumulate(support_policy.usage);

    info!(
        plan_id = %plan_id,
        total_tokens = usage.tokens.total(),
        "care plan generation complete"
    );

    Ok(CarePlan {
        id: plan_id,
        client_name: client_profile.name.clone(),
        intentions: intentions.text,
        certification_opinion: certification_opinion.text,
        support_policy: support_policy.text,
        goals: outcome.goals.clone(),
        scores: outcome.summary(),
        extra_sections: Default::default(),
        model_id: model_id.to_string(),
        usage,
        created_at: jiff::Timestamp::now(),
    })
}
