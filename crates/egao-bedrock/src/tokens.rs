use egao_core::models::usage::{ModelPricing, TokenCount, TokenUsage};

/// Extract token counts from a Bedrock Converse response.
pub fn extract_token_count(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> TokenCount {
    TokenCount {
        input: usage.input_tokens as u64,
        output: usage.output_tokens as u64,
    }
}

/// Price a token count for a model; unknown models cost 0.
pub fn price_usage(model_id: &str, tokens: TokenCount) -> TokenUsage {
    let cost_usd = get_pricing(model_id)
        .map(|p| p.estimate_cost(tokens))
        .unwrap_or(0.0);
    TokenUsage { tokens, cost_usd }
}

/// Known model pricing (per million tokens).
/// Approximate; update as pricing changes.
pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        id if id.contains("claude-opus-4") => Some(ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        }),
        id if id.contains("claude-sonnet-4") => Some(ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        }),
        id if id.contains("claude-haiku") => Some(ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        }),
        _ => None,
    }
}
