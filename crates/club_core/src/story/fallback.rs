//! Synthesized options for branches that run out of authored choices.
//!
//! A few authored branches terminate before the five-step limit. When the
//! session reaches such a node early, exactly three generic options are
//! generated so every category still plays out five decision points: one
//! small boost on the category's canonical bar and two neutral choices
//! with narrative-only successors.

use std::sync::Arc;

use super::types::{Category, StoryNode, StoryOption};
use crate::progress::Effects;

/// Builds the three stand-in options for `category`. `bar_bonus` is the
/// delta carried by the category-aligned option (+5 in the standard
/// config).
pub fn fallback_options(category: Category, bar_bonus: i16) -> Vec<StoryOption> {
    let narrative = |text: &str| {
        Arc::new(StoryNode { text: text.to_string(), options: Vec::new() })
    };

    vec![
        StoryOption {
            text: "Olumlu değerlendirip bu yönde devam etmek istiyorum".to_string(),
            effects: Effects::on(category.bar(), bar_bonus),
            next: narrative("Kararınız olumlu sonuçlar doğurdu ve takım daha da güçlendi."),
        },
        StoryOption {
            text: "Temkinli yaklaşıp yeni stratejiler geliştirmeliyiz".to_string(),
            effects: Effects::NONE,
            next: narrative(
                "Temkinli yaklaşımınız bazı fırsatları kaçırmanıza sebep olsa da riskleri azalttı.",
            ),
        },
        StoryOption {
            text: "Bu durumu daha iyi analiz etmek için veri toplamalıyız".to_string(),
            effects: Effects::NONE,
            next: narrative(
                "Veri toplama kararınız sayesinde daha bilinçli adımlar atabileceksiniz.",
            ),
        },
    ]
}
