use crate::model::member::ItemLevelTier;

/// Classifies an item level into a badge tier. Each threshold includes its lower bound.
///
/// | Item level | Tier |
/// |---|---|
/// | 480+ | legendary |
/// | 470-479 | epic |
/// | 450-469 | rare |
/// | 400-449 | uncommon |
/// | below 400 | common |
pub fn item_level_tier(item_level: u32) -> ItemLevelTier {
    match item_level {
        480.. => ItemLevelTier::Legendary,
        470..=479 => ItemLevelTier::Epic,
        450..=469 => ItemLevelTier::Rare,
        400..=449 => ItemLevelTier::Uncommon,
        _ => ItemLevelTier::Common,
    }
}
