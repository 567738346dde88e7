//! Guild roster and item-level enrichment.

use dioxus_logger::tracing;
use futures::future::join_all;
use std::future::Future;

use crate::{
    model::member::MemberDto,
    server::{
        config::GuildConfig,
        data::blizzard::BlizzardClient,
        error::AppError,
        model::target::{CharacterTarget, GuildTarget},
        util::item_level::item_level_tier,
    },
};

/// Number of character profiles fetched concurrently while enriching a roster.
pub const ENRICHMENT_BATCH_SIZE: usize = 5;

pub struct RosterService<'a> {
    blizzard: &'a BlizzardClient,
    guild: &'a GuildConfig,
}

impl<'a> RosterService<'a> {
    pub fn new(blizzard: &'a BlizzardClient, guild: &'a GuildConfig) -> Self {
        Self { blizzard, guild }
    }

    /// Gets the guild roster in upstream order. Item levels are left at 0.
    pub async fn roster(&self, target: &GuildTarget) -> Result<Vec<MemberDto>, AppError> {
        let roster = self.blizzard.guild_roster(target).await?;

        Ok(roster
            .members
            .into_iter()
            .map(|entry| entry.into_dto(self.guild))
            .collect())
    }

    /// Gets the guild roster with each member's average item level.
    ///
    /// Profiles are fetched in batches of [`ENRICHMENT_BATCH_SIZE`]. A member whose profile
    /// cannot be fetched keeps item level 0; only a failure to fetch the roster itself is
    /// returned as an error.
    pub async fn roster_with_item_level(
        &self,
        target: &GuildTarget,
    ) -> Result<Vec<MemberDto>, AppError> {
        let members = self.roster(target).await?;
        let blizzard = self.blizzard;

        let enriched =
            enrich_in_batches(members, ENRICHMENT_BATCH_SIZE, move |realm, name| async move {
                blizzard
                    .character_profile(&CharacterTarget::new(&realm, &name))
                    .await
                    .map(|profile| profile.item_level())
            })
            .await;

        Ok(enriched)
    }
}

/// Looks up an item level for every member, `batch_size` members at a time.
///
/// Batches run one after another in roster order. Within a batch every lookup runs
/// concurrently and all of them are awaited before the next batch starts, so at most
/// `batch_size` lookups are in flight. Failed lookups are logged and give item level 0.
/// The output has the same length and order as the input.
///
/// # Arguments
/// - `members` - Members to enrich
/// - `batch_size` - Maximum concurrent lookups; 0 is treated as 1
/// - `lookup` - Called with each member's realm slug and name
pub async fn enrich_in_batches<F, Fut>(
    members: Vec<MemberDto>,
    batch_size: usize,
    lookup: F,
) -> Vec<MemberDto>
where
    F: Fn(String, String) -> Fut,
    Fut: Future<Output = Result<u32, AppError>>,
{
    let mut enriched = Vec::with_capacity(members.len());

    for batch in members.chunks(batch_size.max(1)) {
        let results = join_all(
            batch
                .iter()
                .map(|member| lookup(member.realm.clone(), member.name.clone())),
        )
        .await;

        for (member, result) in batch.iter().zip(results) {
            let item_level = result.unwrap_or_else(|err| {
                tracing::warn!("Failed to fetch item level for {}: {}", member.name, err);
                0
            });
            enriched.push(with_item_level(member.clone(), item_level));
        }
    }

    enriched
}

fn with_item_level(member: MemberDto, item_level: u32) -> MemberDto {
    MemberDto {
        average_item_level: item_level,
        item_level_tier: item_level_tier(item_level),
        ..member
    }
}
