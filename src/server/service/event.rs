use dioxus_logger::tracing;

use crate::{
    model::event::RaidEventsDto,
    server::{
        data::raid_helper::RaidHelperClient, error::AppError, model::raid_helper::EventFilter,
        service::fallback,
    },
};

pub struct EventService<'a> {
    raid_helper: &'a RaidHelperClient,
}

impl<'a> EventService<'a> {
    pub fn new(raid_helper: &'a RaidHelperClient) -> Self {
        Self { raid_helper }
    }

    /// Gets scheduled events, substituting placeholder events when Raid-Helper fails.
    ///
    /// # Returns
    /// - `Ok(RaidEventsDto)` - Live events, or fallback events flagged with `fallback: true`
    ///   when Raid-Helper could not be reached or answered with an error
    /// - `Err(AppError::ConfigErr)` - Server id or API key not configured
    pub async fn events(&self, filter: &EventFilter) -> Result<RaidEventsDto, AppError> {
        match self.raid_helper.events(filter).await {
            Ok(events) => Ok(events),
            Err(AppError::ConfigErr(err)) => Err(err.into()),
            Err(err) => {
                tracing::warn!("Serving fallback events: {}", err);
                Ok(fallback::events())
            }
        }
    }
}
