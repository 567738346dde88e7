//! Raid-Helper REST API payloads.

use serde_json::{json, Value};

/// Single posted event.
///
/// # Arguments
/// - `id` - Event id
/// - `title` - Event title
/// - `start_time` - Start time in epoch seconds
pub fn event(id: &str, title: &str, start_time: i64) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Bring consumables.",
        "leaderId": "123456789012345678",
        "leaderName": "Thrall",
        "channelId": "987654321098765432",
        "startTime": start_time,
        "endTime": start_time + 10_800,
        "closeTime": start_time - 3_600,
        "templateId": "2",
        "signUpCount": "24",
        "color": "255,0,0"
    })
}

/// One page of the server events list.
///
/// # Arguments
/// - `current_page` - 1-based page number
/// - `pages` - Total number of pages
/// - `events` - Events on this page
pub fn events_page(current_page: u32, pages: u32, events: Vec<Value>) -> Value {
    json!({
        "pages": pages,
        "currentPage": current_page,
        "eventCount": events.len(),
        "postedEvents": events
    })
}
