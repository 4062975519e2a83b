pub mod schema;

pub use schema::{RelevanceEntry, RelevanceMap, SummaryRecord, SCALAR_FIELDS};

use ingest::Team;
use schema::{
    DIFFICULTY_PLACEHOLDER, HOURS_PLACEHOLDER, NOT_PROVIDED, OVERVIEW_PLACEHOLDER,
    TAKEAWAYS_PLACEHOLDER,
};

/// Build the placeholder summary for one room.
///
/// The rooms dataset only carries titles, so every narrative field is a fixed
/// marker. Teams resolving to the same display name share one relevance
/// entry; the later team wins.
pub fn summarize_room(room: &str, teams: &[Team]) -> SummaryRecord {
    let mut relevance = RelevanceMap::with_capacity(teams.len());
    for team in teams {
        relevance.insert(team.display_name(), RelevanceEntry::unrated());
    }

    SummaryRecord {
        room_title: room.to_string(),
        overview: OVERVIEW_PLACEHOLDER.to_string(),
        skills_covered: NOT_PROVIDED.to_string(),
        tools_and_technologies: NOT_PROVIDED.to_string(),
        difficulty: DIFFICULTY_PLACEHOLDER.to_string(),
        key_takeaways: TAKEAWAYS_PLACEHOLDER.to_string(),
        hours: HOURS_PLACEHOLDER.to_string(),
        relevance,
    }
}
