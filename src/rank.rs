//! Ranking and selection policy
//!
//! Top-N selection by a numeric key with a stable tie-break: rows with
//! equal keys keep their relative fetch order, so output is reproducible
//! across runs with identical input.

use serde::Serialize;

use crate::assemble::{ForumCard, ForumTopicCard};
use crate::entities::Profile;

/// Top `n` rows, descending by `key`
///
/// `n == 0` or `n >= len` yields the full ordered sequence.
pub fn select_top<T>(rows: Vec<T>, key: impl Fn(&T) -> i64, n: usize) -> Vec<T> {
    select_top_by(rows, key, false, n)
}

/// Top `n` rows by `key`, ascending on request
pub fn select_top_by<T>(
    rows: Vec<T>,
    key: impl Fn(&T) -> i64,
    ascending: bool,
    n: usize,
) -> Vec<T> {
    let mut rows = rows;
    // sort_by is stable: equal keys keep input order
    if ascending {
        rows.sort_by(|a, b| key(a).cmp(&key(b)));
    } else {
        rows.sort_by(|a, b| key(b).cmp(&key(a)));
    }
    if n > 0 && rows.len() > n {
        rows.truncate(n);
    }
    rows
}

/// One displayed leaderboard line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    /// 1-indexed rank in the monthly ordering
    pub position: usize,
    pub user_id: String,
    pub display_name: String,
    pub points: i64,
    /// Marks the current user's own row
    pub highlight: bool,
}

/// Build the displayed leaderboard window
///
/// `profiles` is the fetched ranking source; it is re-ranked here by
/// monthly points so the window never depends on store ordering quirks.
/// The current user is pinned into the window with their true rank when
/// they fall outside it, and never duplicated when already inside.
pub fn leaderboard_window(
    profiles: Vec<Profile>,
    window: usize,
    current: Option<&Profile>,
) -> Vec<LeaderboardRow> {
    let ranked = select_top(profiles, |p| p.monthly_points, 0);

    let current_user_id = current.map(|p| p.user_id.as_str());
    let mut rows: Vec<LeaderboardRow> = ranked
        .iter()
        .take(window)
        .enumerate()
        .map(|(idx, profile)| LeaderboardRow {
            position: idx + 1,
            user_id: profile.user_id.clone(),
            display_name: profile.display_name.clone(),
            points: profile.monthly_points,
            highlight: current_user_id == Some(profile.user_id.as_str()),
        })
        .collect();

    let Some(current) = current else {
        return rows;
    };
    if rows.iter().any(|row| row.user_id == current.user_id) {
        return rows;
    }

    // True rank: position inside the fetched ranking when present, the
    // store-maintained monthly rank otherwise.
    let position = ranked
        .iter()
        .position(|p| p.user_id == current.user_id)
        .map(|idx| idx + 1)
        .or_else(|| current.monthly_ranking_position.map(|rank| rank as usize));

    match position {
        Some(position) => rows.push(LeaderboardRow {
            position,
            user_id: current.user_id.clone(),
            display_name: current.display_name.clone(),
            points: current.monthly_points,
            highlight: true,
        }),
        None => log::debug!(
            "no monthly rank recorded for {}, skipping leaderboard pin",
            current.user_id
        ),
    }

    rows
}

/// Pinned topics first, then the rest, each group in display order
///
/// Operates on the assembled list so the partition also applies to
/// fallback rows.
pub fn pinned_first(cards: Vec<ForumTopicCard>) -> (Vec<ForumTopicCard>, Vec<ForumTopicCard>) {
    cards.into_iter().partition(|card| card.is_pinned)
}

/// Case-insensitive substring match over forum name and description
pub fn search_forums(cards: Vec<ForumCard>, term: &str) -> Vec<ForumCard> {
    let term = term.to_lowercase();
    cards
        .into_iter()
        .filter(|card| {
            card.name.to_lowercase().contains(&term)
                || card.description.to_lowercase().contains(&term)
        })
        .collect()
}

/// Case-insensitive substring match over topic title and content
pub fn search_forum_topics(cards: Vec<ForumTopicCard>, term: &str) -> Vec<ForumTopicCard> {
    let term = term.to_lowercase();
    cards
        .into_iter()
        .filter(|card| {
            card.title.to_lowercase().contains(&term)
                || card.content.to_lowercase().contains(&term)
        })
        .collect()
}
