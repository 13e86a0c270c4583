//! Achievement progress computation
//!
//! Splits the active catalog into earned and still-available badges for one
//! user and computes progress toward the points-threshold requirement.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{Achievement, Profile, UserAchievement};

/// Catalog entry annotated with the user's standing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementStatus {
    pub achievement: Achievement,
    /// Set when the user holds the matching join row
    pub earned_at: Option<DateTime<Utc>>,
    /// 0-100, clamped; 0 when the achievement has no points requirement
    pub progress_pct: f64,
}

/// Progress toward an achievement's points threshold
pub fn progress_toward(achievement: &Achievement, profile: Option<&Profile>) -> f64 {
    let required = achievement
        .requirements
        .as_ref()
        .and_then(|req| req.points)
        .filter(|points| *points > 0);

    match (required, profile) {
        (Some(required), Some(profile)) => {
            let pct = profile.total_points as f64 / required as f64 * 100.0;
            pct.min(100.0)
        }
        _ => 0.0,
    }
}

/// Partition the catalog into (earned, available) for one user
///
/// Earned entries carry their `earned_at` stamp; available entries carry
/// progress computed from the profile. Both partitions keep catalog order.
pub fn partition_catalog(
    catalog: Vec<Achievement>,
    earned_rows: &[UserAchievement],
    profile: Option<&Profile>,
) -> (Vec<AchievementStatus>, Vec<AchievementStatus>) {
    let mut earned = Vec::new();
    let mut available = Vec::new();

    for achievement in catalog {
        let earned_at = earned_rows
            .iter()
            .find(|row| row.achievement_id == achievement.id)
            .map(|row| row.earned_at);

        match earned_at {
            Some(earned_at) => earned.push(AchievementStatus {
                achievement,
                earned_at: Some(earned_at),
                progress_pct: 100.0,
            }),
            None => {
                let progress_pct = progress_toward(&achievement, profile);
                available.push(AchievementStatus {
                    achievement,
                    earned_at: None,
                    progress_pct,
                });
            }
        }
    }

    (earned, available)
}

/// Total reward points over the earned partition
pub fn points_earned(earned: &[AchievementStatus]) -> i64 {
    earned
        .iter()
        .map(|status| status.achievement.points_reward)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Requirement;
    use chrono::TimeZone;

    fn make_achievement(id: &str, reward: i64, required_points: Option<i64>) -> Achievement {
        Achievement {
            id: id.to_string(),
            name: format!("achievement {}", id),
            description: "desc".to_string(),
            badge_color: "#F59E0B".to_string(),
            icon_url: None,
            points_reward: reward,
            is_active: true,
            requirements: required_points.map(|points| Requirement {
                points: Some(points),
            }),
        }
    }

    fn make_profile(total_points: i64) -> Profile {
        Profile {
            id: "p1".to_string(),
            user_id: "u1".to_string(),
            display_name: "Maria Silva".to_string(),
            username: Some("maria_s".to_string()),
            bio: None,
            avatar_url: None,
            total_points,
            monthly_points: 0,
            ranking_position: None,
            monthly_ranking_position: None,
            study_streak: 0,
            level: 1,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn make_earned(achievement_id: &str) -> UserAchievement {
        UserAchievement {
            id: format!("ua-{}", achievement_id),
            achievement_id: achievement_id.to_string(),
            user_id: "u1".to_string(),
            earned_at: Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_progress_clamps_at_100() {
        let achievement = make_achievement("a1", 50, Some(100));
        let profile = make_profile(250);
        assert_eq!(progress_toward(&achievement, Some(&profile)), 100.0);
    }

    #[test]
    fn test_progress_partial() {
        let achievement = make_achievement("a1", 50, Some(200));
        let profile = make_profile(50);
        assert_eq!(progress_toward(&achievement, Some(&profile)), 25.0);
    }

    #[test]
    fn test_progress_without_requirement_or_profile() {
        let without_requirement = make_achievement("a1", 50, None);
        let profile = make_profile(500);
        assert_eq!(progress_toward(&without_requirement, Some(&profile)), 0.0);

        let with_requirement = make_achievement("a2", 50, Some(100));
        assert_eq!(progress_toward(&with_requirement, None), 0.0);
    }

    #[test]
    fn test_partition_and_points_earned() {
        let catalog = vec![
            make_achievement("a1", 100, Some(100)),
            make_achievement("a2", 50, Some(200)),
            make_achievement("a3", 25, None),
        ];
        let earned_rows = vec![make_earned("a1")];
        let profile = make_profile(50);

        let (earned, available) = partition_catalog(catalog, &earned_rows, Some(&profile));

        assert_eq!(earned.len(), 1);
        assert_eq!(earned[0].achievement.id, "a1");
        assert!(earned[0].earned_at.is_some());

        assert_eq!(available.len(), 2);
        assert_eq!(available[0].progress_pct, 25.0);
        assert_eq!(available[1].progress_pct, 0.0);

        assert_eq!(points_earned(&earned), 100);
    }
}
