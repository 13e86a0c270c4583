//! Statically declared display rows
//!
//! Used by the assembler only when the live store returns nothing; they
//! never override a non-empty live result.

use crate::assemble::{ForumCard, ForumTopicCard, TopicCard};
use crate::rank::LeaderboardRow;

/// The four dashboard posts shown before any live topic exists
pub fn dashboard_topics() -> Vec<TopicCard> {
    vec![
        TopicCard {
            id: "1".to_string(),
            title: "Como melhorar o listening em inglês?".to_string(),
            author: "Por Martin".to_string(),
            category: "Listening".to_string(),
            likes: 24,
            comments: 6,
            tag: "Dicas".to_string(),
        },
        TopicCard {
            id: "2".to_string(),
            title: "Phrasal Verbs essenciais para o dia a dia".to_string(),
            author: "Por Marina".to_string(),
            category: "Grammar".to_string(),
            likes: 18,
            comments: 9,
            tag: "Aprendizado".to_string(),
        },
        TopicCard {
            id: "3".to_string(),
            title: "Dicas para entrevistas em inglês".to_string(),
            author: "Por Maria".to_string(),
            category: "Business".to_string(),
            likes: 32,
            comments: 12,
            tag: "Profissional".to_string(),
        },
        TopicCard {
            id: "4".to_string(),
            title: "Expressões idiomáticas mais usadas".to_string(),
            author: "Por Roberto José".to_string(),
            category: "Vocabulary".to_string(),
            likes: 27,
            comments: 8,
            tag: "Vocabulário".to_string(),
        },
    ]
}

/// The starter forum set shown before any forum is created
pub fn forums() -> Vec<ForumCard> {
    vec![
        ForumCard {
            id: "1".to_string(),
            name: "Grammar & Vocabulary".to_string(),
            description: "Discuss grammar rules, vocabulary building, and language structure"
                .to_string(),
            color: "#3B82F6".to_string(),
            topics: 156,
            replies: 1247,
            last_activity: "2 minutos atrás".to_string(),
            is_active: true,
        },
        ForumCard {
            id: "2".to_string(),
            name: "Listening Practice".to_string(),
            description: "Share listening exercises, podcasts, and audio resources".to_string(),
            color: "#10B981".to_string(),
            topics: 89,
            replies: 567,
            last_activity: "15 minutos atrás".to_string(),
            is_active: true,
        },
        ForumCard {
            id: "3".to_string(),
            name: "Speaking & Pronunciation".to_string(),
            description: "Practice speaking, pronunciation tips, and conversation starters"
                .to_string(),
            color: "#F59E0B".to_string(),
            topics: 134,
            replies: 892,
            last_activity: "1 hora atrás".to_string(),
            is_active: true,
        },
        ForumCard {
            id: "4".to_string(),
            name: "Business English".to_string(),
            description: "Professional English, job interviews, and workplace communication"
                .to_string(),
            color: "#8B5CF6".to_string(),
            topics: 67,
            replies: 234,
            last_activity: "3 horas atrás".to_string(),
            is_active: false,
        },
        ForumCard {
            id: "5".to_string(),
            name: "TOEFL/IELTS Preparation".to_string(),
            description: "Test preparation strategies, practice tests, and study groups"
                .to_string(),
            color: "#EF4444".to_string(),
            topics: 198,
            replies: 1456,
            last_activity: "30 minutos atrás".to_string(),
            is_active: true,
        },
    ]
}

/// Demo topic list for a forum whose live topic set is still empty
pub fn forum_topics() -> Vec<ForumTopicCard> {
    vec![
        ForumTopicCard {
            id: "1".to_string(),
            title: "Best resources for improving pronunciation".to_string(),
            content: "I've been struggling with English pronunciation, especially with th sounds..."
                .to_string(),
            author_name: "Maria Silva".to_string(),
            author_username: "maria_s".to_string(),
            created_at: "2024-01-15T10:30:00Z".to_string(),
            replies_count: 15,
            likes_count: 8,
            is_pinned: true,
        },
        ForumTopicCard {
            id: "2".to_string(),
            title: "Grammar question: When to use \"has been\" vs \"have been\"".to_string(),
            content: "Can someone explain the difference between \"has been\" and \"have been\"?"
                .to_string(),
            author_name: "João Santos".to_string(),
            author_username: "joao_santos".to_string(),
            created_at: "2024-01-14T15:45:00Z".to_string(),
            replies_count: 23,
            likes_count: 12,
            is_pinned: false,
        },
        ForumTopicCard {
            id: "3".to_string(),
            title: "Weekly vocabulary challenge - Week 3".to_string(),
            content: "This week's theme is business vocabulary. Let's learn together!".to_string(),
            author_name: "Ana Costa".to_string(),
            author_username: "ana_costa".to_string(),
            created_at: "2024-01-13T09:00:00Z".to_string(),
            replies_count: 45,
            likes_count: 28,
            is_pinned: true,
        },
    ]
}

/// Placeholder monthly podium shown before any profile has points
pub fn monthly_ranking() -> Vec<LeaderboardRow> {
    vec![
        LeaderboardRow {
            position: 1,
            user_id: "demo-1".to_string(),
            display_name: "Sophie Martinez".to_string(),
            points: 2847,
            highlight: false,
        },
        LeaderboardRow {
            position: 2,
            user_id: "demo-2".to_string(),
            display_name: "Lucas Thompson".to_string(),
            points: 2756,
            highlight: false,
        },
        LeaderboardRow {
            position: 3,
            user_id: "demo-3".to_string(),
            display_name: "Isabella Chen".to_string(),
            points: 2623,
            highlight: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_sets_are_display_shaped() {
        assert_eq!(dashboard_topics().len(), 4);
        assert_eq!(forums().len(), 5);
        assert_eq!(forum_topics().len(), 3);
        assert_eq!(monthly_ranking().len(), 3);
    }

    #[test]
    fn test_fallback_ranking_positions_are_contiguous() {
        let rows = monthly_ranking();
        for (idx, row) in rows.iter().enumerate() {
            assert_eq!(row.position, idx + 1);
            assert!(!row.highlight);
        }
    }
}
