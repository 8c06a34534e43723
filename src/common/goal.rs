use super::{
    newtypes::{CollectionId, GoalId},
    utils::int_bool,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalKind {
    TranslationCount,
    Collection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommunityGoal {
    pub id: GoalId,
    /// 0/1 on the wire.
    #[serde(with = "int_bool")]
    pub is_active: bool,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub goal_type: GoalKind,
    /// Language code, set for translation count goals.
    #[serde(default)]
    pub target_language: Option<String>,
    /// Set for collection goals.
    #[serde(default)]
    pub collection_id: Option<CollectionId>,
    #[serde(default)]
    pub points_reward: Option<i32>,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// 0/1 on the wire.
    #[serde(with = "int_bool")]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_type: Option<String>,
}

impl CommunityGoal {
    /// Target of the translation-contribution view, parameterized by language
    /// and/or source collection.
    pub fn contribute_path(&self) -> String {
        let mut params = vec![];
        if let Some(language) = &self.target_language {
            params.push(format!("language={language}"));
        }
        if let Some(collection_id) = &self.collection_id {
            params.push(format!("source={}", collection_id.0));
        }
        if params.is_empty() {
            "/translate".to_string()
        } else {
            format!("/translate?{}", params.join("&"))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub current_count: i32,
    #[serde(default)]
    pub target_count: Option<i32>,
    pub progress_percentage: f32,
    pub is_complete: bool,
    /// For collection goals, how many translations each language still misses.
    #[serde(default)]
    pub missing_translations: Option<BTreeMap<String, i32>>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GoalProgressParams {
    pub id: GoalId,
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn goal(language: Option<&str>, collection: Option<i32>) -> CommunityGoal {
        CommunityGoal {
            id: GoalId(1),
            is_active: true,
            title: "Spanish sprint".to_string(),
            description: None,
            goal_type: GoalKind::TranslationCount,
            target_language: language.map(ToString::to_string),
            collection_id: collection.map(CollectionId),
            points_reward: None,
            start_date: "2024-01-01T00:00:00Z".parse().expect("parse date"),
            end_date: None,
            is_recurring: false,
            recurrence_type: None,
        }
    }

    #[test]
    fn test_contribute_path() {
        assert_eq!("/translate?language=es", goal(Some("es"), None).contribute_path());
        assert_eq!("/translate?source=3", goal(None, Some(3)).contribute_path());
        assert_eq!(
            "/translate?language=es&source=3",
            goal(Some("es"), Some(3)).contribute_path()
        );
        assert_eq!("/translate", goal(None, None).contribute_path());
    }

    #[test]
    fn test_goal_wire_format() {
        let json = r#"{
            "id": 5,
            "is_active": 1,
            "title": "Finish the onboarding collection",
            "goal_type": "collection",
            "collection_id": 12,
            "points_reward": 50,
            "start_date": "2024-01-01T00:00:00Z",
            "is_recurring": 1,
            "recurrence_type": "monthly"
        }"#;
        let goal: CommunityGoal = serde_json::from_str(json).expect("deserialize");
        assert_eq!(GoalKind::Collection, goal.goal_type);
        assert!(goal.is_active);
        assert!(goal.is_recurring);
        assert_eq!(None, goal.description);
        assert_eq!(None, goal.end_date);
    }
}
