use super::ApiClient;
use crate::{
    common::{
        goal::{CommunityGoal, GoalProgress},
        newtypes::GoalId,
    },
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    pub async fn list_community_goals(&self) -> FrontendResult<Vec<CommunityGoal>> {
        self.get("/community-goals", None::<()>).await
    }

    pub async fn community_goal_progress(&self, id: GoalId) -> FrontendResult<GoalProgress> {
        self.get(&format!("/community-goals/{}/progress", id.0), None::<()>)
            .await
    }
}
