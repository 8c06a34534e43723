use super::ApiClient;
use crate::{
    common::{
        newtypes::NotificationId,
        notification::{ListNotificationsParams, MarkAsReadParams, NotificationsResponse},
        SuccessResponse,
    },
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    pub async fn notifications_list(&self, limit: i32) -> FrontendResult<NotificationsResponse> {
        self.get("/notifications", Some(ListNotificationsParams { limit }))
            .await
    }

    pub async fn notifications_count(&self) -> FrontendResult<usize> {
        self.get("/notifications/count", None::<()>).await
    }

    pub async fn notification_mark_as_read(
        &self,
        id: NotificationId,
    ) -> FrontendResult<SuccessResponse> {
        self.post("/notifications/mark_as_read", Some(MarkAsReadParams { id }))
            .await
    }

    /// Single bulk update for the whole inbox, scoped to the current user by
    /// the backend.
    pub async fn notifications_mark_all_as_read(&self) -> FrontendResult<SuccessResponse> {
        self.post("/notifications/mark_all_as_read", None::<()>)
            .await
    }
}
