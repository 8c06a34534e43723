use super::ApiClient;
use crate::{common::user::Person, frontend::utils::errors::FrontendResult};

impl ApiClient {
    pub async fn get_user(&self, name: &str) -> FrontendResult<Person> {
        self.get(&format!("/users/{name}"), None::<()>).await
    }

    pub async fn my_profile(&self) -> FrontendResult<Person> {
        self.get("/users/me", None::<()>).await
    }
}
