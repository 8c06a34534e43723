use crate::frontend::{
    api::CLIENT,
    components::suspense_error::SuspenseError,
    utils::formatting::render_date_time,
};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

#[component]
pub fn UserProfile() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.get().get("name").clone().unwrap_or_default();
    let user_profile = Resource::new(name, move |name| async move {
        CLIENT.get_user(&name).await
    });

    view! {
        <SuspenseError>
            {move || Suspend::new(async move {
                user_profile
                    .await
                    .map(|person| {
                        view! {
                            <Title text=person.title() />
                            <h1 class="flex-auto my-6 font-serif text-4xl font-bold grow">
                                {person.title()}
                            </h1>
                            {person
                                .banned_at
                                .map(|banned_at| {
                                    view! {
                                        <div class="my-2 alert alert-warning">
                                            {format!(
                                                "This account is suspended since {}",
                                                render_date_time(banned_at),
                                            )}
                                        </div>
                                    }
                                })}
                            <p class="my-2">
                                {format!("{} reputation points", person.reputation_points)}
                            </p>
                            <p class="my-2 text-sm opacity-75">
                                {format!("Member since {}", person.created_at.format("%b %-d, %Y"))}
                            </p>
                            {person.bio.clone().map(|bio| view! { <p class="mb-2">{bio}</p> })}
                        }
                    })
            })}
        </SuspenseError>
    }
}
