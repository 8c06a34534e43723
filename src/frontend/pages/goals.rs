use crate::{
    common::{
        goal::{CommunityGoal, GoalProgress},
        newtypes::GoalId,
    },
    frontend::{
        api::CLIENT, components::suspense_error::SuspenseError, utils::formatting::event_time,
    },
};
use leptos::prelude::*;
use leptos_meta::Title;
use phosphor_leptos::{Icon, ARROW_SQUARE_OUT};

#[component]
pub fn CommunityGoals() -> impl IntoView {
    let goals = Resource::new(
        move || (),
        |_| async move { CLIENT.list_community_goals().await },
    );

    view! {
        <Title text="Community Goals" />
        <h1 class="flex-auto my-6 font-serif text-4xl font-bold grow">"Community Goals"</h1>
        <SuspenseError>
            {move || Suspend::new(async move {
                goals
                    .await
                    .map(|goals| {
                        let active = goals
                            .into_iter()
                            .filter(|goal| goal.is_active)
                            .collect::<Vec<_>>();
                        let is_empty = active.is_empty();
                        view! {
                            <Show
                                when=move || !is_empty
                                fallback=move || {
                                    view! {
                                        <p class="m-4">"No community goals are running right now."</p>
                                    }
                                }
                            >
                                <ul class="my-4 list-none">
                                    {active.clone().iter().map(goal_card).collect::<Vec<_>>()}
                                </ul>
                            </Show>
                        }
                    })
            })}
        </SuspenseError>
    }
}

fn goal_card(goal: &CommunityGoal) -> impl IntoView {
    view! {
        <li>
            <div class="m-4 shadow card bg-base-100">
                <div class="p-4 card-body">
                    <div class="flex">
                        <a class="card-title grow" href=goal.contribute_path()>
                            {goal.title.clone()}
                        </a>
                        {goal
                            .points_reward
                            .map(|points| {
                                view! { <span class="badge badge-primary">{format!("+{points} pts")}</span> }
                            })}
                        {goal
                            .is_recurring
                            .then(|| {
                                let label = match &goal.recurrence_type {
                                    Some(recurrence) => format!("Repeats {recurrence}"),
                                    None => "Recurring".to_string(),
                                };
                                view! { <span class="mx-1 badge badge-ghost">{label}</span> }
                            })}
                    </div>
                    {goal.description.clone().map(|description| view! { <p>{description}</p> })}
                    <div class="flex text-sm opacity-75">
                        <span class="grow">"Started "{event_time(goal.start_date)}</span>
                        {goal
                            .end_date
                            .map(|end_date| view! { <span>"Ends "{event_time(end_date)}</span> })}
                    </div>
                    <GoalProgressBar id=goal.id />
                    <div class="card-actions">
                        <a class="btn btn-sm btn-outline" href=goal.contribute_path()>
                            <Icon icon=ARROW_SQUARE_OUT />
                            "Contribute"
                        </a>
                    </div>
                </div>
            </div>
        </li>
    }
}

/// Progress is a separate request per goal; a failed fetch degrades to a
/// placeholder without taking down the listing.
#[component]
fn GoalProgressBar(id: GoalId) -> impl IntoView {
    let progress = Resource::new(
        move || id,
        |id| async move { CLIENT.community_goal_progress(id).await },
    );

    view! {
        <Suspense fallback=|| {
            view! { "Loading..." }
        }>
            {move || Suspend::new(async move {
                progress
                    .await
                    .map(|progress| progress_view(&progress).into_any())
                    .unwrap_or_else(|_| {
                        view! { <p class="text-sm opacity-75">"Progress unavailable"</p> }
                            .into_any()
                    })
            })}
        </Suspense>
    }
}

fn progress_view(progress: &GoalProgress) -> impl IntoView {
    let count = match progress.target_count {
        Some(target) => format!("{} of {}", progress.current_count, target),
        None => progress.current_count.to_string(),
    };
    view! {
        <progress
            class="w-full progress progress-primary"
            value=f64::from(progress.progress_percentage)
            max="100"
        ></progress>
        <div class="flex text-sm">
            <span class="grow">{count}</span>
            {progress
                .is_complete
                .then(|| view! { <span class="badge badge-success">Complete</span> })}
        </div>
        {progress
            .missing_translations
            .clone()
            .filter(|missing| !missing.is_empty())
            .map(|missing| {
                let summary = missing
                    .iter()
                    .map(|(language, count)| format!("{language} ({count})"))
                    .collect::<Vec<_>>()
                    .join(", ");
                view! { <p class="text-sm opacity-75">"Still missing: "{summary}</p> }
            })}
    }
}
