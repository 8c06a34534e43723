use crate::frontend::{api::CLIENT, utils::formatting::render_date_time};
use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn Suspended() -> impl IntoView {
    let my_profile = Resource::new(move || (), |_| async move { CLIENT.my_profile().await });

    view! {
        <Title text="Account suspended" />
        <h1 class="flex-auto my-6 font-serif text-4xl font-bold grow">"Account suspended"</h1>
        <Suspense fallback=|| {
            view! { "Loading..." }
        }>
            {move || Suspend::new(async move {
                // the date is shown when known, the notice itself never depends
                // on the fetch succeeding
                let banned_at = my_profile.await.ok().and_then(|person| person.banned_at);
                view! {
                    <div class="my-4 alert alert-warning">
                        {match banned_at {
                            Some(banned_at) => {
                                format!(
                                    "Your account was suspended on {}.",
                                    render_date_time(banned_at),
                                )
                            }
                            None => "Your account is currently suspended.".to_string(),
                        }}
                    </div>
                    <p>
                        "While suspended you cannot submit translations, review the work of "
                        "others or post in discussions. If you believe this is a mistake, "
                        "contact the moderation team."
                    </p>
                    <p class="mt-2">
                        <a class="link" href="/reputation">
                            "How reputation and moderation work"
                        </a>
                    </p>
                }
            })}
        </Suspense>
    }
}
