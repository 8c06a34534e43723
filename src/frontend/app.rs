use crate::frontend::{
    components::nav::Nav,
    pages::{
        goals::CommunityGoals, notifications::Notifications, profile::UserProfile,
        reputation::ReputationRules, suspended::Suspended,
    },
    utils::dark_mode::DarkMode,
};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Html, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let error_popup = RwSignal::new(None::<String>);
    provide_context(error_popup.write_only());
    let dark_mode = DarkMode::init();
    provide_context(dark_mode);

    view! {
        <Html attr:data-theme=dark_mode.theme />
        <Title text="Traduko" />
        <Stylesheet id="leptos" href="/pkg/traduko.css" />
        <Router>
            <Nav />
            <main class="p-4 md:ml-64">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=CommunityGoals />
                    <Route path=path!("/notifications") view=Notifications />
                    <Route path=path!("/reputation") view=ReputationRules />
                    <Route path=path!("/suspended") view=Suspended />
                    <Route path=path!("/user/:name") view=UserProfile />
                </Routes>
            </main>
        </Router>
        <ErrorPopup errors=error_popup />
    }
}

/// Transient notice for failed api calls. Errors land here through
/// `FrontendResultExt::error_popup` and never block the page.
#[component]
fn ErrorPopup(errors: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || errors.get().is_some()>
            <div class="toast toast-center">
                <div class="flex alert alert-error">
                    <span>{move || errors.get()}</span>
                    <button
                        class="btn btn-xs btn-ghost"
                        on:click=move |_| {
                            errors.set(None);
                        }
                    >
                        Close
                    </button>
                </div>
            </div>
        </Show>
    }
}
