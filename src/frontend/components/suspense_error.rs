use leptos::prelude::*;

/// Suspense wrapper which renders fetch errors as a non-blocking alert in
/// place of the page body.
#[component]
pub fn SuspenseError<Chil>(children: TypedChildren<Chil>) -> impl IntoView
where
    Chil: IntoView + Send + 'static,
{
    view! {
        <Suspense fallback=|| {
            view! { "Loading..." }
        }>
            <ErrorBoundary fallback=|errors| {
                view! {
                    <div class="grid place-items-center">
                        <div class="alert alert-error w-min">
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| e.to_string())
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </div>
                }
            } children></ErrorBoundary>
        </Suspense>
    }
}
