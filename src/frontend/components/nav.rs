use crate::frontend::{api::CLIENT, utils::dark_mode::DarkMode};
use leptos::prelude::*;
use phosphor_leptos::{Icon, BELL_RINGING, CARDS, EXCLAMATION_MARK};

#[component]
pub fn Nav() -> impl IntoView {
    let notification_count = Resource::new(
        || (),
        move |_| async move { CLIENT.notifications_count().await.unwrap_or_default() },
    );
    let mut dark_mode = expect_context::<DarkMode>();
    view! {
        <nav class="p-2.5 border-b border-solid md:fixed md:w-64 md:h-full border-slate-400 md:border-e">
            <div class="md:h-full menu">
                <Transition>
                    <a href="/" class="m-2 font-serif text-xl font-bold">
                        "Traduko"
                    </a>
                    <ul>
                        <li>
                            <a href="/">
                                <Icon icon=CARDS />
                                "Community Goals"
                            </a>
                        </li>
                        <li>
                            <a href="/notifications">
                                <Icon icon=BELL_RINGING />
                                "Notifications "
                                <span class="indicator-item indicator-end badge badge-neutral">
                                    {notification_count}
                                </span>
                            </a>
                        </li>
                        <li>
                            <a href="/reputation">
                                <Icon icon=EXCLAMATION_MARK />
                                "Reputation"
                            </a>
                        </li>
                    </ul>
                    <div class="grow min-h-2"></div>
                    <div class="grid gap-2 m-1">
                        <label class="flex gap-2 cursor-pointer">
                            <span class="label-text">Light</span>
                            <input
                                type="checkbox"
                                class="toggle"
                                prop:checked=dark_mode.is_dark
                                on:click=move |_| { dark_mode.toggle() }
                            />
                            <span class="label-text">Dark</span>
                        </label>
                        <p>"Version "{env!("CARGO_PKG_VERSION")}</p>
                    </div>
                </Transition>
            </div>
        </nav>
    }
}
