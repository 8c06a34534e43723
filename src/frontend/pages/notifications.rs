use crate::{
    common::notification::{Notification, NotificationKind, NOTIFICATIONS_FETCH_LIMIT},
    frontend::{
        api::CLIENT,
        utils::{
            errors::FrontendResultExt,
            formatting::event_time,
            inbox::{filter_notifications, mark_all_read, mark_read, KindFilter, ReadFilter},
        },
    },
};
use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use phosphor_leptos::{Icon, CHECK, LINK};

#[component]
pub fn Notifications() -> impl IntoView {
    let notifications = Resource::new(
        move || {},
        |_| async move { CLIENT.notifications_list(NOTIFICATIONS_FETCH_LIMIT).await },
    );

    // Working copy of the last successful fetch. Read flags are flipped here
    // ahead of server confirmation; a failed refetch leaves it untouched.
    let inbox = RwSignal::new(Vec::<Notification>::new());
    Effect::new(move |_| {
        if let Some(fetched) = notifications.get() {
            fetched.error_popup(|response| inbox.set(response.notifications));
        }
    });

    let (search, set_search) = signal(String::new());
    let (read_filter, set_read_filter) = signal(ReadFilter::default());
    let (kind_filter, set_kind_filter) = signal(KindFilter::default());
    let visible = move || {
        filter_notifications(
            &inbox.get(),
            &search.get(),
            read_filter.get(),
            &kind_filter.get(),
        )
    };

    let mark_all_as_read = Action::new(move |_: &()| async move {
        CLIENT
            .notifications_mark_all_as_read()
            .await
            .error_popup(|_| ());
    });

    view! {
        <Title text="Notifications" />
        <h1 class="flex-auto my-6 font-serif text-4xl font-bold grow">Notifications</h1>
        <div class="flex flex-wrap gap-2 mb-4">
            <input
                type="text"
                class="grow input input-secondary input-bordered"
                placeholder="Search notifications"
                prop:value=search
                on:input=move |ev| {
                    set_search.set(event_target_value(&ev));
                }
            />
            <select
                class="select select-secondary select-bordered"
                on:change=move |ev| {
                    set_read_filter.set(ReadFilter::parse(&event_target_value(&ev)));
                }
            >
                {ReadFilter::ALL
                    .into_iter()
                    .map(|filter| view! { <option value=filter.as_str()>{filter.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="select select-secondary select-bordered"
                on:change=move |ev| {
                    set_kind_filter.set(KindFilter::parse(&event_target_value(&ev)));
                }
            >
                <option value="all">"All categories"</option>
                {KindFilter::KINDS
                    .into_iter()
                    .map(|kind| {
                        let value = kind.as_str().to_string();
                        view! { <option value=value>{kind.label()}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <button
                class="btn btn-outline"
                on:click=move |_| {
                    inbox.update(|list| mark_all_read(list));
                    mark_all_as_read.dispatch(());
                }
            >
                "Mark all read"
            </button>
        </div>
        <Show
            when=move || notifications.get().is_some()
            fallback=|| view! { "Loading..." }
        >
            <Show
                when=move || !visible().is_empty()
                fallback=|| {
                    view! { <p class="m-4">"No notifications match the current filters."</p> }
                }
            >
                <ul class="divide-y divide-solid">
                    {move || {
                        visible()
                            .into_iter()
                            .map(|ref notif| notification_view(notif, inbox))
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </Show>
    }
}

fn notification_view(notif: &Notification, inbox: RwSignal<Vec<Notification>>) -> impl IntoView {
    let id = notif.id;
    let read = notif.read;
    let mark_as_read = Action::new(move |_: &()| async move {
        CLIENT
            .notification_mark_as_read(id)
            .await
            .error_popup(|_| ());
    });
    let message_class = if read { "text-lg" } else { "text-lg font-bold" };
    view! {
        <li class="py-2">
            <div class="flex text-s">
                <span class="grow">
                    {kind_badge(&notif.kind)}
                    {notif
                        .author()
                        .map(|author| view! { <span class="mx-2">{author.to_string()}</span> })}
                </span>
                {event_time(notif.created_at)}
            </div>
            <div class=message_class>
                {match notif.review_path() {
                    Some(path) => {
                        Either::Left(
                            view! {
                                <a class="link" href=path>
                                    {notif.message.clone()}
                                </a>
                            },
                        )
                    }
                    None => Either::Right(notif.message.clone()),
                }}
            </div>
            <div class="mt-2 card-actions">
                {notif
                    .review_path()
                    .map(|path| {
                        view! {
                            <a class="btn btn-sm btn-outline" href=path title="View translation">
                                <Icon icon=LINK />
                            </a>
                        }
                    })}
                <Show when=move || !read>
                    <button
                        class="btn btn-sm btn-outline"
                        title="Mark as read"
                        on:click=move |_| {
                            // flipped locally in the same step as the request goes
                            // out, the flag stays set if the request fails
                            inbox.update(|list| mark_read(list, id));
                            mark_as_read.dispatch(());
                        }
                    >
                        <Icon icon=CHECK />
                    </button>
                </Show>
            </div>
        </li>
    }
}

fn kind_badge(kind: &NotificationKind) -> impl IntoView {
    use NotificationKind::*;
    let class = match kind {
        DiscussionReply => "badge badge-info",
        TranslationApproved => "badge badge-success",
        TranslationRejected => "badge badge-error",
        Other(_) => "badge badge-ghost",
    };
    view! { <span class=class>{kind.label()}</span> }
}
