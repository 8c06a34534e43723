use leptos::prelude::*;
use leptos_meta::Title;

/// Point values mirror the backend's reputation accounting, which is the
/// authoritative source; this page only explains them.
const REPUTATION_RULES: [(&str, i32); 6] = [
    ("Submit a translation", 1),
    ("Your translation is approved", 10),
    ("Your translation is rejected", -2),
    ("Review a pending translation", 1),
    ("Your discussion post receives an upvote", 2),
    ("A community goal you contributed to completes", 25),
];

#[component]
pub fn ReputationRules() -> impl IntoView {
    view! {
        <Title text="Reputation" />
        <h1 class="flex-auto my-6 font-serif text-4xl font-bold grow">Reputation</h1>
        <p class="my-2 max-w-prose">
            "Reputation reflects how much a member has contributed to the platform "
            "and how reliable their translations have been. Points are earned and "
            "lost through the actions below."
        </p>
        <table class="my-4 table w-auto">
            <thead>
                <tr>
                    <th>Action</th>
                    <th>Points</th>
                </tr>
            </thead>
            <tbody>
                {REPUTATION_RULES
                    .into_iter()
                    .map(|(action, points)| rule_row(action, points))
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
        <p class="my-2 max-w-prose text-sm opacity-75">
            "Members whose reputation keeps dropping through rejected work or "
            "moderation action can have their account suspended. Totals are "
            "computed by the platform and can lag a little behind your latest "
            "contributions."
        </p>
    }
}

fn rule_row(action: &'static str, points: i32) -> impl IntoView {
    let badge = if points >= 0 {
        "badge badge-success"
    } else {
        "badge badge-error"
    };
    view! {
        <tr>
            <td>{action}</td>
            <td>
                <span class=badge>{format!("{points:+}")}</span>
            </td>
        </tr>
    }
}
