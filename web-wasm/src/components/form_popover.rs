//! 行数指定フォーム（ポップオーバー内）

use leptos::prelude::*;

/// 入力値を選択件数に変換（正の整数以外は `None`）
pub fn parse_target(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&n| n > 0)
}

#[component]
pub fn FormPopover<FS>(on_submit: FS) -> impl IntoView
where
    FS: Fn(usize) + 'static + Clone + Send + Sync,
{
    let (input_rows, set_input_rows) = signal(String::new());

    view! {
        <form
            class="form-popover"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                if let Some(target) = parse_target(&input_rows.get_untracked()) {
                    on_submit(target);
                }
            }
        >
            <input
                type="number"
                min="1"
                placeholder="選択する行数"
                prop:value=move || input_rows.get()
                on:input=move |ev| {
                    set_input_rows.set(event_target_value(&ev));
                }
            />
            <button type="submit" class="btn btn-primary btn-small">"選択"</button>
        </form>
    }
}
