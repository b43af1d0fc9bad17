//! OTP entry route: the six-cell code row, local validation, and submission
//! to the verification endpoint. All interaction rules live in
//! [`crate::features::otp::form`]; this component translates DOM events into
//! form transitions and applies the returned outcomes to the page.

use crate::{
    components::{AppShell, Button, DigitInput, use_toasts},
    features::otp::{
        client,
        form::{CODE_LENGTH, Key, OtpForm, Validation},
        types::ValidateOtpRequest,
    },
    routes::paths,
};
use leptos::{html, prelude::*};
use leptos_router::hooks::use_navigate;

#[derive(Clone, Debug, PartialEq)]
enum SubmitStatus {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[component]
pub fn VerifyPage() -> impl IntoView {
    let navigate = use_navigate();
    let toasts = use_toasts();

    let (form, set_form) = signal(OtpForm::new());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let cell_refs: [NodeRef<html::Input>; CODE_LENGTH] = std::array::from_fn(|_| NodeRef::new());

    let focus_cell = move |index: usize| {
        if let Some(input) = cell_refs.get(index).copied().and_then(|cell| cell.get()) {
            let _ = input.focus();
        }
    };

    let verify_action = Action::new_local(move |code: &String| {
        let otp = code.clone();
        async move { client::validate_otp(&ValidateOtpRequest { otp }).await }
    });

    let submit = move || {
        // One outstanding verification at a time; the disabled button covers
        // clicks and this covers the Enter path.
        if status.get_untracked() == SubmitStatus::Pending {
            return;
        }

        let (next, verdict) = form.get_untracked().validated();
        set_form.set(next);

        match verdict {
            Validation::Ready(code) => {
                set_status.set(SubmitStatus::Pending);
                verify_action.dispatch(code);
            }
            Validation::Incomplete { focus } => {
                toasts.error("Please complete the OTP");
                focus_cell(focus);
            }
            Validation::Invalid { focus } => {
                toasts.error("Please enter a valid OTP");
                focus_cell(focus);
            }
        }
    };

    Effect::new(move |_| {
        if let Some(result) = verify_action.value().get() {
            // Cells reset on both paths before anything else happens.
            match result {
                Ok(response) => {
                    set_status.set(SubmitStatus::Succeeded);
                    set_form.set(OtpForm::new());
                    toasts.success(response.message);
                    navigate(paths::SUCCESS, Default::default());
                }
                Err(err) => {
                    set_status.set(SubmitStatus::Failed);
                    set_form.set(OtpForm::new());
                    toasts.error(err.user_message());
                }
            }
        }
    });

    Effect::new(move |_| {
        focus_cell(0);
    });

    let busy = Signal::derive(move || status.get() == SubmitStatus::Pending);

    let cells: Vec<_> = (0..CODE_LENGTH)
        .map(|index| {
            let node_ref = cell_refs[index];
            let value = Signal::derive(move || form.with(|form| form.cell_text(index)));
            let is_error = Signal::derive(move || form.with(|form| form.is_flagged(index)));

            let on_input = move |ev| {
                let raw = event_target_value(&ev);
                let (next, outcome) = form.get_untracked().input(index, &raw);
                if outcome.rejected {
                    if let Some(input) = node_ref.get() {
                        input.set_value(&next.cell_text(index));
                    }
                }
                set_form.set(next);
                if let Some(target) = outcome.focus {
                    focus_cell(target);
                }
            };

            let on_keydown = move |ev: web_sys::KeyboardEvent| {
                let (next, outcome) = form.get_untracked().key(index, Key::from_dom(&ev.key()));
                set_form.set(next);
                if outcome.prevent_default {
                    ev.prevent_default();
                }
                if let Some(target) = outcome.focus {
                    focus_cell(target);
                }
                if outcome.submit {
                    submit();
                }
            };

            let on_paste = move |ev: web_sys::ClipboardEvent| {
                // Without this the browser would also insert the clipboard
                // text into the focused cell after the overlay ran.
                ev.prevent_default();
                let text = ev
                    .clipboard_data()
                    .and_then(|data| data.get_data("text").ok())
                    .unwrap_or_default();
                let (next, outcome) = form.get_untracked().paste(&text);
                set_form.set(next);
                if let Some(target) = outcome.focus {
                    focus_cell(target);
                }
            };

            view! {
                <DigitInput
                    value=value
                    is_error=is_error
                    node_ref=node_ref
                    on:input=on_input
                    on:keydown=on_keydown
                    on:paste=on_paste
                />
            }
        })
        .collect();

    view! {
        <AppShell>
            <div class="flex min-h-[70vh] flex-col items-center justify-center gap-8">
                <h2 class="text-2xl font-semibold text-gray-900">"Verification code:"</h2>
                <div class="flex flex-row gap-4">{cells}</div>
                <div class="w-32">
                    <Button busy=busy on:click=move |_| submit()>
                        "Submit"
                    </Button>
                </div>
            </div>
        </AppShell>
    }
}
