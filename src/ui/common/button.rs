use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Button that greys out while a submission is in flight
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Native button type ("button" or "submit")
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler; submit buttons usually leave this to the form
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(default = false)]
    full_width: bool,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "btn-base {}{}",
        variant.class(),
        if full_width { " w-full" } else { "" }
    );

    view! {
        <button
            type=button_type
            class=classes
            class:opacity-50=move || disabled.get()
            class:cursor-default=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
