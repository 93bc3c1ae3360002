#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Ghost => "ghost",
        }
    }
}

/// CSS class list for a button in the given state.
pub fn button_class(tone: Tone, active: bool, full_width: bool) -> String {
    let mut class = format!("btn btn--{}", tone.as_str());
    if active {
        class.push_str(" btn--active");
    }
    if full_width {
        class.push_str(" btn--block");
    }
    class
}

#[component]
pub fn Button(
    #[props(default)] tone: Tone,
    #[props(default)] active: bool,
    #[props(default)] disabled: bool,
    #[props(default)] full_width: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = button_class(tone, active, full_width);
    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            disabled: disabled,
            onclick: move |e: MouseEvent| {
                e.stop_propagation();
                onclick.call(e);
            },
            {children}
        }
    }
}
