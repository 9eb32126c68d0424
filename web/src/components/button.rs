//! Button with the site's variants and sizes

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Md,
    Lg,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, full_width: bool) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Outline => "btn-outline",
    };
    let size = match size {
        ButtonSize::Md => "btn-md",
        ButtonSize::Lg => "btn-lg",
    };

    let mut class = format!("btn {} {}", variant, size);
    if full_width {
        class.push_str(" btn-block");
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, size, full_width)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button_class() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default(), false),
            "btn btn-primary btn-md"
        );
    }

    #[test]
    fn test_full_width_outline() {
        assert_eq!(
            button_class(ButtonVariant::Outline, ButtonSize::Lg, true),
            "btn btn-outline btn-lg btn-block"
        );
    }
}
