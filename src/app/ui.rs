use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    let variant = match variant {
        ButtonVariant::Primary => {
            "bg-gradient-to-r from-cyan-400 to-green-500 text-black hover:shadow-lg hover:shadow-cyan-400/25"
        }
        ButtonVariant::Secondary => "bg-gray-800 text-white hover:bg-gray-700 border border-gray-700",
        ButtonVariant::Outline => {
            "border-2 border-cyan-400 text-cyan-400 hover:bg-cyan-400 hover:text-black"
        }
    };
    let size = match size {
        ButtonSize::Sm => "px-4 py-2 text-sm",
        ButtonSize::Md => "px-6 py-3 text-base",
        ButtonSize::Lg => "px-8 py-4 text-lg",
    };
    format!(
        "inline-flex items-center justify-center gap-2 rounded-xl font-semibold transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed {variant} {size}"
    )
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(default = "button")] kind: &'static str,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = format!("{} {class}", button_class(variant, size));
    view! {
        <button type=kind class=class disabled=move || disabled.get()>
            {children()}
        </button>
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlowColor {
    #[default]
    Cyan,
    Green,
    Purple,
}

impl GlowColor {
    /// Cycles through the colours for lists of cards.
    pub fn nth(i: usize) -> Self {
        match i % 3 {
            0 => Self::Cyan,
            1 => Self::Green,
            _ => Self::Purple,
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Cyan => "text-cyan-400",
            Self::Green => "text-green-400",
            Self::Purple => "text-purple-400",
        }
    }

    fn card_class(self) -> &'static str {
        match self {
            Self::Cyan => "hover:border-cyan-400/50 hover:shadow-cyan-400/10",
            Self::Green => "hover:border-green-400/50 hover:shadow-green-400/10",
            Self::Purple => "hover:border-purple-400/50 hover:shadow-purple-400/10",
        }
    }
}

#[component]
pub fn GlowCard(
    #[prop(optional)] glow: GlowColor,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = format!(
        "relative rounded-2xl border border-gray-800 bg-gray-900/50 backdrop-blur-sm transition-all duration-500 hover:shadow-2xl {} {class}",
        glow.card_class()
    );
    view! { <div class=class>{children()}</div> }
}
