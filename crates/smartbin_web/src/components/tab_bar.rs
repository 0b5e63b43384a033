//! Filter tab bar.
//!
//! The selected index lives in the page's local state. Selection has
//! no effect on the rendered rows; the tabs are a filtering affordance
//! whose semantics are not specified yet.

use smartbin_types::Tone;
use yew::prelude::*;

/// One tab, optionally carrying a count badge.
#[derive(Clone, PartialEq)]
pub struct Tab {
    pub label: String,
    pub badge: Option<u32>,
    pub badge_tone: Tone,
}

impl Tab {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            badge: None,
            badge_tone: Tone::Neutral,
        }
    }

    pub fn with_badge(label: impl Into<String>, count: u32, tone: Tone) -> Self {
        Self {
            label: label.into(),
            badge: Some(count),
            badge_tone: tone,
        }
    }
}

/// Properties for TabBar component.
#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub tabs: Vec<Tab>,
    pub selected: usize,
    pub on_select: Callback<usize>,
}

/// Filter tab bar component.
#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="card tab-bar">
            { for props.tabs.iter().enumerate().map(|(index, tab)| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_select.emit(index));
                let class = if index == props.selected {
                    classes!("tab", "tab-selected")
                } else {
                    classes!("tab")
                };

                html! {
                    <button {class} {onclick}>
                        { &tab.label }
                        if let Some(count) = tab.badge {
                            <span class={classes!("tab-badge", tab.badge_tone.css_class())}>
                                { count }
                            </span>
                        }
                    </button>
                }
            })}
        </div>
    }
}
