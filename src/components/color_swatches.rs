//! Row of colour swatches for an analysis result.

use leptos::prelude::*;

/// Renders one square per hex colour. Unknown or malformed colour strings
/// simply render as the browser's fallback background.
#[component]
pub fn ColorSwatches(colors: Vec<String>) -> impl IntoView {
    view! {
        <div class="swatch-row">
            {colors
                .into_iter()
                .map(|color| {
                    let style = format!("background-color: {color}");
                    view! { <span class="swatch" style=style title=color></span> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
