use maud::{html, Markup};

pub fn summary_card(summary: &str) -> Markup {
    html! {
        @if !summary.is_empty() {
            section class="card" {
                h3 { "Summary" }
                p { (summary) }
            }
        }
    }
}
