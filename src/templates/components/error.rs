use maud::{html, Markup};

pub fn error_banner(message: &str) -> Markup {
    html! {
        div class="error-banner" { (message) }
    }
}
