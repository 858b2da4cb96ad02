use maud::{html, Markup, PreEscaped, DOCTYPE};

// No static file route in this app; the stylesheet ships inline.
const STYLESHEET: &str = "
    body { margin: 0; font-family: system-ui, sans-serif; color: #1f2937; }
    .topbar { display: flex; align-items: center; justify-content: space-between;
              padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
    .topbar h3 { margin: 0; }
    .topbar nav ul { list-style: none; display: flex; gap: 1rem; margin: 0; padding: 0; }
    .container { max-width: 1080px; margin: 0 auto; padding: 1rem 1.5rem; }
    .card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin: 1rem 0; }
    .query-form { display: flex; gap: 10px; align-items: center; flex-wrap: wrap; }
    .query-form input[type=text] { flex: 1; min-width: 280px; padding: 8px; font-size: 16px; }
    .filters-form { display: flex; gap: 1.5rem; flex-wrap: wrap; align-items: flex-start; }
    .filter-group { display: flex; flex-direction: column; gap: 4px; }
    .tile-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
    .property-tile { border: 1px solid #e5e7eb; border-radius: 8px; padding: 0.75rem; }
    .property-tile img { width: 100%; height: 200px; object-fit: cover; border-radius: 4px; }
    .property-tile p { margin: 0.25rem 0; }
    .error-banner { background: #fef2f2; color: #dc2626; border: 1px solid #dc2626;
                    border-radius: 8px; padding: 0.75rem 1rem; margin: 1rem 0; }
    .muted { color: #6b7280; }
";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body {
                header class="topbar" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#524ed2"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    h3 { "Property AI" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
