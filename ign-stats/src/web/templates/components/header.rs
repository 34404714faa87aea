use maud::{html, Render};

pub(crate) struct Header;

impl Render for Header {
    fn render(&self) -> maud::Markup {
        html! {
            header class="navbar" {
                a class="brand" href="/" { "IGN Stats" }
                nav class="flex-row" {
                    a href="/" { "Home" }
                    a href="/about" { "About" }
                    a href="/json-stats" { "Stats JSON" }
                    a href="/json-dataset" { "Dataset JSON" }
                }
            }
        }
    }
}
