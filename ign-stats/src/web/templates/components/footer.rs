use maud::{html, Render};

pub(crate) struct Footer;

impl Render for Footer {
    fn render(&self) -> maud::Markup {
        html! {
            footer {
                div class="flex-column" {
                    span { "Review data from IGN, as published in the " a href="https://onu1.s2.chalmers.se/datasets/IGN_games.csv" { "IGN games dataset" } "." }
                    span { "Not affiliated with IGN or Sony Interactive Entertainment." }
                }
            }
        }
    }
}
