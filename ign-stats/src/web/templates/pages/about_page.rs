use maud::{html, Markup};

use crate::web::templates::page::Page;

pub(crate) struct AboutPage;

impl Page for AboutPage {
    fn get_name(&self) -> String {
        "About".to_string()
    }

    fn draw_body(&self) -> Markup {
        html! {
            h1 { "About" }
            p {
                "This site downloads the IGN review dataset, keeps a copy in a key-value store "
                "and counts how many games released on a PlayStation platform fall under each "
                "of IGN's ten score phrases, from Masterpiece down to Unbearable."
            }
            p {
                "The same numbers are available as JSON from "
                a href="/json-stats" { code { "/json-stats" } }
                ", and the full dataset from "
                a href="/json-dataset" { code { "/json-dataset" } }
                "."
            }
        }
    }
}
