use ign_dataset::ScoreStats;
use maud::{html, Markup};

use crate::web::templates::page::Page;

pub(crate) struct HomePage {
    pub(crate) stats: ScoreStats,
}

impl Page for HomePage {
    fn get_name(&self) -> String {
        "Home".to_string()
    }

    fn get_description(&self) -> Option<String> {
        Some("Number of PlayStation games per IGN score phrase".to_string())
    }

    fn draw_body(&self) -> Markup {
        html! {
            h1 class="hero-title" { "PlayStation games by IGN score phrase" }
            div class="flex-row flex-wrap" {
                figure class="chart" {
                    img src="/image" alt="Number of PlayStation games per score phrase";
                }
                table class="stats" {
                    thead {
                        tr {
                            th { "Score Phrase" }
                            th { "Number of Games" }
                        }
                    }
                    tbody {
                        @for (phrase, count) in self.stats.iter() {
                            tr {
                                td { (phrase) }
                                td class="count" { (count) }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            th { "Total" }
                            th class="count" { (self.stats.total()) }
                        }
                    }
                }
            }
        }
    }
}
