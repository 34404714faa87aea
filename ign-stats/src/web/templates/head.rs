use maud::{html, Render, DOCTYPE};

pub(crate) struct HtmlHead<'a> {
    pub(crate) title: &'a str,
    pub(crate) description: Option<&'a str>,
}

impl Render for HtmlHead<'_> {
    fn render(&self) -> maud::Markup {
        html! {
          (DOCTYPE)
          head {
            title { (self.title) " | IGN Stats" }
            link rel="stylesheet" href="/static/main.css";
            link rel="icon" href="/static/favicon.svg" type="image/svg+xml";
            @if let Some(description) = self.description {
                meta name="description" content=(description);
            }
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
          }
        }
    }
}
