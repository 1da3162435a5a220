use crate::domain::values::search_outcome::SearchOutcome;

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Phrase Search</title>
</head>
<body>
<h1>Phrase Search</h1>
<form method="post" action="/add">
  <label for="add_phrase">Add a phrase</label>
  <input type="text" id="add_phrase" name="add_phrase" required>
  <button type="submit">Add</button>
</form>
<form method="post" action="/search">
  <label for="search_phrase">Search for similar phrases</label>
  <input type="text" id="search_phrase" name="search_phrase" required>
  <button type="submit">Search</button>
</form>
"#;

const TAIL: &str = "</body>\n</html>\n";

/// What the page shows under the forms.
#[derive(Debug, Default)]
pub struct PageView<'a> {
    pub message: Option<String>,
    pub results: Option<&'a SearchOutcome>,
}

impl<'a> PageView<'a> {
    pub fn added(phrase: &str) -> Self {
        Self {
            message: Some(format!("Phrase Added: {phrase}")),
            results: None,
        }
    }

    pub fn searched(phrase: &str, outcome: &'a SearchOutcome) -> Self {
        Self {
            message: Some(format!("Search results for: {phrase}")),
            results: Some(outcome),
        }
    }

    pub fn render(&self) -> String {
        let mut html = String::from(HEAD);

        if let Some(message) = &self.message {
            html.push_str(&format!("<p class=\"message\">{}</p>\n", escape_html(message)));
        }

        match self.results {
            Some(SearchOutcome::Matches(phrases)) if phrases.is_empty() => {
                html.push_str("<p class=\"empty\">No matching phrases.</p>\n");
            }
            Some(SearchOutcome::Matches(phrases)) => {
                html.push_str("<ol class=\"results\">\n");
                for phrase in phrases {
                    html.push_str(&format!("  <li>{}</li>\n", escape_html(phrase)));
                }
                html.push_str("</ol>\n");
            }
            Some(SearchOutcome::Unavailable(_)) => {
                html.push_str("<p class=\"unavailable\">Search is unavailable right now. Try again later.</p>\n");
            }
            None => {}
        }

        html.push_str(TAIL);
        html
    }
}

pub fn error_page() -> String {
    let mut html = String::from(HEAD);
    html.push_str("<p class=\"error\">Something went wrong. Please try again.</p>\n");
    html.push_str(TAIL);
    html
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
