use crate::foodbanks::models::FoodBankRecord;
use url::Url;

/// Builds the popup HTML for a marker. Empty fields produce no line.
pub fn render(record: &FoodBankRecord) -> String {
    let mut lines = vec![format!("<strong>{}</strong>", escape(&record.name))];
    if !record.location_name.is_empty() {
        lines.push(escape(&record.location_name));
    }
    if !record.address.is_empty() {
        lines.push(escape(&record.address));
    }
    match (record.postcode.is_empty(), record.country.is_empty()) {
        (false, false) => lines.push(format!(
            "{} ({})",
            escape(&record.postcode),
            escape(&record.country)
        )),
        (false, true) => lines.push(escape(&record.postcode)),
        (true, false) => lines.push(escape(&record.country)),
        (true, true) => {}
    }
    if !record.network.is_empty() {
        lines.push(format!("Network: {}", escape(&record.network)));
    }
    if let Some(homepage) = web_link(&record.url) {
        lines.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">Website</a>",
            escape(homepage.as_str())
        ));
    }
    lines.join("<br>")
}

// Only plain web links end up in an `href`.
fn web_link(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    matches!(url.scheme(), "http" | "https").then_some(url)
}

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
