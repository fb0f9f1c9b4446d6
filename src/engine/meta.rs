use scraper::{Html, Selector};

/// Best-effort page title: `og:title`, then `<title>`, then the first `<h1>`.
///
/// Read-only queries, so this runs on a separate `scraper` parse of the raw
/// markup rather than the mutable tree the engine works on.
pub fn page_title(html: &str) -> String {
    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("meta[property='og:title']") {
        for element in document.select(&selector) {
            if let Some(content) = element.value().attr("content") {
                let title = content.trim();
                if !title.is_empty() {
                    return title.to_string();
                }
            }
        }
    }

    for selector_str in ["title", "h1"] {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                let title = element.text().collect::<String>().trim().to_string();
                if !title.is_empty() {
                    return title;
                }
            }
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_prefers_og_title() {
        let html = "<head><meta property='og:title' content='Open Graph Title'>\
                    <title>Document Title</title></head>";
        assert_eq!(page_title(html), "Open Graph Title");
    }

    #[test]
    fn test_page_title_falls_back_to_title_then_h1() {
        assert_eq!(
            page_title("<head><title>Document Title</title></head><body><h1>H</h1></body>"),
            "Document Title"
        );
        assert_eq!(page_title("<body><h1>Heading Title</h1></body>"), "Heading Title");
        assert_eq!(page_title("<body><p>no title anywhere</p></body>"), "");
    }
}
