//! HTML pages for the label form.
//!
//! Pages are self-contained: the product list is embedded as `<option>`
//! elements, so generating a label needs no server-side session.

const PAGE_HEAD: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Label Print</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; }
    fieldset { margin-bottom: 1.5rem; }
    .notice { background: #eef6ee; border: 1px solid #9aca9a; padding: 0.5rem 1rem; }
    .empty { color: #666; }
  </style>
</head>
<body>
  <h1>Label Print</h1>
"#;

const UPLOAD_FORM: &str = r#"  <form action="/products" method="post" enctype="multipart/form-data">
    <fieldset>
      <legend>Product sheet</legend>
      <input type="file" name="sheet" accept=".csv,.xlsx,.xls" required>
      <button type="submit">Load products</button>
    </fieldset>
  </form>
"#;

const LABEL_FORM_OPEN: &str = r#"  <form action="/labels" method="post">
    <fieldset>
      <legend>Label</legend>
"#;

const LABEL_FORM_CLOSE: &str = r#"      <p>
        <label><input type="radio" name="size" value="48x25mm" checked> 48 &times; 25 mm (single label)</label>
        <label><input type="radio" name="size" value="96x25mm"> 96 &times; 25 mm (two labels side by side)</label>
      </p>
      <button type="submit">Generate label</button>
    </fieldset>
  </form>
"#;

const PAGE_FOOT: &str = "</body>\n</html>\n";

/// Escape text for embedding in HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Render the label form page.
///
/// `notice` is shown above the forms, e.g. the outcome of an upload.
/// `date_text` is today's date exactly as it will be printed on the label.
pub fn index_page(products: &[String], notice: Option<&str>, date_text: &str) -> String {
    let mut page = String::new();
    page.push_str(PAGE_HEAD);

    if let Some(text) = notice {
        page.push_str(&format!(
            "  <p class=\"notice\">{}</p>\n",
            escape_html(text)
        ));
    }

    page.push_str(UPLOAD_FORM);
    page.push_str(LABEL_FORM_OPEN);
    page.push_str(&product_field(products));
    page.push_str(&format!(
        "      <p>Date printed on the label: <strong>{}</strong></p>\n",
        escape_html(date_text)
    ));
    page.push_str(LABEL_FORM_CLOSE);
    page.push_str(PAGE_FOOT);
    page
}

fn product_field(products: &[String]) -> String {
    if products.is_empty() {
        return "      <p class=\"empty\">No products loaded yet. Upload a sheet above or \
                start the server with a product file.</p>\n"
            .to_string();
    }

    let mut field = String::new();
    field.push_str("      <p>\n        <label for=\"name\">Product</label>\n");
    field.push_str("        <select id=\"name\" name=\"name\" required>\n");
    for name in products {
        let escaped = escape_html(name);
        field.push_str(&format!(
            "          <option value=\"{escaped}\">{escaped}</option>\n"
        ));
    }
    field.push_str("        </select>\n      </p>\n");
    field
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html(r#"<Bolt & "Nut">"#),
            "&lt;Bolt &amp; &quot;Nut&quot;&gt;"
        );
        assert_eq!(escape_html("O'Brien"), "O&#39;Brien");
    }

    #[test]
    fn test_index_page_embeds_products() {
        let products = vec!["Widget".to_string(), "Bolt & Nut".to_string()];
        let page = index_page(&products, None, "25/08/2026");
        assert!(page.contains(r#"<option value="Widget">Widget</option>"#));
        assert!(page.contains(r#"<option value="Bolt &amp; Nut">Bolt &amp; Nut</option>"#));
    }

    #[test]
    fn test_index_page_without_products_shows_hint() {
        let page = index_page(&[], None, "25/08/2026");
        assert!(!page.contains("<select"));
        assert!(page.contains("No products loaded yet"));
    }

    #[test]
    fn test_index_page_notice_is_escaped() {
        let page = index_page(&[], Some("Loaded 2 products from <sheet>"), "25/08/2026");
        assert!(page.contains("Loaded 2 products from &lt;sheet&gt;"));
    }

    #[test]
    fn test_index_page_shows_print_date() {
        let page = index_page(&[], None, "25/08/2026");
        assert!(page.contains("Date printed on the label: <strong>25/08/2026</strong>"));
    }

    #[test]
    fn test_index_page_has_both_size_options() {
        let page = index_page(&["Widget".to_string()], None, "25/08/2026");
        assert!(page.contains(r#"value="48x25mm""#));
        assert!(page.contains(r#"value="96x25mm""#));
    }
}
