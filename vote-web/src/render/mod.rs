/// Everything the voting page shows.
#[derive(Clone, Copy, Debug)]
pub struct Page<'a> {
    pub title: &'a str,
    pub first: Tally<'a>,
    pub second: Tally<'a>,
}

/// One option as shown on the page: its button and its current count.
#[derive(Clone, Copy, Debug)]
pub struct Tally<'a> {
    pub label: &'a str,
    pub key: &'a str,
    pub count: u64,
}

pub fn render_page(page: &Page) -> String {
    let title = escape(page.title);
    let (first, second) = (&page.first, &page.second);

    format!(
        r#"<!DOCTYPE html>
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{ background-color: #F8F8F8; font-family: Arial, Helvetica, sans-serif; }}
        #logo {{ font-size: 40px; color: #00A4EF; text-align: center; padding: 20px; }}
        .button {{ color: #FFFFFF; border: none; width: 300px; height: 60px; font-size: 20px; margin: 8px; cursor: pointer; }}
        .button1 {{ background-color: #00A4EF; }}
        .button2 {{ background-color: #7FBA00; }}
        .button3 {{ background-color: #737373; }}
        #results {{ font-size: 24px; text-align: center; padding: 20px; }}
    </style>
</head>
<body>
    <div id="container">
        <form id="form" name="form" action="/" method="post">
            <div id="logo">{title}</div>
            <div id="buttons">
                <button name="vote" value="{first_key}" class="button button1">{first_label}</button>
                <button name="vote" value="{second_key}" class="button button2">{second_label}</button>
                <button name="vote" value="reset" class="button button3">Reset</button>
            </div>
            <div id="results">{results}</div>
        </form>
    </div>
</body>
</html>
"#,
        first_key = escape(first.key),
        first_label = escape(first.label),
        second_key = escape(second.key),
        second_label = escape(second.label),
        results = results_line(page),
    )
}

/// `"<label1> - <count1> | <label2> - <count2>"`, escaped for HTML.
fn results_line(page: &Page) -> String {
    format!(
        "{} - {} | {} - {}",
        escape(page.first.label),
        page.first.count,
        escape(page.second.label),
        page.second.count
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
