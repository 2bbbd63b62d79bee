//! Standalone printable HTML for a submission

use crate::state::Submission;

const STYLES: &str = "\
body { font-family: Arial, sans-serif; padding: 20px; }
h1 { color: #333; }
.field { margin-bottom: 15px; }
.label { font-weight: bold; }
.message { white-space: pre-wrap; margin-top: 4px; }";

/// Build the print document; the browser's print dialog opens on load
pub fn summary_html(title: &str, submission: &Submission) -> String {
    let mut body = String::from("<h3>Submission Details</h3>\n");
    for (label, value) in submission.summary_fields() {
        let value = escape_html(value);
        if label == "Message" {
            body.push_str(&format!(
                "<div class=\"field\"><span class=\"label\">{label}:</span>\
                 <p class=\"message\">{value}</p></div>\n"
            ));
        } else {
            body.push_str(&format!(
                "<div class=\"field\"><span class=\"label\">{label}:</span> \
                 <span>{value}</span></div>\n"
            ));
        }
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n{STYLES}\n</style>\n</head>\n\
         <body onload=\"window.print()\">\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{sample_submission, Subject};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_shell_structure() {
        let html = summary_html("Contact Form Submission", &sample_submission());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Contact Form Submission</title>"));
        assert!(html.contains("font-family: Arial, sans-serif"));
        assert!(html.contains(".label { font-weight: bold; }"));
        assert!(html.contains("<body onload=\"window.print()\">"));
        assert!(html.contains("<h3>Submission Details</h3>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_fields_in_summary_order() {
        let html = summary_html("T", &sample_submission());
        let positions: Vec<usize> = ["Name:", "Email:", "Phone:", "Subject:", "Message:"]
            .iter()
            .map(|label| html.find(label).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert!(html.contains("<span>Feedback</span>"));
    }

    #[test]
    fn test_user_content_is_escaped() {
        let submission = Submission::new(
            "<script>alert(1)</script>".into(),
            "x@example.com".into(),
            String::new(),
            Subject::Other,
            "Tom & Jerry say \"hi\" <b>loudly</b>".into(),
        );
        let html = summary_html("T", &submission);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry say &quot;hi&quot; &lt;b&gt;loudly&lt;/b&gt;"));
        assert!(!html.contains("Phone:"));
    }
}
