//! Server-rendered HTML for the upload form and the result page.

use crate::pipeline::PipelineOutput;

pub fn form_page(error: Option<&str>) -> String {
    let mut html = String::from(HTML_HEADER);
    html.push_str("<h1>Resume Fit &amp; Cover Letter</h1>\n");

    if let Some(message) = error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", html_escape(message)));
    }

    html.push_str(FORM_BODY);
    html.push_str(HTML_FOOTER);
    html
}

pub fn result_page(output: &PipelineOutput, model: &str) -> String {
    let mut html = String::from(HTML_HEADER);
    html.push_str("<h1>Your Results</h1>\n");
    html.push_str("<h2>Resume Analysis</h2>\n");
    html.push_str(&format!("<pre>{}</pre>\n", html_escape(&output.analysis)));
    html.push_str("<h2>Cover Letter</h2>\n");
    html.push_str(&format!("<pre>{}</pre>\n", html_escape(&output.letter)));
    html.push_str(&format!(
        "<p class=\"meta\">Generated by {} &middot; <a href=\"/\">Analyze another</a></p>\n",
        html_escape(model)
    ));
    html.push_str(HTML_FOOTER);
    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Resume Fit &amp; Cover Letter</title>
<style>
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }
textarea { width: 100%; min-height: 12rem; }
pre { white-space: pre-wrap; background: #f6f8fa; padding: 1rem; border-radius: 6px; }
.error { color: #b42318; font-weight: 600; }
.meta { color: #667085; font-size: 0.9rem; }
</style>
</head>
<body>
"#;

const FORM_BODY: &str = r#"<form method="post" action="/" enctype="multipart/form-data">
<p><label>Resume (PDF or text)<br><input type="file" name="resume" accept=".pdf,.txt,.md"></label></p>
<p><label>Job description<br><textarea name="job_desc"></textarea></label></p>
<p><button type="submit">Analyze</button></p>
</form>
"#;

const HTML_FOOTER: &str = "</body>\n</html>\n";
