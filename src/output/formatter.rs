/// Format the title for stdout, as a Markdown link when requested
pub fn format_output(title: &str, url: &str, markdown: bool) -> String {
    if markdown {
        format!("[{}]({})", title, url)
    } else {
        title.to_string()
    }
}
