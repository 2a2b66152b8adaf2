/// Formatter adapters for the attribution artifacts
mod html_formatter;
mod notice_formatter;

pub use html_formatter::HtmlFormatter;
pub use notice_formatter::NoticeFormatter;
