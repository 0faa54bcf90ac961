use crate::domain::{ExtractedContent, Report};
use crate::schedule::AutoUpdateSchedule;
use crate::utils::{date_stamp, format_zh_cn_timestamp};
use chrono::{DateTime, Local};

pub const REPORT_TITLE: &str = "# 订阅链接生成结果";
pub const REPORT_FOOTER: &str = "# 文件结束";

/// Name offered for saving, e.g. `订阅链接-20251206.txt`
pub fn report_file_name(now: &DateTime<Local>) -> String {
    format!("订阅链接-{}.txt", date_stamp(now))
}

/// Wraps extracted content in the header block and footer marker.
/// Lines are copied verbatim; blank lines are left out and not counted.
pub fn format_report(
    content: &ExtractedContent,
    now: &DateTime<Local>,
    schedule: &AutoUpdateSchedule,
) -> Report {
    let lines: Vec<&str> = content.lines().collect();

    let mut body = String::new();
    body.push_str(&format!("{}\n", REPORT_TITLE));
    body.push_str(&format!("# 生成时间: {}\n", format_zh_cn_timestamp(now)));
    body.push_str(&format!("# 总链接数: {}\n", lines.len()));
    body.push_str(&format!("# 自动更新: {}\n\n", schedule.annotation()));

    for line in &lines {
        body.push_str(line);
        body.push('\n');
    }

    body.push('\n');
    body.push_str(REPORT_FOOTER);

    Report {
        file_name: report_file_name(now),
        link_count: lines.len(),
        body,
    }
}
