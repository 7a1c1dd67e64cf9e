//! Structural text patterns for the timetable markup.
//!
//! The pages are hand-authored and have no schema, so every field is located
//! by its own regular expression instead of through a DOM. A pattern that does
//! not match is never an error: the helpers below return `None` or an empty
//! iterator and the caller treats that as "field absent".
use std::sync::LazyLock;

use regex::{Captures, Regex};

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("timetable pattern must be a valid regex")
}

/// `<option value='123'>гр. БО241ИСТ -Информационные системы</option>`, the
/// label after `гр.` is split by `GROUP_SEPARATOR`.
pub static GROUP_OPTION: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"(?is)<option[^>]*?value\s*=\s*['"]?(\d+)['"]?[^>]*>\s*гр\.\s*([^<]*?)</option>"#)
});

/// Hyphen between short and full group name. Codes like `ИВТ-21` carry bare
/// hyphens, so one with whitespace before it wins.
pub static GROUP_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+-\s*"));

/// `<h3>01.09.2025 Понедельник (2-я неделя)</h3>`, the week part is optional
pub static DAY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?is)<h3[^>]*>\s*(\d{1,2}\.\d{1,2}\.\d{4})\s+([^\s<(]+)\s*(?:\(\s*([^)<]*?)\s*-я\s+неделя\s*\))?\s*</h3>",
    )
});

/// A day header closed and immediately followed by its table.
/// Ends at the first `</table>`, so a table nested in a lesson cell cuts the
/// day short after the row holding it.
pub static DAY_TABLE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)</h3>\s*<table[^>]*>(.*?)</table>"));

pub static ROW: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<tr(?:\s[^>]*)?>(.*?)</tr>"));

pub static PAIR_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<(?:b|strong)(?:\s[^>]*)?>\s*(\d+)\s*-я\s+пара"));

pub static TIME_RANGE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(\d{1,2}:\d{2}\s*-\s*\d{1,2}:\d{2})"));

/// `<div>(Лекции) Мат. анализ</div>`
pub static TYPE_SUBJECT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<div(?:\s[^>]*)?>\s*\(([^)<]*)\)\s*(.*?)</div>"));

pub static ONLINE_MEETING: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?is)<div(?:\s[^>]*)?>((?:[^<]|<br\s*/?>)*?(?:zoom|teams|skype|discord|webinar|вебинар|конференци|код доступа|пароль|meeting id|access code|passcode)(?:[^<]|<br\s*/?>)*?)</div>",
    )
});

pub static ONLINE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)zoom|teams|skype|discord|webinar|вебинар|конференци|код доступа|пароль|meeting id|access code|passcode",
    )
});

pub static ROOM: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<td[^>]*\bwrap\b[^>]*>(.*?)</td>"));

/// Free text optionally followed by a mailto anchor shown as an envelope.
pub static TEACHER: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r#"(?is)<div(?:\s[^>]*)?>([^<]*?)\s*(?:<a[^>]*?href\s*=\s*['"]?mailto:([^'"\s>]+)['"]?[^>]*>[^<]*(?:</?(?:img|i|span)\b[^>]*>[^<]*)*</a>)?\s*</div>"#,
    )
});

/// `<div>гр. БО241ИСТ, БО242ИСТ</div>`
pub static LESSON_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)<div(?:\s[^>]*)?>\s*гр\.\s*([^<]+?)\s*</div>"));

/// A whole text that is one or more group codes, like `БО241ИСТ` or `гр. ИВТ-21, ИВТ-22`.
pub static GROUP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^(?:гр\.\s*)?[А-ЯЁA-Z]{1,6}-?\d{2,4}[А-ЯЁA-Z0-9-]*(?:\s*[,;]\s*[А-ЯЁA-Z]{1,6}-?\d{2,4}[А-ЯЁA-Z0-9-]*)*$",
    )
});

/// First `гр. XXXXYYY` token anywhere on a page.
pub static PAGE_GROUP_NAME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"гр\.\s*([А-ЯЁA-Z0-9]*\d[А-ЯЁA-Z0-9]*)"));

static LINE_BREAK: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<br\s*/?>"));
static TAG: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]*>"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// All matches of `pattern` in `text`, lazily and in document order.
pub fn find_all<'t>(
    pattern: &'static Regex,
    text: &'t str,
) -> impl Iterator<Item = Captures<'t>> + 't {
    pattern.captures_iter(text)
}

/// Captured substring of group `index`, if the group took part in the match.
pub fn group<'t>(captures: &Captures<'t>, index: usize) -> Option<&'t str> {
    captures.get(index).map(|m| m.as_str())
}

pub fn find_first<'t>(pattern: &'static Regex, text: &'t str, index: usize) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|captures| group(&captures, index))
}

/// Turns a markup fragment into plain text: line breaks become spaces, tags
/// are stripped, common entities decoded and whitespace collapsed.
pub fn clean_text(fragment: &str) -> String {
    let text = LINE_BREAK.replace_all(fragment, " ");
    let text = TAG.replace_all(&text, "");
    let text = text
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    WHITESPACE.replace_all(&text, " ").trim().to_owned()
}

/// `None` for text that carries nothing: empty or a lone space.
pub fn non_blank(text: String) -> Option<String> {
    if text.is_empty() || text == " " {
        None
    } else {
        Some(text)
    }
}
